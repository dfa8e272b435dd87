//! XP gain and the gold paid out for each level reached.

use super::actor::Actor;
use super::formulas::level_gold;

/// The results of an actor gaining XP.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelUpResult {
    pub xp_gained: i64,
    pub old_level: i32,
    pub new_level: i32,
    pub gold_awarded: i64,
}

impl LevelUpResult {
    pub fn did_level_up(&self) -> bool {
        self.new_level > self.old_level
    }
}

/// Adds XP, levels up as far as it reaches and pays `level_gold` once per level crossed.
pub fn grant_xp(actor: &mut Actor, xp_gained: i64) -> LevelUpResult {
    let old_level = actor.level;
    actor.xp = actor.xp.saturating_add(xp_gained.max(0));
    actor.try_level_up();

    let gold_awarded: i64 = (old_level + 1..=actor.level).map(level_gold).sum();
    actor.gold = actor.gold.saturating_add(gold_awarded);

    LevelUpResult {
        xp_gained: xp_gained.max(0),
        old_level,
        new_level: actor.level,
        gold_awarded,
    }
}
