//! Resolution of a single attack between two actors.

use super::state::{AttackOutcome, DuelResult, HitKind, RankChange, Side};
use crate::arena::actor::Actor;
use crate::arena::rank::RankCatalog;
use crate::constants::*;
use crate::error::ArenaError;
use chrono::{DateTime, Utc};

/// One attack from `attacker` against `defender`.
pub struct Attack<'a> {
    attacker: &'a mut Actor,
    defender: &'a mut Actor,
}

impl<'a> Attack<'a> {
    pub fn new(attacker: &'a mut Actor, defender: &'a mut Actor) -> Self {
        Self { attacker, defender }
    }

    fn check(&self) -> Result<(), ArenaError> {
        if self.attacker.is_defeated() {
            return Err(ArenaError::AttackerDefeated);
        }
        if self.defender.is_defeated() {
            return Err(ArenaError::DefenderDefeated);
        }
        if self.attacker.energy < ENERGY_COST {
            return Err(ArenaError::NotEnoughEnergy {
                needed: ENERGY_COST,
                available: self.attacker.energy,
            });
        }
        Ok(())
    }

    /// Resolves the attack and mutates both actors. No randomness is involved.
    /// On `Err` neither actor is touched. Cooldowns are the caller's concern.
    pub fn perform(
        self,
        ranks: &RankCatalog,
        now: DateTime<Utc>,
    ) -> Result<AttackOutcome, ArenaError> {
        self.check()?;
        let Attack { attacker, defender } = self;

        attacker.energy = (attacker.energy - ENERGY_COST).max(0);
        attacker.attacked_at = Some(now);
        defender.defended_at = Some(now);

        let damage = attacker.attack() - defender.defense();
        let (kind, effective_damage, recoil_damage) = match damage {
            d if d > 0 => {
                defender.health = (defender.health - d).max(0);
                (HitKind::Hit, d, 0)
            }
            d if d < 0 => {
                attacker.health = (attacker.health + d).max(0);
                (HitKind::Recoil, 0, -d)
            }
            _ => (HitKind::Block, 0, 0),
        };

        let winner = match (attacker.health > 0, defender.health > 0) {
            (true, false) => Some(Side::Attacker),
            (false, true) => Some(Side::Defender),
            _ => None,
        };
        let duel = winner.map(|side| match side {
            Side::Attacker => settle_duel(attacker, defender, side, ranks),
            Side::Defender => settle_duel(defender, attacker, side, ranks),
        });

        Ok(AttackOutcome {
            kind,
            effective_damage,
            recoil_damage,
            duel,
        })
    }
}

/// Reward modifier: shrinks as the winner out-levels the loser.
pub fn reward_modifier(level_difference: i32) -> f64 {
    (1.0 - level_difference as f64 / LEVEL_DIFF_SCALE)
        .clamp(DUEL_REWARD_MODIFIER_MIN, DUEL_REWARD_MODIFIER_MAX)
}

/// Penalty modifier: a loser beaten by a much stronger winner loses less.
pub fn penalty_modifier(level_difference: i32) -> f64 {
    (1.0 - level_difference as f64 / LEVEL_DIFF_SCALE)
        .clamp(DUEL_PENALTY_MODIFIER_MIN, DUEL_PENALTY_MODIFIER_MAX)
}

pub fn gold_reward(loser_level: i32, reward_modifier: f64) -> i64 {
    let base = DUEL_GOLD_REWARD_BASE + loser_level as i64 * DUEL_GOLD_REWARD_PER_LEVEL;
    ((base as f64 * reward_modifier).round() as i64).max(0)
}

/// Share of the loser's gold taken on defeat, within `[0, GOLD_PENALTY_MAX]`
/// and never more than the loser holds.
pub fn gold_penalty(loser_gold: i64, penalty_modifier: f64) -> i64 {
    if loser_gold <= 0 {
        return 0;
    }
    let raw = (loser_gold as f64 * GOLD_PENALTY_FACTOR_BASE * penalty_modifier)
        .min(GOLD_PENALTY_MAX as f64)
        .round() as i64;
    raw.clamp(0, GOLD_PENALTY_MAX.min(loser_gold))
}

fn settle_duel(
    winner: &mut Actor,
    loser: &mut Actor,
    side: Side,
    ranks: &RankCatalog,
) -> DuelResult {
    let level_difference = winner.level - loser.level;
    let reward_mod = reward_modifier(level_difference);
    let penalty_mod = penalty_modifier(level_difference);
    let reward = gold_reward(loser.level, reward_mod);
    let penalty = gold_penalty(loser.gold, penalty_mod);
    winner.gold = winner.gold.saturating_add(reward);
    loser.gold -= penalty;

    let winner_rank_before = winner.rank_index(ranks);
    let loser_rank_before = loser.rank_index(ranks);
    let (winner_elo, loser_elo) = (winner.elo, loser.elo);
    let winner_elo_change = winner.record_duel(loser_elo, true);
    let loser_elo_change = loser.record_duel(winner_elo, false);

    DuelResult {
        winner: side,
        level_difference,
        reward_modifier: reward_mod,
        penalty_modifier: penalty_mod,
        gold_reward: reward,
        gold_penalty: penalty,
        winner_elo_change,
        loser_elo_change,
        winner_rank: RankChange::between(winner_rank_before, winner.rank_index(ranks)),
        loser_rank: RankChange::between(loser_rank_before, loser.rank_index(ranks)),
    }
}
