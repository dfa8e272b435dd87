//! The actor: one member's combat and progression record within one guild.

use super::formulas::level_xp;
use super::item::{Item, ItemStack};
use super::rank::{Rank, RankCatalog};
use crate::constants::*;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Identity of an actor: a member within a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorKey {
    pub guild_id: u64,
    pub member_id: u64,
}

impl ActorKey {
    pub fn new(guild_id: u64, member_id: u64) -> Self {
        Self {
            guild_id,
            member_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub key: ActorKey,
    pub name: String,
    pub display_name: String,
    pub is_member: bool,

    pub health: i64,
    pub health_max_base: i64,
    pub health_max_extra: i64,
    pub energy: i64,
    pub energy_max_base: i64,
    pub energy_max_extra: i64,
    pub attack_base: i64,
    pub attack_extra: i64,
    pub defense_base: i64,
    pub defense_extra: i64,
    pub speed_base: i64,
    pub speed_extra: i64,

    pub level: i32,
    /// Lifetime XP; never reduced by leveling.
    pub xp: i64,
    pub gold: i64,

    pub attacked_at: Option<DateTime<Utc>>,
    pub defended_at: Option<DateTime<Utc>>,
    pub regenerated_at: DateTime<Utc>,
    pub messaged_at: Option<DateTime<Utc>>,
    pub elo: i32,
    pub wins: i32,
    pub losses: i32,
    pub placement_duels: i32,

    pub item_stacks: BTreeMap<String, ItemStack>,
    pub items_equipped: BTreeMap<String, Item>,
}

impl Actor {
    /// Fresh actor for a member seen for the first time.
    pub fn new(
        key: ActorKey,
        name: impl Into<String>,
        display_name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            key,
            name: name.into(),
            display_name: display_name.into(),
            is_member: true,
            health: ACTOR_HEALTH_BASE,
            health_max_base: ACTOR_HEALTH_BASE,
            health_max_extra: 0,
            energy: ACTOR_ENERGY_BASE,
            energy_max_base: ACTOR_ENERGY_BASE,
            energy_max_extra: 0,
            attack_base: ACTOR_ATTACK_BASE,
            attack_extra: 0,
            defense_base: ACTOR_DEFENSE_BASE,
            defense_extra: 0,
            speed_base: ACTOR_SPEED_BASE,
            speed_extra: 0,
            level: 0,
            xp: 0,
            gold: 0,
            attacked_at: None,
            defended_at: None,
            regenerated_at: now,
            messaged_at: None,
            elo: ELO_DEFAULT,
            wins: 0,
            losses: 0,
            placement_duels: 0,
            item_stacks: BTreeMap::new(),
            items_equipped: BTreeMap::new(),
        }
    }

    pub fn max_health(&self) -> i64 {
        (self.health_max_base + self.health_max_extra).max(0)
    }

    pub fn max_energy(&self) -> i64 {
        (self.energy_max_base + self.energy_max_extra).max(0)
    }

    pub fn attack(&self) -> i64 {
        (self.attack_base + self.attack_extra).max(0)
    }

    pub fn defense(&self) -> i64 {
        (self.defense_base + self.defense_extra).max(0)
    }

    pub fn speed(&self) -> i64 {
        (self.speed_base + self.speed_extra).max(0)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Pulls current health and energy back into `[0, max]`.
    pub fn clamp_vitals(&mut self) {
        self.health = self.health.clamp(0, self.max_health());
        self.energy = self.energy.clamp(0, self.max_energy());
    }

    // --- Leveling -------------------------------------------------------

    /// Cumulative XP threshold of the next level.
    pub fn next_level_xp(&self) -> i64 {
        level_xp(self.level + 1)
    }

    /// Raises `level` while lifetime XP covers the next threshold. Returns whether it moved.
    /// Gold for new levels is paid by the caller (see `leveling::grant_xp`).
    pub fn try_level_up(&mut self) -> bool {
        let start = self.level;
        while self.level < LEVEL_MAX && self.xp >= self.next_level_xp() {
            self.level += 1;
        }
        self.level != start
    }

    // --- Duels and ranks -------------------------------------------------

    pub fn duels(&self) -> i32 {
        self.wins + self.losses
    }

    /// Rank index, or `None` until placement duels are complete.
    pub fn rank_index(&self, ranks: &RankCatalog) -> Option<usize> {
        if self.duels() < PLACEMENT_DUELS_MAX {
            return None;
        }
        Some(ranks.index_for_elo(self.elo))
    }

    pub fn rank(&self, ranks: &RankCatalog) -> Option<Rank> {
        self.rank_index(ranks).map(|i| ranks.get(i))
    }

    /// Standard Elo expectation of beating an opponent rated `opponent_elo`.
    pub fn expected_score(&self, opponent_elo: i32) -> f64 {
        1.0 / (1.0 + 10f64.powf((opponent_elo - self.elo) as f64 / 400.0))
    }

    /// Records one finished duel: Elo delta, win/loss counters and placement progress.
    /// This is the only place duel results touch an actor's rating. Returns the Elo change.
    pub fn record_duel(&mut self, opponent_elo: i32, won: bool) -> i32 {
        let actual = if won { 1.0 } else { 0.0 };
        let change = (ELO_K_FACTOR * (actual - self.expected_score(opponent_elo))).round() as i32;
        self.elo += change;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.placement_duels = self.duels().min(PLACEMENT_DUELS_MAX);
        change
    }

    // --- Cooldowns ------------------------------------------------------

    pub fn attack_cooldown(&self) -> Duration {
        let ms = ATTACK_COOLDOWN_BASE_MS - self.speed() * SPEED_COOLDOWN_FACTOR_MS;
        Duration::milliseconds(ms.max(ATTACK_COOLDOWN_MIN_MS))
    }

    /// Time left before this actor may attack again; zero when ready.
    pub fn attack_cooldown_remaining(&self, now: DateTime<Utc>) -> Duration {
        match self.attacked_at {
            Some(at) => (at + self.attack_cooldown() - now).max(Duration::zero()),
            None => Duration::zero(),
        }
    }

    pub fn can_attack(&self, now: DateTime<Utc>) -> bool {
        self.attack_cooldown_remaining(now) <= Duration::zero()
    }

    // --- Items ----------------------------------------------------------

    /// Applies an item's bonuses scaled by `scale` (+1 to add, -1 to remove).
    /// Stat modifiers go to the `*_extra` fields, restoratives to current health/energy.
    pub fn add_item_stats(&mut self, item: &Item, scale: i64) {
        self.health_max_extra += item.max_health_bonus * scale;
        self.energy_max_extra += item.max_energy_bonus * scale;
        self.attack_extra += item.attack_bonus * scale;
        self.defense_extra += item.defense_bonus * scale;
        self.speed_extra += item.speed_bonus * scale;
        self.health += item.health_bonus * scale;
        self.energy += item.energy_bonus * scale;
        self.clamp_vitals();
    }

    /// Rebuilds the `*_extra` modifiers as the sum over the equipped items, then clamps vitals.
    pub fn recompute_item_extras(&mut self) {
        let sum = |bonus: fn(&Item) -> i64| self.items_equipped.values().map(bonus).sum::<i64>();
        let health = sum(|i| i.max_health_bonus);
        let energy = sum(|i| i.max_energy_bonus);
        let attack = sum(|i| i.attack_bonus);
        let defense = sum(|i| i.defense_bonus);
        let speed = sum(|i| i.speed_bonus);
        self.health_max_extra = health;
        self.energy_max_extra = energy;
        self.attack_extra = attack;
        self.defense_extra = defense;
        self.speed_extra = speed;
        self.clamp_vitals();
    }

    pub fn item_quantity(&self, item_id: &str) -> u32 {
        self.item_stacks.get(item_id).map_or(0, |s| s.quantity)
    }

    pub fn is_equipped(&self, item_id: &str) -> bool {
        self.items_equipped.contains_key(item_id)
    }

    // --- Regeneration ---------------------------------------------------

    /// Restores health and energy for every full interval since the last tick.
    /// Partial intervals carry over. Returns whether anything changed.
    pub fn regenerate(&mut self, now: DateTime<Utc>) -> bool {
        let interval = Duration::seconds(REGEN_INTERVAL_SECS);
        let elapsed = now - self.regenerated_at;
        if elapsed < interval {
            return false;
        }
        let ticks = elapsed.num_seconds() / REGEN_INTERVAL_SECS;
        self.regenerated_at += Duration::seconds(ticks * REGEN_INTERVAL_SECS);

        let (health, energy) = (self.health, self.energy);
        self.health = self
            .health
            .saturating_add(ticks.saturating_mul(HEALTH_REGEN_PER_TICK));
        self.energy = self
            .energy
            .saturating_add(ticks.saturating_mul(ENERGY_REGEN_PER_TICK));
        self.clamp_vitals();
        health != self.health || energy != self.energy
    }
}
