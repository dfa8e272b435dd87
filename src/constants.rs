// Central balance constants for leveling, economy, duels and items.

// --- Leveling ---
pub const LEVEL_XP_BASE: f64 = 100.0;
pub const LEVEL_EXPONENT: f64 = 2.5;
pub const LEVEL_MAX: i32 = 99;

// --- Gold rewards for reaching a level ---
pub const LEVEL_GOLD_BASE: i64 = 100;
pub const LEVEL_GOLD_PER_LEVEL: i64 = 100;

// --- Ranks ---
pub const ELO_DEFAULT: i32 = 1500;
pub const ELO_BASE: i32 = 1200;
pub const ELO_GROWTH_RATE: i32 = 100;
pub const ELO_K_FACTOR: f64 = 32.0;
pub const PLACEMENT_DUELS_MAX: i32 = 10;

// --- Duels ---
pub const ENERGY_COST: i64 = 1;
pub const ATTACK_COOLDOWN_BASE_MS: i64 = 30_000;
pub const ATTACK_COOLDOWN_MIN_MS: i64 = 2_000;
pub const SPEED_COOLDOWN_FACTOR_MS: i64 = 500; // 0.5s per speed point
pub const LEVEL_DIFF_SCALE: f64 = 15.0;
pub const DUEL_GOLD_REWARD_BASE: i64 = 40;
pub const DUEL_GOLD_REWARD_PER_LEVEL: i64 = 8;
pub const DUEL_REWARD_MODIFIER_MIN: f64 = 1.0 - 0.7;
pub const DUEL_REWARD_MODIFIER_MAX: f64 = 1.0 + 0.6;
pub const DUEL_PENALTY_MODIFIER_MIN: f64 = 1.0 - 0.5;
pub const DUEL_PENALTY_MODIFIER_MAX: f64 = 1.0 + 0.5;
pub const GOLD_PENALTY_FACTOR_BASE: f64 = 0.025;
pub const GOLD_PENALTY_MAX: i64 = 400;

// --- Items ---
pub const ITEMS_EQUIP_MAX: usize = 3;
/// Largest stack a member may hold; matches the `INTEGER` quantity column.
pub const ITEMS_STACK_MAX: u32 = i32::MAX as u32;

// --- New actor defaults ---
pub const ACTOR_HEALTH_BASE: i64 = 100;
pub const ACTOR_ENERGY_BASE: i64 = 10;
pub const ACTOR_ATTACK_BASE: i64 = 10;
pub const ACTOR_DEFENSE_BASE: i64 = 5;
pub const ACTOR_SPEED_BASE: i64 = 5;

// --- Regeneration ---
pub const REGEN_INTERVAL_SECS: i64 = 300;
pub const HEALTH_REGEN_PER_TICK: i64 = 10;
pub const ENERGY_REGEN_PER_TICK: i64 = 1;

// --- Chat activity XP ---
pub const MESSAGE_XP_MIN: i64 = 15;
pub const MESSAGE_XP_MAX: i64 = 25;
pub const MESSAGE_XP_COOLDOWN_SECS: i64 = 60;

pub const LEADERBOARD_LIMIT: i64 = 10;
