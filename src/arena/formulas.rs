//! Pure progression formulas: level thresholds, level rewards and rank thresholds.

use crate::constants::{
    ELO_BASE, ELO_GROWTH_RATE, LEVEL_EXPONENT, LEVEL_GOLD_BASE, LEVEL_GOLD_PER_LEVEL,
    LEVEL_XP_BASE,
};

/// Cumulative XP needed to reach `level`. `level_xp(0) == 0`.
pub fn level_xp(level: i32) -> i64 {
    if level <= 0 {
        return 0;
    }
    (LEVEL_XP_BASE * (level as f64).powf(LEVEL_EXPONENT)).round() as i64
}

/// One-time gold reward for reaching `level`.
pub fn level_gold(level: i32) -> i64 {
    if level <= 0 {
        return 0;
    }
    LEVEL_GOLD_BASE + LEVEL_GOLD_PER_LEVEL * level as i64
}

/// Minimum Elo to hold the rank at `rank_index`. Index 0 is the floor rank.
/// Saturates at `i32::MAX` for indices far past any table.
pub fn rank_elo(rank_index: usize) -> i32 {
    if rank_index == 0 {
        return 0;
    }
    let steps = i64::try_from(rank_index - 1).unwrap_or(i64::MAX);
    let elo = steps
        .saturating_mul(ELO_GROWTH_RATE as i64)
        .saturating_add(ELO_BASE as i64);
    i32::try_from(elo).unwrap_or(i32::MAX)
}
