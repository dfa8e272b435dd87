//! The duel engine: attack resolution and its outcome types.

pub mod logic;
pub mod state;

pub use logic::Attack;
pub use state::{AttackOutcome, DuelResult, HitKind, RankChange, Side};
