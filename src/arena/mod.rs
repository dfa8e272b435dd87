//! This module contains the core gameplay rules: formulas, actors, items, ranks and duels.
//! Nothing in here performs I/O; callers load and persist actors around these calls.

pub mod actor;
pub mod combat;
pub mod formulas;
pub mod inventory;
pub mod item;
pub mod leaderboard;
pub mod leveling;
pub mod rank;

pub use actor::{Actor, ActorKey};
pub use item::{Item, ItemCatalog, ItemKind, ItemStack};
pub use rank::{Rank, RankCatalog};
