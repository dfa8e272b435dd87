//! Service layer: orchestrates persistence, locking and the arena rules for commands.

pub mod arena;
pub mod locks;

pub use arena::{ArenaService, AttackReport, MemberProfile};
