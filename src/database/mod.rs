//! This module acts as the persistence boundary for actors.
//! The arena core never calls it; services load actors, run the rules, and save them back.

pub mod init;
pub mod memory;
pub mod models;
pub mod postgres;

use crate::arena::leaderboard::LeaderboardType;
use crate::arena::{Actor, ActorKey};
use crate::error::StoreError;
use async_trait::async_trait;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Abstract object store for actors keyed by (guild, member).
#[async_trait]
pub trait ActorStore: Send + Sync {
    async fn load(&self, key: ActorKey) -> Result<Option<Actor>, StoreError>;

    async fn save(&self, actor: &Actor) -> Result<(), StoreError>;

    /// Saves several actors atomically: either all are written or none are.
    async fn save_all(&self, actors: &[&Actor]) -> Result<(), StoreError>;

    /// Top `limit` actors of a guild for the given leaderboard.
    async fn top(
        &self,
        guild_id: u64,
        kind: LeaderboardType,
        limit: i64,
    ) -> Result<Vec<Actor>, StoreError>;
}
