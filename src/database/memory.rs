//! In-process actor store. Used by tests and when no database is configured.

use super::ActorStore;
use crate::arena::leaderboard::LeaderboardType;
use crate::arena::{Actor, ActorKey};
use crate::error::StoreError;
use ahash::AHashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    actors: RwLock<AHashMap<ActorKey, Actor>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.actors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.actors.read().await.is_empty()
    }
}

#[async_trait]
impl ActorStore for MemoryStore {
    async fn load(&self, key: ActorKey) -> Result<Option<Actor>, StoreError> {
        Ok(self.actors.read().await.get(&key).cloned())
    }

    async fn save(&self, actor: &Actor) -> Result<(), StoreError> {
        self.actors.write().await.insert(actor.key, actor.clone());
        Ok(())
    }

    async fn save_all(&self, actors: &[&Actor]) -> Result<(), StoreError> {
        let mut map = self.actors.write().await;
        for actor in actors {
            map.insert(actor.key, (*actor).clone());
        }
        Ok(())
    }

    async fn top(
        &self,
        guild_id: u64,
        kind: LeaderboardType,
        limit: i64,
    ) -> Result<Vec<Actor>, StoreError> {
        let map = self.actors.read().await;
        let mut actors: Vec<Actor> = map
            .values()
            .filter(|a| a.key.guild_id == guild_id && a.is_member)
            .cloned()
            .collect();
        actors.sort_by(|a, b| kind.compare(a, b));
        actors.truncate(limit.max(0) as usize);
        Ok(actors)
    }
}
