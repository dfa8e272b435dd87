//! Per-actor mutual exclusion around load → mutate → save cycles.
//!
//! Entries live only while some caller holds or waits on them; releasing the last
//! guard for a key evicts it from the map.

use crate::arena::ActorKey;
use ahash::AHashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = AHashMap<ActorKey, Arc<AsyncMutex<()>>>;

/// Guards held for the duration of one actor operation.
pub struct ActorGuards<'a> {
    locks: &'a ActorLocks,
    keys: Vec<ActorKey>,
    guards: Vec<OwnedMutexGuard<()>>,
}

impl Drop for ActorGuards<'_> {
    fn drop(&mut self) {
        self.guards.clear();
        let mut map = self.locks.map();
        for key in &self.keys {
            // Only the map's own handle left: nobody holds or waits on this key.
            if map.get(key).is_some_and(|m| Arc::strong_count(m) == 1) {
                map.remove(key);
            }
        }
    }
}

#[derive(Default)]
pub struct ActorLocks {
    locks: Mutex<LockMap>,
}

impl ActorLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> std::sync::MutexGuard<'_, LockMap> {
        self.locks.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn handle(&self, key: ActorKey) -> Arc<AsyncMutex<()>> {
        self.map().entry(key).or_default().clone()
    }

    pub async fn lock(&self, key: ActorKey) -> ActorGuards<'_> {
        self.lock_many(&[key]).await
    }

    /// Locks every key in ascending order so two overlapping callers cannot deadlock.
    pub async fn lock_many(&self, keys: &[ActorKey]) -> ActorGuards<'_> {
        let mut keys = keys.to_vec();
        keys.sort();
        keys.dedup();
        let mut guards = ActorGuards {
            locks: self,
            keys: Vec::with_capacity(keys.len()),
            guards: Vec::with_capacity(keys.len()),
        };
        for key in keys {
            let handle = self.handle(key);
            guards.keys.push(key);
            guards.guards.push(handle.lock_owned().await);
        }
        guards
    }

    /// Number of keys currently held or awaited.
    pub fn tracked(&self) -> usize {
        self.map().len()
    }
}
