//! This module defines the shared application state stored in Serenity's global context.

use crate::moderation::ProfanityFilter;
use crate::services::ArenaService;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler.
pub struct AppState {
    /// Gameplay rules plus persistence; every command goes through it.
    pub arena: Arc<ArenaService>,
    /// The command prefix for text commands.
    pub prefix: Arc<RwLock<String>>,
    pub profanity: ProfanityFilter,
}

impl AppState {
    pub fn new(arena: Arc<ArenaService>, prefix: String, profanity: ProfanityFilter) -> Self {
        Self {
            arena,
            prefix: Arc::new(RwLock::new(prefix)),
            profanity,
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
