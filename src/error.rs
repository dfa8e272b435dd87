//! Error types shared across the arena core, persistence and services.
//!
//! Business-rule rejections ([`ArenaError`]) are expected outcomes and are shown to
//! the member as-is. Storage failures ([`StoreError`]) are opaque to the core.

use chrono::Duration;
use thiserror::Error;

/// A gameplay rule rejected the operation. No state was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("you are defeated and cannot attack until you recover")]
    AttackerDefeated,
    #[error("your opponent is already defeated")]
    DefenderDefeated,
    #[error("not enough energy: need {needed}, have {available}")]
    NotEnoughEnergy { needed: i64, available: i64 },
    #[error("attack is on cooldown for another {}s", remaining.num_seconds().max(1))]
    OnCooldown { remaining: Duration },
    #[error("you cannot target yourself")]
    SelfTarget,
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("`{0}` is not for sale")]
    NotBuyable(String),
    #[error("not enough gold: need {needed}, have {available}")]
    NotEnoughGold { needed: i64, available: i64 },
    #[error("unknown item `{0}`")]
    UnknownItem(String),
    #[error("you do not own `{0}`")]
    NotOwned(String),
    #[error("not enough `{id}`: need {needed}, have {available}")]
    NotEnoughItems {
        id: String,
        needed: u32,
        available: u32,
    },
    #[error("`{0}` cannot be equipped")]
    NotEquippable(String),
    #[error("`{0}` cannot be used")]
    NotConsumable(String),
    #[error("`{0}` is already equipped")]
    AlreadyEquipped(String),
    #[error("`{0}` is not equipped")]
    NotEquipped(String),
    #[error("you can equip at most {max} items")]
    EquipLimit { max: usize },
    #[error("unequip `{0}` before giving away or using your last one")]
    ItemEquipped(String),
    #[error("cannot hold more than {max} `{id}`")]
    StackFull { id: String, max: u32 },
}

/// Persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Failure surfaced by the service layer to the presentation layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Rule(#[from] ArenaError),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ServiceError {
    /// The rule violation, if this is one.
    pub fn rule(&self) -> Option<&ArenaError> {
        match self {
            Self::Rule(e) => Some(e),
            Self::Storage(_) => None,
        }
    }
}

/// Static catalog data could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate id `{0}`")]
    Duplicate(String),
    #[error("item `{id}`: {reason}")]
    InvalidItem { id: String, reason: &'static str },
}
