//! Item definitions, the static item catalog and per-actor item stacks.

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN_ITEMS: &str = include_str!("../../data/items.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Equippable,
    Consumable,
    Special,
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub buyable: bool,
    // Persistent modifiers, applied to `*_extra` while equipped.
    #[serde(default)]
    pub max_health_bonus: i64,
    #[serde(default)]
    pub max_energy_bonus: i64,
    #[serde(default)]
    pub attack_bonus: i64,
    #[serde(default)]
    pub defense_bonus: i64,
    #[serde(default)]
    pub speed_bonus: i64,
    // Instantaneous effects, applied to current health/energy on use.
    #[serde(default)]
    pub health_bonus: i64,
    #[serde(default)]
    pub energy_bonus: i64,
}

impl Item {
    fn has_modifiers(&self) -> bool {
        self.max_health_bonus != 0
            || self.max_energy_bonus != 0
            || self.attack_bonus != 0
            || self.defense_bonus != 0
            || self.speed_bonus != 0
    }

    fn has_instant_effects(&self) -> bool {
        self.health_bonus != 0 || self.energy_bonus != 0
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason| CatalogError::InvalidItem {
            id: self.id.clone(),
            reason,
        };
        if self.id.trim().is_empty() {
            return Err(invalid("empty id"));
        }
        if self.price < 0 {
            return Err(invalid("negative price"));
        }
        match self.kind {
            ItemKind::Equippable if self.has_instant_effects() => {
                Err(invalid("equippable items cannot restore health or energy"))
            }
            ItemKind::Consumable if self.has_modifiers() => {
                Err(invalid("consumable items cannot carry stat modifiers"))
            }
            ItemKind::Special if self.has_modifiers() || self.has_instant_effects() => {
                Err(invalid("special items carry no bonuses"))
            }
            _ => Ok(()),
        }
    }

    /// Short human-readable summary of the bonuses, e.g. `+5 ATK, +20 Max HP`.
    pub fn bonus_summary(&self) -> String {
        let parts: Vec<String> = [
            (self.max_health_bonus, "Max HP"),
            (self.max_energy_bonus, "Max EN"),
            (self.attack_bonus, "ATK"),
            (self.defense_bonus, "DEF"),
            (self.speed_bonus, "SPD"),
            (self.health_bonus, "HP"),
            (self.energy_bonus, "EN"),
        ]
        .into_iter()
        .filter(|(v, _)| *v != 0)
        .map(|(v, label)| format!("{v:+} {label}"))
        .collect();
        if parts.is_empty() {
            "no bonuses".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// A quantity of one item owned by an actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub item: Item,
    pub quantity: u32,
}

/// Read-only item catalog keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<String, Item>,
}

impl ItemCatalog {
    /// The item table shipped with the bot.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_ITEMS)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<Item> = serde_json::from_str(raw)?;
        Self::from_items(records)
    }

    pub fn from_items(records: impl IntoIterator<Item = Item>) -> Result<Self, CatalogError> {
        let mut items = BTreeMap::new();
        for item in records {
            item.validate()?;
            if items.contains_key(&item.id) {
                return Err(CatalogError::Duplicate(item.id));
            }
            items.insert(item.id.clone(), item);
        }
        Ok(Self { items })
    }

    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn get_item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Looks an item up by id or (case-insensitive) display name.
    pub fn find(&self, query: &str) -> Option<&Item> {
        let query = query.trim();
        self.get_item(query).or_else(|| {
            self.items
                .values()
                .find(|i| i.name.eq_ignore_ascii_case(query) || i.id.eq_ignore_ascii_case(query))
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
