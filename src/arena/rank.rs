//! Ordered duel ranks. The index of a rank is its id and drives its Elo threshold.

use super::formulas::rank_elo;
use crate::error::CatalogError;
use serde::Deserialize;
use std::path::Path;

const BUILTIN_RANKS: &str = include_str!("../../data/ranks.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rank {
    pub id: usize,
    pub name: String,
    pub description: String,
}

impl Rank {
    pub fn min_elo(&self) -> i32 {
        rank_elo(self.id)
    }
}

#[derive(Deserialize)]
struct RankRecord {
    name: String,
    #[serde(default)]
    description: String,
}

/// Static rank table, loaded once at startup.
#[derive(Debug, Clone)]
pub struct RankCatalog {
    ranks: Vec<Rank>,
}

impl RankCatalog {
    /// The rank table shipped with the bot.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_RANKS)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses an ordered JSON array of `{ "name", "description" }` records.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<RankRecord> = serde_json::from_str(raw)?;
        let mut ranks = Vec::with_capacity(records.len());
        for (id, record) in records.into_iter().enumerate() {
            if ranks.iter().any(|r: &Rank| r.name == record.name) {
                return Err(CatalogError::Duplicate(record.name));
            }
            ranks.push(Rank {
                id,
                name: record.name,
                description: record.description,
            });
        }
        Ok(Self { ranks })
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rank> {
        self.ranks.iter()
    }

    /// Rank at `index`; indices past the table get a synthesized placeholder.
    pub fn get(&self, index: usize) -> Rank {
        self.ranks.get(index).cloned().unwrap_or_else(|| Rank {
            id: index,
            name: format!("Untitled Rank {index}"),
            description: String::new(),
        })
    }

    /// Highest rank whose threshold is at or below `elo`, scanning from the top.
    pub fn index_for_elo(&self, elo: i32) -> usize {
        (0..self.ranks.len().max(1))
            .rev()
            .find(|&i| rank_elo(i) <= elo)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let ranks = RankCatalog::builtin().expect("builtin ranks");
        assert!(ranks.len() >= 5);
        assert_eq!(ranks.get(0).min_elo(), 0);
    }

    #[test]
    fn out_of_table_rank_gets_placeholder() {
        let ranks = RankCatalog::from_json(r#"[{"name":"Bronze"},{"name":"Silver"}]"#).unwrap();
        let r = ranks.get(7);
        assert_eq!(r.name, "Untitled Rank 7");
        assert_eq!(r.min_elo(), 1800);
    }

    #[test]
    fn elo_lookup_prefers_higher_rank_on_tie() {
        let ranks =
            RankCatalog::from_json(r#"[{"name":"A"},{"name":"B"},{"name":"C"}]"#).unwrap();
        assert_eq!(ranks.index_for_elo(1199), 0);
        assert_eq!(ranks.index_for_elo(1200), 1);
        assert_eq!(ranks.index_for_elo(1300), 2);
        assert_eq!(ranks.index_for_elo(5000), 2);
        assert_eq!(ranks.index_for_elo(-40), 0);
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = RankCatalog::from_json(r#"[{"name":"A"},{"name":"A"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate(n) if n == "A"));
    }
}
