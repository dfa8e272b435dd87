//! Word-list profanity filter for chat messages.

use crate::error::CatalogError;
use ahash::AHashSet;
use std::path::Path;

const BUILTIN_WORDS: &str = include_str!("../data/profanity.txt");

#[derive(Debug, Clone, Default)]
pub struct ProfanityFilter {
    words: AHashSet<String>,
}

impl ProfanityFilter {
    pub fn builtin() -> Self {
        Self::from_list(BUILTIN_WORDS)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_list(&raw))
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn from_list(raw: &str) -> Self {
        let words = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First listed word found as a whole word in `text`, ignoring case.
    pub fn find_in<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .find(|w| self.words.contains(&w.to_lowercase()))
    }
}
