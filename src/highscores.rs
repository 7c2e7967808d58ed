//! Best-score table, one entry per mini-game
//!
//! Scores only ever go up: a new score replaces the stored one only when it
//! is strictly greater.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Best score per game id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    entries: BTreeMap<String, u32>,
}

impl HighScoreTable {
    /// Create empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score for a game (0 if never played)
    pub fn get(&self, game_id: &str) -> u32 {
        self.entries.get(game_id).copied().unwrap_or(0)
    }

    /// Check if a score would become the new best
    pub fn qualifies(&self, game_id: &str, score: u32) -> bool {
        score > self.get(game_id)
    }

    /// Record a score; returns true if it became the new best
    pub fn try_record(&mut self, game_id: &str, score: u32) -> bool {
        if !self.qualifies(game_id, score) {
            return false;
        }
        self.entries.insert(game_id.to_string(), score);
        true
    }

    /// Overwrite without the monotonic check (used when rehydrating saves)
    pub(crate) fn insert_raw(&mut self, game_id: String, score: u32) {
        self.entries.insert(game_id, score);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest score across all games (if any)
    pub fn top_score(&self) -> Option<(&str, u32)> {
        self.iter().max_by_key(|(_, score)| *score)
    }
}
