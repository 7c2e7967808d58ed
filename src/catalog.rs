//! Mini-game catalog and carousel selection
//!
//! The catalog is a designer-provided, immutable list of playable games.
//! The carousel only tracks which entry is centered; layout and animation
//! belong to the presentation layer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::STACK_TOWER_ID;

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate mini-game id `{0}`")]
    DuplicateId(String),
    #[error("catalog is not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// One playable mini-game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniGameDescriptor {
    /// Save key; defaults to `display_name` when empty
    #[serde(default)]
    pub id: String,
    pub display_name: String,
    /// Screen the hub navigates to when launching
    pub screen_id: String,
    /// RGBA, components in [0, 1]
    #[serde(default = "white")]
    pub theme_color: [f32; 4],
    #[serde(default)]
    pub description: String,
    /// Icon asset reference
    #[serde(default)]
    pub icon: Option<String>,
}

fn white() -> [f32; 4] {
    [1.0; 4]
}

impl MiniGameDescriptor {
    pub fn new(display_name: &str, screen_id: &str) -> Self {
        Self {
            id: display_name.to_string(),
            display_name: display_name.to_string(),
            screen_id: screen_id.to_string(),
            theme_color: white(),
            description: String::new(),
            icon: None,
        }
    }

    pub fn with_theme_color(mut self, color: [f32; 4]) -> Self {
        self.theme_color = color;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }
}

/// Ordered, immutable list of mini-games
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameCatalog {
    games: Vec<MiniGameDescriptor>,
}

impl GameCatalog {
    /// Build a catalog, filling blank ids and rejecting duplicates
    pub fn new(games: Vec<MiniGameDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut games = games;
        for game in &mut games {
            if game.id.is_empty() {
                game.id = game.display_name.clone();
            }
            if !seen.insert(game.id.clone()) {
                return Err(CatalogError::DuplicateId(game.id.clone()));
            }
        }
        Ok(Self { games })
    }

    /// Games shipped with the hub
    pub fn builtin() -> Self {
        Self {
            games: vec![
                MiniGameDescriptor::new(STACK_TOWER_ID, "StackTower")
                    .with_theme_color([0.35, 0.75, 0.95, 1.0])
                    .with_description("Tap to drop the sliding block. Line it up or lose the overhang.")
                    .with_icon("icons/stack_tower.png"),
            ],
        }
    }

    /// Load a catalog from a JSON array of descriptors
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let games: Vec<MiniGameDescriptor> = serde_json::from_str(json)?;
        Self::new(games)
    }

    pub fn get(&self, id: &str) -> Option<&MiniGameDescriptor> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&MiniGameDescriptor> {
        self.games.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MiniGameDescriptor> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Which catalog entry the menu carousel has centered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move one card right (clamped)
    pub fn next(&mut self) -> usize {
        if self.index + 1 < self.len {
            self.index += 1;
        }
        self.index
    }

    /// Move one card left (clamped)
    pub fn previous(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// Snap to the card nearest a normalized scroll position in [0, 1]
    pub fn snap_to_nearest(&mut self, normalized: f32) -> usize {
        if self.len <= 1 {
            self.index = 0;
            return 0;
        }
        let step = 1.0 / (self.len - 1) as f32;
        let nearest = (normalized / step).round();
        self.index = nearest.clamp(0.0, (self.len - 1) as f32) as usize;
        self.index
    }

    /// Normalized scroll position that centers the current card
    pub fn target_normalized(&self) -> f32 {
        if self.len <= 1 {
            0.0
        } else {
            self.index as f32 / (self.len - 1) as f32
        }
    }

    /// The centered game
    pub fn selected<'a>(&self, catalog: &'a GameCatalog) -> Option<&'a MiniGameDescriptor> {
        catalog.at(self.index)
    }
}
