//! Data-driven game balance
//!
//! Every Stack Tower constant lives here so designers can tweak a JSON file
//! instead of recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("could not read tuning file")]
    Io(#[from] std::io::Error),
    #[error("tuning file is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {value}")]
    Invalid { field: &'static str, value: f32 },
}

/// Stack Tower tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Blocks ===
    /// Height of every block
    pub block_height: f32,
    /// Starting footprint on both horizontal axes
    pub start_size: f32,
    /// Oscillation speed of the moving block (units/s)
    pub block_speed: f32,
    /// Moving block travels between -move_range and +move_range
    pub move_range: f32,

    // === Cutting ===
    /// Hangover strictly below this snaps to a perfect placement
    pub perfect_tolerance: f32,
    /// Footprint below this on the active axis ends the round
    pub min_footprint: f32,

    // === Debris ===
    /// Seconds before a falling piece is removed
    pub falling_lifetime: f32,
    /// Initial downward speed given to a falling piece
    pub falling_impulse: f32,
    /// Downward acceleration on falling pieces
    pub gravity: f32,

    // === Visuals ===
    /// Hue advance per created block
    pub hue_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            block_height: BLOCK_HEIGHT,
            start_size: START_SIZE,
            block_speed: BLOCK_SPEED,
            move_range: MOVE_RANGE,

            perfect_tolerance: PERFECT_TOLERANCE,
            min_footprint: MIN_FOOTPRINT,

            falling_lifetime: FALLING_LIFETIME,
            falling_impulse: FALLING_IMPULSE,
            gravity: GRAVITY,

            hue_step: HUE_STEP,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("block_height", self.block_height),
            ("start_size", self.start_size),
            ("block_speed", self.block_speed),
            ("move_range", self.move_range),
            ("falling_lifetime", self.falling_lifetime),
        ];
        for (field, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TuningError::Invalid { field, value });
            }
        }

        let non_negative = [
            ("perfect_tolerance", self.perfect_tolerance),
            ("min_footprint", self.min_footprint),
            ("falling_impulse", self.falling_impulse),
            ("gravity", self.gravity),
            ("hue_step", self.hue_step),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(TuningError::Invalid { field, value });
            }
        }

        Ok(())
    }
}
