//! Stack Hub - A mini-game hub with a block-stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic Stack Tower simulation (cutting, oscillation, game state)
//! - `manager`: Stack Tower state machine wired to saves and observers
//! - `persistence`: Key/value save store over pluggable preference backends
//! - `catalog`: Playable mini-game descriptors and carousel selection
//! - `hub`: Current game selection, score tracking and navigation
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser/native platform abstraction

pub mod catalog;
pub mod events;
pub mod highscores;
pub mod hub;
pub mod manager;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use catalog::{Carousel, GameCatalog, MiniGameDescriptor};
pub use events::{EventBus, TowerEvent};
pub use highscores::HighScoreTable;
pub use hub::{Hub, NavigationRequest};
pub use manager::StackTowerManager;
pub use persistence::SaveStore;
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Block defaults
    pub const BLOCK_HEIGHT: f32 = 0.3;
    pub const START_SIZE: f32 = 2.0;
    /// Oscillation speed (units/s) and half-range of the moving block
    pub const BLOCK_SPEED: f32 = 4.0;
    pub const MOVE_RANGE: f32 = 3.0;

    /// Hangover below this snaps to a perfect placement
    pub const PERFECT_TOLERANCE: f32 = 0.05;
    /// Footprint below this on the active axis ends the round
    pub const MIN_FOOTPRINT: f32 = 0.1;

    /// Falling debris
    pub const FALLING_LIFETIME: f32 = 3.0;
    pub const FALLING_IMPULSE: f32 = 1.0;
    pub const GRAVITY: f32 = 9.81;

    /// Hue advance per created block
    pub const HUE_STEP: f32 = 0.08;

    /// Save blob namespace key
    pub const SAVE_KEY: &str = "MiniGamesSaveData";
    /// Catalog id of the Stack Tower game
    pub const STACK_TOWER_ID: &str = "Stack Tower";
}

/// Horizontal axis a block slides along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    X,
    Z,
}

impl Axis {
    /// The other horizontal axis
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Component of `v` along this axis
    #[inline]
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    /// Copy of `v` with this axis component replaced
    #[inline]
    pub fn with(self, mut v: Vec3, value: f32) -> Vec3 {
        match self {
            Axis::X => v.x = value,
            Axis::Z => v.z = value,
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_flip_alternates() {
        assert_eq!(Axis::X.flip(), Axis::Z);
        assert_eq!(Axis::Z.flip().flip(), Axis::Z);
    }

    #[test]
    fn test_axis_with_only_touches_one_component() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.with(v, 9.0), Vec3::new(9.0, 2.0, 3.0));
        assert_eq!(Axis::Z.with(v, 9.0), Vec3::new(1.0, 2.0, 9.0));
        assert_eq!(Axis::Z.get(v), 3.0);
    }
}
