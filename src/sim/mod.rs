//! Deterministic Stack Tower simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod autoplay;
pub mod block;
pub mod cutter;
pub mod mover;
pub mod state;
pub mod tick;

pub use autoplay::Autoplay;
pub use block::{Block, FallingPiece};
pub use cutter::{CutOutcome, cut};
pub use mover::MovingBlock;
pub use state::{GameEvent, GameOverReason, TowerPhase, TowerState};
pub use tick::{TickInput, tick};
