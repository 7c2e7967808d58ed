//! Idle/demo mode - a bot that plays Stack Tower
//!
//! For each sliding block the bot picks a random aim error and taps once the
//! block passes the aimed spot. Seeded, so demo runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{TowerPhase, TowerState};
use super::tick::TickInput;

/// Autoplay bot
#[derive(Debug, Clone)]
pub struct Autoplay {
    rng: Pcg32,
    /// Largest aim error in world units
    pub max_error: f32,
    /// Height the current aim was chosen for
    aimed_height: Option<u32>,
    aim: f32,
}

impl Autoplay {
    pub fn new(seed: u64, max_error: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_error: max_error.abs(),
            aimed_height: None,
            aim: 0.0,
        }
    }

    /// Produce the input for the next tick
    ///
    /// `step` is the distance the block travels per tick; the bot taps when
    /// the block is within half of it from the aimed spot.
    pub fn input(&mut self, state: &TowerState, step: f32) -> TickInput {
        let mut input = TickInput::default();

        match state.phase {
            TowerPhase::Idle => {
                input.restart = true;
                return input;
            }
            TowerPhase::WaitingForInput => {}
            _ => return input,
        }

        let Some(moving) = state.current.as_ref() else {
            return input;
        };

        if self.aimed_height != Some(state.stack_height) {
            self.aimed_height = Some(state.stack_height);
            self.aim = if self.max_error > 0.0 {
                self.rng.random_range(-self.max_error..=self.max_error)
            } else {
                0.0
            };
        }

        // Aims past the travel bounds would never be reached
        let target = (state.axis.get(state.last.pos) + self.aim)
            .clamp(-moving.range, moving.range);
        if (moving.position() - target).abs() <= step / 2.0 {
            input.tap = true;
        }

        input
    }
}
