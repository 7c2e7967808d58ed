//! Back-and-forth motion of the active block

use super::block::Block;
use crate::Axis;

/// The block currently sliding above the tower
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingBlock {
    pub block: Block,
    pub axis: Axis,
    /// Units per second
    pub speed: f32,
    /// Travel bounds are `[-range, range]` on the axis
    pub range: f32,
    moving_positive: bool,
    active: bool,
}

impl MovingBlock {
    /// Start oscillating from the positive edge of the range
    pub fn new(block: Block, axis: Axis, speed: f32, range: f32) -> Self {
        let block = Block {
            pos: axis.with(block.pos, range),
            ..block
        };
        Self {
            block,
            axis,
            speed,
            range,
            moving_positive: true,
            active: true,
        }
    }

    /// Advance along the axis, bouncing at the range bounds
    pub fn step(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        let dir = if self.moving_positive { 1.0 } else { -1.0 };
        let mut p = self.position() + self.speed * dt * dir;

        if p > self.range {
            p = self.range;
            self.moving_positive = false;
        } else if p < -self.range {
            p = -self.range;
            self.moving_positive = true;
        }

        self.block.pos = self.axis.with(self.block.pos, p);
    }

    /// Freeze in place
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Position along the axis
    #[inline]
    pub fn position(&self) -> f32 {
        self.axis.get(self.block.pos)
    }

    /// Signed direction of travel (+1 or -1)
    pub fn direction(&self) -> f32 {
        if self.moving_positive { 1.0 } else { -1.0 }
    }
}
