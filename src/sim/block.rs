//! Axis-aligned tower blocks
//!
//! A block is a box centered on `pos` with full extents `size`. The two
//! horizontal axes (X, Z) form its footprint; Y is the stacking direction.

use glam::Vec3;

use crate::Axis;

/// A box in the tower (resting, moving or falling)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Center position
    pub pos: Vec3,
    /// Full extents (x = width, y = height, z = depth)
    pub size: Vec3,
    /// Hue in [0, 1), for presentation
    pub hue: f32,
}

impl Block {
    pub fn new(pos: Vec3, size: Vec3, hue: f32) -> Self {
        Self {
            pos,
            size,
            hue: hue.rem_euclid(1.0),
        }
    }

    /// Full extent along the axis
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        axis.get(self.size)
    }

    /// Center along the axis
    #[inline]
    pub fn center(&self, axis: Axis) -> f32 {
        axis.get(self.pos)
    }

    /// Projection onto the axis as `[min, max]`
    #[inline]
    pub fn interval(&self, axis: Axis) -> (f32, f32) {
        let half = self.extent(axis) / 2.0;
        let c = self.center(axis);
        (c - half, c + half)
    }
}

/// A piece cut off the tower, falling until its lifetime runs out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingPiece {
    pub block: Block,
    /// Current velocity
    pub vel: Vec3,
    /// Seconds left before removal
    pub ttl: f32,
}

impl FallingPiece {
    /// Detach `block` with a downward impulse
    pub fn spawn(block: Block, impulse: f32, lifetime: f32) -> Self {
        Self {
            block,
            vel: Vec3::new(0.0, -impulse, 0.0),
            ttl: lifetime,
        }
    }

    /// Integrate one step under gravity
    pub fn step(&mut self, dt: f32, gravity: f32) {
        self.vel.y -= gravity * dt;
        self.block.pos += self.vel * dt;
        self.ttl -= dt;
    }

    pub fn expired(&self) -> bool {
        self.ttl <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_is_center_plus_minus_half() {
        let block = Block::new(Vec3::new(0.5, 0.0, -1.0), Vec3::new(2.0, 0.3, 1.0), 0.0);
        assert_eq!(block.interval(Axis::X), (-0.5, 1.5));
        assert_eq!(block.interval(Axis::Z), (-1.5, -0.5));
    }

    #[test]
    fn test_hue_wraps_into_unit_range() {
        let block = Block::new(Vec3::ZERO, Vec3::ONE, 1.25);
        assert!((block.hue - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_falling_piece_drops_and_expires() {
        let block = Block::new(Vec3::new(0.0, 3.0, 0.0), Vec3::ONE, 0.0);
        let mut piece = FallingPiece::spawn(block, 1.0, 0.5);
        for _ in 0..20 {
            piece.step(0.05, 9.81);
        }
        assert!(piece.block.pos.y < 3.0);
        assert_eq!(piece.block.pos.x, 0.0);
        assert!(piece.expired());
    }
}
