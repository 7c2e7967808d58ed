//! Block cutting against the block below
//!
//! The heart of Stack Tower: project the moving block and the resting block
//! onto the active axis, intersect the two intervals and decide whether the
//! placement was a miss, a perfect snap or a normal cut.

use super::block::Block;
use crate::Axis;

/// Result of cutting the moving block
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutOutcome {
    /// Hangover within tolerance: snapped onto the block below, full size kept
    Perfect { placed: Block },
    /// Overlap kept, hangover cut off
    Normal { placed: Block, falling: Block },
    /// No overlap: the whole block falls
    Missed { falling: Block },
}

impl CutOutcome {
    /// The block that now rests on the tower, if any
    pub fn placed(&self) -> Option<&Block> {
        match self {
            CutOutcome::Perfect { placed } | CutOutcome::Normal { placed, .. } => Some(placed),
            CutOutcome::Missed { .. } => None,
        }
    }

    /// The piece that falls away, if any
    pub fn falling(&self) -> Option<&Block> {
        match self {
            CutOutcome::Normal { falling, .. } | CutOutcome::Missed { falling } => Some(falling),
            CutOutcome::Perfect { .. } => None,
        }
    }

    pub fn is_perfect(&self) -> bool {
        matches!(self, CutOutcome::Perfect { .. })
    }

    pub fn is_missed(&self) -> bool {
        matches!(self, CutOutcome::Missed { .. })
    }
}

/// Cut `moving` against `prev` along `axis`
///
/// Only the active axis is compared; the other horizontal axis and the
/// height of the moving block carry over unchanged to every piece.
pub fn cut(moving: &Block, prev: &Block, axis: Axis, perfect_tolerance: f32) -> CutOutcome {
    let (moving_min, moving_max) = moving.interval(axis);
    let (prev_min, prev_max) = prev.interval(axis);

    let overlap_min = moving_min.max(prev_min);
    let overlap_max = moving_max.min(prev_max);
    let overlap = overlap_max - overlap_min;

    if overlap <= 0.0 {
        return CutOutcome::Missed { falling: *moving };
    }

    let hangover = moving.extent(axis) - overlap;

    if hangover < perfect_tolerance {
        let placed = Block {
            pos: axis.with(moving.pos, prev.center(axis)),
            ..*moving
        };
        return CutOutcome::Perfect { placed };
    }

    let placed = Block {
        pos: axis.with(moving.pos, (overlap_min + overlap_max) / 2.0),
        size: axis.with(moving.size, overlap),
        ..*moving
    };

    // The hangover sits on whichever side the moving block overshot
    let falling_center = if moving.center(axis) > prev.center(axis) {
        overlap_max + hangover / 2.0
    } else {
        overlap_min - hangover / 2.0
    };
    let falling = Block {
        pos: axis.with(moving.pos, falling_center),
        size: axis.with(moving.size, hangover),
        ..*moving
    };

    CutOutcome::Normal { placed, falling }
}
