//! Game state and core simulation types
//!
//! Everything a Stack Tower round needs lives here: the resting tower, the
//! sliding block, falling debris and the score/combo bookkeeping.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::block::{Block, FallingPiece};
use super::cutter::CutOutcome;
use super::mover::MovingBlock;
use crate::Axis;
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerPhase {
    /// No round started yet
    Idle,
    /// Creating the next moving block (transient)
    Spawning,
    /// Block sliding, waiting for a tap
    WaitingForInput,
    /// Round ended, waiting for restart
    GameOver,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The block missed the tower entirely
    Missed,
    /// A cut left a footprint thinner than the minimum
    TooThin,
}

/// Events produced by the simulation, drained by the owner each tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A fresh round began (score reset to 0)
    RoundStarted,
    /// A tap was resolved
    Cut(CutOutcome),
    /// Score changed after a successful placement
    ScoreChanged(u32),
    /// Round ended with the final score
    RoundOver { score: u32, reason: GameOverReason },
}

/// Complete Stack Tower state
#[derive(Debug, Clone)]
pub struct TowerState {
    /// Round seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Gameplay constants for this state
    pub tuning: Tuning,
    pub phase: TowerPhase,
    /// Number of successfully placed blocks this round
    pub stack_height: u32,
    /// Top of the tower (the block the next cut is made against)
    pub last: Block,
    /// Axis the next block slides along
    pub axis: Axis,
    /// Consecutive perfect placements
    pub combo: u32,
    pub score: u32,
    /// Hue given to the next created block
    pub hue: f32,
    /// Resting blocks, base first
    pub tower: Vec<Block>,
    /// Block sliding above the tower
    pub current: Option<MovingBlock>,
    /// Cut-off pieces still falling
    pub falling: Vec<FallingPiece>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Why the last round ended
    pub game_over_reason: Option<GameOverReason>,
    events: Vec<GameEvent>,
}

impl TowerState {
    /// Create an idle state; call [`TowerState::start`] to begin a round
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let last = Self::base_block(&tuning, 0.0);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: TowerPhase::Idle,
            stack_height: 0,
            last,
            axis: Axis::X,
            combo: 0,
            score: 0,
            hue: 0.0,
            tower: Vec::new(),
            current: None,
            falling: Vec::new(),
            time_ticks: 0,
            game_over_reason: None,
            events: Vec::new(),
        }
    }

    fn base_block(tuning: &Tuning, hue: f32) -> Block {
        Block::new(
            Vec3::ZERO,
            Vec3::new(tuning.start_size, tuning.block_height, tuning.start_size),
            hue,
        )
    }

    /// Start (or restart) a round, discarding any current round state
    pub fn start(&mut self) {
        self.tower.clear();
        self.falling.clear();
        self.current = None;

        self.stack_height = 0;
        self.axis = Axis::X;
        self.combo = 0;
        self.score = 0;
        self.game_over_reason = None;
        self.hue = self.rng.random_range(0.0..1.0);

        let hue = self.next_hue();
        let base = Self::base_block(&self.tuning, hue);
        self.last = base;
        self.tower.push(base);

        self.events.push(GameEvent::RoundStarted);
        self.events.push(GameEvent::ScoreChanged(0));

        log::info!("Stack Tower round started (seed {})", self.seed);
        self.spawn_next_block();
    }

    /// Take the hue for a new block and advance the cursor
    fn next_hue(&mut self) -> f32 {
        let hue = self.hue;
        self.hue = (self.hue + self.tuning.hue_step).rem_euclid(1.0);
        hue
    }

    /// Put a new sliding block above the tower
    pub fn spawn_next_block(&mut self) {
        self.phase = TowerPhase::Spawning;

        let y = (self.stack_height + 1) as f32 * self.tuning.block_height;
        let pos = Vec3::new(self.last.pos.x, y, self.last.pos.z);
        let block = Block::new(pos, self.last.size, self.next_hue());

        self.current = Some(MovingBlock::new(
            block,
            self.axis,
            self.tuning.block_speed,
            self.tuning.move_range,
        ));
        self.phase = TowerPhase::WaitingForInput;
    }

    /// Apply a cut outcome: grow the tower or end the round
    pub fn apply_cut(&mut self, outcome: CutOutcome) {
        self.current = None;
        self.events.push(GameEvent::Cut(outcome));

        if let Some(falling) = outcome.falling() {
            self.falling.push(FallingPiece::spawn(
                *falling,
                self.tuning.falling_impulse,
                self.tuning.falling_lifetime,
            ));
        }

        let Some(placed) = outcome.placed().copied() else {
            log::debug!("Block missed at height {}", self.stack_height + 1);
            self.end_round(GameOverReason::Missed);
            return;
        };

        if outcome.is_perfect() {
            self.combo += 1;
        } else {
            self.combo = 0;
        }

        self.stack_height += 1;
        self.score = self.stack_height;
        self.last = placed;
        self.tower.push(placed);
        self.events.push(GameEvent::ScoreChanged(self.score));

        log::debug!(
            "Placed block {} ({}), footprint {:.3} x {:.3}, combo {}",
            self.stack_height,
            if outcome.is_perfect() { "perfect" } else { "cut" },
            placed.size.x,
            placed.size.z,
            self.combo
        );

        if placed.extent(self.axis) < self.tuning.min_footprint {
            self.end_round(GameOverReason::TooThin);
            return;
        }

        self.axis = self.axis.flip();
        self.spawn_next_block();
    }

    fn end_round(&mut self, reason: GameOverReason) {
        self.phase = TowerPhase::GameOver;
        self.game_over_reason = Some(reason);
        self.events.push(GameEvent::RoundOver {
            score: self.score,
            reason,
        });
        log::info!("Stack Tower round over: score {} ({:?})", self.score, reason);
    }

    /// Take all events produced since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == TowerPhase::GameOver
    }
}
