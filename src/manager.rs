//! Stack Tower manager
//!
//! Owns a [`TowerState`], feeds it taps on a fixed timestep, saves the final
//! score when a round ends and forwards everything observers care about.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::events::{EventBus, TowerEvent};
use crate::hub::HubContext;
use crate::sim::{GameEvent, TickInput, TowerPhase, TowerState, tick};
use crate::tuning::Tuning;

/// Runs Stack Tower rounds for one catalog entry
#[derive(Debug)]
pub struct StackTowerManager {
    ctx: HubContext,
    game_id: String,
    state: TowerState,
    events: EventBus<TowerEvent>,
    input: TickInput,
    accumulator: f32,
    last_high_score: u32,
}

impl StackTowerManager {
    /// Create a manager saving under `game_id`; the round starts on [`Self::start`]
    pub fn new(ctx: HubContext, game_id: &str, tuning: Tuning, seed: u64) -> Self {
        if ctx.catalog.get(game_id).is_none() {
            log::debug!("`{game_id}` is not in the catalog; scores are still saved under it");
        }
        let last_high_score = ctx.saves.borrow().high_score(game_id);
        Self {
            ctx,
            game_id: game_id.to_string(),
            state: TowerState::new(seed, tuning),
            events: EventBus::new(),
            input: TickInput::default(),
            accumulator: 0.0,
            last_high_score,
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn state(&self) -> &TowerState {
        &self.state
    }

    pub fn phase(&self) -> TowerPhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn combo(&self) -> u32 {
        self.state.combo
    }

    /// High score as of the last finished round (or creation)
    pub fn high_score(&self) -> u32 {
        self.last_high_score
    }

    // === Observers ===

    /// Receive every event
    pub fn subscribe(&mut self, listener: impl FnMut(&TowerEvent) + 'static) {
        self.events.subscribe(listener);
    }

    pub fn on_score_updated(&mut self, mut listener: impl FnMut(u32) + 'static) {
        self.events.subscribe(move |e| {
            if let TowerEvent::ScoreUpdated(score) = *e {
                listener(score);
            }
        });
    }

    pub fn on_perfect(&mut self, mut listener: impl FnMut(bool) + 'static) {
        self.events.subscribe(move |e| {
            if let TowerEvent::Perfect(perfect) = *e {
                listener(perfect);
            }
        });
    }

    /// Listener receives `(score, high_score)`
    pub fn on_game_over(&mut self, mut listener: impl FnMut(u32, u32) + 'static) {
        self.events.subscribe(move |e| {
            if let TowerEvent::GameOver { score, high_score } = *e {
                listener(score, high_score);
            }
        });
    }

    // === Commands ===

    /// Start or restart a round immediately
    pub fn start(&mut self) {
        self.accumulator = 0.0;
        self.input = TickInput::default();
        self.state.start();
        self.dispatch();
    }

    pub fn restart(&mut self) {
        self.start();
    }

    /// Queue a tap for the next simulation step
    pub fn tap(&mut self) {
        self.input.tap = true;
    }

    /// Run one simulation step with explicit input
    pub fn step(&mut self, input: &TickInput) {
        tick(&mut self.state, input, SIM_DT);
        self.dispatch();
    }

    /// Advance by a frame's worth of wall time
    pub fn update(&mut self, frame_dt: f32) {
        let frame_dt = frame_dt.min(0.1);
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.input);
            self.step(&input);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// Translate simulation events into observer events
    fn dispatch(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::RoundStarted => {}
                GameEvent::ScoreChanged(score) => {
                    self.events.emit(&TowerEvent::ScoreUpdated(score));
                }
                GameEvent::Cut(outcome) => {
                    if outcome.is_perfect() {
                        self.events.emit(&TowerEvent::Perfect(true));
                    }
                }
                GameEvent::RoundOver { score, .. } => {
                    let high_score = {
                        let mut saves = self.ctx.saves.borrow_mut();
                        saves.try_save_high_score(&self.game_id, score);
                        saves.high_score(&self.game_id)
                    };
                    self.last_high_score = high_score;
                    self.events
                        .emit(&TowerEvent::GameOver { score, high_score });
                }
            }
        }
    }
}
