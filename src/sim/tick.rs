//! Fixed timestep simulation tick
//!
//! Core game loop that advances a round deterministically.

use super::cutter::cut;
use super::state::{TowerPhase, TowerState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Place the sliding block (tap/click/space)
    pub tap: bool,
    /// Start a new round
    pub restart: bool,
}

/// Advance the tower state by one fixed timestep
pub fn tick(state: &mut TowerState, input: &TickInput, dt: f32) {
    if input.restart {
        state.start();
        return;
    }

    // Halted until an explicit restart
    match state.phase {
        TowerPhase::Idle | TowerPhase::GameOver => return,
        _ => {}
    }

    state.time_ticks += 1;

    let gravity = state.tuning.gravity;
    for piece in &mut state.falling {
        piece.step(dt, gravity);
    }
    state.falling.retain(|p| !p.expired());

    if state.phase == TowerPhase::Spawning {
        state.spawn_next_block();
    }

    let Some(moving) = state.current.as_mut() else {
        return;
    };

    if input.tap {
        moving.stop();
        let outcome = cut(
            &moving.block,
            &state.last,
            state.axis,
            state.tuning.perfect_tolerance,
        );
        state.apply_cut(outcome);
    } else {
        moving.step(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;
    use crate::consts::SIM_DT;
    use crate::sim::cutter::CutOutcome;
    use crate::sim::state::{GameEvent, GameOverReason};
    use crate::tuning::Tuning;

    const TAP: TickInput = TickInput {
        tap: true,
        restart: false,
    };

    fn started() -> TowerState {
        let mut state = TowerState::new(99, Tuning::default());
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            SIM_DT,
        );
        state
    }

    /// Step until the sliding block is within `eps` of the tower top
    fn wait_for_alignment(state: &mut TowerState, eps: f32) {
        for _ in 0..10_000 {
            let moving = state.current.expect("block sliding");
            if (moving.position() - state.axis.get(state.last.pos)).abs() <= eps {
                return;
            }
            tick(state, &TickInput::default(), SIM_DT);
        }
        panic!("block never aligned");
    }

    #[test]
    fn test_idle_ignores_taps() {
        let mut state = TowerState::new(1, Tuning::default());
        tick(&mut state, &TAP, SIM_DT);
        assert_eq!(state.phase, TowerPhase::Idle);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_tick_moves_block() {
        let mut state = started();
        tick(&mut state, &TickInput::default(), SIM_DT);
        tick(&mut state, &TickInput::default(), SIM_DT);
        let moving = state.current.unwrap();
        assert!(moving.position() < 3.0);
    }

    #[test]
    fn test_n_placements_score_n() {
        let mut state = started();
        // Speed 4 at 60 Hz moves ~0.067 per tick, so half a step lands within tolerance
        for n in 1..=10 {
            wait_for_alignment(&mut state, 0.034);
            tick(&mut state, &TAP, SIM_DT);
            assert_eq!(state.score, n);
            assert_eq!(state.stack_height, n);
            assert_eq!(state.phase, TowerPhase::WaitingForInput);
        }
        assert_eq!(state.combo, 10);
        assert_eq!(state.tower.len(), 11);
    }

    #[test]
    fn test_mixed_cuts_score_n() {
        let mut state = started();
        for n in 1..=10 {
            wait_for_alignment(&mut state, 0.034);
            let perfect = n % 2 == 1;
            if !perfect {
                // Overshoot by a few steps to leave a hangover
                for _ in 0..3 {
                    tick(&mut state, &TickInput::default(), SIM_DT);
                }
            }
            state.drain_events();
            tick(&mut state, &TAP, SIM_DT);

            assert_eq!(state.score, n);
            assert_eq!(state.stack_height, n);
            assert_eq!(state.phase, TowerPhase::WaitingForInput);
            let events = state.drain_events();
            if perfect {
                assert!(matches!(events[0], GameEvent::Cut(CutOutcome::Perfect { .. })));
                assert_eq!(state.combo, 1);
            } else {
                assert!(matches!(events[0], GameEvent::Cut(CutOutcome::Normal { .. })));
                assert_eq!(state.combo, 0);
            }
        }
        assert_eq!(state.tower.len(), 11);
        assert!(state.last.size.z < 2.0);
    }

    #[test]
    fn test_axis_alternates_each_round() {
        let mut state = started();
        let mut axes = vec![state.axis];
        for _ in 0..3 {
            wait_for_alignment(&mut state, 0.034);
            tick(&mut state, &TAP, SIM_DT);
            axes.push(state.axis);
        }
        assert_eq!(axes, vec![Axis::X, Axis::Z, Axis::X, Axis::Z]);
    }

    #[test]
    fn test_tap_at_edge_misses() {
        let mut state = started();
        state.drain_events();
        // Block starts at +3.0, fully off a 2.0 wide base
        tick(&mut state, &TAP, SIM_DT);
        assert_eq!(state.phase, TowerPhase::GameOver);
        assert_eq!(state.score, 0);
        let events = state.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::RoundOver {
                reason: GameOverReason::Missed,
                ..
            }
        )));
    }

    #[test]
    fn test_game_over_halts_until_restart() {
        let mut state = started();
        tick(&mut state, &TAP, SIM_DT);
        assert!(state.is_game_over());

        let ticks = state.time_ticks;
        let debris = state.falling[0].block.pos;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.falling[0].block.pos, debris);

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.phase, TowerPhase::WaitingForInput);
        assert!(state.falling.is_empty());
    }

    #[test]
    fn test_debris_removed_after_lifetime() {
        let mut state = started();
        // Let the block slide in to a partial overlap, then cut
        wait_for_alignment(&mut state, 0.034);
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        tick(&mut state, &TAP, SIM_DT);
        assert_eq!(state.falling.len(), 1);
        assert_eq!(state.phase, TowerPhase::WaitingForInput);

        let y0 = state.falling[0].block.pos.y;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.falling[0].block.pos.y < y0);

        let lifetime_ticks = (state.tuning.falling_lifetime / SIM_DT) as usize + 2;
        for _ in 0..lifetime_ticks {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.falling.is_empty());
    }
}
