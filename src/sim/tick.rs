//! Fixed timestep simulation tick
//!
//! One call per animation frame. Inputs are applied first, then the
//! scheduled projectile step runs; a landing flows through snap, match and
//! support resolution, and the row clock before the tick returns.

use glam::Vec2;

use super::board::BubbleColor;
use super::cluster::resolve;
use super::projectile::Flight;
use super::snap::snap_cell;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position to aim at
    pub aim: Option<Vec2>,
    /// Pointer position of a fire click
    pub fire: Option<Vec2>,
    /// Start or restart the session
    pub start: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.start {
        state.start();
    }

    if state.phase != GamePhase::Playing {
        state.tick_token.cancel();
        return;
    }

    state.time_ticks += 1;

    if let Some(pointer) = input.aim {
        state.on_aim_move(pointer);
    }
    if let Some(pointer) = input.fire {
        state.on_fire(pointer);
    }

    step_projectile(state);
}

/// Run the scheduled projectile step, if one is due.
///
/// Returns whether a step ran.
pub fn step_projectile(state: &mut GameState) -> bool {
    let due = state
        .tick_token
        .scheduled()
        .is_some_and(|frame| frame <= state.time_ticks);
    if !due {
        return false;
    }
    let Some(mut projectile) = state.projectile else {
        state.tick_token.cancel();
        return false;
    };

    match projectile.step(&state.geometry, &state.board) {
        Flight::Flying => {
            state.projectile = Some(projectile);
            state.tick_token.arm(state.time_ticks + 1);
        }
        Flight::Landed(impact) => {
            state.projectile = None;
            state.tick_token.cancel();
            settle(state, impact, projectile.color);
        }
    }
    true
}

/// Place a landed bubble and apply everything that follows from it
pub fn settle(state: &mut GameState, impact: Vec2, color: BubbleColor) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let cell = snap_cell(&state.geometry, &state.board, impact);
    let placed = state.board.place(color, cell);
    state.events.push(GameEvent::Snapped {
        row: cell.row,
        col: cell.col,
    });
    log::debug!("Snapped {:?} at {}", color, cell);

    let resolution = resolve(&mut state.board, &placed);
    if resolution.popped() {
        state.add_score(resolution.points());
        state.events.push(GameEvent::Popped {
            count: resolution.matched,
        });
        if resolution.floating > 0 {
            state.events.push(GameEvent::Dropped {
                count: resolution.floating,
            });
        }
    }

    if state.board.breaches_kill_line(&state.geometry) {
        state.end();
    }

    state.shots_since_row += 1;
    if state.shots_since_row >= SHOTS_BEFORE_NEW_ROW {
        state.insert_row();
        state.shots_since_row = 0;
    }

    state.shooter.current = state.shooter.next;
    state.shooter.next = state.pick_color();
}
