//! Session state and the player-facing controls
//!
//! Everything the simulation mutates lives in `GameState`. Inputs arrive as
//! plain method calls in program order; there is no shared ownership.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::{Board, BubbleColor, pick_color};
use super::hex::Geometry;
use super::projectile::Projectile;
use super::snapshot::{RenderBubble, Snapshot};
use crate::consts::*;
use crate::{angle_to, clamp_aim, direction_from_degrees};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start
    Ready,
    /// Accepting aim and fire input
    Playing,
    /// A bubble crossed the kill line; only restart is accepted
    GameOver,
}

/// The launcher
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shooter {
    /// Color fired next
    pub current: BubbleColor,
    /// Preview of the color after that
    pub next: BubbleColor,
    /// Aim in degrees, screen space
    pub angle: f32,
}

impl Default for Shooter {
    fn default() -> Self {
        Self {
            current: BubbleColor::Red,
            next: BubbleColor::Blue,
            angle: AIM_DEFAULT_DEG,
        }
    }
}

/// Aim guide, derived from the shooter for drawing only
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AimLine {
    pub start: Vec2,
    pub end: Vec2,
}

/// Things that happened since the presentation layer last looked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Fired { color: BubbleColor },
    Snapped { row: i32, col: i32 },
    Popped { count: usize },
    Dropped { count: usize },
    RowInserted,
    GameOver { score: u64 },
}

/// Handle for the next scheduled simulation tick.
///
/// Armed while a projectile is in flight; cancelling an idle token does
/// nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickToken {
    scheduled: Option<u64>,
}

impl TickToken {
    /// Schedule the tick numbered `frame`
    pub fn arm(&mut self, frame: u64) {
        self.scheduled = Some(frame);
    }

    /// Drop any pending tick. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.scheduled.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.scheduled.is_some()
    }

    pub fn scheduled(&self) -> Option<u64> {
        self.scheduled
    }
}

fn session_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Pixel layout
    pub geometry: Geometry,
    pub phase: GamePhase,
    pub board: Board,
    pub shooter: Shooter,
    /// At most one bubble in flight
    pub projectile: Option<Projectile>,
    pub aim_line: AimLine,
    pub score: u64,
    /// Shots since the last inserted row
    pub shots_since_row: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tick_token: TickToken,
    /// Undrained events, oldest first
    pub events: Vec<GameEvent>,
    /// Not serialized; a deserialized state draws from a fresh stream
    #[serde(skip, default = "session_rng")]
    rng: Pcg32,
}

impl GameState {
    /// Create a session in `Ready` with an empty board
    pub fn new(seed: u64, geometry: Geometry) -> Self {
        let mut state = Self {
            seed,
            geometry,
            phase: GamePhase::Ready,
            board: Board::new(),
            shooter: Shooter::default(),
            projectile: None,
            aim_line: AimLine::default(),
            score: 0,
            shots_since_row: 0,
            time_ticks: 0,
            tick_token: TickToken::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset_aim();
        state
    }

    /// Begin a session from any phase: fresh board, zero score and shots
    pub fn start(&mut self) {
        self.tick_token.cancel();
        self.projectile = None;
        self.board = Board::generate_initial(&mut self.rng);
        self.score = 0;
        self.shots_since_row = 0;
        self.shooter = Shooter {
            current: self.pick_color(),
            next: self.pick_color(),
            angle: AIM_DEFAULT_DEG,
        };
        self.reset_aim();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Session started ({} bubbles)", self.board.len());
    }

    /// Same transition as `start`
    pub fn restart(&mut self) {
        self.start();
    }

    /// Point the shooter at a pointer position
    pub fn on_aim_move(&mut self, pointer: Vec2) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let origin = self.geometry.shooter_origin();
        self.shooter.angle = clamp_aim(angle_to(origin, pointer));
        self.update_aim_line();
    }

    /// Fire toward a pointer position.
    ///
    /// Ignored unless playing with nothing in flight and the pointer above
    /// the shooter. Returns whether a projectile was launched.
    pub fn on_fire(&mut self, pointer: Vec2) -> bool {
        if self.phase != GamePhase::Playing || self.projectile.is_some() {
            log::debug!(
                "Fire ignored ({:?}, in flight: {})",
                self.phase,
                self.projectile.is_some()
            );
            return false;
        }
        let origin = self.geometry.shooter_origin();
        if pointer.y - origin.y >= 0.0 {
            log::debug!("Fire ignored (pointer below shooter)");
            return false;
        }

        let angle = clamp_aim(angle_to(origin, pointer));
        let color = self.shooter.current;
        self.projectile = Some(Projectile::launch(
            origin,
            angle,
            self.geometry.projectile_speed(),
            color,
        ));
        self.tick_token.arm(self.time_ticks + 1);
        self.events.push(GameEvent::Fired { color });
        true
    }

    /// Enter `GameOver`, stopping the tick loop
    pub fn end(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.projectile = None;
        self.tick_token.cancel();
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over with score {}", self.score);
    }

    /// Add points; score never decreases
    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Next color for the shooter, drawn from colors on the board
    pub fn pick_color(&mut self) -> BubbleColor {
        let existing = self.board.colors();
        pick_color(&existing, &mut self.rng)
    }

    /// Push the board down one row, ending the session on a breach.
    ///
    /// No-op unless playing.
    pub fn insert_row(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let breached = self.board.insert_row(&mut self.rng, &self.geometry);
        self.events.push(GameEvent::RowInserted);
        log::info!("Row inserted ({} bubbles)", self.board.len());
        if breached {
            self.end();
        }
    }

    /// Take every pending event
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for a renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        let bubbles = self
            .board
            .iter()
            .map(|b| RenderBubble {
                id: b.id,
                color: b.color,
                row: b.cell.row,
                col: b.cell.col,
                center: self.geometry.cell_center(b.cell),
            })
            .collect();
        Snapshot {
            bubbles,
            shooter: &self.shooter,
            projectile: self.projectile.as_ref(),
            aim_line: &self.aim_line,
            score: self.score,
            phase: self.phase,
            bubble_radius: self.geometry.radius,
            geometry: self.geometry,
        }
    }

    fn reset_aim(&mut self) {
        self.shooter.angle = AIM_DEFAULT_DEG;
        self.update_aim_line();
    }

    fn update_aim_line(&mut self) {
        let start = self.geometry.shooter_origin();
        let end = start + direction_from_degrees(self.shooter.angle) * self.geometry.height;
        self.aim_line = AimLine { start, end };
    }
}
