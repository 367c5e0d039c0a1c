//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (bubbles by id)
//! - No rendering or platform dependencies

pub mod board;
pub mod cluster;
pub mod collision;
pub mod hex;
pub mod projectile;
pub mod snap;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use board::{Board, Bubble, BubbleColor, pick_color};
pub use cluster::{Resolution, find_anchored, find_match, reachable, resolve};
pub use collision::{
    Contact, Wall, bubble_contact, ceiling_collision, reflect_velocity, wall_collision,
};
pub use hex::{Geometry, HexCell, row_width};
pub use projectile::{Flight, Projectile};
pub use snap::snap_cell;
pub use snapshot::{RenderBubble, Snapshot};
pub use state::{AimLine, GameEvent, GamePhase, GameState, Shooter, TickToken};
pub use tick::{TickInput, settle, step_projectile, tick};
