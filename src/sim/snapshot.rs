//! Read-only frame data for renderers

use glam::Vec2;
use serde::Serialize;

use super::board::BubbleColor;
use super::hex::Geometry;
use super::projectile::Projectile;
use super::state::{AimLine, GamePhase, Shooter};

/// A placed bubble with its pixel center resolved
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderBubble {
    pub id: u32,
    pub color: BubbleColor,
    pub row: i32,
    pub col: i32,
    pub center: Vec2,
}

/// Everything a renderer needs for one frame. Borrowed from `GameState`,
/// so it cannot be used to mutate it.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub bubbles: Vec<RenderBubble>,
    pub shooter: &'a Shooter,
    pub projectile: Option<&'a Projectile>,
    pub aim_line: &'a AimLine,
    pub score: u64,
    pub phase: GamePhase,
    pub bubble_radius: f32,
    /// For `cell_center` lookups
    pub geometry: Geometry,
}
