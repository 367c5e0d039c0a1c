//! Bubble Pop - a hex-grid bubble shooter engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, physics, matching, session)
//! - `settings`: Viewport and seed configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Bubble slots in an even row (odd rows hold one fewer)
    pub const BOARD_WIDTH: i32 = 10;
    /// Nominal board depth in rows
    pub const BOARD_HEIGHT: i32 = 12;
    /// Rows generated when a session starts
    pub const INITIAL_ROWS: i32 = 5;

    /// Shots without a new row before the board advances
    pub const SHOTS_BEFORE_NEW_ROW: u32 = 5;
    /// Minimum same-color cluster that pops
    pub const MIN_CLUSTER_SIZE: usize = 3;

    /// Points per bubble popped in a color match
    pub const POINTS_PER_MATCH: u64 = 10;
    /// Points per bubble dropped after losing support
    pub const POINTS_PER_FLOATING: u64 = 20;

    /// Vertical distance between row centers, in bubble radii
    pub const ROW_SPACING_FACTOR: f32 = 1.75;
    /// Viewport height divided by this gives projectile speed (pixels/tick)
    pub const PROJECTILE_SPEED_DIVISOR: f32 = 45.0;
    /// Kill line sits this many radii above the viewport bottom
    pub const KILL_LINE_RADII: f32 = 3.0;
    /// Shooter sits this many radii above the viewport bottom
    pub const SHOOTER_OFFSET_RADII: f32 = 2.5;

    /// Aim limits in degrees (screen space, y down, so upward is negative)
    pub const AIM_MIN_DEG: f32 = -170.0;
    pub const AIM_MAX_DEG: f32 = -10.0;
    /// Straight up
    pub const AIM_DEFAULT_DEG: f32 = -90.0;
}

/// Clamp an aim angle to the upward arc
#[inline]
pub fn clamp_aim(degrees: f32) -> f32 {
    degrees.clamp(consts::AIM_MIN_DEG, consts::AIM_MAX_DEG)
}

/// Angle in degrees of the vector from `origin` to `target`
#[inline]
pub fn angle_to(origin: Vec2, target: Vec2) -> f32 {
    let d = target - origin;
    d.y.atan2(d.x).to_degrees()
}

/// Unit direction for an angle in degrees
#[inline]
pub fn direction_from_degrees(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}
