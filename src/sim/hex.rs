//! Offset hexagonal grid geometry
//!
//! Rows run top to bottom; odd rows are shifted right by one bubble radius
//! and hold one fewer column. All conversions are pure and depend only on
//! the viewport size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Logical grid address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCell {
    pub row: i32,
    pub col: i32,
}

impl HexCell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_odd_row(&self) -> bool {
        self.row.rem_euclid(2) == 1
    }

    /// The 6 adjacent cells.
    ///
    /// Even rows reach diagonally to `col - 1` and `col`; odd rows to `col`
    /// and `col + 1`. Cells may lie outside the board.
    pub fn neighbors(&self) -> [HexCell; 6] {
        let (r, c) = (self.row, self.col);
        let diag = if self.is_odd_row() { c + 1 } else { c - 1 };
        [
            HexCell::new(r, c - 1),
            HexCell::new(r, c + 1),
            HexCell::new(r - 1, c),
            HexCell::new(r - 1, diag),
            HexCell::new(r + 1, c),
            HexCell::new(r + 1, diag),
        ]
    }
}

impl std::fmt::Display for HexCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Number of column slots in a row
#[inline]
pub fn row_width(row: i32) -> i32 {
    if row.rem_euclid(2) == 0 {
        BOARD_WIDTH
    } else {
        BOARD_WIDTH - 1
    }
}

/// Pixel-space layout derived from the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    /// Bubble radius
    pub radius: f32,
    /// Distance between row centers
    pub row_spacing: f32,
}

impl Geometry {
    pub fn new(width: f32, height: f32) -> Self {
        let radius = width / (BOARD_WIDTH as f32 * 2.0 + 1.5);
        Self {
            width,
            height,
            radius,
            row_spacing: radius * ROW_SPACING_FACTOR,
        }
    }

    /// Pixel center of a cell
    pub fn cell_center(&self, cell: HexCell) -> Vec2 {
        let r = self.radius;
        let shift = if cell.is_odd_row() { r } else { 0.0 };
        Vec2::new(
            r + cell.col as f32 * 2.0 * r + shift,
            r + cell.row as f32 * self.row_spacing,
        )
    }

    /// Whether a cell is a valid slot on the board
    pub fn contains(&self, cell: HexCell) -> bool {
        cell.row >= 0 && cell.col >= 0 && cell.col < row_width(cell.row)
    }

    /// Arithmetic inverse of `cell_center`, clamped into the board.
    ///
    /// Always returns a valid cell, even for points far outside the grid.
    pub fn nearest_cell(&self, point: Vec2) -> HexCell {
        let r = self.radius;
        let row = ((point.y - r) / self.row_spacing).round().max(0.0) as i32;
        let shift = if row % 2 == 1 { r } else { 0.0 };
        let col = ((point.x - r - shift) / (2.0 * r)).round() as i32;
        HexCell::new(row, col.clamp(0, row_width(row) - 1))
    }

    /// Y past which a placed bubble ends the session
    pub fn kill_line_y(&self) -> f32 {
        self.height - self.radius * KILL_LINE_RADII
    }

    /// Where projectiles launch from
    pub fn shooter_origin(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0,
            self.height - self.radius * SHOOTER_OFFSET_RADII,
        )
    }

    /// Projectile displacement per tick
    pub fn projectile_speed(&self) -> f32 {
        self.height / PROJECTILE_SPEED_DIVISOR
    }
}
