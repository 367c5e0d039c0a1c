//! The bubble collection
//!
//! Bubbles are stored in a flat list ordered by id. The board is small
//! (a dozen rows of ten), so lookups scan linearly.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::hex::{Geometry, HexCell, row_width};
use crate::consts::*;

/// Bubble palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BubbleColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl BubbleColor {
    pub const ALL: [BubbleColor; 6] = [
        BubbleColor::Red,
        BubbleColor::Green,
        BubbleColor::Blue,
        BubbleColor::Yellow,
        BubbleColor::Purple,
        BubbleColor::Orange,
    ];

    /// Uniform draw from the full palette
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Hex color string for renderers
    pub fn as_hex(&self) -> &'static str {
        match self {
            BubbleColor::Red => "#ef4444",
            BubbleColor::Green => "#22c55e",
            BubbleColor::Blue => "#3b82f6",
            BubbleColor::Yellow => "#eab308",
            BubbleColor::Purple => "#a855f7",
            BubbleColor::Orange => "#f97316",
        }
    }
}

/// Draw a color uniformly from `existing`, or from the full palette when
/// `existing` is empty.
///
/// `existing` is expected to hold distinct colors.
pub fn pick_color<R: Rng + ?Sized>(existing: &[BubbleColor], rng: &mut R) -> BubbleColor {
    if existing.is_empty() {
        BubbleColor::random(rng)
    } else {
        existing[rng.random_range(0..existing.len())]
    }
}

/// A placed bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    pub color: BubbleColor,
    pub cell: HexCell,
}

/// All placed bubbles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    bubbles: Vec<Bubble>,
    next_id: u32,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the first `INITIAL_ROWS` rows with random colors, ids from 0
    pub fn generate_initial<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::new();
        for row in 0..INITIAL_ROWS {
            for col in 0..row_width(row) {
                board.place(BubbleColor::random(rng), HexCell::new(row, col));
            }
        }
        board
    }

    /// Allocate an id and add a bubble at `cell`.
    ///
    /// The caller guarantees the cell is free.
    pub fn place(&mut self, color: BubbleColor, cell: HexCell) -> Bubble {
        debug_assert!(!self.is_occupied(cell), "cell {cell} already occupied");
        let bubble = Bubble {
            id: self.next_id,
            color,
            cell,
        };
        self.next_id += 1;
        self.bubbles.push(bubble);
        bubble
    }

    /// Remove every bubble whose id is in `ids`, returning how many went
    pub fn remove(&mut self, ids: &HashSet<u32>) -> usize {
        let before = self.bubbles.len();
        self.bubbles.retain(|b| !ids.contains(&b.id));
        before - self.bubbles.len()
    }

    /// Push every bubble down one row and add a full random row 0.
    ///
    /// A bubble in the last slot of an even row has no slot on the narrower
    /// odd row below, so it is dropped by the shift.
    ///
    /// Returns true when a bubble now sits on or past the kill line.
    pub fn insert_row<R: Rng + ?Sized>(&mut self, rng: &mut R, geometry: &Geometry) -> bool {
        for bubble in &mut self.bubbles {
            bubble.cell.row += 1;
        }
        let before = self.bubbles.len();
        self.bubbles.retain(|b| b.cell.col < row_width(b.cell.row));
        if self.bubbles.len() < before {
            log::debug!(
                "Row shift dropped {} overhanging bubbles",
                before - self.bubbles.len()
            );
        }
        for col in 0..BOARD_WIDTH {
            self.place(BubbleColor::random(rng), HexCell::new(0, col));
        }
        self.breaches_kill_line(geometry)
    }

    pub fn get(&self, cell: HexCell) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.cell == cell)
    }

    pub fn is_occupied(&self, cell: HexCell) -> bool {
        self.get(cell).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    /// Bubbles in row 0, which are always anchored
    pub fn top_row(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter().filter(|b| b.cell.row == 0)
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    /// Distinct colors on the board, in palette order
    pub fn colors(&self) -> Vec<BubbleColor> {
        BubbleColor::ALL
            .into_iter()
            .filter(|c| self.bubbles.iter().any(|b| b.color == *c))
            .collect()
    }

    /// Whether any bubble center has reached the kill line
    pub fn breaches_kill_line(&self, geometry: &Geometry) -> bool {
        let kill_y = geometry.kill_line_y();
        self.bubbles
            .iter()
            .any(|b| geometry.cell_center(b.cell).y >= kill_y)
    }
}
