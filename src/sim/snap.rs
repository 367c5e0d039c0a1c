//! Snapping an impact point onto the grid
//!
//! First look for the nearest free cell whose center is within two radii of
//! the impact. When nothing qualifies, invert the cell layout arithmetically
//! and clamp into the board. If that cell is taken, walk outward through
//! neighbors until a free one turns up.

use std::collections::{HashSet, VecDeque};

use glam::Vec2;

use super::board::Board;
use super::hex::{Geometry, HexCell, row_width};

/// Pick the free cell a projectile stopping at `impact` settles into
pub fn snap_cell(geometry: &Geometry, board: &Board, impact: Vec2) -> HexCell {
    if let Some(cell) = nearest_free_cell(geometry, board, impact) {
        return cell;
    }

    let fallback = geometry.nearest_cell(impact);
    if !board.is_occupied(fallback) {
        log::debug!("Snap fell back to arithmetic cell {}", fallback);
        return fallback;
    }
    let cell = free_cell_near(geometry, board, fallback);
    log::debug!("Snap fallback {} occupied, using {}", fallback, cell);
    cell
}

/// Nearest unoccupied cell within `2r` of `impact`, scanning rows
/// `0 ..= floor(y / v) + 1`
fn nearest_free_cell(geometry: &Geometry, board: &Board, impact: Vec2) -> Option<HexCell> {
    let max_row = ((impact.y / geometry.row_spacing).floor() as i32 + 2).max(0);
    let reach = geometry.radius * 2.0;

    let mut best: Option<(HexCell, f32)> = None;
    for row in 0..max_row {
        for col in 0..row_width(row) {
            let cell = HexCell::new(row, col);
            if board.is_occupied(cell) {
                continue;
            }
            let distance = impact.distance(geometry.cell_center(cell));
            if distance < reach && best.is_none_or(|(_, d)| distance < d) {
                best = Some((cell, distance));
            }
        }
    }
    best.map(|(cell, _)| cell)
}

/// Breadth-first walk from `start` over in-bounds cells until a free one
fn free_cell_near(geometry: &Geometry, board: &Board, start: HexCell) -> HexCell {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        if !board.is_occupied(cell) {
            return cell;
        }
        for neighbor in cell.neighbors() {
            if geometry.contains(neighbor) && seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    // Rows are unbounded below, so the walk always finds a gap first
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::board::BubbleColor;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn geometry() -> Geometry {
        Geometry::new(430.0, 800.0)
    }

    #[test]
    fn test_snaps_to_nearest_free_cell() {
        let g = geometry();
        let mut board = Board::new();
        board.place(BubbleColor::Red, HexCell::new(0, 2));
        // Just below and right of (0, 2): (1, 2) at (120, 55) is closest
        let cell = snap_cell(&g, &board, Vec2::new(115.0, 50.0));
        assert_eq!(cell, HexCell::new(1, 2));
    }

    #[test]
    fn test_skips_occupied_cells() {
        let g = geometry();
        let mut board = Board::new();
        board.place(BubbleColor::Red, HexCell::new(0, 2));
        // Dead center on an occupied cell picks a free neighbor instead
        let cell = snap_cell(&g, &board, Vec2::new(100.0, 20.0));
        assert_ne!(cell, HexCell::new(0, 2));
        assert!(!board.is_occupied(cell));
    }

    #[test]
    fn test_fallback_clamps_column() {
        let g = geometry();
        let board = Board::new();
        // Far outside the right wall on an odd row
        let cell = snap_cell(&g, &board, Vec2::new(900.0, 55.0));
        assert_eq!(cell, HexCell::new(1, 8));
    }

    #[test]
    fn test_fallback_avoids_occupied_cell() {
        let g = geometry();
        let mut board = Board::new();
        board.place(BubbleColor::Red, HexCell::new(1, 8));
        let cell = snap_cell(&g, &board, Vec2::new(900.0, 55.0));
        assert!(g.contains(cell));
        assert!(!board.is_occupied(cell));
    }

    proptest! {
        #[test]
        fn prop_snap_always_in_bounds_and_free(
            seed in any::<u64>(),
            x in -100.0f32..600.0,
            y in -100.0f32..900.0,
        ) {
            let g = geometry();
            let mut rng = Pcg32::seed_from_u64(seed);
            let board = Board::generate_initial(&mut rng);
            let cell = snap_cell(&g, &board, Vec2::new(x, y));
            prop_assert!(g.contains(cell));
            prop_assert!(!board.is_occupied(cell));
        }
    }
}
