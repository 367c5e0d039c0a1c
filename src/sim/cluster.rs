//! Match and support detection
//!
//! Both the same-color match and the top-row support check are plain
//! reachability over the hex adjacency graph, so they share one BFS that
//! takes a predicate deciding which neighbors may be entered.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::board::{Board, Bubble};
use super::hex::HexCell;
use crate::consts::*;

/// Ids of every bubble reachable from `seeds` through neighbors accepted by
/// `admit`. Seeds are always included.
pub fn reachable<'a, I, F>(board: &'a Board, seeds: I, mut admit: F) -> HashSet<u32>
where
    I: IntoIterator<Item = &'a Bubble>,
    F: FnMut(&Bubble) -> bool,
{
    let by_cell: HashMap<HexCell, &Bubble> = board.iter().map(|b| (b.cell, b)).collect();

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    for seed in seeds {
        if visited.insert(seed.id) {
            queue.push_back(seed.cell);
        }
    }

    while let Some(cell) = queue.pop_front() {
        for neighbor in cell.neighbors() {
            let Some(bubble) = by_cell.get(&neighbor) else {
                continue;
            };
            if !visited.contains(&bubble.id) && admit(*bubble) {
                visited.insert(bubble.id);
                queue.push_back(bubble.cell);
            }
        }
    }

    visited
}

/// Same-color cluster containing `start`
pub fn find_match(board: &Board, start: &Bubble) -> HashSet<u32> {
    let color = start.color;
    reachable(board, [start], |b| b.color == color)
}

/// Bubbles transitively connected to row 0, regardless of color
pub fn find_anchored(board: &Board) -> HashSet<u32> {
    reachable(board, board.top_row(), |_| true)
}

/// Outcome of resolving a freshly placed bubble
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Bubbles popped by the color match (0 when the cluster was too small)
    pub matched: usize,
    /// Bubbles dropped because they lost support
    pub floating: usize,
}

impl Resolution {
    pub fn points(&self) -> u64 {
        self.matched as u64 * POINTS_PER_MATCH + self.floating as u64 * POINTS_PER_FLOATING
    }

    pub fn popped(&self) -> bool {
        self.matched > 0
    }
}

/// Pop the cluster around `placed` if it is large enough, then drop every
/// bubble left without a path to row 0.
pub fn resolve(board: &mut Board, placed: &Bubble) -> Resolution {
    let cluster = find_match(board, placed);
    if cluster.len() < MIN_CLUSTER_SIZE {
        return Resolution::default();
    }

    let matched = board.remove(&cluster);

    let anchored = find_anchored(board);
    let floating: HashSet<u32> = board
        .iter()
        .map(|b| b.id)
        .filter(|id| !anchored.contains(id))
        .collect();
    let floating = board.remove(&floating);

    log::debug!(
        "Popped {} {:?} bubbles, dropped {}",
        matched,
        placed.color,
        floating
    );

    Resolution { matched, floating }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::board::BubbleColor::{self, *};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn board_of(cells: &[(i32, i32, BubbleColor)]) -> Board {
        let mut board = Board::new();
        for &(row, col, color) in cells {
            board.place(color, HexCell::new(row, col));
        }
        board
    }

    #[test]
    fn test_match_follows_color_only() {
        let board = board_of(&[(0, 0, Red), (0, 1, Red), (0, 2, Blue), (0, 3, Red)]);
        let start = *board.get(HexCell::new(0, 0)).unwrap();
        assert_eq!(find_match(&board, &start).len(), 2);
    }

    #[test]
    fn test_match_crosses_row_parity() {
        // (1, 0) on an odd row touches (0, 0) and (0, 1); (2, 1) touches (1, 0)
        let board = board_of(&[(0, 1, Green), (1, 0, Green), (2, 1, Green)]);
        let start = *board.get(HexCell::new(0, 1)).unwrap();
        assert_eq!(find_match(&board, &start).len(), 3);
    }

    #[test]
    fn test_pair_does_not_pop() {
        let mut board = board_of(&[(0, 0, Red)]);
        let placed = board.place(Red, HexCell::new(0, 1));
        let result = resolve(&mut board, &placed);
        assert_eq!(result, Resolution::default());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_triple_pops() {
        let mut board = board_of(&[(0, 0, Red), (0, 1, Red), (0, 5, Blue)]);
        let placed = board.place(Red, HexCell::new(1, 0));
        let result = resolve(&mut board, &placed);
        assert_eq!(result.matched, 3);
        assert_eq!(result.floating, 0);
        assert_eq!(result.points(), 30);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_pop_drops_unsupported_bubbles() {
        // Blue hangs from the red pair; popping the reds leaves it floating
        let mut board = board_of(&[
            (0, 0, Red),
            (0, 1, Red),
            (1, 0, Blue),
            (2, 0, Yellow),
            (0, 6, Green),
        ]);
        let placed = board.place(Red, HexCell::new(0, 2));
        let result = resolve(&mut board, &placed);
        assert_eq!(result.matched, 3);
        assert_eq!(result.floating, 2);
        assert_eq!(result.points(), 70);
        assert_eq!(board.len(), 1);
        assert!(board.is_occupied(HexCell::new(0, 6)));
    }

    #[test]
    fn test_anchored_ignores_color() {
        let board = board_of(&[(0, 0, Red), (1, 0, Blue), (2, 0, Green), (4, 4, Red)]);
        let anchored = find_anchored(&board);
        assert_eq!(anchored.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_no_floating_bubbles_after_pop(seed in any::<u64>(), row in 5i32..7, col in 0i32..9) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut board = Board::generate_initial(&mut rng);
            let cell = HexCell::new(row, col);
            prop_assume!(!board.is_occupied(cell));
            let placed = board.place(BubbleColor::random(&mut rng), cell);

            let before = board.len();
            let result = resolve(&mut board, &placed);

            prop_assert_eq!(board.len(), before - result.matched - result.floating);
            if result.popped() {
                prop_assert!(result.matched >= MIN_CLUSTER_SIZE);
                let anchored = find_anchored(&board);
                prop_assert_eq!(anchored.len(), board.len());
            }
        }
    }
}
