//! Collision checks for the projectile
//!
//! Everything here is a circle against a vertical wall, the ceiling, or
//! another circle of the same radius.

use glam::Vec2;

use super::board::Board;
use super::hex::Geometry;

/// Result of a bubble contact check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Id of the bubble that was touched
    pub bubble_id: u32,
    /// Center-to-center distance at contact
    pub distance: f32,
}

/// Which side wall, if any, the circle overlaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

impl Wall {
    /// Normal pointing back into the playfield
    pub fn normal(self) -> Vec2 {
        match self {
            Wall::Left => Vec2::X,
            Wall::Right => Vec2::NEG_X,
        }
    }
}

/// Check the circle against the side walls at `x = 0` and `x = width`
pub fn wall_collision(pos: Vec2, radius: f32, width: f32) -> Option<Wall> {
    if pos.x - radius < 0.0 {
        Some(Wall::Left)
    } else if pos.x + radius > width {
        Some(Wall::Right)
    } else {
        None
    }
}

/// Whether the circle pokes above the top of the playfield
#[inline]
pub fn ceiling_collision(pos: Vec2, radius: f32) -> bool {
    pos.y - radius < 0.0
}

/// First placed bubble whose center is closer than two radii
pub fn bubble_contact(pos: Vec2, board: &Board, geometry: &Geometry) -> Option<Contact> {
    let reach = geometry.radius * 2.0;
    board.iter().find_map(|bubble| {
        let distance = pos.distance(geometry.cell_center(bubble.cell));
        (distance < reach).then_some(Contact {
            bubble_id: bubble.id,
            distance,
        })
    })
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::board::BubbleColor;
    use crate::sim::hex::HexCell;

    #[test]
    fn test_reflect_velocity() {
        // Moving right, hits the right wall
        let reflected = reflect_velocity(Vec2::new(100.0, -50.0), Wall::Right.normal());
        assert!((reflected.x - (-100.0)).abs() < 0.001);
        assert!((reflected.y - (-50.0)).abs() < 0.001);
    }

    #[test]
    fn test_wall_collision() {
        assert_eq!(wall_collision(Vec2::new(15.0, 300.0), 20.0, 430.0), Some(Wall::Left));
        assert_eq!(wall_collision(Vec2::new(415.0, 300.0), 20.0, 430.0), Some(Wall::Right));
        assert_eq!(wall_collision(Vec2::new(215.0, 300.0), 20.0, 430.0), None);
        // Touching exactly is not a collision
        assert_eq!(wall_collision(Vec2::new(20.0, 300.0), 20.0, 430.0), None);
    }

    #[test]
    fn test_ceiling_collision() {
        assert!(ceiling_collision(Vec2::new(100.0, 19.0), 20.0));
        assert!(!ceiling_collision(Vec2::new(100.0, 20.0), 20.0));
    }

    #[test]
    fn test_bubble_contact() {
        let geometry = Geometry::new(430.0, 800.0);
        let mut board = Board::new();
        let bubble = board.place(BubbleColor::Red, HexCell::new(0, 0));

        let hit = bubble_contact(Vec2::new(20.0, 55.0), &board, &geometry);
        assert_eq!(hit.map(|c| c.bubble_id), Some(bubble.id));

        let miss = bubble_contact(Vec2::new(20.0, 60.0), &board, &geometry);
        assert!(miss.is_none());
    }
}
