//! The bubble in flight
//!
//! Integrated with a fixed step of one tick; velocity is in pixels per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::{Board, BubbleColor};
use super::collision::{bubble_contact, ceiling_collision, reflect_velocity, wall_collision};
use super::hex::Geometry;
use crate::direction_from_degrees;

/// A fired bubble
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: BubbleColor,
}

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flight {
    /// Still moving
    Flying,
    /// Stopped at this point and must be snapped to the grid
    Landed(Vec2),
}

impl Projectile {
    /// Launch from `origin` along `degrees` at `speed` pixels per tick
    pub fn launch(origin: Vec2, degrees: f32, speed: f32, color: BubbleColor) -> Self {
        Self {
            pos: origin,
            vel: direction_from_degrees(degrees) * speed,
            color,
        }
    }

    /// Advance one tick.
    ///
    /// Wall hits reflect velocity without pulling the position back inside,
    /// so the bubble may overlap a wall by up to one step.
    pub fn step(&mut self, geometry: &Geometry, board: &Board) -> Flight {
        let r = geometry.radius;
        self.pos += self.vel;

        if let Some(wall) = wall_collision(self.pos, r, geometry.width) {
            self.vel = reflect_velocity(self.vel, wall.normal());
        }

        if ceiling_collision(self.pos, r) {
            self.pos.y = r;
            return Flight::Landed(self.pos);
        }

        if bubble_contact(self.pos, board, geometry).is_some() {
            return Flight::Landed(self.pos);
        }

        Flight::Flying
    }
}
