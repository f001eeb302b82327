//! Scrolling obstacles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;

/// A ground obstacle scrolling right to left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per tick; the session overwrites this before every update
    pub speed: f32,
}

impl Obstacle {
    pub fn new(id: u32, pos: Vec2, size: f32, speed: f32) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(size),
            speed,
        }
    }

    /// Scroll left by one tick
    pub fn update(&mut self) {
        self.pos.x -= self.speed;
    }

    /// Past the left edge by more than `threshold`
    pub fn is_offscreen(&self, threshold: f32) -> bool {
        self.pos.x < threshold
    }

    pub fn bounding_circle(&self) -> Circle {
        Circle::for_box(self.pos, self.size)
    }
}
