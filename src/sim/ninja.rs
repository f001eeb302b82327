//! The player character

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use super::obstacle::Obstacle;
use crate::consts::*;

/// Vertical physics parameters, per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpPhysics {
    pub gravity: f32,
    pub jump_strength: f32,
    pub ground_y: f32,
}

impl Default for JumpPhysics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            ground_y: GROUND_Y,
        }
    }
}

/// The ninja: a square body that falls, lands and jumps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ninja {
    /// Bottom-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity_y: f32,
    pub physics: JumpPhysics,
}

impl Default for Ninja {
    fn default() -> Self {
        Self::new(NINJA_START, NINJA_SIZE, JumpPhysics::default())
    }
}

impl Ninja {
    pub fn new(start: Vec2, size: f32, physics: JumpPhysics) -> Self {
        Self {
            pos: start,
            size: Vec2::splat(size),
            velocity_y: 0.0,
            physics,
        }
    }

    /// Put the ninja back at `start`, at rest
    pub fn reset(&mut self, start: Vec2) {
        self.pos = start;
        self.velocity_y = 0.0;
    }

    /// On (or below) the ground line
    pub fn is_grounded(&self) -> bool {
        self.pos.y <= self.physics.ground_y
    }

    /// Apply the jump impulse if grounded; returns whether it applied
    pub fn jump(&mut self) -> bool {
        if self.is_grounded() {
            self.velocity_y = self.physics.jump_strength;
            true
        } else {
            false
        }
    }

    /// One physics tick: integrate, then clamp to the ground
    pub fn update(&mut self) {
        self.velocity_y += self.physics.gravity;
        self.pos.y += self.velocity_y;

        if self.pos.y < self.physics.ground_y {
            self.pos.y = self.physics.ground_y;
            self.velocity_y = 0.0;
        }
    }

    pub fn bounding_circle(&self) -> Circle {
        Circle::for_box(self.pos, self.size)
    }

    pub fn collides_with(&self, obstacle: &Obstacle) -> bool {
        self.bounding_circle().overlaps(&obstacle.bounding_circle())
    }
}
