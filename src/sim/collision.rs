//! Collision detection
//!
//! Bodies are approximated as circles inscribed in their width: centre at the
//! box centre, radius half the width. Boxes are only used for hit-testing the
//! restart control.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::box_center;

/// A circle used for overlap tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Bounding circle of a box anchored at its bottom-left corner
    pub fn for_box(pos: Vec2, size: Vec2) -> Self {
        Self {
            center: box_center(pos, size),
            radius: size.x / 2.0,
        }
    }

    /// Strict overlap: touching circles do not collide
    pub fn overlaps(&self, other: &Circle) -> bool {
        circles_overlap(self.center, self.radius, other.center, other.radius)
    }
}

/// True iff the distance between centres is strictly less than the radii sum
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Axis-aligned rectangle (bottom-left anchor)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Inclusive point test on all four edges
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_hit() {
        // Ninja centre (85,155) r35 vs obstacle centre (85,120) r20: distance 35 < 55
        assert!(circles_overlap(
            Vec2::new(85.0, 155.0),
            35.0,
            Vec2::new(85.0, 120.0),
            20.0
        ));
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let a = Circle {
            center: Vec2::new(0.0, 0.0),
            radius: 35.0,
        };
        let b = Circle {
            center: Vec2::new(55.0, 0.0),
            radius: 20.0,
        };
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_for_box_uses_width() {
        let circle = Circle::for_box(Vec2::new(50.0, 120.0), Vec2::splat(70.0));
        assert_eq!(circle.center, Vec2::new(85.0, 155.0));
        assert_eq!(circle.radius, 35.0);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(Vec2::new(350.0, 230.0), Vec2::new(200.0, 50.0));
        assert!(rect.contains(Vec2::new(350.0, 230.0)));
        assert!(rect.contains(Vec2::new(550.0, 280.0)));
        assert!(rect.contains(Vec2::new(400.0, 250.0)));
        assert!(!rect.contains(Vec2::new(349.9, 250.0)));
        assert!(!rect.contains(Vec2::new(400.0, 280.1)));
    }

    #[test]
    fn test_nan_never_overlaps() {
        assert!(!circles_overlap(Vec2::NAN, 35.0, Vec2::ZERO, 20.0));
    }
}
