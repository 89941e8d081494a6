//! Minimal 2D vector math and grid/world coordinate conversion.

use crate::constants::TILE_SIZE;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// A 2D vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns the unit vector, or zero for the zero vector.
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Converts a tile coordinate to the world position of the tile's origin.
pub fn tile_to_world(tx: u32, ty: u32) -> Vec2 {
    Vec2::new(tx as f64 * TILE_SIZE, ty as f64 * TILE_SIZE)
}

/// Converts a world position to the containing tile coordinate.
/// Positions left/above the grid map to negative tiles.
pub fn world_to_tile(pos: Vec2) -> (i64, i64) {
    (
        (pos.x / TILE_SIZE).floor() as i64,
        (pos.y / TILE_SIZE).floor() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_unit_length() {
        let v = Vec2::new(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalized_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn test_tile_world_round_trip() {
        let pos = tile_to_world(5, 7);
        assert_eq!(world_to_tile(pos), (5, 7));
        // Anywhere inside the tile maps back to the same coordinate
        assert_eq!(world_to_tile(pos + Vec2::new(47.9, 47.9)), (5, 7));
    }

    #[test]
    fn test_world_to_tile_negative() {
        assert_eq!(world_to_tile(Vec2::new(-1.0, -1.0)), (-1, -1));
    }
}
