//! Thrown knives, recycled through a fixed-capacity pool.
//!
//! A full pool silently drops the throw; a missed attack is an accepted
//! degradation, not an error.

use crate::constants::{KNIFE_POOL_CAPACITY, KNIFE_SPAWN_OFFSET, KNIFE_SPEED};
use crate::vec2::Vec2;

#[derive(Debug, Clone)]
pub struct Knife {
    pub pos: Vec2,
    pub vel: Vec2,
    pub active: bool,
}

impl Knife {
    fn idle() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            active: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KnifePool {
    knives: Vec<Knife>,
}

impl Default for KnifePool {
    fn default() -> Self {
        Self::new()
    }
}

impl KnifePool {
    pub fn new() -> Self {
        Self {
            knives: (0..KNIFE_POOL_CAPACITY).map(|_| Knife::idle()).collect(),
        }
    }

    /// Launches a knife from an idle pool slot. Returns false (and does
    /// nothing) when all slots are in flight.
    pub fn throw(&mut self, from: Vec2, direction: Vec2) -> bool {
        let dir = direction.normalized();
        let dir = if dir.is_zero() {
            Vec2::new(1.0, 0.0)
        } else {
            dir
        };
        match self.knives.iter_mut().find(|k| !k.active) {
            Some(knife) => {
                knife.pos = from + dir * KNIFE_SPAWN_OFFSET;
                knife.vel = dir * KNIFE_SPEED;
                knife.active = true;
                true
            }
            None => false,
        }
    }

    /// Returns the knife to the pool. Already-idle slots are left alone,
    /// which caps collision resolution at once per knife per frame.
    pub fn deactivate(&mut self, index: usize) {
        if let Some(knife) = self.knives.get_mut(index) {
            knife.active = false;
            knife.vel = Vec2::ZERO;
        }
    }

    pub fn update(&mut self, dt: f64) {
        for knife in &mut self.knives {
            if knife.active {
                knife.pos += knife.vel * dt;
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&Knife> {
        self.knives.get(index)
    }

    pub fn active_count(&self) -> usize {
        self.knives.iter().filter(|k| k.active).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Knife> {
        self.knives.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_capacity_is_hard_limit() {
        let mut pool = KnifePool::new();
        for _ in 0..KNIFE_POOL_CAPACITY {
            assert!(pool.throw(Vec2::ZERO, Vec2::new(1.0, 0.0)));
        }
        // Sixth throw in immediate succession is dropped without error
        assert!(!pool.throw(Vec2::ZERO, Vec2::new(1.0, 0.0)));
        assert_eq!(pool.active_count(), KNIFE_POOL_CAPACITY);
    }

    #[test]
    fn test_deactivated_slot_is_reusable() {
        let mut pool = KnifePool::new();
        for _ in 0..KNIFE_POOL_CAPACITY {
            pool.throw(Vec2::ZERO, Vec2::new(1.0, 0.0));
        }
        pool.deactivate(2);
        assert_eq!(pool.active_count(), KNIFE_POOL_CAPACITY - 1);
        assert!(pool.throw(Vec2::ZERO, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_throw_offsets_spawn_along_direction() {
        let mut pool = KnifePool::new();
        pool.throw(Vec2::new(10.0, 20.0), Vec2::new(0.0, 3.0));
        let knife = pool.get(0).unwrap();
        assert_eq!(knife.pos, Vec2::new(10.0, 20.0 + KNIFE_SPAWN_OFFSET));
        assert_eq!(knife.vel, Vec2::new(0.0, KNIFE_SPEED));
    }

    #[test]
    fn test_only_active_knives_move() {
        let mut pool = KnifePool::new();
        pool.throw(Vec2::ZERO, Vec2::new(1.0, 0.0));
        pool.update(0.1);
        assert!(pool.get(0).unwrap().pos.x > 0.0);
        assert_eq!(pool.get(1).unwrap().pos, Vec2::ZERO);
    }
}
