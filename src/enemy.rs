//! Enemy wander behavior: four axis-aligned directions, redirected on a
//! timer and on obstacle collisions, never repeating the current one.

use crate::constants::ENEMY_SPEED;
use crate::vec2::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Constant wander velocity for this direction.
    pub fn velocity(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -ENEMY_SPEED),
            Direction::Down => Vec2::new(0.0, ENEMY_SPEED),
            Direction::Left => Vec2::new(-ENEMY_SPEED, 0.0),
            Direction::Right => Vec2::new(ENEMY_SPEED, 0.0),
        }
    }
}

/// Uniform direction draw that never returns `exclude`.
pub fn random_direction(exclude: Direction, rng: &mut impl Rng) -> Direction {
    loop {
        let dir = match rng.gen_range(0..4) {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Right,
        };
        if dir != exclude {
            return dir;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub direction: Direction,
    /// Cleared when a knife hits; a dead enemy stops moving and ignores
    /// redirect tasks.
    pub alive: bool,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            direction: Direction::Right,
            alive: true,
        }
    }

    /// Picks a new wander direction different from the current one.
    pub fn redirect(&mut self, rng: &mut impl Rng) {
        self.direction = random_direction(self.direction, rng);
    }

    pub fn deactivate(&mut self) {
        self.alive = false;
    }

    /// Advances the wander by one simulation step.
    pub fn update(&mut self, dt: f64) {
        if self.alive {
            self.pos += self.direction.velocity() * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_redirect_never_repeats_current_direction() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut enemy = Enemy::new(Vec2::ZERO);
        for _ in 0..1000 {
            let before = enemy.direction;
            enemy.redirect(&mut rng);
            assert_ne!(enemy.direction, before);
        }
    }

    #[test]
    fn test_initial_direction_is_right() {
        let enemy = Enemy::new(Vec2::ZERO);
        assert_eq!(enemy.direction, Direction::Right);
    }

    #[test]
    fn test_update_moves_along_axis() {
        let mut enemy = Enemy::new(Vec2::ZERO);
        enemy.update(1.0);
        assert_eq!(enemy.pos, Vec2::new(ENEMY_SPEED, 0.0));

        enemy.direction = Direction::Up;
        enemy.update(0.5);
        assert_eq!(enemy.pos, Vec2::new(ENEMY_SPEED, -ENEMY_SPEED * 0.5));
    }

    #[test]
    fn test_dead_enemy_does_not_move() {
        let mut enemy = Enemy::new(Vec2::ZERO);
        enemy.deactivate();
        enemy.update(1.0);
        assert_eq!(enemy.pos, Vec2::ZERO);
    }
}
