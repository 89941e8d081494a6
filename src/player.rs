//! Player movement and the damage/knockback state machine.

use crate::constants::{KNOCKBACK_SPEED, PLAYER_SPEED};
use crate::input::InputState;
use crate::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Normal,
    /// Knocked back and invulnerable until the cooldown task fires.
    Damaged,
    /// Terminal: input and further damage are ignored for good.
    Dead,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub state: PlayerState,
    /// Last nonzero movement direction, used as the knife throw vector.
    /// Starts facing right for a player who has never moved.
    pub throw_direction: Vec2,
    /// Set when the stairs are reached; suppresses movement while the
    /// level fades out.
    pub frozen: bool,
    /// Index of the chest currently targeted for opening, if any.
    pub active_chest: Option<usize>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            state: PlayerState::Normal,
            throw_direction: Vec2::new(1.0, 0.0),
            frozen: false,
            active_chest: None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.state == PlayerState::Dead
    }

    /// Whether the player currently accepts movement input.
    pub fn can_move(&self) -> bool {
        self.state == PlayerState::Normal && !self.frozen
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
        self.vel = Vec2::ZERO;
    }

    /// Converts held movement keys into velocity, normalized so diagonals
    /// are no faster than a straight run. Ignored while damaged, dead or
    /// frozen (knockback velocity persists through the damage window).
    pub fn apply_input(&mut self, input: &InputState) {
        if !self.can_move() {
            if self.state == PlayerState::Dead || self.frozen {
                self.vel = Vec2::ZERO;
            }
            return;
        }

        let (ax, ay) = input.axes();
        let dir = Vec2::new(ax, ay).normalized();
        self.vel = dir * PLAYER_SPEED;
        if !dir.is_zero() {
            self.throw_direction = dir;
        }
    }

    /// Integrates one simulation step.
    pub fn update(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }

    /// Enters the damaged state with a knockback away from the enemy.
    /// `lives_left` decides whether the cooldown ends in Normal or Dead.
    pub fn handle_damage(&mut self, enemy_pos: Vec2, lives_left: u32) {
        self.vel = (self.pos - enemy_pos).normalized() * KNOCKBACK_SPEED;
        self.state = if lives_left == 0 {
            PlayerState::Dead
        } else {
            PlayerState::Damaged
        };
    }

    /// Fired by the damage-cooldown task. Dead stays dead; otherwise the
    /// knockback ends and control returns.
    pub fn end_damage_cooldown(&mut self) {
        self.vel = Vec2::ZERO;
        if self.state == PlayerState::Damaged {
            self.state = PlayerState::Normal;
        }
    }
}
