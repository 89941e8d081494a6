//! Collision resolution: the combat transitions between entities.
//!
//! The engine's broad/narrow phase is external; this module consumes the
//! per-frame stream of "A touched B" events against positions already
//! updated this frame, applies the documented state transitions, and
//! reports what happened as [`GameEvent`]s for the embedding layer.

use crate::constants::DAMAGE_COOLDOWN_SECONDS;
use crate::level::Level;
use crate::scheduler::Task;
use rand::Rng;

/// Transient pairwise collision, consumed once and discarded. Entities
/// are referenced by their index within the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    EnemyPlayer { enemy: usize },
    ProjectileEnemy { knife: usize, enemy: usize },
    ProjectileObstacle { knife: usize },
    EnemyObstacle { enemy: usize },
    PlayerChest { chest: usize },
}

/// One-way notifications from the combat layer to the embedding UI.
/// Returned from the frame update, never buffered across levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The HUD heart-display notification.
    LifeChanged { old: u32, new: u32 },
    PlayerDied,
    EnemySlain { enemy: usize },
    ChestOpened { chest: usize },
    LevelCompleted { level: u32 },
}

/// Applies every collision in stream order. A knife deactivates on its
/// first resolved collision, so a knife reported against both an obstacle
/// and an enemy in one frame resolves only the earlier event.
pub fn resolve_collisions(
    level: &mut Level,
    collisions: &[CollisionEvent],
    lives: &mut u32,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    for &collision in collisions {
        match collision {
            CollisionEvent::EnemyPlayer { enemy } => {
                enemy_hits_player(level, enemy, lives, events);
            }
            CollisionEvent::ProjectileEnemy { knife, enemy } => {
                let hit = level.knives.get(knife).map(|k| k.active).unwrap_or(false);
                if hit {
                    level.knives.deactivate(knife);
                    if let Some(target) = level.enemies.get_mut(enemy) {
                        if target.alive {
                            target.deactivate();
                            events.push(GameEvent::EnemySlain { enemy });
                        }
                    }
                }
            }
            CollisionEvent::ProjectileObstacle { knife } => {
                level.knives.deactivate(knife);
            }
            CollisionEvent::EnemyObstacle { enemy } => {
                if let Some(target) = level.enemies.get_mut(enemy) {
                    if target.alive {
                        target.redirect(rng);
                    }
                }
            }
            CollisionEvent::PlayerChest { chest } => {
                if level.player.active_chest.is_none() {
                    if let Some(target) = level.chests.get_mut(chest) {
                        if target.is_targetable() {
                            target.set_targeted();
                            level.player.active_chest = Some(chest);
                        }
                    }
                }
            }
        }
    }
}

fn enemy_hits_player(level: &mut Level, enemy: usize, lives: &mut u32, events: &mut Vec<GameEvent>) {
    if !level.player.can_move() {
        // Damaged, dead or frozen: contact does not stack
        return;
    }
    let enemy_pos = match level.enemies.get(enemy) {
        Some(e) if e.alive => e.pos,
        _ => return,
    };

    let old = *lives;
    *lives = lives.saturating_sub(1);
    level.player.handle_damage(enemy_pos, *lives);
    level
        .scheduler
        .after(DAMAGE_COOLDOWN_SECONDS, Task::DamageCooldown);

    events.push(GameEvent::LifeChanged {
        old,
        new: *lives,
    });
    if *lives == 0 {
        events.push(GameEvent::PlayerDied);
    }
}
