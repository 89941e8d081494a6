//! One level of the dungeon: generated layers, visibility and every
//! entity the level owns. All of it is dropped on level transition; only
//! the running life and level counters survive (see `game`).

use crate::chest::{Chest, ChestState};
use crate::combat_logic::{resolve_collisions, CollisionEvent, GameEvent};
use crate::compositor::{compose, MapLayers};
use crate::constants::{
    CHEST_REVEAL_SECONDS, CHEST_TARGET_RADIUS, ENEMY_REDIRECT_INTERVAL, LEVEL_FADE_SECONDS,
};
use crate::content::{assign_roles, distribute, PlacementPlan, RoomRole};
use crate::dungeon::{Dungeon, DungeonGenerator, GeneratorConfig, GeometryError};
use crate::enemy::Enemy;
use crate::input::InputState;
use crate::player::Player;
use crate::projectile::KnifePool;
use crate::scheduler::{Scheduler, Task};
use crate::tiles::TilePalette;
use crate::vec2::{tile_to_world, world_to_tile};
use crate::visibility::VisibilityManager;
use rand::Rng;

pub struct Level {
    pub dungeon: Dungeon,
    pub layers: MapLayers,
    pub visibility: VisibilityManager,
    pub roles: Vec<RoomRole>,
    pub plan: PlacementPlan,

    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub knives: KnifePool,
    pub chests: Vec<Chest>,
    pub scheduler: Scheduler,

    /// Which level this is, for the completion event.
    pub depth: u32,
    stairs_armed: bool,
    completed: bool,
}

impl Level {
    /// Runs the whole generation pipeline: room graph from the external
    /// generator, tile composition, role partition, content distribution,
    /// entity spawning and initial visibility.
    pub fn generate<G: DungeonGenerator>(
        generator: &mut G,
        config: &GeneratorConfig,
        palette: &TilePalette,
        depth: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, GeometryError> {
        let dungeon = generator.generate(config, rng);
        let mut layers = compose(&dungeon, palette, rng)?;
        let roles = assign_roles(&dungeon, rng);
        let plan = distribute(&dungeon, &roles, &mut layers, palette, rng);

        let start = &dungeon.rooms[0];
        let player = Player::new(tile_to_world(start.center_x(), start.center_y()));

        let enemies: Vec<Enemy> = plan
            .enemies
            .iter()
            .map(|&(x, y)| Enemy::new(tile_to_world(x, y)))
            .collect();
        let chests: Vec<Chest> = plan
            .chests
            .iter()
            .map(|&(x, y)| Chest::new(tile_to_world(x, y)))
            .collect();

        let mut scheduler = Scheduler::new();
        for id in 0..enemies.len() {
            let _ = scheduler.every(ENEMY_REDIRECT_INTERVAL, Task::EnemyRedirect(id));
        }

        let mut visibility = VisibilityManager::new(&dungeon);
        visibility.set_active_room(&dungeon, Some(0));

        Ok(Self {
            dungeon,
            layers,
            visibility,
            roles,
            plan,
            player,
            enemies,
            knives: KnifePool::new(),
            chests,
            scheduler,
            depth,
            stairs_armed: true,
            completed: false,
        })
    }

    /// Whether the exit fade has finished and the level should be torn
    /// down and regenerated.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// One fixed-step frame: player, then projectiles and AI, then
    /// collision resolution against the freshly updated positions, then
    /// the stairs trigger, chest proximity, visibility and finally due
    /// scheduled tasks.
    pub fn update(
        &mut self,
        dt: f64,
        input: &InputState,
        collisions: &[CollisionEvent],
        lives: &mut u32,
        rng: &mut impl Rng,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.player.apply_input(input);
        if input.action_pressed && self.player.can_move() {
            self.handle_action(&mut events);
        }
        self.player.update(dt);

        self.knives.update(dt);
        for enemy in &mut self.enemies {
            enemy.update(dt);
        }

        resolve_collisions(self, collisions, lives, rng, &mut events);

        self.check_stairs();
        self.update_chest_target();
        self.update_visibility();

        for task in self.scheduler.tick(dt) {
            self.apply_task(task, rng, &mut events);
        }

        events
    }

    /// The action key opens the targeted chest when there is one,
    /// otherwise throws a knife along the player's facing.
    fn handle_action(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(index) = self.player.active_chest {
            let opened = self
                .chests
                .get_mut(index)
                .map(|chest| chest.open())
                .unwrap_or(false);
            if opened {
                self.player.active_chest = None;
                let _ = self
                    .scheduler
                    .after(CHEST_REVEAL_SECONDS, Task::ChestReveal(index));
                events.push(GameEvent::ChestOpened { chest: index });
            }
            return;
        }

        // Pool exhaustion silently drops the throw
        let _ = self
            .knives
            .throw(self.player.pos, self.player.throw_direction);
    }

    /// The stairs tile is a one-time trigger: disarmed on first contact,
    /// then the player freezes while the fade-out runs.
    fn check_stairs(&mut self) {
        if !self.stairs_armed {
            return;
        }
        let (tx, ty) = world_to_tile(self.player.pos);
        if tx >= 0 && ty >= 0 && (tx as u32, ty as u32) == self.plan.stairs {
            self.stairs_armed = false;
            self.player.freeze();
            let _ = self.scheduler.after(LEVEL_FADE_SECONDS, Task::LevelFade);
        }
    }

    /// A targeted chest reverts to closed once the player wanders out of
    /// its interaction radius without opening it.
    fn update_chest_target(&mut self) {
        if let Some(index) = self.player.active_chest {
            let out_of_range = match self.chests.get(index) {
                Some(chest) => {
                    chest.state == ChestState::ActiveTarget
                        && self.player.pos.distance_to(chest.pos) > CHEST_TARGET_RADIUS
                }
                None => true,
            };
            if out_of_range {
                if let Some(chest) = self.chests.get_mut(index) {
                    chest.revert();
                }
                self.player.active_chest = None;
            }
        }
    }

    fn update_visibility(&mut self) {
        let (tx, ty) = world_to_tile(self.player.pos);
        let room = if tx >= 0 && ty >= 0 {
            self.dungeon.room_at(tx as u32, ty as u32)
        } else {
            None
        };
        self.visibility.set_active_room(&self.dungeon, room);
    }

    /// Applies a due task after checking its owner is still live; a task
    /// that outlived its entity is a no-op.
    fn apply_task(&mut self, task: Task, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
        match task {
            Task::EnemyRedirect(id) => {
                if let Some(enemy) = self.enemies.get_mut(id) {
                    if enemy.alive {
                        enemy.redirect(rng);
                    }
                }
            }
            Task::DamageCooldown => {
                self.player.end_damage_cooldown();
            }
            Task::ChestReveal(id) => {
                if let Some(chest) = self.chests.get_mut(id) {
                    if chest.state == ChestState::Opening {
                        chest.finish_reveal();
                    }
                }
            }
            Task::LevelFade => {
                if !self.completed {
                    self.completed = true;
                    events.push(GameEvent::LevelCompleted { level: self.depth });
                }
            }
        }
    }
}
