//! The running game: the current level plus the two counters that
//! survive level transitions.

use crate::combat_logic::{CollisionEvent, GameEvent};
use crate::constants::STARTING_LIVES;
use crate::dungeon::{DungeonGenerator, GeneratorConfig, GeometryError};
use crate::input::InputState;
use crate::level::Level;
use crate::tiles::TilePalette;
use rand::Rng;

pub struct Game<G: DungeonGenerator> {
    generator: G,
    config: GeneratorConfig,
    palette: TilePalette,
    pub level: Level,
    /// Remaining lives; persists across level regenerations.
    pub lives: u32,
    /// 1-based level counter; persists across level regenerations.
    pub depth: u32,
}

impl<G: DungeonGenerator> Game<G> {
    pub fn new(
        mut generator: G,
        config: GeneratorConfig,
        palette: TilePalette,
        rng: &mut impl Rng,
    ) -> Result<Self, GeometryError> {
        let level = Level::generate(&mut generator, &config, &palette, 1, rng)?;
        Ok(Self {
            generator,
            config,
            palette,
            level,
            lives: STARTING_LIVES,
            depth: 1,
        })
    }

    /// Advances one frame. When the current level's exit fade completes,
    /// the level is torn down and regenerated in place: every entity (and
    /// its pending tasks) is dropped with it, while the life and level
    /// counters carry over.
    pub fn update(
        &mut self,
        dt: f64,
        input: &InputState,
        collisions: &[CollisionEvent],
        rng: &mut impl Rng,
    ) -> Result<Vec<GameEvent>, GeometryError> {
        let events = self
            .level
            .update(dt, input, collisions, &mut self.lives, rng);

        if self.level.is_completed() {
            self.advance(rng)?;
        }

        Ok(events)
    }

    fn advance(&mut self, rng: &mut impl Rng) -> Result<(), GeometryError> {
        self.depth += 1;
        self.level = Level::generate(
            &mut self.generator,
            &self.config,
            &self.palette,
            self.depth,
            rng,
        )?;
        Ok(())
    }
}
