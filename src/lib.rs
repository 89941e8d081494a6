//! Deeper - dungeon-crawl game core.
//!
//! Tile composition, fog-of-war visibility, stochastic content
//! distribution and entity AI/combat for a top-down action game. The
//! room generator, rendering, physics and input capture are external
//! collaborators: the generator is consumed behind a trait, collisions
//! arrive as a pre-computed event stream, and frame updates return event
//! enums for the embedding UI.

pub mod chest;
pub mod combat_logic;
pub mod compositor;
pub mod constants;
pub mod content;
pub mod dungeon;
pub mod enemy;
pub mod game;
pub mod input;
pub mod level;
pub mod player;
pub mod projectile;
pub mod scheduler;
pub mod tilemap;
pub mod tiles;
pub mod vec2;
pub mod visibility;

pub use combat_logic::{CollisionEvent, GameEvent};
pub use dungeon::{Dungeon, DungeonGenerator, GeneratorConfig, GeometryError, Room, RoomId};
pub use game::Game;
pub use input::InputState;
pub use level::Level;
pub use tiles::TilePalette;
