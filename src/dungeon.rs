//! Room geometry consumed from the external dungeon generator.
//!
//! The generator itself is a black box behind [`DungeonGenerator`]; this
//! module only defines the room rectangles and door locations everything
//! downstream (tile composition, visibility, content placement) reads.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a room within [`Dungeon::rooms`].
pub type RoomId = usize;

/// A door location relative to its room's origin, always on the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub x: u32,
    pub y: u32,
}

/// An axis-aligned rectangular room in grid cells. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    pub doors: Vec<Door>,
}

impl Room {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            doors: Vec::new(),
        }
    }

    pub fn with_doors(mut self, doors: Vec<Door>) -> Self {
        self.doors = doors;
        self
    }

    pub fn right(&self) -> u32 {
        self.left + self.width - 1
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height - 1
    }

    pub fn center_x(&self) -> u32 {
        self.left + self.width / 2
    }

    pub fn center_y(&self) -> u32 {
        self.top + self.height / 2
    }

    /// Whether the tile coordinate falls inside the room, border included.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Whether the tile coordinate falls inside the rectangle expanded by
    /// one cell in every direction. Used for door adjacency: a door tile of
    /// one room lands on or immediately beside its neighbor's border.
    pub fn touches(&self, x: u32, y: u32) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.left as i64 - 1
            && x <= self.right() as i64 + 1
            && y >= self.top as i64 - 1
            && y <= self.bottom() as i64 + 1
    }

    /// Absolute grid coordinate of a door.
    pub fn door_tile(&self, door: Door) -> (u32, u32) {
        (self.left + door.x, self.top + door.y)
    }

    /// Clamps a (possibly out-of-room) coordinate to the room interior,
    /// the area excluding the one-cell border walls.
    pub fn clamp_to_interior(&self, x: i64, y: i64) -> (u32, u32) {
        let cx = x.clamp(self.left as i64 + 1, self.right() as i64 - 1);
        let cy = y.clamp(self.top as i64 + 1, self.bottom() as i64 - 1);
        (cx as u32, cy as u32)
    }

    /// Rooms need a one-cell border plus at least one interior cell.
    pub fn validate(&self, id: RoomId) -> Result<(), GeometryError> {
        if self.width < 3 || self.height < 3 {
            return Err(GeometryError::DegenerateRoom {
                room: id,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// The abstract room graph produced by the external generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dungeon {
    pub width: u32,
    pub height: u32,
    pub rooms: Vec<Room>,
}

impl Dungeon {
    /// Maps a tile coordinate to the room containing it, if any.
    pub fn room_at(&self, x: u32, y: u32) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.contains(x, y))
    }

    /// Fatal precondition check: every room must have a positive interior
    /// and fit inside the grid. No partial recovery is attempted.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.rooms.is_empty() {
            return Err(GeometryError::NoRooms);
        }
        for (id, room) in self.rooms.iter().enumerate() {
            room.validate(id)?;
            if room.right() >= self.width || room.bottom() >= self.height {
                return Err(GeometryError::OutOfBounds { room: id });
            }
        }
        Ok(())
    }
}

/// Malformed room geometry. Construction-time failure, never recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    NoRooms,
    DegenerateRoom { room: RoomId, width: u32, height: u32 },
    OutOfBounds { room: RoomId },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NoRooms => write!(f, "dungeon has no rooms"),
            GeometryError::DegenerateRoom { room, width, height } => write!(
                f,
                "room {} has degenerate interior ({}x{}, minimum 3x3)",
                room, width, height
            ),
            GeometryError::OutOfBounds { room } => {
                write!(f, "room {} extends outside the dungeon grid", room)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Configuration handed to the external generator. Defaults mirror a
/// 50x50 grid of up to 12 odd-sized rooms with door padding 2, the
/// clearance the tile compositor's door runs rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub width: u32,
    pub height: u32,
    /// Minimum distance from a door to its room's corners.
    pub door_padding: u32,
    pub room_width: (u32, u32),
    pub room_height: (u32, u32),
    pub max_rooms: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            door_padding: 2,
            room_width: (7, 15),
            room_height: (7, 15),
            max_rooms: 12,
        }
    }
}

/// External collaborator producing the abstract room graph.
pub trait DungeonGenerator {
    fn generate(&mut self, config: &GeneratorConfig, rng: &mut impl Rng) -> Dungeon;
}
