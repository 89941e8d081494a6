//! Tile palette: which tileset indices the compositor writes where.
//!
//! The defaults target the buch 48px dungeon tileset and can be replaced
//! wholesale by the embedding engine (the palette is plain data).

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Index into the engine's tileset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileId(pub u16);

/// One alternative in a weighted tile set: the variant is picked by weight,
/// then a member tile uniformly within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedTile {
    pub tiles: Vec<TileId>,
    pub weight: u32,
}

pub type WeightedSet = Vec<WeightedTile>;

/// A 2D run of tiles (rows of columns) stamped at an offset. Door openings
/// are 1x3 (top/bottom walls) or 3x1 (left/right walls) runs; towers are a
/// two-tile column.
pub type TileRun = Vec<Vec<TileId>>;

/// Resolves a weighted set to a single tile. Returns `None` for an empty
/// or zero-weight set.
pub fn choose_weighted(set: &[WeightedTile], rng: &mut impl Rng) -> Option<TileId> {
    let total: u32 = set.iter().map(|w| w.weight).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.gen_range(0..total);
    for entry in set {
        if roll < entry.weight {
            return entry.tiles.choose(rng).copied();
        }
        roll -= entry.weight;
    }
    None
}

/// Corner and directional edge tiles for room walls. Corners are exact;
/// edges carry minor weighted variation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallTiles {
    pub top_left: TileId,
    pub top_right: TileId,
    pub bottom_right: TileId,
    pub bottom_left: TileId,
    pub top: WeightedSet,
    pub bottom: WeightedSet,
    pub left: WeightedSet,
    pub right: WeightedSet,
}

/// Door opening runs per wall direction, centered on the door offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorTiles {
    pub top: TileRun,
    pub bottom: TileRun,
    pub left: TileRun,
    pub right: TileRun,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TilePalette {
    /// Void tile outside any room.
    pub blank: TileId,
    /// 90% plain floor, 10% split across three dirty variants.
    pub floor: WeightedSet,
    pub wall: WallTiles,
    pub door: DoorTiles,
    pub stairs: TileId,
    pub chest: TileId,
    pub pot: WeightedSet,
    pub tower: TileRun,
}

fn weighted(tiles: &[u16], weight: u32) -> WeightedTile {
    WeightedTile {
        tiles: tiles.iter().map(|&t| TileId(t)).collect(),
        weight,
    }
}

fn row(tiles: &[u16]) -> TileRun {
    vec![tiles.iter().map(|&t| TileId(t)).collect()]
}

fn column(tiles: &[u16]) -> TileRun {
    tiles.iter().map(|&t| vec![TileId(t)]).collect()
}

impl Default for TilePalette {
    fn default() -> Self {
        Self {
            blank: TileId(20),
            floor: vec![weighted(&[6], 9), weighted(&[7, 8, 26], 1)],
            wall: WallTiles {
                top_left: TileId(3),
                top_right: TileId(4),
                bottom_right: TileId(23),
                bottom_left: TileId(22),
                top: vec![weighted(&[39], 4), weighted(&[57, 58, 59], 1)],
                bottom: vec![weighted(&[1], 4), weighted(&[78, 79, 80], 1)],
                left: vec![weighted(&[21], 4), weighted(&[76, 95, 114], 1)],
                right: vec![weighted(&[19], 4), weighted(&[77, 96, 115], 1)],
            },
            door: DoorTiles {
                top: row(&[40, 6, 38]),
                bottom: row(&[2, 6, 0]),
                left: column(&[40, 6, 2]),
                right: column(&[38, 6, 0]),
            },
            stairs: TileId(81),
            chest: TileId(166),
            pot: vec![weighted(&[13], 1), weighted(&[32], 1), weighted(&[51], 1)],
            tower: column(&[186, 205]),
        }
    }
}
