//! Turns the abstract room graph into resolved tile layers.
//!
//! Write order per room establishes precedence: floor, then wall edges,
//! then exact corners, then door openings last so a door always cuts
//! through whatever the wall pass wrote.

use crate::dungeon::{Dungeon, GeometryError, Room};
use crate::tilemap::TileGrid;
use crate::tiles::TilePalette;
use rand::Rng;

/// The composed ground layer plus an empty stuff layer ready for content
/// placement. The fog (shadow) plane lives with the visibility manager.
#[derive(Debug, Clone)]
pub struct MapLayers {
    pub ground: TileGrid,
    pub stuff: TileGrid,
}

/// Composes the ground layer for every room. Fails fast on malformed
/// geometry; a door closer than `door_padding` to a corner is a documented
/// generator precondition this pass does not defend against.
pub fn compose(
    dungeon: &Dungeon,
    palette: &TilePalette,
    rng: &mut impl Rng,
) -> Result<MapLayers, GeometryError> {
    dungeon.validate()?;

    let mut ground = TileGrid::new(dungeon.width, dungeon.height);
    let stuff = TileGrid::new(dungeon.width, dungeon.height);
    ground.fill(palette.blank);

    for room in &dungeon.rooms {
        compose_room(&mut ground, room, palette, rng);
    }

    Ok(MapLayers { ground, stuff })
}

fn compose_room(ground: &mut TileGrid, room: &Room, palette: &TilePalette, rng: &mut impl Rng) {
    let (x, y) = (room.left as i64, room.top as i64);
    let (w, h) = (room.width as i64, room.height as i64);

    // Interior floor, resolved independently per cell
    ground.weighted_randomize(x + 1, y + 1, w - 2, h - 2, &palette.floor, rng);

    // Border edges, corners excluded
    ground.weighted_randomize(x + 1, y, w - 2, 1, &palette.wall.top, rng);
    ground.weighted_randomize(x + 1, y + h - 1, w - 2, 1, &palette.wall.bottom, rng);
    ground.weighted_randomize(x, y + 1, 1, h - 2, &palette.wall.left, rng);
    ground.weighted_randomize(x + w - 1, y + 1, 1, h - 2, &palette.wall.right, rng);

    // Exact corner tiles, no randomization
    ground.put_tile_at(palette.wall.top_left, x, y);
    ground.put_tile_at(palette.wall.top_right, x + w - 1, y);
    ground.put_tile_at(palette.wall.bottom_right, x + w - 1, y + h - 1);
    ground.put_tile_at(palette.wall.bottom_left, x, y + h - 1);

    // Door openings last. Direction is inferred from which border
    // coordinate sits on the boundary.
    for &door in &room.doors {
        let (dx, dy) = (door.x as i64, door.y as i64);
        if dy == 0 {
            ground.put_run_at(&palette.door.top, x + dx - 1, y);
        } else if dy == h - 1 {
            ground.put_run_at(&palette.door.bottom, x + dx - 1, y + dy);
        } else if dx == 0 {
            ground.put_run_at(&palette.door.left, x, y + dy - 1);
        } else if dx == w - 1 {
            ground.put_run_at(&palette.door.right, x + dx, y + dy - 1);
        }
    }
}
