//! Room role partition and stochastic content placement.

use crate::compositor::MapLayers;
use crate::constants::{
    CONTENT_ROOM_SHARE, DENSE_ROOM_THRESHOLD, SPARSE_ROOM_THRESHOLD, TALL_ROOM_MIN_HEIGHT,
};
use crate::dungeon::{Dungeon, Room};
use crate::tiles::{choose_weighted, TilePalette};
use rand::seq::SliceRandom;
use rand::Rng;

/// Exactly one role per room: the partition covers the whole room set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomRole {
    /// The player spawns here. Always the first generated room.
    Start,
    /// Holds the stairs down. Chosen uniformly from the non-start rooms.
    End,
    /// Receives a stochastic content draw.
    Content,
    /// Receives nothing.
    Empty,
}

/// Partitions the room set: room 0 is Start, one uniform End, then 90%
/// (floor) of the shuffled remainder becomes Content and the rest Empty.
pub fn assign_roles(dungeon: &Dungeon, rng: &mut impl Rng) -> Vec<RoomRole> {
    let n = dungeon.rooms.len();
    let mut roles = vec![RoomRole::Empty; n];
    if n == 0 {
        return roles;
    }
    roles[0] = RoomRole::Start;

    let mut rest: Vec<usize> = (1..n).collect();
    if rest.is_empty() {
        return roles;
    }
    let end = rest.swap_remove(rng.gen_range(0..rest.len()));
    roles[end] = RoomRole::End;

    rest.shuffle(rng);
    let content_count = (rest.len() as f64 * CONTENT_ROOM_SHARE).floor() as usize;
    for &id in rest.iter().take(content_count) {
        roles[id] = RoomRole::Content;
    }

    roles
}

/// Entity spawn points produced by distribution. Stairs, pots and towers
/// are written to the stuff layer directly; chests and enemies become
/// level-owned entities.
#[derive(Debug, Clone, Default)]
pub struct PlacementPlan {
    pub stairs: (u32, u32),
    pub chests: Vec<(u32, u32)>,
    pub enemies: Vec<(u32, u32)>,
}

/// Places the stairs in the End room and runs the three-way content draw
/// over every Content room. All free-form placements land strictly inside
/// room interiors; enemy offsets around a chest are clamped there too, so
/// small rooms cannot push spawns into walls.
pub fn distribute(
    dungeon: &Dungeon,
    roles: &[RoomRole],
    layers: &mut MapLayers,
    palette: &TilePalette,
    rng: &mut impl Rng,
) -> PlacementPlan {
    let mut plan = PlacementPlan::default();

    for (room, &role) in dungeon.rooms.iter().zip(roles) {
        match role {
            RoomRole::End => {
                let (cx, cy) = (room.center_x(), room.center_y());
                layers
                    .stuff
                    .put_tile_at(palette.stairs, cx as i64, cy as i64);
                plan.stairs = (cx, cy);
            }
            RoomRole::Content => place_content(room, &mut plan, layers, palette, rng),
            RoomRole::Start | RoomRole::Empty => {}
        }
    }

    plan
}

fn place_content(
    room: &Room,
    plan: &mut PlacementPlan,
    layers: &mut MapLayers,
    palette: &TilePalette,
    rng: &mut impl Rng,
) {
    let (cx, cy) = (room.center_x() as i64, room.center_y() as i64);
    let roll: f64 = rng.gen();

    if roll <= DENSE_ROOM_THRESHOLD {
        // Dense: a chest at the center ringed by up to three enemies
        plan.chests.push((cx as u32, cy as u32));
        for (dx, dy) in [(-1, -1), (1, -1), (0, 2)] {
            plan.enemies.push(room.clamp_to_interior(cx + dx, cy + dy));
        }
    } else if roll <= SPARSE_ROOM_THRESHOLD {
        // Sparse: one pot well clear of the walls, one enemy beside it
        let (px, py) = interior_point(room, rng);
        if let Some(tile) = choose_weighted(&palette.pot, rng) {
            layers.stuff.put_tile_at(tile, px as i64, py as i64);
        }
        plan.enemies
            .push(room.clamp_to_interior(px as i64 - 1, py as i64 - 1));
    } else {
        // Fortified: tower columns, four in tall rooms, two otherwise
        if room.height >= TALL_ROOM_MIN_HEIGHT {
            for (dx, dy) in [(-1, 1), (1, 1), (-1, -2), (1, -2)] {
                layers.stuff.put_run_at(&palette.tower, cx + dx, cy + dy);
            }
            plan.enemies.push(room.clamp_to_interior(cx - 1, cy));
            plan.enemies.push(room.clamp_to_interior(cx + 1, cy));
        } else {
            for (dx, dy) in [(-1, -1), (1, -1)] {
                layers.stuff.put_run_at(&palette.tower, cx + dx, cy + dy);
            }
            plan.enemies.push(room.clamp_to_interior(cx, cy));
        }
    }
}

/// Uniform point at least two cells from every border. Rooms too small
/// for that margin fall back to their center.
fn interior_point(room: &Room, rng: &mut impl Rng) -> (u32, u32) {
    if room.width < 5 || room.height < 5 {
        return (room.center_x(), room.center_y());
    }
    (
        rng.gen_range(room.left + 2..=room.right() - 2),
        rng.gen_range(room.top + 2..=room.bottom() - 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::compose;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// A grid of n 7x7 rooms laid out side by side (no doors; roles and
    /// placement don't read them).
    fn grid_dungeon(n: u32) -> Dungeon {
        Dungeon {
            width: n * 7,
            height: 7,
            rooms: (0..n).map(|i| Room::new(i * 7, 0, 7, 7)).collect(),
        }
    }

    #[test]
    fn test_roles_partition_twelve_rooms() {
        // N=12: 10 remain after start/end, 90% floored => 9 content, 1 empty
        let dungeon = grid_dungeon(12);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let roles = assign_roles(&dungeon, &mut rng);

            assert_eq!(roles[0], RoomRole::Start);
            let starts = roles.iter().filter(|r| **r == RoomRole::Start).count();
            let ends = roles.iter().filter(|r| **r == RoomRole::End).count();
            let content = roles.iter().filter(|r| **r == RoomRole::Content).count();
            let empty = roles.iter().filter(|r| **r == RoomRole::Empty).count();

            assert_eq!(starts, 1);
            assert_eq!(ends, 1);
            assert_eq!(content, 9);
            assert_eq!(empty, 1);
            assert_eq!(starts + ends + content + empty, 12);
        }
    }

    #[test]
    fn test_roles_cover_small_dungeons() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let roles = assign_roles(&grid_dungeon(2), &mut rng);
        assert_eq!(roles[0], RoomRole::Start);
        assert_eq!(roles[1], RoomRole::End);

        // N=3: 1 remains, floor(0.9) = 0 content
        let roles = assign_roles(&grid_dungeon(3), &mut rng);
        let content = roles.iter().filter(|r| **r == RoomRole::Content).count();
        assert_eq!(content, 0);
    }

    #[test]
    fn test_stairs_placed_at_end_room_center() {
        let dungeon = grid_dungeon(4);
        let palette = TilePalette::default();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut layers = compose(&dungeon, &palette, &mut rng).unwrap();
        let roles = assign_roles(&dungeon, &mut rng);
        let plan = distribute(&dungeon, &roles, &mut layers, &palette, &mut rng);

        let end = roles.iter().position(|r| *r == RoomRole::End).unwrap();
        let room = &dungeon.rooms[end];
        assert_eq!(plan.stairs, (room.center_x(), room.center_y()));
        assert_eq!(
            layers.stuff.get(plan.stairs.0 as i64, plan.stairs.1 as i64),
            Some(palette.stairs)
        );
    }

    #[test]
    fn test_placements_stay_inside_interiors() {
        let palette = TilePalette::default();
        for seed in 0..30 {
            let dungeon = grid_dungeon(12);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut layers = compose(&dungeon, &palette, &mut rng).unwrap();
            let roles = assign_roles(&dungeon, &mut rng);
            let plan = distribute(&dungeon, &roles, &mut layers, &palette, &mut rng);

            for &(x, y) in plan.chests.iter().chain(&plan.enemies) {
                let room = dungeon.room_at(x, y).expect("placement outside any room");
                let r = &dungeon.rooms[room];
                assert!(x > r.left && x < r.right(), "x {} on border of {:?}", x, r);
                assert!(y > r.top && y < r.bottom(), "y {} on border of {:?}", y, r);
            }
        }
    }

    #[test]
    fn test_empty_rooms_receive_nothing() {
        let palette = TilePalette::default();
        for seed in 0..20 {
            let dungeon = grid_dungeon(12);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut layers = compose(&dungeon, &palette, &mut rng).unwrap();
            let roles = assign_roles(&dungeon, &mut rng);
            let plan = distribute(&dungeon, &roles, &mut layers, &palette, &mut rng);

            for (id, &role) in roles.iter().enumerate() {
                if role == RoomRole::Empty || role == RoomRole::Start {
                    for &(x, y) in plan.chests.iter().chain(&plan.enemies) {
                        assert_ne!(dungeon.room_at(x, y), Some(id));
                    }
                }
            }
        }
    }

    #[test]
    fn test_dense_spawns_clamped_in_tiny_room() {
        // The chest ring offsets would escape a 3x3 interior; clamping
        // must keep every spawn inside it.
        let room = Room::new(0, 0, 5, 5);
        for (dx, dy) in [(-1, -1), (1, -1), (0, 2)] {
            let (x, y) = room.clamp_to_interior(
                room.center_x() as i64 + dx,
                room.center_y() as i64 + dy,
            );
            assert!(x >= 1 && x <= 3);
            assert!(y >= 1 && y <= 3);
        }
    }
}
