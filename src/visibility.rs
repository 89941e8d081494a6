//! Fog of war: the shadow plane and the room visibility state machine.
//!
//! Room adjacency is precomputed once per dungeon from door geometry, so
//! every frame's visibility update is a set diff over room ids rather
//! than a geometric search.

use crate::constants::FOG_ALPHA;
use crate::dungeon::{Dungeon, Room, RoomId};
use std::collections::BTreeSet;

/// Precomputed door-derived adjacency between rooms.
#[derive(Debug, Clone)]
pub struct RoomGraph {
    adjacency: Vec<Vec<RoomId>>,
}

impl RoomGraph {
    /// Two rooms are adjacent iff a door tile of one falls inside or
    /// immediately borders the other's rectangle.
    pub fn build(dungeon: &Dungeon) -> Self {
        let n = dungeon.rooms.len();
        let mut adjacency: Vec<BTreeSet<RoomId>> = vec![BTreeSet::new(); n];

        for (id, room) in dungeon.rooms.iter().enumerate() {
            for &door in &room.doors {
                let (dx, dy) = room.door_tile(door);
                for (other_id, other) in dungeon.rooms.iter().enumerate() {
                    if other_id != id && other.touches(dx, dy) {
                        adjacency[id].insert(other_id);
                        adjacency[other_id].insert(id);
                    }
                }
            }
        }

        Self {
            adjacency: adjacency
                .into_iter()
                .map(|set| set.into_iter().collect())
                .collect(),
        }
    }

    pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
        &self.adjacency[room]
    }
}

/// The fog plane: per-cell opacity over the whole grid, starting fully
/// opaque. Tracks every cell write so idempotence is observable.
#[derive(Debug, Clone)]
pub struct ShadowLayer {
    width: u32,
    height: u32,
    alpha: Vec<f32>,
    writes: u64,
}

impl ShadowLayer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            alpha: vec![FOG_ALPHA; (width * height) as usize],
            writes: 0,
        }
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> f32 {
        if x < self.width && y < self.height {
            self.alpha[(y * self.width + x) as usize]
        } else {
            0.0
        }
    }

    /// Total cell writes since construction.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    fn set_room_alpha(&mut self, room: &Room, alpha: f32) {
        for y in room.top..=room.bottom() {
            for x in room.left..=room.right() {
                if x < self.width && y < self.height {
                    self.alpha[(y * self.width + x) as usize] = alpha;
                    self.writes += 1;
                }
            }
        }
    }
}

/// Tracks the player's current room and keeps the shadow plane in sync:
/// the active room and its door-connected neighbors are clear, everything
/// else is fogged.
#[derive(Debug, Clone)]
pub struct VisibilityManager {
    graph: RoomGraph,
    shadow: ShadowLayer,
    active: Option<RoomId>,
    visible: BTreeSet<RoomId>,
}

impl VisibilityManager {
    pub fn new(dungeon: &Dungeon) -> Self {
        Self {
            graph: RoomGraph::build(dungeon),
            shadow: ShadowLayer::new(dungeon.width, dungeon.height),
            active: None,
            visible: BTreeSet::new(),
        }
    }

    /// Updates fog for the room containing the player (`None` while the
    /// player is outside every room). Idempotent: a repeated call with
    /// the unchanged room performs zero shadow writes. Transitions are a
    /// diff, concealing rooms that left the visible set and revealing
    /// rooms that entered it.
    pub fn set_active_room(&mut self, dungeon: &Dungeon, room: Option<RoomId>) {
        if room == self.active {
            return;
        }

        let mut next: BTreeSet<RoomId> = BTreeSet::new();
        if let Some(id) = room {
            next.insert(id);
            next.extend(self.graph.neighbors(id).iter().copied());
        }

        for &id in self.visible.difference(&next) {
            self.shadow.set_room_alpha(&dungeon.rooms[id], FOG_ALPHA);
        }
        let newly_visible: Vec<RoomId> = next.difference(&self.visible).copied().collect();
        for id in newly_visible {
            self.shadow.set_room_alpha(&dungeon.rooms[id], 0.0);
        }

        self.visible = next;
        self.active = room;
    }

    pub fn active_room(&self) -> Option<RoomId> {
        self.active
    }

    /// Currently revealed rooms, in ascending id order.
    pub fn visible_rooms(&self) -> Vec<RoomId> {
        self.visible.iter().copied().collect()
    }

    pub fn shadow(&self) -> &ShadowLayer {
        &self.shadow
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }
}
