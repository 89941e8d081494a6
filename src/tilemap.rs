//! Tile layer storage and the write primitives the compositor drives.
//!
//! Writes outside the grid are silently ignored, matching the forgiving
//! tilemap semantics the rendering engine exposes.

use crate::tiles::{choose_weighted, TileId, TileRun, WeightedSet};
use rand::Rng;

/// One named tile layer: a grid of cells each holding a resolved tile
/// index or nothing (void).
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<TileId>>,
}

impl TileGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn get(&self, x: i64, y: i64) -> Option<TileId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[(y as u32 * self.width + x as u32) as usize]
    }

    /// Sets every cell to the given tile.
    pub fn fill(&mut self, tile: TileId) {
        self.cells.fill(Some(tile));
    }

    pub fn put_tile_at(&mut self, tile: TileId, x: i64, y: i64) {
        if self.in_bounds(x, y) {
            self.cells[(y as u32 * self.width + x as u32) as usize] = Some(tile);
        }
    }

    /// Stamps a 2D run of tiles with its top-left corner at (x, y).
    pub fn put_run_at(&mut self, run: &TileRun, x: i64, y: i64) {
        for (dy, row) in run.iter().enumerate() {
            for (dx, &tile) in row.iter().enumerate() {
                self.put_tile_at(tile, x + dx as i64, y + dy as i64);
            }
        }
    }

    /// Fills a region with tiles drawn from a weighted set, each cell
    /// resolved independently.
    pub fn weighted_randomize(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        set: &WeightedSet,
        rng: &mut impl Rng,
    ) {
        for cy in y..y + height {
            for cx in x..x + width {
                if let Some(tile) = choose_weighted(set, rng) {
                    self.put_tile_at(tile, cx, cy);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::WeightedTile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_grid_is_void() {
        let grid = TileGrid::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), None);
            }
        }
    }

    #[test]
    fn test_put_and_get() {
        let mut grid = TileGrid::new(4, 3);
        grid.put_tile_at(TileId(6), 2, 1);
        assert_eq!(grid.get(2, 1), Some(TileId(6)));
        assert_eq!(grid.get(1, 2), None);
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let mut grid = TileGrid::new(4, 3);
        grid.put_tile_at(TileId(6), -1, 0);
        grid.put_tile_at(TileId(6), 4, 0);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.get(x, y), None);
            }
        }
    }

    #[test]
    fn test_put_run_at_rows_and_columns() {
        let mut grid = TileGrid::new(5, 5);
        let horizontal = vec![vec![TileId(40), TileId(6), TileId(38)]];
        grid.put_run_at(&horizontal, 1, 0);
        assert_eq!(grid.get(1, 0), Some(TileId(40)));
        assert_eq!(grid.get(2, 0), Some(TileId(6)));
        assert_eq!(grid.get(3, 0), Some(TileId(38)));

        let vertical = vec![vec![TileId(186)], vec![TileId(205)]];
        grid.put_run_at(&vertical, 0, 2);
        assert_eq!(grid.get(0, 2), Some(TileId(186)));
        assert_eq!(grid.get(0, 3), Some(TileId(205)));
    }

    #[test]
    fn test_weighted_randomize_resolves_every_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grid = TileGrid::new(10, 10);
        let set = vec![WeightedTile {
            tiles: vec![TileId(6), TileId(7)],
            weight: 1,
        }];
        grid.weighted_randomize(2, 2, 6, 6, &set, &mut rng);
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..8).contains(&x) && (2..8).contains(&y);
                assert_eq!(grid.get(x, y).is_some(), inside, "cell ({}, {})", x, y);
            }
        }
    }
}
