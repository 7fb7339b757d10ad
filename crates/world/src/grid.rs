//! The immutable 2D grid underlying a puzzle world.

use crate::error::GridError;
use nadia_common::Coord;
use std::fmt;

/// The element tag held in one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Coin,
    Exit,
    Player,
    Air,
}

/// All tile tags, in definition order.
pub const ALL_TILES: [Tile; 5] = [Tile::Wall, Tile::Coin, Tile::Exit, Tile::Player, Tile::Air];

impl Tile {
    /// The tag's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Tile::Wall => "WALL",
            Tile::Coin => "COIN",
            Tile::Exit => "EXIT",
            Tile::Player => "PLAYER",
            Tile::Air => "AIR",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable-once-built 2D container mapping (row, column) to a tile.
///
/// A grid may be built with a filter predicate; cells whose tile does not
/// match are masked to the empty sentinel in every query, without altering
/// what the construction data said. Row-major order defines iteration,
/// "first" and "last".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Option<Tile>>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from row-major tile data. Rows must be rectangular.
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Grid, GridError> {
        Grid::with_filter(rows, |_| true)
    }

    /// Build a grid, masking every cell whose tile fails `keep`.
    pub fn with_filter(
        rows: Vec<Vec<Tile>>,
        keep: impl Fn(Tile) -> bool,
    ) -> Result<Grid, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: row_idx,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.push(
                row.iter()
                    .map(|&tile| if keep(tile) { Some(tile) } else { None })
                    .collect(),
            );
        }
        let rows = cells.len();
        Ok(Grid { cells, rows, cols })
    }

    /// A filtered view of this grid: same shape, non-matching cells masked.
    /// Cells already masked here stay masked.
    pub fn filtered(&self, keep: impl Fn(Tile) -> bool) -> Grid {
        let cells = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.filter(|&tile| keep(tile)))
                    .collect()
            })
            .collect();
        Grid {
            cells,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Total rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major coordinates of every cell that is not masked.
    pub fn as_list(&self) -> Vec<Coord> {
        let mut coords = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    coords.push(Coord::new(r as i32, c as i32));
                }
            }
        }
        coords
    }

    /// The first cell holding `tag`, in row-major scan order.
    pub fn first(&self, tag: Tile) -> Option<Coord> {
        self.scan(tag).next()
    }

    /// The last cell holding `tag`, in row-major scan order.
    pub fn last(&self, tag: Tile) -> Option<Coord> {
        self.scan(tag).last()
    }

    fn scan(&self, tag: Tile) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                (*cell == Some(tag)).then(|| Coord::new(r as i32, c as i32))
            })
        })
    }

    /// The tile at a position, or the masked sentinel.
    ///
    /// Fails with [`GridError::OutOfRange`] when indices exceed the grid's
    /// shape; there is no clamping.
    pub fn element_at(&self, row: usize, col: usize) -> Result<Option<Tile>, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[row][col])
    }

    /// Whether a signed coordinate falls inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// Convenience lookup by signed coordinate. Out-of-bounds and masked
    /// cells both read as `None`.
    pub fn tile_at(&self, coord: Coord) -> Option<Tile> {
        if !self.contains(coord) {
            return None;
        }
        self.cells[coord.row as usize][coord.col as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        // W W W
        // W P C
        // W A E
        Grid::new(vec![
            vec![Tile::Wall, Tile::Wall, Tile::Wall],
            vec![Tile::Wall, Tile::Player, Tile::Coin],
            vec![Tile::Wall, Tile::Air, Tile::Exit],
        ])
        .unwrap()
    }

    #[test]
    fn shape() {
        assert_eq!(sample().shape(), (3, 3));
    }

    #[test]
    fn empty_grid_shape() {
        let grid = Grid::new(vec![]).unwrap();
        assert_eq!(grid.shape(), (0, 0));
        assert!(grid.as_list().is_empty());
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::new(vec![vec![Tile::Air, Tile::Air], vec![Tile::Air]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn as_list_covers_every_unmasked_cell_row_major() {
        let coords = sample().as_list();
        assert_eq!(coords.len(), 9);
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[8], Coord::new(2, 2));
        // Row-major: row 1 comes before row 2.
        assert!(coords.iter().position(|&c| c == Coord::new(1, 2)).unwrap()
            < coords.iter().position(|&c| c == Coord::new(2, 0)).unwrap());
    }

    #[test]
    fn first_and_last_scan_row_major() {
        let grid = sample();
        assert_eq!(grid.first(Tile::Wall), Some(Coord::new(0, 0)));
        assert_eq!(grid.last(Tile::Wall), Some(Coord::new(2, 0)));
        assert_eq!(grid.first(Tile::Player), Some(Coord::new(1, 1)));
        assert_eq!(grid.first(Tile::Exit), Some(Coord::new(2, 2)));
    }

    #[test]
    fn first_of_absent_tag_is_none() {
        let grid = Grid::new(vec![vec![Tile::Air]]).unwrap();
        assert_eq!(grid.first(Tile::Coin), None);
        assert_eq!(grid.last(Tile::Coin), None);
    }

    #[test]
    fn element_at_in_bounds() {
        let grid = sample();
        assert_eq!(grid.element_at(1, 1).unwrap(), Some(Tile::Player));
        assert_eq!(grid.element_at(2, 1).unwrap(), Some(Tile::Air));
    }

    #[test]
    fn element_at_out_of_range_fails() {
        let grid = sample();
        assert_eq!(
            grid.element_at(3, 0),
            Err(GridError::OutOfRange {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert!(grid.element_at(0, 3).is_err());
    }

    #[test]
    fn filter_masks_queries_not_shape() {
        let walls = sample().filtered(|t| t == Tile::Wall);
        assert_eq!(walls.shape(), (3, 3));
        assert_eq!(walls.as_list().len(), 5);
        assert_eq!(walls.element_at(1, 1).unwrap(), None);
        assert_eq!(walls.element_at(0, 0).unwrap(), Some(Tile::Wall));
        assert_eq!(walls.first(Tile::Player), None);
    }

    #[test]
    fn with_filter_applies_at_construction() {
        let coins = Grid::with_filter(
            vec![vec![Tile::Coin, Tile::Air], vec![Tile::Wall, Tile::Coin]],
            |t| t == Tile::Coin,
        )
        .unwrap();
        assert_eq!(
            coins.as_list(),
            vec![Coord::new(0, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn contains_and_tile_at() {
        let grid = sample();
        assert!(grid.contains(Coord::new(0, 0)));
        assert!(!grid.contains(Coord::new(-1, 0)));
        assert!(!grid.contains(Coord::new(0, 3)));
        assert_eq!(grid.tile_at(Coord::new(1, 2)), Some(Tile::Coin));
        assert_eq!(grid.tile_at(Coord::new(-1, -1)), None);
    }
}
