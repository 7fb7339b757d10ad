//! Character-layout reader: turns a level text file into a grid.
//!
//! The character map follows the level-file convention:
//! `%` wall, `P` player, `E` exit, `.` coin, anything else air. Rows may
//! be ragged in the file; shorter rows are padded with air so the grid
//! stays rectangular.

use nadia_world::{Grid, GridError, Tile};

/// Map one layout character to a tile.
fn tile_for(c: char) -> Tile {
    match c {
        '%' => Tile::Wall,
        'P' => Tile::Player,
        'E' => Tile::Exit,
        '.' => Tile::Coin,
        _ => Tile::Air,
    }
}

/// Parse a character layout into a rectangular grid.
pub fn parse(text: &str) -> Result<Grid, GridError> {
    let mut rows: Vec<Vec<Tile>> = text
        .lines()
        .map(|line| line.chars().map(tile_for).collect())
        .collect();
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, Tile::Air);
    }
    Grid::new(rows)
}
