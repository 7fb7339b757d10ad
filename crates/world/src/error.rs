//! Errors for grid access and world construction.

use nadia_common::Coord;
use thiserror::Error;

/// Errors raised by direct grid access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Indices outside the grid's shape. No silent clamping.
    #[error("position ({row},{col}) outside grid of {rows}x{cols}")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A row shorter or longer than the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Violations of the world authoring contract, caught at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// Every world needs exactly one player start.
    #[error("world has no player start")]
    MissingPlayer,

    /// More than one player tag in the grid.
    #[error("world has more than one player (at {first} and {second})")]
    MultiplePlayers { first: Coord, second: Coord },

    /// More than one exit tag in the grid.
    #[error("world has more than one exit (at {first} and {second})")]
    MultipleExits { first: Coord, second: Coord },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let e = GridError::OutOfRange {
            row: 5,
            col: 1,
            rows: 3,
            cols: 4,
        };
        assert_eq!(e.to_string(), "position (5,1) outside grid of 3x4");
    }

    #[test]
    fn display_multiple_players() {
        let e = WorldError::MultiplePlayers {
            first: Coord::new(0, 0),
            second: Coord::new(1, 1),
        };
        assert_eq!(
            e.to_string(),
            "world has more than one player (at (0,0) and (1,1))"
        );
    }
}
