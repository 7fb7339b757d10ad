//! Grid coordinates and the four cardinal directions.

use std::fmt;

/// A (row, column) position in a grid. Rows grow southward, columns eastward.
///
/// Coordinates are signed so that neighbor arithmetic near the grid edge
/// never wraps; bounds checks happen wherever a coordinate is used to index
/// actual storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighboring coordinate one cell away in `direction`.
    pub fn shifted(self, direction: Direction) -> Coord {
        let (dr, dc) = direction.delta();
        Coord::new(self.row + dr, self.col + dc)
    }

    /// Parse a coordinate literal of the form `(r,c)`.
    ///
    /// The literal carries no interior whitespace, so a whole coordinate is
    /// always a single whitespace-delimited token in the text encoding.
    pub fn parse(token: &str) -> Option<Coord> {
        let inner = token.strip_prefix('(')?.strip_suffix(')')?;
        let (row, col) = inner.split_once(',')?;
        Some(Coord::new(row.parse().ok()?, col.parse().ok()?))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The four cardinal directions a player can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// All directions, in a fixed order. Useful for exhaustive testing and
/// neighborhood scans.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    /// Row/column delta applied by a one-cell move.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// The spelling used in the text encoding.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Look up a direction by its text-encoding spelling.
    pub fn from_name(name: &str) -> Option<Direction> {
        match name {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_applies_delta() {
        let c = Coord::new(2, 3);
        assert_eq!(c.shifted(Direction::North), Coord::new(1, 3));
        assert_eq!(c.shifted(Direction::South), Coord::new(3, 3));
        assert_eq!(c.shifted(Direction::West), Coord::new(2, 2));
        assert_eq!(c.shifted(Direction::East), Coord::new(2, 4));
    }

    #[test]
    fn shifted_can_go_negative() {
        assert_eq!(Coord::new(0, 0).shifted(Direction::North), Coord::new(-1, 0));
    }

    #[test]
    fn display_roundtrip() {
        for c in [Coord::new(0, 0), Coord::new(12, 7), Coord::new(-1, -1)] {
            assert_eq!(Coord::parse(&c.to_string()), Some(c));
        }
    }

    #[test]
    fn parse_rejects_malformed_literals() {
        assert_eq!(Coord::parse("1,2"), None);
        assert_eq!(Coord::parse("(1,2"), None);
        assert_eq!(Coord::parse("(1 2)"), None);
        assert_eq!(Coord::parse("(1,2,3)"), None);
        assert_eq!(Coord::parse("(a,b)"), None);
        assert_eq!(Coord::parse("(1, 2)"), None);
    }

    #[test]
    fn direction_name_roundtrip() {
        for d in ALL_DIRECTIONS {
            assert_eq!(Direction::from_name(d.name()), Some(d));
        }
        assert_eq!(Direction::from_name("up"), None);
    }

    #[test]
    fn opposite_deltas_cancel() {
        let c = Coord::new(5, 5);
        assert_eq!(c.shifted(Direction::North).shifted(Direction::South), c);
        assert_eq!(c.shifted(Direction::East).shifted(Direction::West), c);
    }
}
