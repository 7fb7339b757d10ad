//! Stack and array slot values.
//!
//! The puzzle domain needs exactly two shapes of datum: numbers and grid
//! positions. Arithmetic is defined on numbers only; combining a position
//! with anything is a type mismatch at execution time.

use crate::coord::Coord;
use std::fmt;

/// A value held in the execution stack or an array slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A numeric value.
    Int(i64),
    /// A grid position, written `(row,col)` in the text encoding.
    Coord(Coord),
}

impl Value {
    /// Parse a literal token: a coordinate if it starts with `(`, otherwise
    /// a signed integer. Returns `None` for anything else.
    pub fn parse(token: &str) -> Option<Value> {
        if token.starts_with('(') {
            Coord::parse(token).map(Value::Coord)
        } else {
            token.parse::<i64>().ok().map(Value::Int)
        }
    }

    /// The numeric content, if this value is numeric.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Coord(_) => None,
        }
    }

    /// Whether arithmetic is defined on this value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Coord(c) => write!(f, "{c}"),
        }
    }
}
