//! Decode errors for NadiaVM instruction text.
//!
//! An unrecognized opcode and a malformed operand list are two distinct,
//! reportable kinds of failure. Every error carries the 1-based source line
//! so diagnostics stay line-addressable.

use thiserror::Error;

/// Errors raised while decoding a line of NadiaVM text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode word is not part of the instruction set.
    #[error("line {line}: command not found: '{opcode}'")]
    CommandNotFound { line: usize, opcode: String },

    /// The opcode was recognized but its operands are malformed.
    #[error(transparent)]
    Operand(#[from] OperandError),
}

/// Operand arity and type errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    /// Too few operands for the opcode.
    #[error("line {line}: {opcode} expects {expected} operand(s)")]
    Missing {
        line: usize,
        opcode: &'static str,
        expected: usize,
    },

    /// A token appeared after the opcode's full operand list.
    #[error("line {line}: unexpected operand '{token}'")]
    Unexpected { line: usize, token: String },

    /// An operand that must be a non-negative integer was not.
    #[error("line {line}: invalid index '{token}'")]
    InvalidIndex { line: usize, token: String },

    /// A literal operand was neither an integer nor a coordinate.
    #[error("line {line}: invalid literal '{token}'")]
    InvalidLiteral { line: usize, token: String },

    /// A fixed keyword operand (`constant`, `player`) was misspelled.
    #[error("line {line}: expected '{expected}', found '{found}'")]
    BadKeyword {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// A direction operand outside the four cardinal spellings.
    #[error("line {line}: unknown direction '{token}'")]
    UnknownDirection { line: usize, token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_command_not_found() {
        let e = DecodeError::CommandNotFound {
            line: 3,
            opcode: "jump".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: command not found: 'jump'");
    }

    #[test]
    fn display_missing_operand() {
        let e = OperandError::Missing {
            line: 7,
            opcode: "push",
            expected: 2,
        };
        assert_eq!(e.to_string(), "line 7: push expects 2 operand(s)");
    }

    #[test]
    fn display_unexpected_operand() {
        let e = OperandError::Unexpected {
            line: 2,
            token: "extra".to_string(),
        };
        assert_eq!(e.to_string(), "line 2: unexpected operand 'extra'");
    }

    #[test]
    fn display_bad_keyword() {
        let e = OperandError::BadKeyword {
            line: 4,
            expected: "player",
            found: "robot".to_string(),
        };
        assert_eq!(e.to_string(), "line 4: expected 'player', found 'robot'");
    }

    #[test]
    fn operand_error_converts_to_decode_error() {
        let inner = OperandError::UnknownDirection {
            line: 1,
            token: "up".to_string(),
        };
        let outer: DecodeError = inner.clone().into();
        assert_eq!(outer, DecodeError::Operand(inner));
        assert_eq!(outer.to_string(), "line 1: unknown direction 'up'");
    }
}
