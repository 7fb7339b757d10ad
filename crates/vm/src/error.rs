//! Replay-time errors for the NadiaVM executor.
//!
//! Every variant carries the 1-based source line of the offending
//! instruction. Emission-time validation in the writer is the primary
//! defense; these errors are the safety net for hand-written files.

use nadia_common::DecodeError;
use thiserror::Error;

/// Errors that stop a replay.
///
/// None of these are recoverable mid-instruction: a bad instruction fails
/// the run rather than being skipped, so the world state never diverges
/// silently from the program.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The line could not be decoded into an instruction.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// `alloc` for a name that is already allocated.
    #[error("line {line}: array '{name}' is already allocated")]
    DuplicateArray { line: usize, name: String },

    /// `push`/`pop` against a name never passed to `alloc`.
    #[error("line {line}: array '{name}' has not been allocated")]
    UnknownArray { line: usize, name: String },

    /// Index operand outside `[0, size)` for the named array.
    #[error("line {line}: index {index} out of bounds for array '{array}' of size {size}")]
    IndexOutOfBounds {
        line: usize,
        array: String,
        index: usize,
        size: usize,
    },

    /// `pop` from a slot that holds no value.
    #[error("line {line}: slot {index} of array '{array}' is empty")]
    EmptySlot {
        line: usize,
        array: String,
        index: usize,
    },

    /// Arithmetic over a missing or non-numeric operand.
    #[error("line {line}: arithmetic requires two numeric values")]
    TypeMismatch { line: usize },

    /// `div` with a zero divisor.
    #[error("line {line}: division by zero")]
    DivisionByZero { line: usize },

    /// `next()` after every instruction has been consumed.
    #[error("no more instructions")]
    NoMoreInstructions,

    /// `next()` after `exit player` already halted the machine.
    #[error("machine is halted")]
    Halted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            ExecError::DivisionByZero { line: 4 }.to_string(),
            "line 4: division by zero"
        );
        assert_eq!(
            ExecError::EmptySlot {
                line: 2,
                array: "world_coins".to_string(),
                index: 0
            }
            .to_string(),
            "line 2: slot 0 of array 'world_coins' is empty"
        );
        assert_eq!(ExecError::Halted.to_string(), "machine is halted");
    }

    #[test]
    fn decode_errors_pass_through() {
        let decode = DecodeError::CommandNotFound {
            line: 3,
            opcode: "jump".to_string(),
        };
        let display = decode.to_string();
        let e = ExecError::from(decode);
        assert_eq!(e.to_string(), display);
    }
}
