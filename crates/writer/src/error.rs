//! Emission and serialization errors for the NadiaVM writer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the authoring caller when an emission or a flush is
/// invalid.
///
/// Emission-time validation is the primary defense against malformed
/// programs; the executor's replay-time checks are the safety net for
/// hand-written files.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// `alloc` for a name that is already allocated.
    #[error("array '{name}' is already allocated")]
    DuplicateArray { name: String },

    /// `push`/`pop` against a name never passed to `alloc`.
    #[error("array '{name}' has not been allocated")]
    UnknownArray { name: String },

    /// Index operand outside `[0, size)` for the named array.
    #[error("index {index} out of bounds for array '{array}' of size {size}")]
    IndexOutOfBounds {
        array: String,
        index: usize,
        size: usize,
    },

    /// Emission after `exit player`; the program is already terminal.
    #[error("cannot emit '{opcode}' after exit")]
    AfterExit { opcode: &'static str },

    /// Serialization requested before any instruction was emitted.
    #[error("no instructions to write")]
    EmptyProgram,

    /// The target file could not be written.
    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
