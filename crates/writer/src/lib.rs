//! Validating emitter for NadiaVM instruction streams.
//!
//! [`Writer`] accumulates instructions through one method per opcode and
//! validates each emission against a shadow of the executor's invariants,
//! so a program that emits cleanly replays cleanly. [`Builder`] wraps a
//! writer when the authoring surface also needs to remove instructions
//! (`clear`, `undo`). [`serialize`](Writer::serialize) and
//! [`write_to`](Writer::write_to) produce the canonical `.nvm` text.

pub mod builder;
pub mod error;
pub mod writer;

pub use builder::Builder;
pub use error::GenerationError;
pub use writer::Writer;
