//! NadiaVM common types and text encoding.
//!
//! This crate provides the foundational data structures for the NadiaVM
//! instruction set:
//!
//! - [`Opcode`] — the twelve opcodes of the closed instruction set
//! - [`Instruction`] — a decoded instruction with typed operands
//! - [`Program`] — a sequence of instructions with `.nvm` text parse/render
//! - [`Value`] — numeric/positional data held in the stack and arrays
//! - [`Coord`] / [`Direction`] — grid positions and cardinal moves
//! - [`DecodeError`] / [`OperandError`] — line-addressable decode failures
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod coord;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod value;

// Re-export commonly used types at the crate root.
pub use coord::{Coord, Direction, ALL_DIRECTIONS};
pub use error::{DecodeError, OperandError};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
pub use value::Value;
