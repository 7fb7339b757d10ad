//! Program representation for NadiaVM instruction streams.
//!
//! A `.nvm` file is plain text, one instruction per line. No header, no
//! cross-file references.

use crate::error::DecodeError;
use crate::instruction::Instruction;

/// A NadiaVM program: an ordered sequence of instructions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The instruction stream.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Decode an entire text source.
    ///
    /// Blank lines and comment lines are skipped. Returns the first error
    /// encountered, with its source line.
    pub fn parse(text: &str) -> Result<Program, DecodeError> {
        let mut instructions = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            if let Some(instruction) = Instruction::parse(line, idx + 1)? {
                instructions.push(instruction);
            }
        }
        Ok(Program::new(instructions))
    }

    /// Render the canonical text encoding: one instruction per line, each
    /// line newline-terminated.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for instruction in &self.instructions {
            text.push_str(&instruction.to_string());
            text.push('\n');
        }
        text
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
