//! Opcode definitions for the NadiaVM instruction set.

use std::fmt;

/// Identifies the operation an instruction performs.
///
/// The set is closed: dispatch is an exhaustive match everywhere, so adding
/// an opcode is a compile-time-checked extension rather than a runtime
/// string-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Create a named array of empty slots.
    Alloc,
    /// Set the current stack value to a constant.
    Set,
    /// Move the current stack value into an array slot.
    Push,
    /// Move an array slot into the current stack value.
    Pop,
    /// Combine the current and previous stack values by addition.
    Add,
    /// Combine by subtraction (previous minus current).
    Sub,
    /// Combine by multiplication.
    Mult,
    /// Combine by division. Zero divisor is a runtime error.
    Div,
    /// Negate the current stack value. Sugar for `set constant -1` + `mult`.
    Neg,
    /// Request a one-cell player move.
    Move,
    /// Pause for the collection animation. Carries no operand.
    Collect,
    /// Request level termination. The program's sole terminal instruction.
    Exit,
}

/// All opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 12] = [
    Opcode::Alloc,
    Opcode::Set,
    Opcode::Push,
    Opcode::Pop,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mult,
    Opcode::Div,
    Opcode::Neg,
    Opcode::Move,
    Opcode::Collect,
    Opcode::Exit,
];

impl Opcode {
    /// The spelling used in the text encoding.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Alloc => "alloc",
            Opcode::Set => "set",
            Opcode::Push => "push",
            Opcode::Pop => "pop",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mult => "mult",
            Opcode::Div => "div",
            Opcode::Neg => "neg",
            Opcode::Move => "move",
            Opcode::Collect => "collect",
            Opcode::Exit => "exit",
        }
    }

    /// Look up an opcode by its text-encoding spelling.
    pub fn from_mnemonic(word: &str) -> Option<Opcode> {
        ALL_OPCODES.iter().find(|op| op.mnemonic() == word).copied()
    }

    /// Whether executing this opcode warrants an animation pause in the
    /// presentation layer before the next step.
    pub fn implies_pause(&self) -> bool {
        matches!(self, Opcode::Move | Opcode::Collect | Opcode::Exit)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
