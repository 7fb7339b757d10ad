//! Instruction decoding and canonical text rendering.
//!
//! The encoding is line-oriented: one instruction per line, opcode first,
//! operands whitespace-delimited. A `;` starts a comment that runs to the
//! end of the line. Rendering via [`fmt::Display`] produces the canonical
//! spelling the decoder accepts back unchanged.

use crate::coord::Direction;
use crate::error::{DecodeError, OperandError};
use crate::opcode::Opcode;
use crate::value::Value;
use std::fmt;

/// A single decoded NadiaVM instruction.
///
/// Instructions are immutable once constructed; an ordered sequence of them
/// constitutes a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `alloc <name> <size>` — create a named array of `size` empty slots.
    Alloc { name: String, size: usize },
    /// `set constant <literal>` — set the current stack value.
    Set { value: Value },
    /// `push <array> <index>` — move the current stack value into a slot.
    Push { array: String, index: usize },
    /// `pop <array> <index>` — move a slot into the current stack value.
    Pop { array: String, index: usize },
    /// `add` — current + previous.
    Add,
    /// `sub` — previous - current.
    Sub,
    /// `mult` — current * previous.
    Mult,
    /// `div` — previous / current; zero divisor is a runtime error.
    Div,
    /// `neg` — negate the current value.
    Neg,
    /// `move player <direction>` — request a one-cell move.
    Move { direction: Direction },
    /// `collect` — pause for the collection animation.
    Collect,
    /// `exit player` — request level termination.
    Exit,
}

impl Instruction {
    /// The opcode of this instruction.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Alloc { .. } => Opcode::Alloc,
            Instruction::Set { .. } => Opcode::Set,
            Instruction::Push { .. } => Opcode::Push,
            Instruction::Pop { .. } => Opcode::Pop,
            Instruction::Add => Opcode::Add,
            Instruction::Sub => Opcode::Sub,
            Instruction::Mult => Opcode::Mult,
            Instruction::Div => Opcode::Div,
            Instruction::Neg => Opcode::Neg,
            Instruction::Move { .. } => Opcode::Move,
            Instruction::Collect => Opcode::Collect,
            Instruction::Exit => Opcode::Exit,
        }
    }

    /// Decode one line of text.
    ///
    /// Returns `Ok(None)` for blank and comment-only lines. `line_num` is
    /// the 1-based source line used in error reports.
    pub fn parse(line: &str, line_num: usize) -> Result<Option<Instruction>, DecodeError> {
        let line = match line.find(';') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(None);
        }

        let opcode =
            Opcode::from_mnemonic(tokens[0]).ok_or_else(|| DecodeError::CommandNotFound {
                line: line_num,
                opcode: tokens[0].to_string(),
            })?;
        let args = &tokens[1..];

        let instruction = match opcode {
            Opcode::Alloc => {
                let name = expect_word(args, 0, line_num, "alloc", 1)?;
                // Size operand defaults to 1 when omitted.
                let size = match args.get(1) {
                    Some(token) => parse_index(token, line_num)?,
                    None => 1,
                };
                expect_end(args, 2, line_num)?;
                Instruction::Alloc {
                    name: name.to_string(),
                    size,
                }
            }
            Opcode::Set => {
                expect_keyword(args, 0, line_num, "set", "constant", 2)?;
                let token = expect_word(args, 1, line_num, "set", 2)?;
                let value = Value::parse(token).ok_or_else(|| OperandError::InvalidLiteral {
                    line: line_num,
                    token: token.to_string(),
                })?;
                expect_end(args, 2, line_num)?;
                Instruction::Set { value }
            }
            Opcode::Push => {
                let (array, index) = parse_array_index(args, line_num, "push")?;
                Instruction::Push { array, index }
            }
            Opcode::Pop => {
                let (array, index) = parse_array_index(args, line_num, "pop")?;
                Instruction::Pop { array, index }
            }
            Opcode::Add => {
                expect_end(args, 0, line_num)?;
                Instruction::Add
            }
            Opcode::Sub => {
                expect_end(args, 0, line_num)?;
                Instruction::Sub
            }
            Opcode::Mult => {
                expect_end(args, 0, line_num)?;
                Instruction::Mult
            }
            Opcode::Div => {
                expect_end(args, 0, line_num)?;
                Instruction::Div
            }
            Opcode::Neg => {
                expect_end(args, 0, line_num)?;
                Instruction::Neg
            }
            Opcode::Move => {
                expect_keyword(args, 0, line_num, "move", "player", 2)?;
                let word = expect_word(args, 1, line_num, "move", 2)?;
                let direction =
                    Direction::from_name(word).ok_or_else(|| OperandError::UnknownDirection {
                        line: line_num,
                        token: word.to_string(),
                    })?;
                expect_end(args, 2, line_num)?;
                Instruction::Move { direction }
            }
            Opcode::Collect => {
                expect_end(args, 0, line_num)?;
                Instruction::Collect
            }
            Opcode::Exit => {
                expect_keyword(args, 0, line_num, "exit", "player", 1)?;
                expect_end(args, 1, line_num)?;
                Instruction::Exit
            }
        };

        Ok(Some(instruction))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Alloc { name, size } => write!(f, "alloc {name} {size}"),
            Instruction::Set { value } => write!(f, "set constant {value}"),
            Instruction::Push { array, index } => write!(f, "push {array} {index}"),
            Instruction::Pop { array, index } => write!(f, "pop {array} {index}"),
            Instruction::Move { direction } => write!(f, "move player {direction}"),
            Instruction::Exit => f.write_str("exit player"),
            other => f.write_str(other.opcode().mnemonic()),
        }
    }
}

fn expect_word<'t>(
    args: &[&'t str],
    at: usize,
    line: usize,
    opcode: &'static str,
    expected: usize,
) -> Result<&'t str, OperandError> {
    args.get(at).copied().ok_or(OperandError::Missing {
        line,
        opcode,
        expected,
    })
}

fn expect_keyword(
    args: &[&str],
    at: usize,
    line: usize,
    opcode: &'static str,
    keyword: &'static str,
    expected: usize,
) -> Result<(), OperandError> {
    let word = expect_word(args, at, line, opcode, expected)?;
    if word != keyword {
        return Err(OperandError::BadKeyword {
            line,
            expected: keyword,
            found: word.to_string(),
        });
    }
    Ok(())
}

fn expect_end(args: &[&str], used: usize, line: usize) -> Result<(), OperandError> {
    match args.get(used) {
        Some(token) => Err(OperandError::Unexpected {
            line,
            token: token.to_string(),
        }),
        None => Ok(()),
    }
}

fn parse_index(token: &str, line: usize) -> Result<usize, OperandError> {
    token.parse().map_err(|_| OperandError::InvalidIndex {
        line,
        token: token.to_string(),
    })
}

fn parse_array_index(
    args: &[&str],
    line: usize,
    opcode: &'static str,
) -> Result<(String, usize), OperandError> {
    let array = expect_word(args, 0, line, opcode, 2)?;
    let index = expect_word(args, 1, line, opcode, 2)?;
    let index = parse_index(index, line)?;
    expect_end(args, 2, line)?;
    Ok((array.to_string(), index))
}
