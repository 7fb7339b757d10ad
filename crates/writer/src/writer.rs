//! Append-only instruction emitter with emission-time validation.

use crate::error::GenerationError;
use nadia_common::{Direction, Instruction, Program, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A stateful emitter that accumulates instructions and validates each one
/// as it is emitted, so that execution-time errors are rare.
///
/// The writer mirrors the executor's invariants: arrays must be allocated
/// before use, indices must be in range, and nothing follows `exit player`.
///
/// A writer may carry a target path from construction; [`Writer::flush`]
/// serializes to it, and a recording player flushes there when the level
/// is exited.
#[derive(Debug, Default)]
pub struct Writer {
    pub(crate) instructions: Vec<Instruction>,
    pub(crate) arrays: HashMap<String, usize>,
    pub(crate) sealed: bool,
    pub(crate) target: Option<PathBuf>,
}

impl Writer {
    /// Create an empty writer with no target file.
    pub fn new() -> Writer {
        Writer::default()
    }

    /// Create an empty writer that flushes to `path`.
    pub fn with_target(path: impl Into<PathBuf>) -> Writer {
        Writer {
            target: Some(path.into()),
            ..Writer::default()
        }
    }

    /// The construction-time target file, if any.
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Emit `alloc <name> <size>`. Errors if the name is already allocated.
    pub fn alloc(&mut self, name: &str, size: usize) -> Result<(), GenerationError> {
        self.check_open("alloc")?;
        if self.arrays.contains_key(name) {
            return Err(GenerationError::DuplicateArray {
                name: name.to_string(),
            });
        }
        self.arrays.insert(name.to_string(), size);
        self.instructions.push(Instruction::Alloc {
            name: name.to_string(),
            size,
        });
        Ok(())
    }

    /// Emit `set constant <value>`.
    pub fn set(&mut self, value: Value) -> Result<(), GenerationError> {
        self.check_open("set")?;
        self.instructions.push(Instruction::Set { value });
        Ok(())
    }

    /// Emit `push <array> <index>`.
    pub fn push(&mut self, array: &str, index: usize) -> Result<(), GenerationError> {
        self.check_open("push")?;
        self.check_slot(array, index)?;
        self.instructions.push(Instruction::Push {
            array: array.to_string(),
            index,
        });
        Ok(())
    }

    /// Emit `pop <array> <index>`.
    pub fn pop(&mut self, array: &str, index: usize) -> Result<(), GenerationError> {
        self.check_open("pop")?;
        self.check_slot(array, index)?;
        self.instructions.push(Instruction::Pop {
            array: array.to_string(),
            index,
        });
        Ok(())
    }

    /// Emit `add`.
    pub fn add(&mut self) -> Result<(), GenerationError> {
        self.check_open("add")?;
        self.instructions.push(Instruction::Add);
        Ok(())
    }

    /// Emit `sub`.
    pub fn sub(&mut self) -> Result<(), GenerationError> {
        self.check_open("sub")?;
        self.instructions.push(Instruction::Sub);
        Ok(())
    }

    /// Emit `mult`.
    pub fn mult(&mut self) -> Result<(), GenerationError> {
        self.check_open("mult")?;
        self.instructions.push(Instruction::Mult);
        Ok(())
    }

    /// Emit `div`.
    pub fn div(&mut self) -> Result<(), GenerationError> {
        self.check_open("div")?;
        self.instructions.push(Instruction::Div);
        Ok(())
    }

    /// Emit `neg`.
    pub fn neg(&mut self) -> Result<(), GenerationError> {
        self.check_open("neg")?;
        self.instructions.push(Instruction::Neg);
        Ok(())
    }

    /// Emit `move player <direction>`.
    pub fn move_player(&mut self, direction: Direction) -> Result<(), GenerationError> {
        self.check_open("move")?;
        self.instructions.push(Instruction::Move { direction });
        Ok(())
    }

    /// Emit `collect`.
    pub fn collect(&mut self) -> Result<(), GenerationError> {
        self.check_open("collect")?;
        self.instructions.push(Instruction::Collect);
        Ok(())
    }

    /// Emit `exit player` and seal the writer; every later emission fails.
    pub fn exit_player(&mut self) -> Result<(), GenerationError> {
        self.check_open("exit")?;
        self.instructions.push(Instruction::Exit);
        self.sealed = true;
        Ok(())
    }

    /// The instructions emitted so far.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions emitted so far.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Serialize the accumulated program to the canonical text encoding.
    ///
    /// Errors with [`GenerationError::EmptyProgram`] when nothing has been
    /// emitted; a zero-instruction file is never a well-formed program.
    pub fn serialize(&self) -> Result<String, GenerationError> {
        if self.instructions.is_empty() {
            return Err(GenerationError::EmptyProgram);
        }
        Ok(Program::new(self.instructions.clone()).render())
    }

    /// Serialize to the construction-time target.
    ///
    /// A no-op for a writer constructed without one.
    pub fn flush(&self) -> Result<(), GenerationError> {
        match &self.target {
            Some(path) => self.write_to(path),
            None => Ok(()),
        }
    }

    /// Serialize and flush to a `.nvm` file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), GenerationError> {
        let path = path.as_ref();
        let text = self.serialize()?;
        fs::write(path, text).map_err(|source| GenerationError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn check_open(&self, opcode: &'static str) -> Result<(), GenerationError> {
        if self.sealed {
            return Err(GenerationError::AfterExit { opcode });
        }
        Ok(())
    }

    fn check_slot(&self, array: &str, index: usize) -> Result<(), GenerationError> {
        let size = *self
            .arrays
            .get(array)
            .ok_or_else(|| GenerationError::UnknownArray {
                name: array.to_string(),
            })?;
        if index >= size {
            return Err(GenerationError::IndexOutOfBounds {
                array: array.to_string(),
                index,
                size,
            });
        }
        Ok(())
    }

    /// Recompute the validation shadow (array table, seal) from the
    /// instruction list. Used after the builder removes instructions.
    pub(crate) fn rebuild_shadow(&mut self) {
        self.arrays.clear();
        self.sealed = false;
        for instruction in &self.instructions {
            match instruction {
                Instruction::Alloc { name, size } => {
                    self.arrays.insert(name.clone(), *size);
                }
                Instruction::Exit => self.sealed = true,
                _ => {}
            }
        }
    }
}
