//! Instruction application: accumulator shifts, array moves, world effects.

use crate::error::ExecError;
use crate::machine::{Effect, Machine};
use nadia_common::{Direction, Instruction, Value};

impl<'w> Machine<'w> {
    /// Apply one decoded instruction to the machine state.
    ///
    /// State transitions (halt, exhaustion) are the caller's concern; this
    /// only mutates the accumulator, arrays and the position shadow, and
    /// reports the presentation effect.
    pub(crate) fn apply(
        &mut self,
        instruction: &Instruction,
        line: usize,
    ) -> Result<Effect, ExecError> {
        match instruction {
            Instruction::Alloc { name, size } => {
                self.exec_alloc(name, *size, line)?;
                Ok(Effect::Silent)
            }
            Instruction::Set { value } => {
                self.exec_set(*value);
                Ok(Effect::Silent)
            }
            Instruction::Push { array, index } => {
                self.exec_push(array, *index, line)?;
                Ok(Effect::Silent)
            }
            Instruction::Pop { array, index } => {
                self.exec_pop(array, *index, line)?;
                Ok(Effect::Silent)
            }
            Instruction::Add => {
                self.exec_binary(line, |a, b| Ok(a.wrapping_add(b)))?;
                Ok(Effect::Silent)
            }
            Instruction::Sub => {
                self.exec_binary(line, |a, b| Ok(a.wrapping_sub(b)))?;
                Ok(Effect::Silent)
            }
            Instruction::Mult => {
                self.exec_binary(line, |a, b| Ok(a.wrapping_mul(b)))?;
                Ok(Effect::Silent)
            }
            Instruction::Div => {
                self.exec_binary(line, |a, b| {
                    if b == 0 {
                        Err(ExecError::DivisionByZero { line })
                    } else {
                        Ok(a.wrapping_div(b))
                    }
                })?;
                Ok(Effect::Silent)
            }
            Instruction::Neg => {
                // Sugar for `set constant -1; mult`.
                self.exec_set(Value::Int(-1));
                self.exec_binary(line, |a, b| Ok(a.wrapping_mul(b)))?;
                Ok(Effect::Silent)
            }
            Instruction::Move { direction } => Ok(self.exec_move(*direction)),
            Instruction::Collect => Ok(Effect::Collect),
            Instruction::Exit => Ok(self.exec_exit()),
        }
    }

    fn exec_alloc(&mut self, name: &str, size: usize, line: usize) -> Result<(), ExecError> {
        if self.arrays.contains_key(name) {
            return Err(ExecError::DuplicateArray {
                line,
                name: name.to_string(),
            });
        }
        self.arrays.insert(name.to_string(), vec![None; size]);
        Ok(())
    }

    /// `set` shifts the accumulator: the old current value becomes the
    /// previous one, the literal becomes current.
    fn exec_set(&mut self, value: Value) {
        self.previous = self.current.take();
        self.current = Some(value);
    }

    /// `push` moves current into the slot; the previous value shifts back
    /// into current.
    fn exec_push(&mut self, array: &str, index: usize, line: usize) -> Result<(), ExecError> {
        let outgoing = self.current.take();
        let slot = self.slot_mut(array, index, line)?;
        *slot = outgoing;
        self.current = self.previous.take();
        Ok(())
    }

    /// `pop` moves the slot into current; the old current shifts to
    /// previous. An empty slot is an error.
    fn exec_pop(&mut self, array: &str, index: usize, line: usize) -> Result<(), ExecError> {
        let slot = self.slot_mut(array, index, line)?;
        let Some(value) = slot.take() else {
            return Err(ExecError::EmptySlot {
                line,
                array: array.to_string(),
                index,
            });
        };
        self.previous = self.current.take();
        self.current = Some(value);
        Ok(())
    }

    /// Binary arithmetic combines previous (a) with current (b) into a new
    /// current value and clears previous. Both operands must be numeric.
    fn exec_binary(
        &mut self,
        line: usize,
        op: impl FnOnce(i64, i64) -> Result<i64, ExecError>,
    ) -> Result<(), ExecError> {
        let a = self.numeric(self.previous, line)?;
        let b = self.numeric(self.current, line)?;
        self.current = Some(Value::Int(op(a, b)?));
        self.previous = None;
        Ok(())
    }

    fn exec_move(&mut self, direction: Direction) -> Effect {
        let target = self.position.shifted(direction);
        if self.world.in_bounds(target) && !self.world.is_wall(target) {
            self.position = target;
        }
        Effect::Move(direction)
    }

    /// `exit` halts only from the exit coordinate; anywhere else it is a
    /// no-op that does not terminate the run.
    fn exec_exit(&mut self) -> Effect {
        if self.world.exit() == Some(self.position) {
            Effect::Exit
        } else {
            Effect::Silent
        }
    }

    fn slot_mut(
        &mut self,
        array: &str,
        index: usize,
        line: usize,
    ) -> Result<&mut Option<Value>, ExecError> {
        let slots = self
            .arrays
            .get_mut(array)
            .ok_or_else(|| ExecError::UnknownArray {
                line,
                name: array.to_string(),
            })?;
        let size = slots.len();
        slots
            .get_mut(index)
            .ok_or_else(|| ExecError::IndexOutOfBounds {
                line,
                array: array.to_string(),
                index,
                size,
            })
    }

    fn numeric(&self, operand: Option<Value>, line: usize) -> Result<i64, ExecError> {
        operand
            .and_then(|v| v.as_int())
            .ok_or(ExecError::TypeMismatch { line })
    }
}
