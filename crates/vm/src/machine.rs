//! Executor state: cursor, accumulator, array table, player shadow.

use crate::error::ExecError;
use nadia_common::{Coord, Instruction, Opcode, Value};
use nadia_world::World;
use std::collections::HashMap;

/// Lifecycle of a machine.
///
/// `Halted` and `Exhausted` are both terminal, but only `Halted`
/// guarantees the player reached a valid exit; running off the end of the
/// program is an incomplete run, not a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Constructed, no instruction consumed yet.
    Ready,
    /// At least one instruction consumed, more may remain.
    Running,
    /// The cursor moved past the last instruction without an `exit`.
    Exhausted,
    /// An `exit player` executed at the exit coordinate.
    Halted,
}

/// What a consumed instruction did, as far as a presentation layer cares.
///
/// The machine never blocks; callers that animate decide from the effect
/// whether to suspend before the next [`Machine::next`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Pure bookkeeping, nothing to show.
    Silent,
    /// A movement request was replayed (the position may or may not have
    /// changed; [`Machine::pos`] is authoritative).
    Move(nadia_common::Direction),
    /// A collection pause marker.
    Collect,
    /// The player left the level; the machine is now [`State::Halted`].
    Exit,
}

impl Effect {
    /// Whether an animation pause is warranted before the next step.
    pub fn pauses(&self) -> bool {
        !matches!(self, Effect::Silent)
    }
}

/// One meaningful source line, kept with its 1-based line number so every
/// error is addressable back to the file.
#[derive(Debug)]
pub(crate) struct SourceLine {
    pub(crate) number: usize,
    pub(crate) text: String,
}

/// The NadiaVM replay executor.
///
/// A machine binds one program text to one [`World`] and replays the
/// instruction stream one line at a time. Decoding is lazy: a line is only
/// parsed when the cursor reaches it, so a malformed line late in the file
/// fails at that step, not at load time.
///
/// The machine keeps its own shadow of the player position and re-validates
/// every movement against walls and bounds; whatever the authoring side
/// computed, this replay is the authoritative run.
#[derive(Debug)]
pub struct Machine<'w> {
    pub(crate) world: &'w World,
    pub(crate) lines: Vec<SourceLine>,
    pub(crate) cursor: usize,
    pub(crate) state: State,
    pub(crate) arrays: HashMap<String, Vec<Option<Value>>>,
    pub(crate) current: Option<Value>,
    pub(crate) previous: Option<Value>,
    pub(crate) position: Coord,
}

impl<'w> Machine<'w> {
    /// Create a machine over `source`, replaying against `world`.
    ///
    /// Blank lines and `;` comments are filtered here; everything else is
    /// decoded lazily by [`Machine::next`].
    pub fn new(source: &str, world: &'w World) -> Machine<'w> {
        let lines = source
            .lines()
            .enumerate()
            .filter_map(|(i, raw)| {
                let stripped = raw.split(';').next().unwrap_or("").trim();
                if stripped.is_empty() {
                    None
                } else {
                    Some(SourceLine {
                        number: i + 1,
                        text: raw.to_string(),
                    })
                }
            })
            .collect();
        Machine {
            world,
            lines,
            cursor: 0,
            state: State::Ready,
            arrays: HashMap::new(),
            current: None,
            previous: None,
            position: world.player(),
        }
    }

    /// Whether another `next()` call can consume an instruction.
    ///
    /// False in both terminal states.
    pub fn has_more_instructions(&self) -> bool {
        match self.state {
            State::Halted | State::Exhausted => false,
            State::Ready | State::Running => self.cursor < self.lines.len(),
        }
    }

    /// Non-destructive lookahead of the next opcode.
    ///
    /// Only the opcode is exposed, not its operands; `None` when the
    /// machine is terminal or the next line's opcode is unrecognized (the
    /// following `next()` will then report the decode error properly).
    pub fn preview_next_instruction(&self) -> Option<Opcode> {
        if !self.has_more_instructions() {
            return None;
        }
        let line = &self.lines[self.cursor];
        let word = line.text.split(';').next().unwrap_or("").split_whitespace().next()?;
        Opcode::from_mnemonic(word)
    }

    /// Decode and apply the instruction at the cursor, then advance.
    ///
    /// Errors once terminal: [`ExecError::NoMoreInstructions`] after
    /// exhaustion, [`ExecError::Halted`] after a successful exit. Running
    /// off the end is never a silent no-op.
    pub fn next(&mut self) -> Result<Effect, ExecError> {
        match self.state {
            State::Halted => return Err(ExecError::Halted),
            State::Exhausted => return Err(ExecError::NoMoreInstructions),
            State::Ready | State::Running => {}
        }
        let Some(line) = self.lines.get(self.cursor) else {
            self.state = State::Exhausted;
            return Err(ExecError::NoMoreInstructions);
        };
        let number = line.number;
        let decoded = Instruction::parse(&line.text, number)?;
        self.state = State::Running;
        self.cursor += 1;

        // Prefiltering keeps only meaningful lines, so decode always
        // yields an instruction here.
        let effect = match decoded {
            Some(instruction) => self.apply(&instruction, number)?,
            None => Effect::Silent,
        };

        if let Effect::Exit = effect {
            self.state = State::Halted;
        } else if self.cursor >= self.lines.len() {
            self.state = State::Exhausted;
        }
        Ok(effect)
    }

    /// Read access to a named array's current contents, for diagnostics
    /// and tests.
    pub fn get(&self, name: &str) -> Option<&[Option<Value>]> {
        self.arrays.get(name).map(|v| v.as_slice())
    }

    /// The machine's shadow of the player position, authoritative for
    /// rendering.
    pub fn pos(&self) -> Coord {
        self.position
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }
}
