//! Builder variant of the writer: supports removal of emitted instructions.

use crate::writer::Writer;
use nadia_common::{Instruction, Opcode};
use std::ops::{Deref, DerefMut};

/// A [`Writer`] that can also drop instructions again.
///
/// Useful where the authoring surface lets the user undo steps: the
/// instruction list is editable until serialized.
#[derive(Debug, Default)]
pub struct Builder {
    writer: Writer,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Drop all instructions and reset the validation state.
    pub fn clear(&mut self) {
        self.writer.instructions.clear();
        self.writer.rebuild_shadow();
    }

    /// Remove the most recent instruction.
    ///
    /// A collection is bookkept as a `collect` pause marker plus a paired
    /// `push`/`pop` memory operation on either side. With `ignore_collect`
    /// set, undoing into such a trailing unit removes the whole unit, not
    /// just its last instruction. Undoing an `alloc` or `exit` also rolls
    /// back the emission-time validation state.
    pub fn undo(&mut self, ignore_collect: bool) {
        let instructions = &mut self.writer.instructions;
        if instructions.is_empty() {
            return;
        }

        let drop_count = if ignore_collect && ends_with_collection_unit(instructions) {
            3
        } else {
            1
        };
        let new_len = instructions.len() - drop_count;
        instructions.truncate(new_len);
        self.writer.rebuild_shadow();
    }

    /// Consume the builder, returning the underlying writer.
    pub fn into_writer(self) -> Writer {
        self.writer
    }
}

/// Whether the trailing three instructions form one logical collection:
/// a `push`/`pop` pair around one `collect`, with the `collect` the most
/// recent instruction or sitting between the pair.
fn ends_with_collection_unit(instructions: &[Instruction]) -> bool {
    let Some(window) = instructions.len().checked_sub(3).map(|s| &instructions[s..]) else {
        return false;
    };
    let count_of = |opcode: Opcode| window.iter().filter(|i| i.opcode() == opcode).count();
    if count_of(Opcode::Push) != 1 || count_of(Opcode::Pop) != 1 {
        return false;
    }
    matches!(
        window.iter().position(|i| i.opcode() == Opcode::Collect),
        Some(1) | Some(2)
    )
}

impl Deref for Builder {
    type Target = Writer;

    fn deref(&self) -> &Writer {
        &self.writer
    }
}

impl DerefMut for Builder {
    fn deref_mut(&mut self) -> &mut Writer {
        &mut self.writer
    }
}
