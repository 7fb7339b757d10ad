//! NadiaVM replay executor — drives a `.nvm` instruction stream against a
//! world.
//!
//! The machine is a single-accumulator replayer with:
//! - A 2-slot shift register (current + previous value) feeding binary
//!   arithmetic
//! - Named fixed-size arrays moved into and out of via `push`/`pop`
//! - A player-position shadow, re-validated against walls and bounds on
//!   every `move`
//!
//! Presentation layers step the machine with [`Machine::next`] and use the
//! returned [`Effect`] (or [`Machine::preview_next_instruction`]) to decide
//! when to pause for animation.
//!
//! # Usage
//!
//! ```
//! use nadia_vm::{run, State};
//! use nadia_world::{Grid, Tile, World};
//!
//! let grid = Grid::new(vec![
//!     vec![Tile::Wall, Tile::Wall, Tile::Wall, Tile::Wall],
//!     vec![Tile::Wall, Tile::Player, Tile::Exit, Tile::Wall],
//!     vec![Tile::Wall, Tile::Wall, Tile::Wall, Tile::Wall],
//! ]).unwrap();
//! let world = World::new(grid).unwrap();
//!
//! let machine = run("move player east\nexit player\n", &world).unwrap();
//! assert_eq!(machine.state(), State::Halted);
//! assert_eq!(machine.pos(), world.exit().unwrap());
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::ExecError;
pub use machine::{Effect, Machine, State};

use nadia_world::World;

/// Replay a whole program against a world, returning the machine in its
/// terminal state for inspection.
///
/// # Errors
///
/// Returns [`ExecError`] if any line fails to decode or execute; the run
/// stops at the first bad instruction.
pub fn run<'w>(source: &str, world: &'w World) -> Result<Machine<'w>, ExecError> {
    let mut machine = Machine::new(source, world);
    while machine.has_more_instructions() {
        machine.next()?;
    }
    Ok(machine)
}
