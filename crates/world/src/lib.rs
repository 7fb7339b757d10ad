//! Grid, world model, and player state for the NadiaVM puzzle world.
//!
//! A level is a rectangular [`Grid`] of [`Tile`]s. [`World`] derives the
//! static layout queries from a grid once (player origin, walls, coins,
//! exit) and never mutates. [`Player`] layers mutable position and
//! inventory state on top, optionally mirroring every action into a
//! [`nadia_writer::Writer`] as a replayable instruction stream.

pub mod error;
pub mod grid;
pub mod player;
pub mod world;

pub use error::{GridError, WorldError};
pub use grid::{Grid, Tile};
pub use player::Player;
pub use world::World;
