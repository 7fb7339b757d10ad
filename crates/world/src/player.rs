//! In-process player state, optionally recording an instruction stream.

use crate::world::World;
use nadia_common::{Coord, Direction, Value, ALL_DIRECTIONS};
use nadia_writer::{GenerationError, Writer};

/// A player moving through a [`World`].
///
/// The player keeps its own position and inventory so world data stays
/// untouched. When constructed with [`Player::recording`], every action is
/// mirrored into a [`Writer`] as instructions; the stream records *intent*,
/// so a `move` is emitted even when the in-process state rejects it and
/// the executor re-validates at replay time.
#[derive(Debug)]
pub struct Player<'w> {
    world: &'w World,
    position: Coord,
    inventory: Vec<Coord>,
    coins: Vec<Coord>,
    collected: Vec<bool>,
    exited: bool,
    recorder: Option<Writer>,
}

impl<'w> Player<'w> {
    /// Place a player at the world's starting position, without recording.
    pub fn new(world: &'w World) -> Player<'w> {
        Player::with_recorder(world, None)
    }

    /// Place a player that mirrors its actions into `writer`.
    ///
    /// Binding seeds the stream: `world_coins` and `inventory` are
    /// allocated with one slot per coin, and every coin coordinate is
    /// pushed into `world_coins` at its seed index. Seed indices stay
    /// stable for the lifetime of the player, so a collected coin keeps
    /// its slot.
    pub fn recording(world: &'w World, mut writer: Writer) -> Result<Player<'w>, GenerationError> {
        let coins = world.coin_positions();
        writer.alloc("world_coins", coins.len())?;
        writer.alloc("inventory", coins.len())?;
        for (index, coin) in coins.iter().enumerate() {
            writer.set(Value::Coord(*coin))?;
            writer.push("world_coins", index)?;
        }
        Ok(Player::with_recorder(world, Some(writer)))
    }

    fn with_recorder(world: &'w World, recorder: Option<Writer>) -> Player<'w> {
        let coins = world.coin_positions();
        let collected = vec![false; coins.len()];
        Player {
            world,
            position: world.player(),
            inventory: Vec::new(),
            coins,
            collected,
            exited: false,
            recorder,
        }
    }

    /// Start the player at `position` instead of the world's player tile.
    pub fn at(mut self, position: Coord) -> Player<'w> {
        self.position = position;
        self
    }

    /// Bulk-seed the inventory at construction.
    ///
    /// This is the one place the inventory is not append-only. A seeded
    /// item matching a world coin marks that coin as already held, so a
    /// later `collect` on its cell is a no-op.
    pub fn with_inventory(mut self, items: Vec<Coord>) -> Player<'w> {
        for (index, coin) in self.coins.iter().enumerate() {
            if items.contains(coin) {
                self.collected[index] = true;
            }
        }
        self.inventory = items;
        self
    }

    /// The player's current position.
    pub fn location(&self) -> Coord {
        self.position
    }

    /// The world's starting position for the player.
    pub fn origin(&self) -> Coord {
        self.world.player()
    }

    /// Number of items in the inventory.
    pub fn capacity(&self) -> usize {
        self.inventory.len()
    }

    /// Whether the player has left the level.
    pub fn exited(&self) -> bool {
        self.exited
    }

    /// Whether a wall blocks the player.
    ///
    /// With a direction, checks the single cell a move that way would
    /// target; without one, checks the whole 4-neighborhood.
    pub fn blocked(&self, direction: Option<Direction>) -> bool {
        match direction {
            Some(direction) => self.world.is_wall(self.position.shifted(direction)),
            None => ALL_DIRECTIONS
                .iter()
                .any(|d| self.world.is_wall(self.position.shifted(*d))),
        }
    }

    /// Move one cell in `direction`.
    ///
    /// The position only changes when the target cell is in bounds and not
    /// a wall, but a bound recorder receives the `move` instruction either
    /// way. Returns whether the position changed.
    pub fn step(&mut self, direction: Direction) -> Result<bool, GenerationError> {
        let target = self.position.shifted(direction);
        let moved = self.world.in_bounds(target) && !self.world.is_wall(target);
        if moved {
            self.position = target;
        }
        if let Some(writer) = self.recorder.as_mut() {
            writer.move_player(direction)?;
        }
        Ok(moved)
    }

    /// Pick up the coin under the player, if one is there and not already
    /// held. Mirrors `pop world_coins i; push inventory i; collect` at the
    /// coin's seed index. Returns whether a coin was collected.
    pub fn collect(&mut self) -> Result<bool, GenerationError> {
        let Some(index) = self.coins.iter().position(|c| *c == self.position) else {
            return Ok(false);
        };
        if self.collected[index] {
            return Ok(false);
        }
        self.collected[index] = true;
        self.inventory.push(self.position);
        if let Some(writer) = self.recorder.as_mut() {
            writer.pop("world_coins", index)?;
            writer.push("inventory", index)?;
            writer.collect()?;
        }
        Ok(true)
    }

    /// Leave the level, if the player stands on the exit.
    ///
    /// On success, emits `exit player` into a bound recorder and flushes
    /// the recorded program to the writer's target file, when one was
    /// configured via [`Writer::with_target`]. Returns whether the level
    /// was completed.
    pub fn exit(&mut self) -> Result<bool, GenerationError> {
        if self.world.exit() != Some(self.position) {
            return Ok(false);
        }
        self.exited = true;
        if let Some(writer) = self.recorder.as_mut() {
            writer.exit_player()?;
            writer.flush()?;
        }
        Ok(true)
    }

    /// The bound recorder, if any.
    pub fn recorder(&self) -> Option<&Writer> {
        self.recorder.as_ref()
    }

    /// Consume the player, returning the bound recorder for serialization.
    pub fn into_recorder(self) -> Option<Writer> {
        self.recorder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Tile};

    // W W W W W
    // W P C E W
    // W W W W W
    fn corridor() -> World {
        World::new(
            Grid::new(vec![
                vec![Tile::Wall; 5],
                vec![Tile::Wall, Tile::Player, Tile::Coin, Tile::Exit, Tile::Wall],
                vec![Tile::Wall; 5],
            ])
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn starts_at_world_origin() {
        let world = corridor();
        let player = Player::new(&world);
        assert_eq!(player.location(), Coord::new(1, 1));
        assert_eq!(player.origin(), Coord::new(1, 1));
        assert_eq!(player.capacity(), 0);
        assert!(!player.exited());
    }

    #[test]
    fn blocked_by_neighborhood_and_by_direction() {
        let world = corridor();
        let player = Player::new(&world);
        assert!(player.blocked(None));
        assert!(player.blocked(Some(Direction::North)));
        assert!(player.blocked(Some(Direction::West)));
        assert!(!player.blocked(Some(Direction::East)));
    }

    #[test]
    fn step_into_wall_keeps_position() {
        let world = corridor();
        let mut player = Player::new(&world);
        assert!(!player.step(Direction::North).unwrap());
        assert_eq!(player.location(), Coord::new(1, 1));
        assert!(player.step(Direction::East).unwrap());
        assert_eq!(player.location(), Coord::new(1, 2));
    }

    #[test]
    fn collect_only_on_a_coin_and_only_once() {
        let world = corridor();
        let mut player = Player::new(&world);
        assert!(!player.collect().unwrap());
        player.step(Direction::East).unwrap();
        assert!(player.collect().unwrap());
        assert_eq!(player.capacity(), 1);
        assert!(!player.collect().unwrap());
        assert_eq!(player.capacity(), 1);
    }

    #[test]
    fn exit_requires_the_exit_cell() {
        let world = corridor();
        let mut player = Player::new(&world);
        assert!(!player.exit().unwrap());
        player.step(Direction::East).unwrap();
        player.step(Direction::East).unwrap();
        assert!(player.exit().unwrap());
        assert!(player.exited());
    }

    #[test]
    fn at_overrides_the_start_position() {
        let world = corridor();
        let player = Player::new(&world).at(Coord::new(1, 3));
        assert_eq!(player.location(), Coord::new(1, 3));
        // origin still reports the world's player tile.
        assert_eq!(player.origin(), Coord::new(1, 1));
    }

    #[test]
    fn seeded_inventory_counts_and_blocks_recollection() {
        let world = corridor();
        let mut player = Player::new(&world).with_inventory(vec![Coord::new(1, 2)]);
        assert_eq!(player.capacity(), 1);
        player.step(Direction::East).unwrap();
        // The coin under the player is already held.
        assert!(!player.collect().unwrap());
        assert_eq!(player.capacity(), 1);
    }

    #[test]
    fn seeded_items_outside_the_world_still_count() {
        let world = corridor();
        let player = Player::new(&world).with_inventory(vec![Coord::new(9, 9)]);
        assert_eq!(player.capacity(), 1);
    }

    #[test]
    fn exit_flushes_to_the_writer_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solution.nvm");

        let world = corridor();
        let mut player = Player::recording(&world, Writer::with_target(&path)).unwrap();
        player.step(Direction::East).unwrap();
        player.collect().unwrap();
        player.step(Direction::East).unwrap();
        assert!(player.exit().unwrap());

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("move player east\nexit player\n"));
    }

    #[test]
    fn failed_exit_does_not_flush() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solution.nvm");

        let world = corridor();
        let mut player = Player::recording(&world, Writer::with_target(&path)).unwrap();
        assert!(!player.exit().unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn recording_seeds_coin_arrays() {
        let world = corridor();
        let player = Player::recording(&world, Writer::new()).unwrap();
        let writer = player.into_recorder().unwrap();
        assert_eq!(
            writer.serialize().unwrap(),
            "alloc world_coins 1\nalloc inventory 1\nset constant (1,2)\npush world_coins 0\n"
        );
    }

    #[test]
    fn recording_mirrors_rejected_moves() {
        let world = corridor();
        let mut player = Player::recording(&world, Writer::new()).unwrap();
        player.step(Direction::North).unwrap();
        assert_eq!(player.location(), Coord::new(1, 1));
        let writer = player.into_recorder().unwrap();
        let last = writer.instructions().last().unwrap();
        assert_eq!(last.to_string(), "move player north");
    }

    #[test]
    fn full_run_records_a_complete_program() {
        let world = corridor();
        let mut player = Player::recording(&world, Writer::new()).unwrap();
        player.step(Direction::East).unwrap();
        player.collect().unwrap();
        player.step(Direction::East).unwrap();
        assert!(player.exit().unwrap());
        let writer = player.into_recorder().unwrap();
        assert_eq!(
            writer.serialize().unwrap(),
            "alloc world_coins 1\n\
             alloc inventory 1\n\
             set constant (1,2)\n\
             push world_coins 0\n\
             move player east\n\
             pop world_coins 0\n\
             push inventory 0\n\
             collect\n\
             move player east\n\
             exit player\n"
        );
    }

    #[test]
    fn failed_exit_emits_nothing() {
        let world = corridor();
        let mut player = Player::recording(&world, Writer::new()).unwrap();
        assert!(!player.exit().unwrap());
        let writer = player.into_recorder().unwrap();
        // Only the seed instructions are present.
        assert_eq!(writer.len(), 4);
    }

    #[test]
    fn coin_indices_stay_stable_after_collection() {
        // W W W W W W
        // W P C C E W
        // W W W W W W
        let world = World::new(
            Grid::new(vec![
                vec![Tile::Wall; 6],
                vec![
                    Tile::Wall,
                    Tile::Player,
                    Tile::Coin,
                    Tile::Coin,
                    Tile::Exit,
                    Tile::Wall,
                ],
                vec![Tile::Wall; 6],
            ])
            .unwrap(),
        )
        .unwrap();
        let mut player = Player::recording(&world, Writer::new()).unwrap();
        player.step(Direction::East).unwrap();
        player.collect().unwrap();
        player.step(Direction::East).unwrap();
        player.collect().unwrap();
        let writer = player.into_recorder().unwrap();
        let text = writer.serialize().unwrap();
        // The second coin keeps seed index 1 even after the first is taken.
        assert!(text.contains("pop world_coins 0\npush inventory 0\ncollect\n"));
        assert!(text.contains("pop world_coins 1\npush inventory 1\ncollect\n"));
    }
}
