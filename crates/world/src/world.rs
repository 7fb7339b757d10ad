//! Read-only world model derived from a grid.

use crate::error::WorldError;
use crate::grid::{Grid, Tile};
use nadia_common::Coord;

/// The static layout of one level: dimensions, player origin, walls, coins
/// and exit, all derived once from a [`Grid`] at construction.
///
/// A world never mutates. Downstream position and inventory changes happen
/// on [`Player`](crate::Player) or inside the VM executor, which keeps this
/// model the single source of truth for the layout.
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    walls: Grid,
    coins: Grid,
    size: (usize, usize),
    player: Coord,
    exit: Option<Coord>,
}

impl World {
    /// Derive a world from a grid.
    ///
    /// Enforces the authoring contract: exactly one PLAYER tag and at most
    /// one EXIT tag. (A finishable level also needs exactly one exit, but
    /// an exit-less world is still constructible for sandbox use.)
    pub fn new(grid: Grid) -> Result<World, WorldError> {
        let players = grid.filtered(|t| t == Tile::Player).as_list();
        let player = match players.as_slice() {
            [] => return Err(WorldError::MissingPlayer),
            [one] => *one,
            [first, second, ..] => {
                return Err(WorldError::MultiplePlayers {
                    first: *first,
                    second: *second,
                })
            }
        };

        let exits = grid.filtered(|t| t == Tile::Exit).as_list();
        let exit = match exits.as_slice() {
            [] => None,
            [one] => Some(*one),
            [first, second, ..] => {
                return Err(WorldError::MultipleExits {
                    first: *first,
                    second: *second,
                })
            }
        };

        let walls = grid.filtered(|t| t == Tile::Wall);
        let coins = grid.filtered(|t| t == Tile::Coin);
        let size = grid.shape();

        Ok(World {
            grid,
            walls,
            coins,
            size,
            player,
            exit,
        })
    }

    /// The player's starting coordinate.
    pub fn player(&self) -> Coord {
        self.player
    }

    /// Rows and columns of the world.
    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    /// Filtered view containing only the walls.
    pub fn walls(&self) -> &Grid {
        &self.walls
    }

    /// Filtered view containing only the coins.
    pub fn coins(&self) -> &Grid {
        &self.coins
    }

    /// The exit coordinate, if the level has one.
    pub fn exit(&self) -> Option<Coord> {
        self.exit
    }

    /// The full underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether a wall occupies `coord`.
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.walls.tile_at(coord).is_some()
    }

    /// Whether `coord` falls inside the world.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.grid.contains(coord)
    }

    /// Row-major coordinates of every coin.
    pub fn coin_positions(&self) -> Vec<Coord> {
        self.coins.as_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<Tile>>) -> Grid {
        Grid::new(rows).unwrap()
    }

    fn sample_world() -> World {
        // W W W W W
        // W P C E W
        // W W W W W
        World::new(grid(vec![
            vec![Tile::Wall; 5],
            vec![Tile::Wall, Tile::Player, Tile::Coin, Tile::Exit, Tile::Wall],
            vec![Tile::Wall; 5],
        ]))
        .unwrap()
    }

    #[test]
    fn derived_queries() {
        let world = sample_world();
        assert_eq!(world.size(), (3, 5));
        assert_eq!(world.player(), Coord::new(1, 1));
        assert_eq!(world.exit(), Some(Coord::new(1, 3)));
        assert_eq!(world.coin_positions(), vec![Coord::new(1, 2)]);
        assert_eq!(world.walls().as_list().len(), 12);
    }

    #[test]
    fn wall_and_bounds_queries() {
        let world = sample_world();
        assert!(world.is_wall(Coord::new(0, 0)));
        assert!(!world.is_wall(Coord::new(1, 2)));
        assert!(world.in_bounds(Coord::new(2, 4)));
        assert!(!world.in_bounds(Coord::new(3, 0)));
        assert!(!world.in_bounds(Coord::new(-1, 0)));
    }

    #[test]
    fn missing_player_rejected() {
        let err = World::new(grid(vec![vec![Tile::Air, Tile::Exit]])).unwrap_err();
        assert_eq!(err, WorldError::MissingPlayer);
    }

    #[test]
    fn multiple_players_rejected() {
        let err = World::new(grid(vec![vec![Tile::Player, Tile::Player]])).unwrap_err();
        assert_eq!(
            err,
            WorldError::MultiplePlayers {
                first: Coord::new(0, 0),
                second: Coord::new(0, 1)
            }
        );
    }

    #[test]
    fn multiple_exits_rejected() {
        let err = World::new(grid(vec![vec![
            Tile::Player,
            Tile::Exit,
            Tile::Exit,
        ]]))
        .unwrap_err();
        assert_eq!(
            err,
            WorldError::MultipleExits {
                first: Coord::new(0, 1),
                second: Coord::new(0, 2)
            }
        );
    }

    #[test]
    fn exitless_world_is_constructible() {
        let world = World::new(grid(vec![vec![Tile::Player, Tile::Air]])).unwrap();
        assert_eq!(world.exit(), None);
    }
}
