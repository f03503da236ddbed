// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Types that make up the game board.

use log::{debug, trace};

use crate::{
    coord::{Coordinate, Segment},
    game::Player,
    ships::{Ship, ShipKind, FLEET},
};

use self::grid::Grid;
pub use self::{errors::GameError, grid::Mark, placement::Orientation};

mod errors;
mod grid;
mod placement;

/// Which of a player's two grids to look at.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum View {
    /// The player's own ships and every shot the opponent has fired at them.
    Fleet,
    /// What the player has learned about the opponent's grid from their own shots.
    Fog,
}

/// Result of a shot on the opponent's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the given ship without sinking it, or hit a ship that was already
    /// sunk.
    Hit(ShipKind),
    /// The shot sank the given ship and the opponent has `remaining` ships left.
    Sunk { ship: ShipKind, remaining: usize },
    /// The shot sank the opponent's last ship.
    Victory(ShipKind),
}

impl ShotOutcome {
    /// Get the kind of ship that was hit.
    pub fn ship(&self) -> Option<ShipKind> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(ship) | ShotOutcome::Sunk { ship, .. } | ShotOutcome::Victory(ship) => {
                Some(ship)
            }
        }
    }
}

/// One player's half of the board.
#[derive(Debug, Clone)]
struct Side {
    /// The player's own ocean, with shots fired at it.
    grid: Grid,

    /// The player's record of their shots at the opponent.
    fog: Grid,

    /// Ships in placement order.
    fleet: Vec<Ship>,

    /// Ships not yet sunk. Starts at the full fleet size.
    remaining: usize,
}

impl Side {
    fn new() -> Self {
        Self {
            grid: Grid::new(),
            fog: Grid::new(),
            fleet: Vec::with_capacity(FLEET.len()),
            remaining: FLEET.len(),
        }
    }
}

/// Holds both players' grids, fog views and fleets.
#[derive(Debug, Clone)]
pub struct Board {
    sides: [Side; 2],
}

impl Board {
    /// Construct an empty board for two players.
    pub fn new() -> Self {
        Self {
            sides: [Side::new(), Side::new()],
        }
    }

    fn side(&self, player: Player) -> &Side {
        &self.sides[player.index()]
    }

    /// Split the board into the shooter's side and the target's side.
    fn sides_mut(&mut self, shooter: Player) -> (&mut Side, &mut Side) {
        let (p1, p2) = self.sides.split_at_mut(1);
        match shooter {
            Player::P1 => (&mut p1[0], &mut p2[0]),
            Player::P2 => (&mut p2[0], &mut p1[0]),
        }
    }

    /// Try to place the ship for the given placement slot along `segment`. On success the
    /// ship's cells are marked on the player's grid and its orientation is returned. On
    /// failure the board is unchanged.
    ///
    /// Panics if `order` is not the player's next unfilled slot.
    pub fn place_ship(
        &mut self,
        player: Player,
        order: usize,
        segment: &Segment,
    ) -> Result<Orientation, GameError> {
        let side = &mut self.sides[player.index()];
        assert_eq!(
            order,
            side.fleet.len(),
            "{} must fill placement slot {} next",
            player,
            side.fleet.len()
        );
        let kind = match ShipKind::for_order(order) {
            Some(kind) => kind,
            None => panic!("{} has already placed every ship", player),
        };

        let orientation = placement::validate(&side.grid, kind, segment).map_err(|err| {
            debug!("{} could not place {} at {}: {:?}", player, kind, segment, err);
            err
        })?;
        let cells = placement::span(segment);
        for &coord in cells.iter() {
            side.grid[coord] = Mark::Ship;
        }
        side.fleet.push(Ship::new(kind, cells));
        debug!("{} placed {} at {} ({:?})", player, kind, segment, orientation);
        Ok(orientation)
    }

    /// Fire a shot from `shooter` at the given cell of the opponent's grid.
    ///
    /// Cells may be fired at more than once. A repeated shot at open water is a fresh
    /// miss and a repeated shot at a sunk ship reports a hit without changing anything.
    pub fn fire_shot(&mut self, shooter: Player, coord: Coordinate) -> ShotOutcome {
        let (own, target) = self.sides_mut(shooter);
        let outcome = match target.fleet.iter_mut().find(|ship| ship.occupies(coord)) {
            None => {
                target.grid[coord] = Mark::Miss;
                own.fog[coord] = Mark::Miss;
                ShotOutcome::Miss
            }
            Some(ship) if !ship.sunk() => {
                target.grid[coord] = Mark::Hit;
                own.fog[coord] = Mark::Hit;
                ship.set_hit(coord);
                if ship.pristines().next().is_none() {
                    ship.mark_sunk();
                    target.remaining -= 1;
                    if target.remaining == 0 {
                        ShotOutcome::Victory(ship.kind())
                    } else {
                        ShotOutcome::Sunk {
                            ship: ship.kind(),
                            remaining: target.remaining,
                        }
                    }
                } else {
                    ShotOutcome::Hit(ship.kind())
                }
            }
            Some(ship) => {
                trace!("{} fired at {} on an already sunk {}", shooter, coord, ship.kind());
                ShotOutcome::Hit(ship.kind())
            }
        };
        debug!("{} fired at {}: {:?}", shooter, coord, outcome);
        outcome
    }

    /// Number of the player's ships that are still afloat.
    pub fn remaining(&self, player: Player) -> usize {
        self.side(player).remaining
    }

    /// The ships the player has placed, in placement order.
    pub fn fleet(&self, player: Player) -> &[Ship] {
        &self.side(player).fleet
    }

    /// Number of cells on the player's own grid covered by ships.
    pub fn occupied(&self, player: Player) -> usize {
        self.side(player).grid.occupied()
    }

    /// Get the mark at the given cell of one of the player's grids.
    pub fn mark(&self, player: Player, view: View, coord: Coordinate) -> Mark {
        self.grid(player, view)[coord]
    }

    /// Get an iterator over the rows of one of the player's grids. The iterator's item is
    /// another iterator over the marks of a single row.
    pub fn iter_rows<'a>(
        &'a self,
        player: Player,
        view: View,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Mark>> {
        self.grid(player, view).rows()
    }

    fn grid(&self, player: Player, view: View) -> &Grid {
        let side = self.side(player);
        match view {
            View::Fleet => &side.grid,
            View::Fog => &side.fog,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
