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
//! Sequencing of a whole game: both players place their fleets, then take turns firing
//! until one fleet is gone.
use std::fmt;

use log::{debug, info};

use crate::{
    board::{Board, GameError, Orientation, ShotOutcome},
    coord::{Coordinate, Segment},
    ships::{ShipKind, FLEET},
};

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// The player's number as shown on the console.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Stage the game is in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// `player` is placing the ship for placement slot `slot`.
    Placing { player: Player, slot: usize },
    /// It is the given player's turn to fire.
    Shooting(Player),
    /// The given player sank the last of the opponent's ships.
    GameOver(Player),
}

/// Report of a ship that was placed successfully.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placed {
    /// The player who placed the ship.
    pub player: Player,
    /// The ship that was placed.
    pub kind: ShipKind,
    /// The direction the ship runs in.
    pub orientation: Orientation,
    /// True if this was the player's last ship.
    pub fleet_complete: bool,
}

/// The complete state of one game.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    phase: Phase,
}

impl GameState {
    /// Start a new game with empty boards. Player 1 places first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::Placing {
                player: Player::P1,
                slot: 0,
            },
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    /// During placement, the player who is placing and the ship they must place next.
    pub fn pending(&self) -> Option<(Player, ShipKind)> {
        match self.phase {
            Phase::Placing { player, slot } => ShipKind::for_order(slot).map(|kind| (player, kind)),
            _ => None,
        }
    }

    /// Place the pending ship along `segment`. If the placement is rejected nothing
    /// changes and the same ship is still pending.
    ///
    /// Panics if the game is not in the placement phase.
    pub fn place(&mut self, segment: &Segment) -> Result<Placed, GameError> {
        let (player, slot) = match self.phase {
            Phase::Placing { player, slot } => (player, slot),
            other => panic!("cannot place ships during {:?}", other),
        };
        let orientation = self.board.place_ship(player, slot, segment)?;
        let kind = FLEET[slot];
        let fleet_complete = slot + 1 == FLEET.len();
        self.phase = match (fleet_complete, player) {
            (false, _) => Phase::Placing {
                player,
                slot: slot + 1,
            },
            (true, Player::P1) => Phase::Placing {
                player: Player::P2,
                slot: 0,
            },
            (true, Player::P2) => Phase::Shooting(Player::P1),
        };
        if fleet_complete {
            debug!("{} finished placing, now {:?}", player, self.phase);
        }
        Ok(Placed {
            player,
            kind,
            orientation,
            fleet_complete,
        })
    }

    /// Fire the current player's shot at the given cell of the opponent's grid. A winning
    /// shot ends the game; any other shot passes the turn to the opponent.
    ///
    /// Panics if the game is not in the shooting phase.
    pub fn fire(&mut self, coord: Coordinate) -> ShotOutcome {
        let shooter = match self.phase {
            Phase::Shooting(player) => player,
            other => panic!("cannot fire during {:?}", other),
        };
        let outcome = self.board.fire_shot(shooter, coord);
        self.phase = match outcome {
            ShotOutcome::Victory(_) => {
                info!("{} sank the last ship and won", shooter);
                Phase::GameOver(shooter)
            }
            _ => Phase::Shooting(shooter.opponent()),
        };
        outcome
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: [&str; 5] = ["A1 A5", "C1 C4", "E1 E3", "G1 G3", "I1 I2"];

    fn seg(s: &str) -> Segment {
        s.parse().unwrap()
    }

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn placed_game() -> GameState {
        let mut game = GameState::new();
        for _ in 0..2 {
            for s in LAYOUT.iter() {
                game.place(&seg(s)).unwrap();
            }
        }
        game
    }

    #[test]
    fn placement_walks_both_fleets() {
        let mut game = GameState::new();
        assert_eq!(game.pending(), Some((Player::P1, ShipKind::AircraftCarrier)));

        for (i, s) in LAYOUT.iter().enumerate() {
            let placed = game.place(&seg(s)).unwrap();
            assert_eq!(placed.player, Player::P1);
            assert_eq!(placed.kind, FLEET[i]);
            assert_eq!(placed.fleet_complete, i == 4);
        }
        assert_eq!(
            game.phase(),
            Phase::Placing {
                player: Player::P2,
                slot: 0
            }
        );

        for s in LAYOUT.iter() {
            game.place(&seg(s)).unwrap();
        }
        assert_eq!(game.phase(), Phase::Shooting(Player::P1));
        assert_eq!(game.pending(), None);
    }

    #[test]
    fn failed_placement_retries_same_slot() {
        let mut game = GameState::new();
        game.place(&seg("A1 A5")).unwrap();
        assert_eq!(game.place(&seg("A1 A4")), Err(GameError::Overlap));
        assert_eq!(game.place(&seg("C1 D2")), Err(GameError::Orientation));
        assert_eq!(
            game.place(&seg("C1 C3")),
            Err(GameError::Length {
                ship: ShipKind::Battleship
            })
        );
        assert_eq!(
            game.phase(),
            Phase::Placing {
                player: Player::P1,
                slot: 1
            }
        );
        assert_eq!(game.board().fleet(Player::P1).len(), 1);
    }

    #[test]
    fn turns_alternate_after_every_shot() {
        let mut game = placed_game();
        assert_eq!(game.fire(coord("J10")), ShotOutcome::Miss);
        assert_eq!(game.phase(), Phase::Shooting(Player::P2));
        assert_eq!(
            game.fire(coord("A1")),
            ShotOutcome::Hit(ShipKind::AircraftCarrier)
        );
        assert_eq!(game.phase(), Phase::Shooting(Player::P1));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn winning_shot_ends_the_game() {
        let mut game = placed_game();
        let targets: Vec<Coordinate> = LAYOUT
            .iter()
            .flat_map(|s| {
                let segment = seg(s);
                let (start, end) = (segment.start(), segment.end());
                (start.x()..=end.x())
                    .flat_map(move |x| (start.y()..=end.y()).map(move |y| (x, y)))
                    .map(|(x, y)| Coordinate::new(x, y).unwrap())
                    .collect::<Vec<_>>()
            })
            .collect();

        let last = targets.len() - 1;
        for (i, &target) in targets.iter().enumerate() {
            let outcome = game.fire(target);
            if i == last {
                assert_eq!(outcome, ShotOutcome::Victory(ShipKind::Destroyer));
            } else {
                assert_ne!(outcome, ShotOutcome::Miss);
                // Player 2 wastes every turn on the same cell.
                assert_eq!(game.fire(coord("J10")), ShotOutcome::Miss);
            }
        }
        assert_eq!(game.phase(), Phase::GameOver(Player::P1));
        assert_eq!(game.winner(), Some(Player::P1));
        assert_eq!(game.board().remaining(Player::P2), 0);
    }

    #[test]
    #[should_panic]
    fn cannot_fire_while_placing() {
        let mut game = GameState::new();
        game.fire(coord("A1"));
    }

    #[test]
    #[should_panic]
    fn cannot_place_while_shooting() {
        let mut game = placed_game();
        let _ = game.place(&seg("J1 J2"));
    }
}
