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
//! Core model of a two-player hot-seat game of Battleship.
//!
//! Each player places the five ships of the standard fleet on their own 10x10 grid, then
//! the players take turns firing at each other's grid until one fleet is fully sunk.
//!
//! [`coord`] converts between typed coordinates such as `B7` and board positions.
//! [`ships`] holds the fixed fleet catalog and per-ship hit tracking.
//! [`board`] owns both players' grids and fleets and validates placements.
//! [`game`] sequences the placement and shooting phases.

pub mod board;
pub mod coord;
pub mod game;
pub mod ships;

pub use crate::{
    board::{Board, GameError, Mark, Orientation, ShotOutcome, View},
    coord::{Coordinate, Segment},
    game::{GameState, Phase, Placed, Player},
    ships::{Ship, ShipKind, FLEET},
};
