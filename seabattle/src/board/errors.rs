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
//! Errors reported while placing ships and firing shots.

use thiserror::Error;

use crate::ships::ShipKind;

/// Reason a player's input was rejected. Every variant is recoverable: the player is
/// asked again for the same ship or the same shot. The message of each variant is the
/// text shown on the console.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GameError {
    /// The input did not match the coordinate grammar.
    #[error("Error! Wrong coordinates format! Try again:")]
    Format,

    /// The ship's ends share neither a row nor a column.
    #[error("Error! Wrong ship location! Try again:")]
    Orientation,

    /// The ship's span differs from the length of the ship being placed.
    #[error("Error! Wrong length of the {ship}! Try again:")]
    Length {
        /// The ship that was being placed.
        ship: ShipKind,
    },

    /// The ship would overlap or touch a ship that was already placed.
    #[error("Error! You placed it too close to another one. Try again:")]
    Overlap,

    /// The shot names a cell outside the board.
    #[error("Error! You entered the wrong coordinates! Try again:")]
    Range,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_message_names_the_ship() {
        let err = GameError::Length {
            ship: ShipKind::Submarine,
        };
        assert_eq!(err.to_string(), "Error! Wrong length of the Submarine! Try again:");
    }
}
