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
//! Conversion between typed coordinates such as `B7` and positions on the board.
//!
//! Rows are lettered `A` through `J` from the top and columns are numbered `1` through
//! `10` from the left. Internally a [`Coordinate`] is a zero-based `(x, y)` pair where `x`
//! is the column and `y` is the row.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::GameError;

/// Width and height of the board.
pub const SIZE: usize = 10;

/// Total number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Lexical shape of a single coordinate token.
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<row>[A-J])(?P<col>[0-9]{1,2})$").unwrap());

/// The coordinates of a cell on the board. Always in bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Column, `0` for column `1`.
    x: usize,
    /// Row, `0` for row `A`.
    y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`. Returns `None` if either is
    /// off the board.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < SIZE && y < SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Recover the coordinate of a linear cell index. Returns `None` if `idx` is not a
    /// cell of the board.
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < CELLS {
            Some(Self {
                x: idx % SIZE,
                y: idx / SIZE,
            })
        } else {
            None
        }
    }

    /// Zero-based column.
    pub fn x(self) -> usize {
        self.x
    }

    /// Zero-based row.
    pub fn y(self) -> usize {
        self.y
    }

    /// Linear index of this cell, `x + y * 10`.
    pub fn index(self) -> usize {
        self.x + self.y * SIZE
    }

    /// The letter naming this cell's row.
    pub fn row_letter(self) -> char {
        row_letter(self.y)
    }

    /// Decode a single token. Malformed tokens are [`GameError::Format`]; tokens that are
    /// well formed but name a column outside `1..=10` are [`GameError::Range`].
    pub fn decode(token: &str) -> Result<Self, GameError> {
        let captures = TOKEN.captures(token).ok_or(GameError::Format)?;
        let y = (captures["row"].as_bytes()[0] - b'A') as usize;
        let column: usize = captures["col"].parse().map_err(|_| GameError::Format)?;
        column
            .checked_sub(1)
            .and_then(|x| Self::new(x, y))
            .ok_or(GameError::Range)
    }
}

/// Letter used for the row with the given zero-based index.
pub fn row_letter(y: usize) -> char {
    (b'A' + y as u8) as char
}

impl FromStr for Coordinate {
    type Err = GameError;

    /// Decode a shot token, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s.trim())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.x + 1)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

/// A candidate ship placement: two coordinates ordered so that `start` is not after `end`
/// on either axis whenever the two share a row or column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Segment {
    start: Coordinate,
    end: Coordinate,
}

impl Segment {
    /// Build a segment from two ends given in either order.
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        if a.x > b.x || a.y > b.y {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// The lower end of the segment.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The upper end of the segment.
    pub fn end(&self) -> Coordinate {
        self.end
    }
}

impl FromStr for Segment {
    type Err = GameError;

    /// Decode a placement line made of exactly two coordinate tokens separated by
    /// whitespace. Every failure, including off-board columns, is a format error here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(a), Some(b), None) => {
                let a = Coordinate::decode(a).map_err(|_| GameError::Format)?;
                let b = Coordinate::decode(b).map_err(|_| GameError::Format)?;
                Ok(Self::new(a, b))
            }
            _ => Err(GameError::Format),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: usize, y: usize) -> Coordinate {
        Coordinate::new(x, y).unwrap()
    }

    #[test]
    fn decodes_corners() {
        assert_eq!("A1".parse(), Ok(coord(0, 0)));
        assert_eq!("A10".parse(), Ok(coord(9, 0)));
        assert_eq!("J1".parse(), Ok(coord(0, 9)));
        assert_eq!("J10".parse(), Ok(coord(9, 9)));
        assert_eq!("B7".parse(), Ok(coord(6, 1)));
    }

    #[test]
    fn shot_tokens_are_trimmed() {
        assert_eq!("  C3 \n".parse(), Ok(coord(2, 2)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in &["", "A", "1", "K1", "a1", "AA", "A-1", "A100", "A1x", "A 1"] {
            assert_eq!(
                token.parse::<Coordinate>(),
                Err(GameError::Format),
                "{:?}",
                token
            );
        }
    }

    #[test]
    fn off_board_columns_are_range_errors() {
        assert_eq!("A0".parse::<Coordinate>(), Err(GameError::Range));
        assert_eq!("A11".parse::<Coordinate>(), Err(GameError::Range));
        assert_eq!("J99".parse::<Coordinate>(), Err(GameError::Range));
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(coord(0, 0).index(), 0);
        assert_eq!(coord(0, 1).index(), 10);
        assert_eq!(coord(9, 9).index(), 99);
        assert_eq!(Coordinate::from_index(57), Some(coord(7, 5)));
        assert_eq!(Coordinate::from_index(100), None);
    }

    #[test]
    fn new_checks_bounds() {
        assert!(Coordinate::new(10, 0).is_none());
        assert!(Coordinate::new(0, 10).is_none());
    }

    #[test]
    fn displays_as_token() {
        assert_eq!(coord(0, 0).to_string(), "A1");
        assert_eq!(coord(9, 9).to_string(), "J10");
    }

    #[test]
    fn segment_orders_its_ends() {
        let seg: Segment = "A5 A1".parse().unwrap();
        assert_eq!(seg.start(), coord(0, 0));
        assert_eq!(seg.end(), coord(4, 0));

        let seg: Segment = "D2 B2".parse().unwrap();
        assert_eq!(seg.start(), coord(1, 1));
        assert_eq!(seg.end(), coord(1, 3));
    }

    #[test]
    fn segment_needs_exactly_two_tokens() {
        assert_eq!("A1".parse::<Segment>(), Err(GameError::Format));
        assert_eq!("A1 A2 A3".parse::<Segment>(), Err(GameError::Format));
        assert_eq!("".parse::<Segment>(), Err(GameError::Format));
        assert_eq!("A1A2".parse::<Segment>(), Err(GameError::Format));
    }

    #[test]
    fn segment_reports_off_board_as_format() {
        assert_eq!("A9 A11".parse::<Segment>(), Err(GameError::Format));
        assert_eq!("A0 A2".parse::<Segment>(), Err(GameError::Format));
    }
}
