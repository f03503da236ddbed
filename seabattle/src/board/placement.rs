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
//! Legality checks for a proposed ship placement.

use std::cmp;

use log::trace;

use crate::{
    board::{grid::Grid, GameError},
    coord::{Coordinate, Segment, SIZE},
    ships::ShipKind,
};

/// Direction a placed ship runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// The ship's cells share a row.
    Horizontal,
    /// The ship's cells share a column.
    Vertical,
}

/// Check whether a ship of the given kind may be placed along `segment` on `grid`.
/// Returns the ship's orientation. Never modifies the grid.
///
/// The ship must run along a single row or column, span exactly its own length, and
/// neither it nor any cell next to it (diagonals included) may already hold a ship.
pub(super) fn validate(
    grid: &Grid,
    kind: ShipKind,
    segment: &Segment,
) -> Result<Orientation, GameError> {
    let (start, end) = (segment.start(), segment.end());
    let orientation = if start.x() != end.x() && start.y() != end.y() {
        return Err(GameError::Orientation);
    } else if start.x() != end.x() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    let span = match orientation {
        Orientation::Horizontal => end.x() - start.x() + 1,
        Orientation::Vertical => end.y() - start.y() + 1,
    };
    if span != kind.len() {
        return Err(GameError::Length { ship: kind });
    }

    let xs = start.x().saturating_sub(1)..=cmp::min(end.x() + 1, SIZE - 1);
    let ys = start.y().saturating_sub(1)..=cmp::min(end.y() + 1, SIZE - 1);
    for y in ys {
        for x in xs.clone() {
            // Both ranges are clamped to the board.
            let coord = match Coordinate::new(x, y) {
                Some(coord) => coord,
                None => continue,
            };
            if grid[coord].occupied() {
                trace!("{} at {} touches a ship at {}", kind, segment, coord);
                return Err(GameError::Overlap);
            }
        }
    }
    Ok(orientation)
}

/// The cells covered by an orthogonal segment, from start to end.
pub(super) fn span(segment: &Segment) -> Vec<Coordinate> {
    let (start, end) = (segment.start(), segment.end());
    (start.y()..=end.y())
        .flat_map(|y| (start.x()..=end.x()).filter_map(move |x| Coordinate::new(x, y)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(s: &str) -> Segment {
        s.parse().unwrap()
    }

    fn grid_with(cells: &[&str]) -> Grid {
        let mut grid = Grid::new();
        for cell in cells {
            grid[cell.parse::<Coordinate>().unwrap()] = crate::board::Mark::Ship;
        }
        grid
    }

    #[test]
    fn accepts_both_orientations() {
        let grid = Grid::new();
        assert_eq!(
            validate(&grid, ShipKind::AircraftCarrier, &seg("A1 A5")),
            Ok(Orientation::Horizontal)
        );
        assert_eq!(
            validate(&grid, ShipKind::Destroyer, &seg("A1 B1")),
            Ok(Orientation::Vertical)
        );
    }

    #[test]
    fn rejects_diagonals_before_length() {
        let grid = Grid::new();
        assert_eq!(
            validate(&grid, ShipKind::Destroyer, &seg("A1 B2")),
            Err(GameError::Orientation)
        );
        assert_eq!(
            validate(&grid, ShipKind::Battleship, &seg("A4 D1")),
            Err(GameError::Orientation)
        );
    }

    #[test]
    fn rejects_wrong_length() {
        let grid = Grid::new();
        assert_eq!(
            validate(&grid, ShipKind::Battleship, &seg("A1 A5")),
            Err(GameError::Length {
                ship: ShipKind::Battleship
            })
        );
        assert_eq!(
            validate(&grid, ShipKind::Destroyer, &seg("C3 C3")),
            Err(GameError::Length {
                ship: ShipKind::Destroyer
            })
        );
    }

    #[test]
    fn rejects_overlap_and_neighbours() {
        let grid = grid_with(&["E5"]);
        // Direct overlap.
        assert_eq!(validate(&grid, ShipKind::Destroyer, &seg("E4 E5")), Err(GameError::Overlap));
        // Orthogonal neighbour.
        assert_eq!(validate(&grid, ShipKind::Destroyer, &seg("E6 E7")), Err(GameError::Overlap));
        // Diagonal neighbour.
        assert_eq!(validate(&grid, ShipKind::Destroyer, &seg("F6 G6")), Err(GameError::Overlap));
        // One empty cell between is fine.
        assert_eq!(
            validate(&grid, ShipKind::Destroyer, &seg("E7 E8")),
            Ok(Orientation::Horizontal)
        );
    }

    #[test]
    fn buffer_is_clamped_at_edges() {
        let grid = grid_with(&["J10"]);
        assert_eq!(validate(&grid, ShipKind::Destroyer, &seg("J8 J9")), Err(GameError::Overlap));
        assert_eq!(
            validate(&grid, ShipKind::Destroyer, &seg("A1 A2")),
            Ok(Orientation::Horizontal)
        );
    }

    #[test]
    fn span_follows_the_segment() {
        let cells: Vec<String> = span(&seg("B3 D3")).iter().map(|c| c.to_string()).collect();
        assert_eq!(cells, vec!["B3", "C3", "D3"]);
    }
}
