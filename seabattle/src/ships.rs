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
//! The fleet catalog and the ships placed from it.
use std::fmt;

use crate::coord::Coordinate;

/// The five kinds of ship every player places, in placement order.
pub const FLEET: [ShipKind; 5] = [
    ShipKind::AircraftCarrier,
    ShipKind::Battleship,
    ShipKind::Submarine,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
];

/// Kind of ship in the standard fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipKind {
    /// Aircraft Carrier: length 5.
    AircraftCarrier,
    /// Battleship: length 4.
    Battleship,
    /// Submarine: length 3.
    Submarine,
    /// Cruiser: length 3.
    Cruiser,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipKind {
    /// Get the kind placed in the given slot, counting from zero. Returns `None` past the
    /// last slot.
    pub fn for_order(order: usize) -> Option<Self> {
        FLEET.get(order).copied()
    }

    /// Name of this kind as shown to players.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::AircraftCarrier => "Aircraft Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Submarine => "Submarine",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A placed ship and the damage it has taken.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,

    /// Cells covered by the ship, from its start to its end.
    cells: Vec<Coordinate>,

    /// Whether the cell at the same position in `cells` has been hit.
    hits: Vec<bool>,

    /// Set once every cell has been hit. Never cleared.
    sunk: bool,
}

impl Ship {
    /// Construct an undamaged ship of the given kind over the given cells. Panics if the
    /// number of cells does not match the kind's length.
    pub(crate) fn new(kind: ShipKind, cells: Vec<Coordinate>) -> Self {
        assert_eq!(cells.len(), kind.len(), "{} has the wrong number of cells", kind);
        let hits = vec![false; cells.len()];
        Self {
            kind,
            cells,
            hits,
            sunk: false,
        }
    }

    /// The kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Get an iterator over the cells of this ship.
    pub fn cells(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.cells.iter().copied()
    }

    /// Returns true if this ship covers the given cell.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Get an iterator over the cells of this ship and whether each has been hit.
    pub fn hits(&self) -> impl '_ + Iterator<Item = (Coordinate, bool)> {
        self.cells().zip(self.hits.iter().copied())
    }

    /// Get an iterator over the cells of this ship which have not been hit yet.
    pub fn pristines(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.hits().filter(|&(_, hit)| !hit).map(|(coord, _)| coord)
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    /// Record a hit on the given cell. Returns the position of the cell within the ship,
    /// or `None` if the ship does not cover it. Hitting the same cell twice is harmless.
    pub(crate) fn set_hit(&mut self, coord: Coordinate) -> Option<usize> {
        let pos = self.cells.iter().position(|&c| c == coord)?;
        self.hits[pos] = true;
        Some(pos)
    }

    /// Flag the ship as sunk.
    pub(crate) fn mark_sunk(&mut self) {
        self.sunk = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destroyer() -> Ship {
        Ship::new(
            ShipKind::Destroyer,
            vec![
                Coordinate::new(0, 0).unwrap(),
                Coordinate::new(0, 1).unwrap(),
            ],
        )
    }

    #[test]
    fn catalog_order_and_lengths() {
        let expected = [
            ("Aircraft Carrier", 5),
            ("Battleship", 4),
            ("Submarine", 3),
            ("Cruiser", 3),
            ("Destroyer", 2),
        ];
        for (order, &(name, len)) in expected.iter().enumerate() {
            let kind = ShipKind::for_order(order).unwrap();
            assert_eq!(kind.name(), name);
            assert_eq!(kind.len(), len);
        }
        assert_eq!(ShipKind::for_order(5), None);
    }

    #[test]
    fn hits_are_tracked_per_cell() {
        let mut ship = destroyer();
        assert_eq!(ship.pristines().count(), 2);

        let a2 = Coordinate::new(0, 1).unwrap();
        assert_eq!(ship.set_hit(a2), Some(1));
        assert_eq!(ship.pristines().collect::<Vec<_>>(), vec![Coordinate::new(0, 0).unwrap()]);

        // Repeating the hit changes nothing.
        assert_eq!(ship.set_hit(a2), Some(1));
        assert_eq!(ship.pristines().count(), 1);
        assert!(!ship.sunk());
    }

    #[test]
    fn missing_cell_is_not_a_hit() {
        let mut ship = destroyer();
        assert_eq!(ship.set_hit(Coordinate::new(5, 5).unwrap()), None);
        assert_eq!(ship.pristines().count(), 2);
    }

    #[test]
    #[should_panic]
    fn wrong_cell_count_panics() {
        Ship::new(ShipKind::Battleship, vec![Coordinate::new(0, 0).unwrap()]);
    }
}
