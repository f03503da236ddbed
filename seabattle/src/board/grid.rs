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
//! Defines the grid type shared by the fleet and fog views of the board.

use std::ops::{Index, IndexMut};

use crate::coord::{Coordinate, CELLS, SIZE};

/// What is known about a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mark {
    /// Open water, or a cell nobody has fired at yet in a fog view.
    Water,
    /// Part of a ship that has not been hit.
    Ship,
    /// Part of a ship that has been hit.
    Hit,
    /// Open water that has been fired at.
    Miss,
}

impl Mark {
    /// Returns true if a ship covers this cell, hit or not.
    pub fn occupied(self) -> bool {
        matches!(self, Mark::Ship | Mark::Hit)
    }
}

impl Default for Mark {
    fn default() -> Self {
        Mark::Water
    }
}

/// A full 10x10 grid of marks.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    cells: Box<[Mark]>,
}

impl Grid {
    pub(super) fn new() -> Self {
        let cells = (0..CELLS).map(|_| Default::default()).collect();
        Self { cells }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over its marks.
    pub(super) fn rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Mark>> {
        self.cells.chunks(SIZE).map(|row| row.iter().copied())
    }

    /// Number of cells covered by ships.
    pub(super) fn occupied(&self) -> usize {
        self.cells.iter().filter(|mark| mark.occupied()).count()
    }
}

impl Index<Coordinate> for Grid {
    type Output = Mark;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        &self.cells[coord.index()]
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        &mut self.cells[coord.index()]
    }
}
