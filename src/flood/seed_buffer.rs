/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::seed::*;
use crate::grid::*;

///
/// A dense grid recording the nearest known seed for every cell
///
/// `None` indicates that no seed has reached the cell yet. Two seed buffers are ping-ponged by the
/// propagation passes: each pass reads one buffer and overwrites every cell of the other, and the
/// buffer holding the converged assignment is handed on by value once the stride schedule has run.
///
#[derive(Clone, PartialEq, Debug)]
pub struct SeedBuffer {
    /// The dimensions of the grid
    size: GridSize,

    /// The nearest known seed for every cell, in row-major order
    cells: Vec<Option<Seed>>,
}

impl SeedBuffer {
    ///
    /// Creates a buffer with no seeds assigned to any cell
    ///
    pub fn new(size: GridSize) -> SeedBuffer {
        SeedBuffer {
            size,
            cells: vec![None; size.len()],
        }
    }

    /// The size of the grid this buffer covers
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    ///
    /// The nearest seed known for the cell at the specified position, if one has reached it
    ///
    #[inline]
    pub fn seed_at(&self, pos: GridPos) -> Option<Seed> {
        self.cells[self.size.index_of(pos)]
    }

    /// The cells of this buffer, in row-major order
    #[inline]
    pub fn cells(&self) -> &[Option<Seed>] {
        &self.cells
    }

    /// The cells of this buffer as a mutable row-major slice
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Option<Seed>] {
        &mut self.cells
    }
}
