/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// The dimensions of a sampled grid, as a width and a height in cells
///
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GridSize(pub usize, pub usize);

///
/// The address of a single cell within a sampled grid
///
/// `x` counts columns from the left edge and `y` counts rows from the top, so `GridPos(0, 0)` is
/// the first cell of the first row.
///
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GridPos(pub usize, pub usize);

impl GridSize {
    /// The width of the grid, in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.0
    }

    /// The height of the grid, in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.1
    }

    /// The total number of cells in the grid
    #[inline]
    pub fn len(&self) -> usize {
        self.0 * self.1
    }

    /// True if the grid contains no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0 || self.1 == 0
    }

    /// The length of the longest side of the grid
    #[inline]
    pub fn max_side(&self) -> usize {
        self.0.max(self.1)
    }

    /// The index of the cell at the specified position within a dense row-major buffer
    #[inline]
    pub fn index_of(&self, pos: GridPos) -> usize {
        pos.y() * self.0 + pos.x()
    }

    /// True if the specified position lies within this grid
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x() < self.0 && pos.y() < self.1
    }
}

impl GridPos {
    /// The column of this cell
    #[inline]
    pub fn x(&self) -> usize {
        self.0
    }

    /// The row of this cell
    #[inline]
    pub fn y(&self) -> usize {
        self.1
    }
}

impl From<(usize, usize)> for GridSize {
    fn from((width, height): (usize, usize)) -> GridSize {
        GridSize(width, height)
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((x, y): (usize, usize)) -> GridPos {
        GridPos(x, y)
    }
}
