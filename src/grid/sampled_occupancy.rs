/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use super::grid_size::*;

///
/// Trait implemented by types that can supply a binary occupancy value for every cell of a grid
///
/// An occupancy grid divides a region into cells that are either inside a shape (occupied) or
/// outside of it (unoccupied). This is the input to the distance field algorithms: distances are
/// measured back to the rim of the occupied cells, with occupied cells counting as the inside of
/// the shape.
///
pub trait SampledOccupancy: Send + Sync {
    ///
    /// The size of this occupancy grid
    ///
    fn size(&self) -> GridSize;

    ///
    /// True if the cell at the specified position is occupied
    ///
    /// The position is always within the bounds reported by `size()`
    ///
    fn is_occupied(&self, pos: GridPos) -> bool;
}

///
/// An occupancy grid described by a dense row-major buffer of `f32` samples
///
/// A sample of 0.0 indicates an unoccupied cell, and any other value indicates an occupied cell.
///
#[derive(Clone, PartialEq, Debug)]
pub struct F32SampledOccupancy {
    /// The dimensions of the grid
    size: GridSize,

    /// One sample per cell, in row-major order
    samples: Vec<f32>,
}

impl F32SampledOccupancy {
    ///
    /// Creates an occupancy grid from a dense row-major buffer of samples
    ///
    /// The grid must have at least one cell on each side, the buffer must contain exactly
    /// `width * height` samples, and the samples must not contain NaN values: anything else is
    /// rejected here, before any flooding work is done.
    ///
    pub fn from_samples(
        size: GridSize,
        samples: Vec<f32>,
    ) -> Result<F32SampledOccupancy, FieldError> {
        if size.is_empty() {
            return Err(FieldError::EmptyGrid);
        }

        if samples.len() != size.len() {
            return Err(FieldError::WrongSampleCount(size.len(), samples.len()));
        }

        if samples.iter().any(|sample| sample.is_nan()) {
            return Err(FieldError::NotANumber);
        }

        Ok(F32SampledOccupancy { size, samples })
    }

    ///
    /// The samples making up this occupancy grid, in row-major order
    ///
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

impl SampledOccupancy for F32SampledOccupancy {
    #[inline]
    fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    fn is_occupied(&self, pos: GridPos) -> bool {
        self.samples[self.size.index_of(pos)] != 0.0
    }
}

impl<TFn> SampledOccupancy for (GridSize, TFn)
where
    TFn: Send + Sync + Fn(GridPos) -> bool,
{
    #[inline]
    fn size(&self) -> GridSize {
        self.0
    }

    #[inline]
    fn is_occupied(&self, pos: GridPos) -> bool {
        (self.1)(pos)
    }
}
