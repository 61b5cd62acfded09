/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Errors that can occur when constructing an occupancy grid
///
/// These are all detected while the input is being validated: once an occupancy grid has been
/// constructed, the flooding pipeline itself cannot fail.
///
#[derive(Clone, PartialEq, Debug)]
pub enum FieldError {
    /// The grid has a width or height of 0 (grids must have at least one cell on each side)
    EmptyGrid,

    /// The number of samples supplied does not match the number of cells in the grid (expected,
    /// actual)
    WrongSampleCount(usize, usize),

    /// The samples contain a NaN value, which has no meaningful occupancy
    NotANumber,
}
