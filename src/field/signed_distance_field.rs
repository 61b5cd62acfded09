/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::grid::*;

///
/// Trait implemented by types representing a signed distance field sampled at every cell of a grid
///
/// A sampled signed distance field stores, for every cell, the distance to the nearest point on
/// the rim of a shape. Cells inside the shape have negative distances and cells outside it have
/// positive distances.
///
pub trait SampledSignedDistanceField {
    ///
    /// The size of this distance field
    ///
    fn size(&self) -> GridSize;

    ///
    /// The signed distance at the specified cell
    ///
    fn distance_at(&self, pos: GridPos) -> f32;
}

///
/// A signed distance field sampled into a dense row-major buffer of two-channel `f32` cells
///
/// Channel 0 of each cell holds the signed distance. Channel 1 is reserved and always 0.0 (a
/// future version may store the direction to the nearest rim cell there).
///
#[derive(Clone, PartialEq, Debug)]
pub struct F32SignedDistanceField(pub(crate) GridSize, pub(crate) Vec<[f32; 2]>);

impl F32SignedDistanceField {
    ///
    /// The two-channel samples making up this field, in row-major order
    ///
    #[inline]
    pub fn samples(&self) -> &[[f32; 2]] {
        &self.1
    }

    ///
    /// Unwraps this field into its size and its two-channel row-major samples
    ///
    #[inline]
    pub fn into_samples(self) -> (GridSize, Vec<[f32; 2]>) {
        (self.0, self.1)
    }
}

impl SampledSignedDistanceField for F32SignedDistanceField {
    #[inline]
    fn size(&self) -> GridSize {
        self.0
    }

    #[inline]
    fn distance_at(&self, pos: GridPos) -> f32 {
        self.1[self.0.index_of(pos)][0]
    }
}
