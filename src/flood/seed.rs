/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::grid::*;

///
/// The coordinates of a seed: a cell on the occupied rim of the mask that distances are measured
/// back to
///
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Seed(pub u32, pub u32);

impl Seed {
    ///
    /// Creates a seed marking the specified cell as its own nearest rim point
    ///
    #[inline]
    pub fn at(pos: GridPos) -> Seed {
        Seed(pos.x() as u32, pos.y() as u32)
    }

    /// The column of the seed cell
    #[inline]
    pub fn x(&self) -> usize {
        self.0 as usize
    }

    /// The row of the seed cell
    #[inline]
    pub fn y(&self) -> usize {
        self.1 as usize
    }

    ///
    /// The squared euclidean distance between this seed and the specified cell
    ///
    /// Squared distances are kept in integer form so that candidate comparisons during flooding
    /// are exact: two runs over the same mask always resolve equidistant candidates identically.
    ///
    #[inline]
    pub fn distance_sq_to(&self, pos: GridPos) -> u64 {
        let dx = self.0 as i64 - pos.x() as i64;
        let dy = self.1 as i64 - pos.y() as i64;

        (dx * dx + dy * dy) as u64
    }

    ///
    /// The euclidean distance between this seed and the specified cell
    ///
    #[inline]
    pub fn distance_to(&self, pos: GridPos) -> f32 {
        (self.distance_sq_to(pos) as f64).sqrt() as f32
    }
}
