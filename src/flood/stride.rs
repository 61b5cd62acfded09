/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::grid::*;

use itertools::*;
use smallvec::*;

/// Extra low-stride passes run after the main schedule to repair cells where the power-of-two
/// jumps propagated a slightly-too-distant seed (the 'JFA+2' variant of the algorithm)
const CLEANUP_STRIDES: [usize; 2] = [2, 1];

///
/// The sample strides used to flood a grid of the specified size, in pass order
///
/// The schedule starts at half the smallest power of two that covers the longest side of the grid
/// (but never less than 1), halves every pass down to a stride of 1, and then appends the cleanup
/// passes. Any cell offset can be written as a sum of distinct powers of two, so by the time the
/// stride reaches 1 every cell has been reachable from every seed.
///
pub fn stride_schedule(size: GridSize) -> SmallVec<[usize; 16]> {
    let initial = (size.max_side().next_power_of_two() / 2).max(1);
    let halving = iterate(initial, |stride| stride / 2).take_while(|stride| *stride >= 1);

    halving.chain(CLEANUP_STRIDES.iter().copied()).collect()
}
