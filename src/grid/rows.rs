/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Dispatches a whole-grid pass as one job per output row
///
/// Every pass in the flooding pipeline writes each cell of its output exactly once, and no cell
/// depends on another cell written in the same pass, so a pass can always be partitioned into
/// disjoint rows. With the `multithreading` feature enabled the rows are spread across the rayon
/// thread pool, and this function returning is the barrier between one pass and the next.
///
#[cfg(feature = "multithreading")]
pub(crate) fn for_each_row<TCell, TRowFn>(cells: &mut [TCell], width: usize, row_fn: TRowFn)
where
    TCell: Send,
    TRowFn: Send + Sync + Fn(usize, &mut [TCell]),
{
    use rayon::prelude::*;

    cells
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| row_fn(y, row));
}

// Serial version, with the same signature so the stages don't need to know which they got
#[cfg(not(feature = "multithreading"))]
pub(crate) fn for_each_row<TCell, TRowFn>(cells: &mut [TCell], width: usize, row_fn: TRowFn)
where
    TCell: Send,
    TRowFn: Send + Sync + Fn(usize, &mut [TCell]),
{
    cells
        .chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| row_fn(y, row));
}
