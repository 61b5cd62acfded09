/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::seed::*;
use super::seed_buffer::*;
use super::stride::*;
use crate::grid::rows::*;
use crate::grid::*;

use smallvec::*;

use std::mem;

/// The 8-connected neighbour offsets sampled at each stride, in tie-breaking order
const FLOOD_NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

///
/// Runs the full jump flooding schedule over an initial seed buffer and returns the buffer holding
/// the converged nearest-seed assignment
///
/// Each pass reads one buffer and overwrites every cell of a second buffer, then the two swap
/// roles, so a pass never observes a cell it wrote itself. The scratch buffer is allocated here,
/// and whichever of the two buffers ends up holding the final assignment is returned by value:
/// the parity of the pass count is not something the caller needs to track.
///
/// If the initial buffer contains no seeds (a uniformly occupied or unoccupied mask), every pass
/// leaves every cell empty and the returned buffer also has no seeds.
///
pub fn propagate_seeds(initial: SeedBuffer) -> SeedBuffer {
    let mut src = initial;
    let mut dst = SeedBuffer::new(src.size());

    for stride in stride_schedule(src.size()) {
        flood_pass(&src, &mut dst, stride);
        mem::swap(&mut src, &mut dst);
    }

    // The schedule reaches every cell from every seed, so the result is all-seeded or all-empty
    test_assert!(
        src.cells().iter().all(|cell| cell.is_some())
            || src.cells().iter().all(|cell| cell.is_none())
    );

    src
}

///
/// Runs a single flooding pass at the specified stride, reading from `src` and overwriting every
/// cell of `dst`
///
fn flood_pass(src: &SeedBuffer, dst: &mut SeedBuffer, stride: usize) {
    let width = src.size().width();

    for_each_row(dst.cells_mut(), width, |y, row| {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = best_candidate(src, GridPos(x, y), stride);
        }
    });
}

///
/// Picks the candidate seed nearest to a cell, sampling the cell itself and its 8 neighbours at
/// the specified stride
///
/// Candidates are gathered in a fixed order (the cell's own seed first, then the neighbours), and
/// compared by exact integer squared distance: equidistant candidates always resolve to the first
/// one gathered, so the assignment is identical from run to run.
///
#[inline]
fn best_candidate(src: &SeedBuffer, pos: GridPos, stride: usize) -> Option<Seed> {
    let size = src.size();
    let stride = stride as isize;
    let mut candidates: SmallVec<[Seed; 9]> = smallvec![];

    candidates.extend(src.seed_at(pos));

    for (dx, dy) in FLOOD_NEIGHBOURS.iter() {
        let x = pos.x() as isize + dx * stride;
        let y = pos.y() as isize + dy * stride;

        if x >= 0 && y >= 0 && size.contains(GridPos(x as usize, y as usize)) {
            candidates.extend(src.seed_at(GridPos(x as usize, y as usize)));
        }
    }

    candidates
        .into_iter()
        .min_by_key(|seed| seed.distance_sq_to(pos))
}
