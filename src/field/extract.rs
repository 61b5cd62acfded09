/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::signed_distance_field::*;
use crate::consts::*;
use crate::flood::*;
use crate::grid::rows::*;
use crate::grid::*;

///
/// Converts a converged seed buffer into a signed distance field
///
/// Every cell's distance is the euclidean distance to its nearest seed, negated when the cell is
/// occupied: the rim of the mask is the zero level set, occupied cells measure less than or equal
/// to zero and unoccupied cells measure greater than zero.
///
/// Cells that no seed reached are written as `UNFLOODED_DISTANCE` (which only happens when the
/// mask was uniform, so the seed buffer is empty and every cell of the field gets the sentinel).
///
/// Channel 0 of each output cell receives the signed distance and channel 1 is left as 0.0. The
/// seed buffer is read-only here: this is the last stage of the pipeline, so nothing writes to
/// the seed buffers after propagation has finished.
///
pub fn extract_signed_distances(
    occupancy: &impl SampledOccupancy,
    seeds: &SeedBuffer,
) -> F32SignedDistanceField {
    let size = seeds.size();
    let mut samples = vec![[0.0f32, 0.0]; size.len()];

    for_each_row(&mut samples, size.width(), |y, row| {
        for (x, sample) in row.iter_mut().enumerate() {
            let pos = GridPos(x, y);
            let distance = match seeds.seed_at(pos) {
                Some(seed) => seed.distance_to(pos),
                None => UNFLOODED_DISTANCE,
            };

            sample[0] = if occupancy.is_occupied(pos) {
                -distance
            } else {
                distance
            };
        }
    });

    F32SignedDistanceField(size, samples)
}
