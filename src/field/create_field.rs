/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::extract::*;
use super::signed_distance_field::*;
use crate::flood::*;
use crate::grid::*;

///
/// Creates a signed distance field from an occupancy grid
///
/// This runs the full jump flooding pipeline: the rim of the mask is seeded, the seeds are
/// propagated to every cell over a series of shrinking-stride passes, and each cell's converged
/// nearest seed is converted into a signed euclidean distance. The result is approximate in the
/// way jump flooding is always approximate (a cell can very occasionally adopt a seed slightly
/// further away than its true nearest), but it is deterministic for any given mask.
///
/// The field always has the same size as the occupancy grid. A mask with no rim at all (uniformly
/// occupied or uniformly unoccupied) produces a field that is `UNFLOODED_DISTANCE` everywhere.
///
pub fn create_signed_distance_field(occupancy: &impl SampledOccupancy) -> F32SignedDistanceField {
    let initial = seed_boundaries(occupancy);
    let converged = propagate_seeds(initial);

    extract_signed_distances(occupancy, &converged)
}
