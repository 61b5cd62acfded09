/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Distance reported for every cell when the occupancy grid has no boundary at all (ie, when the
/// mask is uniformly occupied or uniformly unoccupied, so there are no seeds to flood from)
pub const UNFLOODED_DISTANCE: f32 = 0.0;
