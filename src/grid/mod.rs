/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Grid geometry and occupancy sampling
//!
//! This provides the basic definitions shared by every stage of the flooding pipeline. `GridSize`
//! and `GridPos` describe dense row-major grids and addresses within them. The `SampledOccupancy`
//! trait is the input to the distance field algorithms: anything that can report a binary occupied
//! or unoccupied value for every cell of a grid. `F32SampledOccupancy` implements it for a dense
//! buffer of `f32` samples (0.0 for unoccupied, anything else for occupied), validating the
//! buffer's shape as it's constructed.
//!

mod error;
mod grid_size;
mod sampled_occupancy;

pub(crate) mod rows;

pub use self::error::*;
pub use self::grid_size::*;
pub use self::sampled_occupancy::*;
