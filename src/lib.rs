/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_field
//!
//! `flo_field` computes signed distance fields from sampled occupancy masks, using the jump
//! flooding algorithm.
//!
//! ```
//! # use flo_field::*;
//! # use flo_field::field::*;
//! #
//! let size        = GridSize(16, 16);
//! let occupancy   = (size, |pos: GridPos| pos.x() >= 4 && pos.x() < 12 && pos.y() >= 4 && pos.y() < 12);
//! let field       = create_signed_distance_field(&occupancy);
//!
//! assert!(field.distance_at(GridPos(8, 8)) < 0.0);
//! assert!(field.distance_at(GridPos(0, 0)) > 0.0);
//! ```
//!
//! The algorithm runs as three stages over a pair of seed buffers: the cells on the occupied rim
//! of the mask are seeded with their own coordinates, a series of passes with geometrically
//! shrinking sample strides propagates the nearest seed to every cell, and a final pass converts
//! each cell's nearest seed into a signed euclidean distance (negative inside the mask, positive
//! outside).
//!
//! Every stage is a data-parallel sweep over the grid: no cell's result depends on any other cell
//! written in the same pass. With the `multithreading` feature enabled (the default), the rows of
//! each pass are dispatched across the rayon thread pool.
//!

#[macro_use]
mod test_assert;
mod consts;

pub mod field;
pub mod flood;
pub mod grid;

pub use self::consts::*;
pub use self::grid::*;
