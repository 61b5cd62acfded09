/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::seed::*;
use super::seed_buffer::*;
use crate::grid::rows::*;
use crate::grid::*;

/// The 4-connected neighbour offsets used to detect the rim of the mask
const RIM_NEIGHBOURS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

///
/// Creates the initial seed buffer for an occupancy grid by seeding the cells on the rim of the
/// mask
///
/// A cell is on the rim when it is occupied and at least one of its 4-connected neighbours is
/// unoccupied. Cells on the edge of the grid are compared only against their in-bounds
/// neighbours: the area outside the grid never counts as unoccupied, so a shape that touches the
/// grid edge is closed off by the edge rather than gaining a rim there. Rim cells become seeds of
/// themselves, and every other cell starts with no seed.
///
/// A uniformly occupied or uniformly unoccupied grid has no rim at all, so the returned buffer
/// contains no seeds.
///
pub fn seed_boundaries(occupancy: &impl SampledOccupancy) -> SeedBuffer {
    let size = occupancy.size();
    let mut buffer = SeedBuffer::new(size);

    for_each_row(buffer.cells_mut(), size.width(), |y, row| {
        for (x, cell) in row.iter_mut().enumerate() {
            let pos = GridPos(x, y);

            if occupancy.is_occupied(pos)
                && rim_neighbours(size, pos).any(|neighbour| !occupancy.is_occupied(neighbour))
            {
                *cell = Some(Seed::at(pos));
            }
        }
    });

    buffer
}

///
/// The in-bounds 4-connected neighbours of a cell
///
fn rim_neighbours(size: GridSize, pos: GridPos) -> impl Iterator<Item = GridPos> {
    RIM_NEIGHBOURS.iter().filter_map(move |(dx, dy)| {
        let x = pos.x() as isize + dx;
        let y = pos.y() as isize + dy;

        if x >= 0 && y >= 0 && size.contains(GridPos(x as usize, y as usize)) {
            Some(GridPos(x as usize, y as usize))
        } else {
            None
        }
    })
}
