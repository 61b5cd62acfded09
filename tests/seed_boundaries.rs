/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_field::flood::*;
use flo_field::*;

use itertools::*;

///
/// Every position in a grid of the specified size
///
fn all_positions(size: GridSize) -> impl Iterator<Item = GridPos> {
    iproduct!(0..size.height(), 0..size.width()).map(|(y, x)| GridPos(x, y))
}

#[test]
fn lone_occupied_cell_seeds_itself() {
    let occupancy = (GridSize(4, 4), |pos: GridPos| pos == GridPos(1, 1));
    let seeds = seed_boundaries(&occupancy);

    assert!(seeds.seed_at(GridPos(1, 1)) == Some(Seed::at(GridPos(1, 1))));

    let num_seeds = all_positions(seeds.size())
        .filter(|pos| seeds.seed_at(*pos).is_some())
        .count();
    assert!(num_seeds == 1);
}

#[test]
fn interior_cells_are_not_seeded() {
    // 5x5 grid with a solid 3x3 block in the middle: only the centre cell of the block has no
    // unoccupied neighbour
    let occupancy = (GridSize(5, 5), |pos: GridPos| {
        pos.x() >= 1 && pos.x() <= 3 && pos.y() >= 1 && pos.y() <= 3
    });
    let seeds = seed_boundaries(&occupancy);

    assert!(seeds.seed_at(GridPos(2, 2)).is_none());

    for pos in all_positions(seeds.size()) {
        let on_rim = occupancy.is_occupied(pos) && pos != GridPos(2, 2);

        if on_rim {
            assert!(seeds.seed_at(pos) == Some(Seed::at(pos)), "{:?}", pos);
        } else {
            assert!(seeds.seed_at(pos).is_none(), "{:?}", pos);
        }
    }
}

#[test]
fn unoccupied_cells_are_never_seeded() {
    let occupancy = (GridSize(7, 5), |pos: GridPos| (pos.x() + pos.y()) % 3 == 0);
    let seeds = seed_boundaries(&occupancy);

    for pos in all_positions(seeds.size()) {
        if !occupancy.is_occupied(pos) {
            assert!(seeds.seed_at(pos).is_none(), "{:?}", pos);
        }
    }
}

#[test]
fn solid_grid_has_no_seeds() {
    // The edge of the grid is not treated as unoccupied, so a mask filling the whole grid has no
    // rim
    let occupancy = (GridSize(6, 4), |_: GridPos| true);
    let seeds = seed_boundaries(&occupancy);

    assert!(all_positions(seeds.size()).all(|pos| seeds.seed_at(pos).is_none()));
}

#[test]
fn empty_grid_has_no_seeds() {
    let occupancy = (GridSize(6, 4), |_: GridPos| false);
    let seeds = seed_boundaries(&occupancy);

    assert!(all_positions(seeds.size()).all(|pos| seeds.seed_at(pos).is_none()));
}

#[test]
fn shape_touching_the_grid_edge_is_closed_by_it() {
    // Left column fully occupied: its rim faces the unoccupied cells to the right only
    let occupancy = (GridSize(4, 4), |pos: GridPos| pos.x() == 0);
    let seeds = seed_boundaries(&occupancy);

    for y in 0..4 {
        assert!(seeds.seed_at(GridPos(0, y)) == Some(Seed::at(GridPos(0, y))));
    }
}
