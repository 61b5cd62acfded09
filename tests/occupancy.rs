/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_field::*;

#[test]
fn zero_width_grid_is_rejected() {
    let occupancy = F32SampledOccupancy::from_samples(GridSize(0, 4), vec![]);

    assert!(occupancy == Err(FieldError::EmptyGrid));
}

#[test]
fn zero_height_grid_is_rejected() {
    let occupancy = F32SampledOccupancy::from_samples(GridSize(4, 0), vec![]);

    assert!(occupancy == Err(FieldError::EmptyGrid));
}

#[test]
fn wrong_sample_count_is_rejected() {
    let occupancy = F32SampledOccupancy::from_samples(GridSize(4, 4), vec![0.0; 15]);

    assert!(occupancy == Err(FieldError::WrongSampleCount(16, 15)));
}

#[test]
fn nan_samples_are_rejected() {
    let mut samples = vec![0.0; 16];
    samples[7] = f32::NAN;

    let occupancy = F32SampledOccupancy::from_samples(GridSize(4, 4), samples);

    assert!(occupancy == Err(FieldError::NotANumber));
}

#[test]
fn any_nonzero_sample_is_occupied() {
    let samples = vec![0.0, 1.0, 0.5, -1.0];
    let occupancy = F32SampledOccupancy::from_samples(GridSize(4, 1), samples).unwrap();

    assert!(!occupancy.is_occupied(GridPos(0, 0)));
    assert!(occupancy.is_occupied(GridPos(1, 0)));
    assert!(occupancy.is_occupied(GridPos(2, 0)));
    assert!(occupancy.is_occupied(GridPos(3, 0)));
}

#[test]
fn fn_occupancy_samples_the_function() {
    let occupancy = (GridSize(8, 8), |pos: GridPos| pos.x() == pos.y());

    assert!(occupancy.size() == GridSize(8, 8));
    assert!(occupancy.is_occupied(GridPos(3, 3)));
    assert!(!occupancy.is_occupied(GridPos(3, 4)));
}
