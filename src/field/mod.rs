/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod create_field;
mod extract;
mod signed_distance_field;

pub use self::create_field::*;
pub use self::extract::*;
pub use self::signed_distance_field::*;
