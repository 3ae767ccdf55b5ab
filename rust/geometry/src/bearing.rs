// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geographic bearings and their quantization into compass buckets.

use crate::extract::PlanPoint;
use plan_dna_model::direction::{Direction, COMPASS};
use std::f64::consts::TAU;

/// Bearing from one point to another, in radians in `[0, 2π)`.
///
/// Geographic azimuth convention: north is 0 and angles grow clockwise,
/// i.e. `atan2(dx, dy)`, not the mathematical `atan2(dy, dx)`.
pub fn azimuth(from: PlanPoint, to: PlanPoint) -> f64 {
    let angle = (to.x - from.x).atan2(to.y - from.y);
    if angle >= 0.0 {
        angle
    } else {
        angle + TAU
    }
}

/// Quantize a bearing into one of the 8 compass buckets, correcting for
/// true north.
///
/// A full rotation is added before rounding so the operand is always
/// positive; rounding is `f64::round`, i.e. half-away-from-zero, which
/// for a positive operand means ties at half-bucket boundaries round up
/// to the clockwise-next bucket.
pub fn quantize(bearing: f64, true_north: f64) -> Direction {
    let rotations = (bearing - true_north) / TAU + 1.0;
    let bucket = ((rotations * 8.0).round() as i64).rem_euclid(8) as usize;
    COMPASS[bucket]
}
