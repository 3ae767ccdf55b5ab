// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decomposition of a polyline into direction-homogeneous runs.

use crate::bearing::{azimuth, quantize};
use crate::extract::PlanPoint;
use plan_dna_model::Direction;
use smallvec::SmallVec;

/// A maximal run of consecutive polyline points whose pairwise bearings
/// quantize to the same compass bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedRun {
    pub direction: Direction,
    /// At least 2 points; boundary points are shared with the adjacent
    /// runs.
    pub points: SmallVec<[PlanPoint; 8]>,
}

/// Split a polyline into maximal constant-direction runs.
///
/// The point where the direction changes belongs to both the closing and
/// the opening run. A 2-point polyline yields exactly one run; fewer
/// than 2 points yield none.
pub fn segment_polyline(polyline: &[PlanPoint], true_north: f64) -> Vec<DirectedRun> {
    if polyline.len() < 2 {
        return Vec::new();
    }

    let directions: Vec<Direction> = polyline
        .windows(2)
        .map(|pair| quantize(azimuth(pair[0], pair[1]), true_north))
        .collect();

    let mut runs = Vec::new();
    let mut start = 0;
    for next in 1..=directions.len() {
        if next == directions.len() || directions[next] != directions[start] {
            runs.push(DirectedRun {
                direction: directions[start],
                points: SmallVec::from_slice(&polyline[start..=next]),
            });
            start = next;
        }
    }
    runs
}
