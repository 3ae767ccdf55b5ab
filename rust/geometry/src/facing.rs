// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Facing directions of openings relative to the rooms they serve.
//!
//! Point openings (doors, windows) face away from the room interior
//! near the opening. Linear openings (curtain walls, separation lines)
//! are split into constant-direction runs and each run faces away from
//! whichever side holds more of the room.

use std::collections::BTreeSet;

use geo::{Area, BooleanOps, Centroid, Coord, LineString, MultiPolygon, Polygon, Rect};
use plan_dna_model::Direction;

use crate::bearing::{azimuth, quantize};
use crate::extract::PlanPoint;
use crate::segment::DirectedRun;

/// Footprint half-width around an opening, and depth of the side
/// buffers, in feet.
pub const OPENING_REACH_FT: f64 = 1.0;

/// Build a room polygon from its boundary rings. The first ring is the
/// shell, the rest are holes. Returns `None` when the shell has fewer
/// than 3 points.
pub fn to_polygon(rings: &[Vec<PlanPoint>]) -> Option<Polygon<f64>> {
    let shell = rings.first()?;
    if shell.len() < 3 {
        return None;
    }
    let ring = |points: &[PlanPoint]| {
        LineString::from(points.iter().map(|p| Coord::from(*p)).collect::<Vec<_>>())
    };
    let holes = rings[1..]
        .iter()
        .filter(|r| r.len() >= 3)
        .map(|r| ring(r))
        .collect();
    Some(Polygon::new(ring(shell), holes))
}

/// Facing of a point opening: the bearing from the nearby room mass to
/// the opening itself, quantized to the compass.
///
/// The nearby mass is the overlap of the room with a 2 ft square
/// centered on the opening. Returns `None` when the opening does not
/// touch the room at all.
pub fn point_facing(
    opening: PlanPoint,
    room: &Polygon<f64>,
    true_north: f64,
) -> Option<Direction> {
    let reach = Rect::new(
        Coord {
            x: opening.x - OPENING_REACH_FT,
            y: opening.y - OPENING_REACH_FT,
        },
        Coord {
            x: opening.x + OPENING_REACH_FT,
            y: opening.y + OPENING_REACH_FT,
        },
    );
    let overlap = reach.to_polygon().intersection(room);
    let anchor = overlap.centroid()?;
    Some(quantize(
        azimuth(PlanPoint::new(anchor.x(), anchor.y()), opening),
        true_north,
    ))
}

/// One-sided buffer of a polyline: a strip of the given depth on the
/// left (or right) side of the travel direction.
fn sided_buffer(points: &[PlanPoint], depth: f64, left: bool) -> MultiPolygon<f64> {
    let mut strip = MultiPolygon::new(Vec::new());
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len = dx.hypot(dy);
        if len == 0.0 {
            continue;
        }
        // left normal of the travel direction
        let (nx, ny) = if left {
            (-dy / len, dx / len)
        } else {
            (dy / len, -dx / len)
        };
        let quad = Polygon::new(
            LineString::from(vec![
                Coord { x: a.x, y: a.y },
                Coord { x: b.x, y: b.y },
                Coord {
                    x: b.x + nx * depth,
                    y: b.y + ny * depth,
                },
                Coord {
                    x: a.x + nx * depth,
                    y: a.y + ny * depth,
                },
            ]),
            vec![],
        );
        strip = strip.union(&MultiPolygon::new(vec![quad]));
    }
    strip
}

/// Facing directions of a linear opening relative to one room.
///
/// Each directed run contributes the compass direction on the far side
/// of the room: the side buffers of the run are clipped against the
/// room and the larger overlap decides which side the room is on. Runs
/// touching the room on neither side are skipped; an exact tie treats
/// the room as being on the left.
pub fn line_facings(runs: &[DirectedRun], room: &Polygon<f64>) -> BTreeSet<Direction> {
    let mut facings = BTreeSet::new();
    for run in runs {
        let left = sided_buffer(&run.points, OPENING_REACH_FT, true);
        let right = sided_buffer(&run.points, OPENING_REACH_FT, false);
        let left_area = left
            .iter()
            .map(|p| p.intersection(room).unsigned_area())
            .sum::<f64>();
        let right_area = right
            .iter()
            .map(|p| p.intersection(room).unsigned_area())
            .sum::<f64>();
        if left_area == 0.0 && right_area == 0.0 {
            continue;
        }
        if left_area >= right_area {
            facings.insert(run.direction.from_left());
        } else {
            facings.insert(run.direction.from_right());
        }
    }
    facings
}
