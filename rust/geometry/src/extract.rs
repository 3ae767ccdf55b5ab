// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The raw-geometry collaborator record.
//!
//! This is the only coupling point between the analysis core and the host
//! CAD application. The host plugin (or a synthetic fixture in tests)
//! fills one [`ExtractedPlan`] per building; the core never talks to the
//! host directly. The record is treated as already validated: phase
//! filtering, unit conversion to feet, and the exclusion of unplaced
//! rooms are the collaborator's responsibility.

use geo::Coord;
use plan_dna_model::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A 2-D point in the model's working length unit (feet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanPoint {
    pub fn new(x: f64, y: f64) -> Self {
        PlanPoint { x, y }
    }
}

impl From<PlanPoint> for Coord<f64> {
    fn from(p: PlanPoint) -> Self {
        Coord { x: p.x, y: p.y }
    }
}

/// Everything the host extraction supplies about one building model.
///
/// Maps are keyed by element id; an element missing from a map simply has
/// no geometry or attribute of that kind, which downstream code treats as
/// "drop the element", never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedPlan {
    /// Rotation of the building's reference frame relative to true
    /// north, in radians.
    pub true_north: f64,

    pub rooms: Vec<ElementId>,
    pub doors: Vec<ElementId>,
    pub windows: Vec<ElementId>,
    pub curtain_walls: Vec<ElementId>,
    pub separation_lines: Vec<ElementId>,

    /// Room display names.
    pub names: BTreeMap<ElementId, String>,
    /// Unbounded room heights, in feet.
    pub heights: BTreeMap<ElementId, f64>,
    /// Door material transparency on a 0–100 scale.
    pub transparencies: BTreeMap<ElementId, i32>,

    /// Rooms adjoining each door/window/wall/line element.
    pub adjoining_rooms: BTreeMap<ElementId, BTreeSet<ElementId>>,

    /// 2-D locations of point-like openings (doors, windows).
    pub points: BTreeMap<ElementId, PlanPoint>,
    /// 2-D polylines of linear elements (curtain walls, separation lines).
    pub polylines: BTreeMap<ElementId, Vec<PlanPoint>>,
    /// Room boundary rings: `rings[0]` is the shell, `rings[1..]` are
    /// holes.
    pub boundaries: BTreeMap<ElementId, Vec<Vec<PlanPoint>>>,
}
