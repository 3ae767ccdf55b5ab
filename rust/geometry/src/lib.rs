// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Plan-DNA Geometry
//!
//! Geometry reduction: turns raw 2-D floor-plan elements (boundary
//! polylines, openings, compass bearings, spatial overlaps) into the
//! compact symbolic [`House`](plan_dna_model::House) model: which room
//! touches which opening, and in which compass direction.
//!
//! The pipeline is strictly 2-D; elevation is ignored except for room
//! height, which passes through as an attribute.
//!
//! ## Pipeline
//!
//! 1. [`bearing`]: azimuth math and quantization into 8 compass buckets,
//!    with true-north correction.
//! 2. [`segment`]: decomposition of a polyline into maximal runs of
//!    constant quantized direction.
//! 3. [`facing`]: which side of a wall segment (and therefore which
//!    absolute direction) a room polygon faces.
//! 4. [`builder`]: assembly of the [`House`](plan_dna_model::House) from
//!    an [`ExtractedPlan`] collaborator record.

pub mod bearing;
pub mod builder;
pub mod extract;
pub mod facing;
pub mod segment;

pub use bearing::{azimuth, quantize};
pub use builder::build_house;
pub use extract::{ExtractedPlan, PlanPoint};
pub use facing::{line_facings, point_facing, to_polygon};
pub use segment::{segment_polyline, DirectedRun};
