// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Plan-DNA Model
//!
//! Symbolic model of a single dwelling for housing-pattern analysis:
//! rooms, inter-room connections, glazed openings, and the compass-facing
//! relations between rooms and openings.
//!
//! The model is built once per analyzed building and is immutable
//! afterwards; everything downstream (graphs, rules) is a pure read-only
//! derivation from a [`House`] value.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plan_dna_model::House;
//!
//! let house = House::from_json_file("models/example.json")?;
//! assert_eq!(House::from_json_str(&house.to_json_string()?)?, house);
//! ```

pub mod direction;
pub mod error;
pub mod house;
pub mod length;
pub mod wire;

pub use direction::{multiple_sides, Direction};
pub use error::{Error, Result};
pub use house::{
    ElementId, Glazing, House, OpeningKind, Room, RoomConnection, RoomGlazingRelation,
};
pub use length::Length;
