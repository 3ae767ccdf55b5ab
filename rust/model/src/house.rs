// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The symbolic house model: rooms, openings, and their relations.

use crate::direction::Direction;
use crate::length::Length;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable element identifier, unique within one building model.
///
/// Identifiers are shared across element categories (rooms, doors,
/// windows, …) without collision, so a single id space is enough for
/// graph nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub i64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed room.
///
/// Identity is the element id alone: two `Room` values with the same id
/// are the same room even if name or height differ, which lets attributes
/// be refreshed independently of identity.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: ElementId,
    /// Display name; used only for semantic role classification.
    pub name: String,
    /// Unbounded ceiling height.
    pub height: Length,
}

impl Room {
    pub fn new(id: ElementId, name: impl Into<String>, height: Length) -> Self {
        Room {
            id,
            name: name.into(),
            height,
        }
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The kind of element an opening or connection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpeningKind {
    Door,
    Window,
    CurtainWall,
    RoomSeparationLine,
}

impl OpeningKind {
    /// Wire member name, matching the original enumeration spelling.
    pub fn wire_name(self) -> &'static str {
        match self {
            OpeningKind::Door => "DOOR",
            OpeningKind::Window => "WINDOW",
            OpeningKind::CurtainWall => "CURTAIN_WALL",
            OpeningKind::RoomSeparationLine => "ROOM_SEPARATION_LINE",
        }
    }

    /// Inverse of [`OpeningKind::wire_name`].
    pub fn from_wire_name(name: &str) -> Option<OpeningKind> {
        Some(match name {
            "DOOR" => OpeningKind::Door,
            "WINDOW" => OpeningKind::Window,
            "CURTAIN_WALL" => OpeningKind::CurtainWall,
            "ROOM_SEPARATION_LINE" => OpeningKind::RoomSeparationLine,
            _ => return None,
        })
    }
}

/// A glazed opening (window, curtain wall, separation line, or a door
/// transparent enough to count as glazing).
///
/// `outmost` means the opening touches exactly one room, i.e. it sits on
/// the building's exterior envelope. Identity is the element id.
#[derive(Debug, Clone)]
pub struct Glazing {
    pub id: ElementId,
    pub kind: OpeningKind,
    pub outmost: bool,
}

impl PartialEq for Glazing {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Glazing {}

impl Hash for Glazing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Physical access between two rooms, through a door or across a room
/// separation line.
///
/// Stored canonically with the smaller room id first, so `(a, b)` and
/// `(b, a)` collapse to one fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomConnection {
    pub a: ElementId,
    pub b: ElementId,
    pub kind: OpeningKind,
}

impl RoomConnection {
    /// Create a canonicalized connection (smaller id first).
    pub fn new(a: ElementId, b: ElementId, kind: OpeningKind) -> Self {
        if a <= b {
            RoomConnection { a, b, kind }
        } else {
            RoomConnection { a: b, b: a, kind }
        }
    }
}

/// The compass directions a room faces toward one of its openings.
///
/// A single room can face a linear opening in more than one direction
/// when the opening's segments run at different bearings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGlazingRelation {
    pub room: ElementId,
    pub glazing: ElementId,
    pub facings: BTreeSet<Direction>,
}

impl RoomGlazingRelation {
    pub fn new(
        room: ElementId,
        glazing: ElementId,
        facings: impl IntoIterator<Item = Direction>,
    ) -> Self {
        RoomGlazingRelation {
            room,
            glazing,
            facings: facings.into_iter().collect(),
        }
    }
}

/// The aggregate symbolic model of one dwelling.
///
/// Built once per analyzed building and immutable afterwards. The
/// builder guarantees referential integrity: every room/glazing id
/// referenced by a connection or relation exists in the respective set,
/// so downstream derivations need not re-validate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct House {
    pub rooms: Vec<Room>,
    pub room_connections: Vec<RoomConnection>,
    pub glazings: Vec<Glazing>,
    pub room_glazing_relations: Vec<RoomGlazingRelation>,
}

impl House {
    /// All room ids, in model order.
    pub fn room_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.rooms.iter().map(|r| r.id)
    }

    /// Ids of glazings on the exterior envelope.
    pub fn outmost_glazing_ids(&self) -> Vec<ElementId> {
        self.glazings
            .iter()
            .filter(|g| g.outmost)
            .map(|g| g.id)
            .collect()
    }

    pub fn glazing(&self, id: ElementId) -> Option<&Glazing> {
        self.glazings.iter().find(|g| g.id == id)
    }

    pub fn room(&self, id: ElementId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_identity_is_by_id() {
        let a = Room::new(ElementId(0), "거실", Length::from_ft(10.0));
        let b = Room::new(ElementId(0), "침실", Length::from_ft(8.0));
        assert_eq!(a, b);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn connections_are_canonicalized() {
        let c1 = RoomConnection::new(ElementId(2), ElementId(1), OpeningKind::Door);
        let c2 = RoomConnection::new(ElementId(1), ElementId(2), OpeningKind::Door);
        assert_eq!(c1, c2);
        assert_eq!(c1.a, ElementId(1));
    }

    #[test]
    fn outmost_lookup() {
        let house = House {
            glazings: vec![
                Glazing {
                    id: ElementId(10),
                    kind: OpeningKind::Window,
                    outmost: true,
                },
                Glazing {
                    id: ElementId(11),
                    kind: OpeningKind::Window,
                    outmost: false,
                },
            ],
            ..House::default()
        };
        assert_eq!(house.outmost_glazing_ids(), vec![ElementId(10)]);
    }
}
