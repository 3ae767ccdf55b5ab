// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tagged JSON wire format for persisted house models.
//!
//! The shape matches the model files produced by the original system:
//! composite records carry `"__dataclass__": "<TypeName>"`, enum values
//! are `{"__enum__": "<Enum>.<MEMBER>"}`, everything else is the natural
//! JSON encoding. The encoders/decoders below are an explicit closed set,
//! one per entity type, so the format does not depend on internal Rust
//! type names and stays stable across refactors.
//!
//! Round-trip law: `decode(encode(house)) == house`.

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::house::{
    ElementId, Glazing, House, OpeningKind, Room, RoomConnection, RoomGlazingRelation,
};
use crate::length::Length;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const TAG_HOUSE: &str = "House";
const TAG_ROOM: &str = "Room";
const TAG_LENGTH: &str = "Length";
const TAG_GLAZING: &str = "Glazing";
const TAG_CONNECTION: &str = "RoomConnection";
const TAG_RELATION: &str = "RoomGlazingRelation";

const ENUM_DIRECTION: &str = "Direction";
const ENUM_OPENING: &str = "RevitObject";

/// `{"__enum__": "<Enum>.<MEMBER>"}`
#[derive(Serialize, Deserialize)]
struct WireEnum {
    #[serde(rename = "__enum__")]
    value: String,
}

impl WireEnum {
    fn new(enum_name: &str, member: &str) -> Self {
        WireEnum {
            value: format!("{enum_name}.{member}"),
        }
    }

    /// Split into enumeration name and member name.
    fn parts(&self) -> Result<(&str, &str)> {
        self.value
            .split_once('.')
            .ok_or_else(|| Error::schema(format!("malformed enum value {:?}", self.value)))
    }

    fn direction(&self) -> Result<Direction> {
        let (name, member) = self.parts()?;
        if name != ENUM_DIRECTION {
            return Err(Error::schema(format!("expected a Direction, got {:?}", self.value)));
        }
        Direction::from_wire_name(member)
            .ok_or_else(|| Error::schema(format!("unknown direction {member:?}")))
    }

    fn opening_kind(&self) -> Result<OpeningKind> {
        let (name, member) = self.parts()?;
        if name != ENUM_OPENING {
            return Err(Error::schema(format!(
                "expected a {ENUM_OPENING}, got {:?}",
                self.value
            )));
        }
        OpeningKind::from_wire_name(member)
            .ok_or_else(|| Error::schema(format!("unknown element kind {member:?}")))
    }
}

impl From<Direction> for WireEnum {
    fn from(d: Direction) -> Self {
        WireEnum::new(ENUM_DIRECTION, d.wire_name())
    }
}

impl From<OpeningKind> for WireEnum {
    fn from(k: OpeningKind) -> Self {
        WireEnum::new(ENUM_OPENING, k.wire_name())
    }
}

fn check_tag(tag: &str, expected: &str) -> Result<()> {
    if tag == expected {
        Ok(())
    } else {
        Err(Error::schema(format!(
            "expected record {expected:?}, got {tag:?}"
        )))
    }
}

#[derive(Serialize, Deserialize)]
struct WireLength {
    mm: f64,
    #[serde(rename = "__dataclass__")]
    tag: String,
}

impl From<Length> for WireLength {
    fn from(l: Length) -> Self {
        WireLength {
            mm: l.mm(),
            tag: TAG_LENGTH.into(),
        }
    }
}

impl TryFrom<WireLength> for Length {
    type Error = Error;

    fn try_from(w: WireLength) -> Result<Length> {
        check_tag(&w.tag, TAG_LENGTH)?;
        Ok(Length::new(w.mm))
    }
}

#[derive(Serialize, Deserialize)]
struct WireRoom {
    element_id: i64,
    name: String,
    height: WireLength,
    #[serde(rename = "__dataclass__")]
    tag: String,
}

impl From<&Room> for WireRoom {
    fn from(r: &Room) -> Self {
        WireRoom {
            element_id: r.id.0,
            name: r.name.clone(),
            height: r.height.into(),
            tag: TAG_ROOM.into(),
        }
    }
}

impl TryFrom<WireRoom> for Room {
    type Error = Error;

    fn try_from(w: WireRoom) -> Result<Room> {
        check_tag(&w.tag, TAG_ROOM)?;
        Ok(Room {
            id: ElementId(w.element_id),
            name: w.name,
            height: w.height.try_into()?,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct WireGlazing {
    element_id: i64,
    #[serde(rename = "type_")]
    kind: WireEnum,
    outmost: bool,
    #[serde(rename = "__dataclass__")]
    tag: String,
}

impl From<&Glazing> for WireGlazing {
    fn from(g: &Glazing) -> Self {
        WireGlazing {
            element_id: g.id.0,
            kind: g.kind.into(),
            outmost: g.outmost,
            tag: TAG_GLAZING.into(),
        }
    }
}

impl TryFrom<WireGlazing> for Glazing {
    type Error = Error;

    fn try_from(w: WireGlazing) -> Result<Glazing> {
        check_tag(&w.tag, TAG_GLAZING)?;
        Ok(Glazing {
            id: ElementId(w.element_id),
            kind: w.kind.opening_kind()?,
            outmost: w.outmost,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct WireConnection {
    a_id: i64,
    b_id: i64,
    #[serde(rename = "type_")]
    kind: WireEnum,
    #[serde(rename = "__dataclass__")]
    tag: String,
}

impl From<&RoomConnection> for WireConnection {
    fn from(c: &RoomConnection) -> Self {
        WireConnection {
            a_id: c.a.0,
            b_id: c.b.0,
            kind: c.kind.into(),
            tag: TAG_CONNECTION.into(),
        }
    }
}

impl TryFrom<WireConnection> for RoomConnection {
    type Error = Error;

    fn try_from(w: WireConnection) -> Result<RoomConnection> {
        check_tag(&w.tag, TAG_CONNECTION)?;
        Ok(RoomConnection::new(
            ElementId(w.a_id),
            ElementId(w.b_id),
            w.kind.opening_kind()?,
        ))
    }
}

#[derive(Serialize, Deserialize)]
struct WireRelation {
    room_id: i64,
    glazing_id: i64,
    facings: Vec<WireEnum>,
    #[serde(rename = "__dataclass__")]
    tag: String,
}

impl From<&RoomGlazingRelation> for WireRelation {
    fn from(r: &RoomGlazingRelation) -> Self {
        WireRelation {
            room_id: r.room.0,
            glazing_id: r.glazing.0,
            facings: r.facings.iter().map(|&d| d.into()).collect(),
            tag: TAG_RELATION.into(),
        }
    }
}

impl TryFrom<WireRelation> for RoomGlazingRelation {
    type Error = Error;

    fn try_from(w: WireRelation) -> Result<RoomGlazingRelation> {
        check_tag(&w.tag, TAG_RELATION)?;
        let facings = w
            .facings
            .iter()
            .map(|e| e.direction())
            .collect::<Result<_>>()?;
        Ok(RoomGlazingRelation {
            room: ElementId(w.room_id),
            glazing: ElementId(w.glazing_id),
            facings,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct WireHouse {
    rooms: Vec<WireRoom>,
    room_connections: Vec<WireConnection>,
    glazings: Vec<WireGlazing>,
    room_glazing_relations: Vec<WireRelation>,
    #[serde(rename = "__dataclass__")]
    tag: String,
}

impl From<&House> for WireHouse {
    fn from(h: &House) -> Self {
        WireHouse {
            rooms: h.rooms.iter().map(Into::into).collect(),
            room_connections: h.room_connections.iter().map(Into::into).collect(),
            glazings: h.glazings.iter().map(Into::into).collect(),
            room_glazing_relations: h.room_glazing_relations.iter().map(Into::into).collect(),
            tag: TAG_HOUSE.into(),
        }
    }
}

impl TryFrom<WireHouse> for House {
    type Error = Error;

    fn try_from(w: WireHouse) -> Result<House> {
        check_tag(&w.tag, TAG_HOUSE)?;
        Ok(House {
            rooms: w.rooms.into_iter().map(TryInto::try_into).collect::<Result<_>>()?,
            room_connections: w
                .room_connections
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_>>()?,
            glazings: w
                .glazings
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_>>()?,
            room_glazing_relations: w
                .room_glazing_relations
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_>>()?,
        })
    }
}

impl House {
    /// Serialize to the tagged JSON wire format.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&WireHouse::from(self))?)
    }

    /// Deserialize from the tagged JSON wire format.
    pub fn from_json_str(json: &str) -> Result<House> {
        let wire: WireHouse = serde_json::from_str(json)?;
        wire.try_into()
    }

    /// Write the model to a file, creating parent directories as needed.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Load a model from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<House> {
        House::from_json_str(&fs::read_to_string(path)?)
    }
}
