// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The gray-edge layer: pattern pairs whose edge needs a structural
//! condition in the plan on top of both patterns being present.
//!
//! Each entry names the two patterns and the check that must hold. The
//! checks reference rooms by role, so the table stays declarative and
//! every check function is reused across many entries.

use std::collections::BTreeSet;

use plan_dna_model::{Direction, ElementId, House, OpeningKind};

use crate::catalog::PatternId;
use crate::roles::RoleIndex;

/// Sun directions accepted by the gray sunlit/shaded checks. Wider than
/// the canonical set: plain east light also counts here.
const GRAY_SUN_DIRECTIONS: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::Southeast,
    Direction::Southwest,
];

/// A room class selector for gray-edge checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleClass {
    Entrance,
    Corridor,
    Kitchen,
    Dining,
    Bathroom,
    Storage,
    Dressing,
    Living,
    MainBedroom,
    ChildBedroom,
    Main,
}

fn class_rooms<'a>(roles: &'a RoleIndex, class: RoleClass) -> &'a [ElementId] {
    match class {
        RoleClass::Entrance => &roles.entrances,
        RoleClass::Corridor => &roles.corridors,
        RoleClass::Kitchen => &roles.kitchens,
        RoleClass::Dining => &roles.dining,
        RoleClass::Bathroom => &roles.bathrooms,
        RoleClass::Storage => &roles.storage,
        RoleClass::Dressing => &roles.dressing,
        RoleClass::Living => &roles.living,
        RoleClass::MainBedroom => &roles.main_bedrooms,
        RoleClass::ChildBedroom => &roles.child_bedrooms,
        RoleClass::Main => &roles.main,
    }
}

/// The structural condition backing one gray edge.
#[derive(Debug, Clone, Copy)]
pub enum GrayCheck {
    /// Both patterns present is already enough.
    Presence,
    /// Some connection joins a room of the first class to a room of the
    /// second, in either storage order.
    Connected(RoleClass, RoleClass),
    /// A room of the class faces a glazing in a gray sun direction.
    Sunlit(RoleClass),
    /// A room of the class faces a glazing away from every gray sun
    /// direction.
    Shaded(RoleClass),
    /// A room of the class is lit from two sides.
    TwoSided(RoleClass),
    /// A room of the class is an outdoor-lit indoor room.
    Outdoor(RoleClass),
    /// A room of the class stands at an overlooking interior window.
    Overlooking(RoleClass),
    /// A room of the class stands at an interior window.
    InteriorWindow(RoleClass),
    /// The living room opens across a separation line onto a
    /// non-ancillary room or a corridor.
    OpenLiving,
    /// A room of the class connects to a semi-outdoor room.
    SemiOutdoor(RoleClass),
}

/// Room sets shared by the structural checks, computed once per house.
#[derive(Debug, Default)]
pub struct StructuralSets {
    /// Rooms lit from two or more sides (dna61's room set).
    pub two_sided: BTreeSet<ElementId>,
    /// Indoor rooms that are sunlit or have an outdoor window.
    pub outdoor: BTreeSet<ElementId>,
    /// dna67's room set.
    pub overlooking: BTreeSet<ElementId>,
    /// dna68's room set.
    pub interior_window: BTreeSet<ElementId>,
}

/// The gray-edge table, in output order.
pub const GRAY_EDGES: &[(PatternId, PatternId, GrayCheck)] = &[
    // the gradient pattern pairs with the service patterns by presence
    ("dna36", "dna48", GrayCheck::Presence),
    ("dna36", "dna49", GrayCheck::Presence),
    ("dna36", "dna50", GrayCheck::Presence),
    ("dna36", "dna53", GrayCheck::Presence),
    // indoor sunlight pairs with living patterns when they are sunlit
    // and with service patterns when they are shaded
    ("dna37", "dna41", GrayCheck::Sunlit(RoleClass::Main)),
    ("dna37", "dna45", GrayCheck::Sunlit(RoleClass::MainBedroom)),
    ("dna37", "dna46", GrayCheck::Sunlit(RoleClass::ChildBedroom)),
    ("dna37", "dna48", GrayCheck::Sunlit(RoleClass::Kitchen)),
    ("dna37", "dna49", GrayCheck::Sunlit(RoleClass::Dining)),
    ("dna37", "dna50", GrayCheck::Shaded(RoleClass::Bathroom)),
    ("dna37", "dna51", GrayCheck::Shaded(RoleClass::Storage)),
    ("dna37", "dna53", GrayCheck::Shaded(RoleClass::Dressing)),
    // service adjacency
    (
        "dna42",
        "dna50",
        GrayCheck::Connected(RoleClass::Entrance, RoleClass::Bathroom),
    ),
    (
        "dna42",
        "dna51",
        GrayCheck::Connected(RoleClass::Entrance, RoleClass::Storage),
    ),
    (
        "dna48",
        "dna50",
        GrayCheck::Connected(RoleClass::Kitchen, RoleClass::Bathroom),
    ),
    (
        "dna48",
        "dna51",
        GrayCheck::Connected(RoleClass::Kitchen, RoleClass::Storage),
    ),
    (
        "dna53",
        "dna50",
        GrayCheck::Connected(RoleClass::Dressing, RoleClass::Bathroom),
    ),
    // the heart of the house and its open companions
    ("dna41", "dna43", GrayCheck::OpenLiving),
    (
        "dna41",
        "dna48",
        GrayCheck::Connected(RoleClass::Living, RoleClass::Kitchen),
    ),
    (
        "dna41",
        "dna49",
        GrayCheck::Connected(RoleClass::Living, RoleClass::Dining),
    ),
    // realms and their satellites
    (
        "dna45",
        "dna50",
        GrayCheck::Connected(RoleClass::MainBedroom, RoleClass::Bathroom),
    ),
    (
        "dna45",
        "dna51",
        GrayCheck::Connected(RoleClass::MainBedroom, RoleClass::Storage),
    ),
    (
        "dna45",
        "dna53",
        GrayCheck::Connected(RoleClass::MainBedroom, RoleClass::Dressing),
    ),
    (
        "dna46",
        "dna50",
        GrayCheck::Connected(RoleClass::ChildBedroom, RoleClass::Bathroom),
    ),
    (
        "dna46",
        "dna51",
        GrayCheck::Connected(RoleClass::ChildBedroom, RoleClass::Storage),
    ),
    (
        "dna46",
        "dna53",
        GrayCheck::Connected(RoleClass::ChildBedroom, RoleClass::Dressing),
    ),
    // window patterns per room class
    ("dna42", "dna61", GrayCheck::TwoSided(RoleClass::Entrance)),
    ("dna42", "dna64", GrayCheck::Outdoor(RoleClass::Entrance)),
    ("dna42", "dna67", GrayCheck::Overlooking(RoleClass::Entrance)),
    ("dna42", "dna68", GrayCheck::InteriorWindow(RoleClass::Entrance)),
    ("dna43", "dna61", GrayCheck::TwoSided(RoleClass::Corridor)),
    ("dna43", "dna64", GrayCheck::Outdoor(RoleClass::Corridor)),
    ("dna43", "dna67", GrayCheck::Overlooking(RoleClass::Corridor)),
    ("dna43", "dna68", GrayCheck::InteriorWindow(RoleClass::Corridor)),
    ("dna48", "dna61", GrayCheck::TwoSided(RoleClass::Kitchen)),
    ("dna48", "dna64", GrayCheck::Outdoor(RoleClass::Kitchen)),
    ("dna48", "dna67", GrayCheck::Overlooking(RoleClass::Kitchen)),
    ("dna48", "dna68", GrayCheck::InteriorWindow(RoleClass::Kitchen)),
    ("dna49", "dna61", GrayCheck::TwoSided(RoleClass::Dining)),
    ("dna49", "dna64", GrayCheck::Outdoor(RoleClass::Dining)),
    ("dna49", "dna67", GrayCheck::Overlooking(RoleClass::Dining)),
    ("dna49", "dna68", GrayCheck::InteriorWindow(RoleClass::Dining)),
    ("dna50", "dna61", GrayCheck::TwoSided(RoleClass::Bathroom)),
    ("dna50", "dna64", GrayCheck::Outdoor(RoleClass::Bathroom)),
    ("dna50", "dna67", GrayCheck::Overlooking(RoleClass::Bathroom)),
    ("dna50", "dna68", GrayCheck::InteriorWindow(RoleClass::Bathroom)),
    ("dna51", "dna64", GrayCheck::Outdoor(RoleClass::Storage)),
    ("dna53", "dna61", GrayCheck::TwoSided(RoleClass::Dressing)),
    ("dna53", "dna64", GrayCheck::Outdoor(RoleClass::Dressing)),
    ("dna41", "dna61", GrayCheck::TwoSided(RoleClass::Living)),
    ("dna41", "dna64", GrayCheck::Outdoor(RoleClass::Living)),
    ("dna41", "dna67", GrayCheck::Overlooking(RoleClass::Living)),
    ("dna41", "dna68", GrayCheck::InteriorWindow(RoleClass::Living)),
    ("dna45", "dna61", GrayCheck::TwoSided(RoleClass::MainBedroom)),
    ("dna45", "dna64", GrayCheck::Outdoor(RoleClass::MainBedroom)),
    ("dna45", "dna67", GrayCheck::Overlooking(RoleClass::MainBedroom)),
    ("dna45", "dna68", GrayCheck::InteriorWindow(RoleClass::MainBedroom)),
    ("dna46", "dna61", GrayCheck::TwoSided(RoleClass::ChildBedroom)),
    ("dna46", "dna64", GrayCheck::Outdoor(RoleClass::ChildBedroom)),
    ("dna46", "dna67", GrayCheck::Overlooking(RoleClass::ChildBedroom)),
    ("dna46", "dna68", GrayCheck::InteriorWindow(RoleClass::ChildBedroom)),
    // realms spilling onto semi-outdoor space
    ("dna45", "dna29", GrayCheck::SemiOutdoor(RoleClass::MainBedroom)),
    ("dna46", "dna29", GrayCheck::SemiOutdoor(RoleClass::ChildBedroom)),
    ("dna48", "dna29", GrayCheck::SemiOutdoor(RoleClass::Kitchen)),
    ("dna49", "dna29", GrayCheck::SemiOutdoor(RoleClass::Dining)),
];

/// Evaluate the gray-edge table against one house.
pub fn gray_edges(
    house: &House,
    roles: &RoleIndex,
    sets: &StructuralSets,
    present: &BTreeSet<PatternId>,
) -> Vec<(PatternId, PatternId)> {
    GRAY_EDGES
        .iter()
        .filter(|(from, to, _)| present.contains(from) && present.contains(to))
        .filter(|(_, _, check)| holds(house, roles, sets, *check))
        .map(|(from, to, _)| (*from, *to))
        .collect()
}

fn holds(house: &House, roles: &RoleIndex, sets: &StructuralSets, check: GrayCheck) -> bool {
    match check {
        GrayCheck::Presence => true,
        GrayCheck::Connected(first, second) => {
            connected(house, class_rooms(roles, first), class_rooms(roles, second))
        }
        GrayCheck::Sunlit(class) => {
            faces_any(house, class_rooms(roles, class), &GRAY_SUN_DIRECTIONS)
        }
        GrayCheck::Shaded(class) => {
            let shade: Vec<Direction> =
                GRAY_SUN_DIRECTIONS.iter().map(|d| d.opposite()).collect();
            faces_any(house, class_rooms(roles, class), &shade)
        }
        GrayCheck::TwoSided(class) => overlaps(&sets.two_sided, class_rooms(roles, class)),
        GrayCheck::Outdoor(class) => overlaps(&sets.outdoor, class_rooms(roles, class)),
        GrayCheck::Overlooking(class) => overlaps(&sets.overlooking, class_rooms(roles, class)),
        GrayCheck::InteriorWindow(class) => {
            overlaps(&sets.interior_window, class_rooms(roles, class))
        }
        GrayCheck::OpenLiving => open_living(house, roles),
        GrayCheck::SemiOutdoor(class) => {
            connected(house, class_rooms(roles, class), &roles.semi_outdoor)
        }
    }
}

fn overlaps(set: &BTreeSet<ElementId>, rooms: &[ElementId]) -> bool {
    rooms.iter().any(|room| set.contains(room))
}

fn connected(house: &House, first: &[ElementId], second: &[ElementId]) -> bool {
    house.room_connections.iter().any(|conn| {
        (first.contains(&conn.a) && second.contains(&conn.b))
            || (first.contains(&conn.b) && second.contains(&conn.a))
    })
}

fn faces_any(house: &House, rooms: &[ElementId], directions: &[Direction]) -> bool {
    house.room_glazing_relations.iter().any(|rel| {
        rooms.contains(&rel.room) && rel.facings.iter().any(|f| directions.contains(f))
    })
}

fn open_living(house: &House, roles: &RoleIndex) -> bool {
    house.room_connections.iter().any(|conn| {
        if conn.kind != OpeningKind::RoomSeparationLine {
            return false;
        }
        let living_side = |a: ElementId, b: ElementId| {
            roles.living.contains(&a)
                && (!roles.ancillary.contains(&b) || roles.corridors.contains(&b))
        };
        living_side(conn.a, conn.b) || living_side(conn.b, conn.a)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleTable;
    use plan_dna_model::{Length, Room, RoomConnection};

    fn id(raw: i64) -> ElementId {
        ElementId(raw)
    }

    fn room(raw: i64, name: &str) -> Room {
        Room::new(id(raw), name, Length::from_ft(9.0))
    }

    #[test]
    fn table_entries_are_unique_pairs() {
        let pairs: BTreeSet<(PatternId, PatternId)> =
            GRAY_EDGES.iter().map(|(a, b, _)| (*a, *b)).collect();
        assert_eq!(pairs.len(), GRAY_EDGES.len());
    }

    #[test]
    fn connection_check_is_orderless() {
        let house = House {
            rooms: vec![room(1, "mbr"), room(2, "Dress room")],
            room_connections: vec![RoomConnection::new(id(2), id(1), OpeningKind::Door)],
            ..House::default()
        };
        let roles = RoleIndex::new(&house, &RoleTable::default());
        assert!(holds(
            &house,
            &roles,
            &StructuralSets::default(),
            GrayCheck::Connected(RoleClass::MainBedroom, RoleClass::Dressing),
        ));
    }

    #[test]
    fn edges_need_both_patterns_present() {
        let house = House {
            rooms: vec![room(1, "Entrance"), room(2, "Kitchen")],
            ..House::default()
        };
        let roles = RoleIndex::new(&house, &RoleTable::default());
        let sets = StructuralSets::default();
        let only_gradient: BTreeSet<PatternId> = ["dna36"].into();
        assert!(gray_edges(&house, &roles, &sets, &only_gradient).is_empty());

        let both: BTreeSet<PatternId> = ["dna36", "dna48"].into();
        assert_eq!(
            gray_edges(&house, &roles, &sets, &both),
            vec![("dna36", "dna48")]
        );
    }

    #[test]
    fn open_living_accepts_a_corridor_across_a_separation_line() {
        let house = House {
            rooms: vec![room(1, "Living"), room(2, "Corridor")],
            room_connections: vec![RoomConnection::new(
                id(1),
                id(2),
                OpeningKind::RoomSeparationLine,
            )],
            ..House::default()
        };
        let roles = RoleIndex::new(&house, &RoleTable::default());
        assert!(open_living(&house, &roles));
    }
}
