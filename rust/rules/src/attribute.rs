// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rules judged from room and glazing attributes.

use std::collections::{BTreeMap, BTreeSet};

use plan_dna_model::{multiple_sides, ElementId, House, OpeningKind};
use rustc_hash::FxHashMap;

use crate::graphs::{SunExposureGraph, WIDE_SUN_DIRECTIONS};
use crate::roles::RoleIndex;

/// Per-room count of significant daylight windows.
///
/// Significant means an outmost glazing that is a real opening (not a
/// separation line), or a glazing sitting one borrowed-light step behind
/// one, judged on the wide sun-direction set. Each facing relation to
/// such a glazing counts once.
pub fn window_count_by_room(house: &House) -> FxHashMap<ElementId, usize> {
    let graph = SunExposureGraph::from_relations(house, &WIDE_SUN_DIRECTIONS);
    let outmost = house.outmost_glazing_ids();

    let mut significant: BTreeSet<ElementId> = BTreeSet::new();
    for glazing in &house.glazings {
        if glazing.kind == OpeningKind::RoomSeparationLine {
            continue;
        }
        if glazing.outmost || graph.sun_order(glazing.id, &outmost) == 2 {
            significant.insert(glazing.id);
        }
    }

    let mut counts: FxHashMap<ElementId, usize> = FxHashMap::default();
    for rel in &house.room_glazing_relations {
        if significant.contains(&rel.glazing) {
            *counts.entry(rel.room).or_insert(0) += 1;
        }
    }
    counts
}

/// dna61: rooms lit from two or more sides.
pub fn dna61_two_sided_rooms(house: &House) -> Vec<ElementId> {
    let counts = window_count_by_room(house);
    house
        .rooms
        .iter()
        .map(|r| r.id)
        .filter(|id| counts.get(id).copied().unwrap_or(0) >= 2)
        .collect()
}

/// dna64: rooms with a window straight to the outdoors.
pub fn dna64_outdoor_rooms(house: &House) -> Vec<ElementId> {
    let outmost: BTreeSet<ElementId> = house.outmost_glazing_ids().into_iter().collect();
    let mut seen = BTreeSet::new();
    let mut rooms = Vec::new();
    for rel in &house.room_glazing_relations {
        if outmost.contains(&rel.glazing) && seen.insert(rel.room) {
            rooms.push(rel.room);
        }
    }
    rooms
}

/// Interior glazings (not outmost, not separation lines) whose combined
/// facings span clearly different sides of the compass.
fn interior_multi_sided_windows(house: &House) -> Vec<ElementId> {
    let interior: BTreeSet<ElementId> = house
        .glazings
        .iter()
        .filter(|g| !g.outmost && g.kind != OpeningKind::RoomSeparationLine)
        .map(|g| g.id)
        .collect();

    let mut facings: BTreeMap<ElementId, BTreeSet<_>> = BTreeMap::new();
    for rel in &house.room_glazing_relations {
        if interior.contains(&rel.glazing) {
            facings
                .entry(rel.glazing)
                .or_default()
                .extend(rel.facings.iter().copied());
        }
    }
    facings
        .into_iter()
        .filter(|(_, facings)| multiple_sides(facings))
        .map(|(id, _)| id)
        .collect()
}

fn rooms_at(house: &House, glazings: &[ElementId]) -> Vec<ElementId> {
    let glazings: BTreeSet<ElementId> = glazings.iter().copied().collect();
    let mut seen = BTreeSet::new();
    let mut rooms = Vec::new();
    for rel in &house.room_glazing_relations {
        if glazings.contains(&rel.glazing) && seen.insert(rel.room) {
            rooms.push(rel.room);
        }
    }
    rooms
}

/// dna68: rooms at an interior window between two rooms.
pub fn dna68_interior_window_rooms(house: &House) -> Vec<ElementId> {
    rooms_at(house, &interior_multi_sided_windows(house))
}

/// dna67: rooms whose interior windows overlook life going on nearby.
/// Requires a semi-outdoor room to exist, otherwise there is no life to
/// overlook.
pub fn dna67_overlooking_rooms(house: &House, roles: &RoleIndex) -> Vec<ElementId> {
    if roles.semi_outdoor.is_empty() {
        return Vec::new();
    }
    dna68_interior_window_rooms(house)
}

/// dna54: bedrooms whose door connections are all recorded from the
/// bedroom side only, i.e. bedrooms that open onto their surroundings
/// rather than being opened into.
pub fn dna54_independent_bedrooms(house: &House, roles: &RoleIndex) -> Vec<ElementId> {
    let bedrooms: BTreeSet<ElementId> = roles.bedrooms.iter().copied().collect();
    let mut opening: BTreeSet<ElementId> = BTreeSet::new();
    let mut opened_into: BTreeSet<ElementId> = BTreeSet::new();
    for conn in &house.room_connections {
        if conn.kind != OpeningKind::Door {
            continue;
        }
        if bedrooms.contains(&conn.a) {
            opening.insert(conn.a);
        }
        if bedrooms.contains(&conn.b) {
            opened_into.insert(conn.b);
        }
    }
    opening.difference(&opened_into).copied().collect()
}

/// dna55: main rooms strictly taller than the main-room median height.
pub fn dna55_height_variety(house: &House, roles: &RoleIndex) -> Vec<ElementId> {
    let main: BTreeSet<ElementId> = roles.main.iter().copied().collect();
    let heights: Vec<(ElementId, f64)> = house
        .rooms
        .iter()
        .filter(|r| main.contains(&r.id))
        .map(|r| (r.id, r.height.mm()))
        .collect();
    if heights.is_empty() {
        return Vec::new();
    }
    let median = median(heights.iter().map(|(_, h)| *h).collect());
    heights
        .into_iter()
        .filter(|(_, height)| *height > median)
        .map(|(id, _)| id)
        .collect()
}

fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleTable;
    use plan_dna_model::{Direction, Glazing, Length, Room, RoomConnection, RoomGlazingRelation};

    fn id(raw: i64) -> ElementId {
        ElementId(raw)
    }

    fn room(raw: i64, name: &str, height_ft: f64) -> Room {
        Room::new(id(raw), name, Length::from_ft(height_ft))
    }

    fn glazing(raw: i64, kind: OpeningKind, outmost: bool) -> Glazing {
        Glazing {
            id: id(raw),
            kind,
            outmost,
        }
    }

    #[test]
    fn median_of_even_and_odd_counts() {
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn taller_main_rooms_stand_out() {
        let house = House {
            rooms: vec![
                room(1, "Living", 12.0),
                room(2, "Bedroom", 9.0),
                room(3, "Bedroom 2", 9.0),
                // ancillary rooms are out of the comparison
                room(4, "Storage", 20.0),
            ],
            ..House::default()
        };
        let roles = RoleIndex::new(&house, &RoleTable::default());
        assert_eq!(dna55_height_variety(&house, &roles), vec![id(1)]);
    }

    #[test]
    fn uniform_heights_yield_no_variety() {
        let house = House {
            rooms: vec![room(1, "Living", 9.0), room(2, "Bedroom", 9.0)],
            ..House::default()
        };
        let roles = RoleIndex::new(&house, &RoleTable::default());
        assert!(dna55_height_variety(&house, &roles).is_empty());
    }

    #[test]
    fn separation_lines_never_count_as_daylight_windows() {
        let house = House {
            rooms: vec![room(1, "Living", 9.0)],
            glazings: vec![
                glazing(100, OpeningKind::Window, true),
                glazing(101, OpeningKind::RoomSeparationLine, true),
            ],
            room_glazing_relations: vec![
                RoomGlazingRelation::new(id(1), id(100), [Direction::South]),
                RoomGlazingRelation::new(id(1), id(101), [Direction::East]),
            ],
            ..House::default()
        };
        let counts = window_count_by_room(&house);
        assert_eq!(counts.get(&id(1)), Some(&1));
        assert!(dna61_two_sided_rooms(&house).is_empty());
    }

    #[test]
    fn two_outmost_windows_light_a_room_from_two_sides() {
        let house = House {
            rooms: vec![room(1, "Living", 9.0)],
            glazings: vec![
                glazing(100, OpeningKind::Window, true),
                glazing(101, OpeningKind::Window, true),
            ],
            room_glazing_relations: vec![
                RoomGlazingRelation::new(id(1), id(100), [Direction::South]),
                RoomGlazingRelation::new(id(1), id(101), [Direction::East]),
            ],
            ..House::default()
        };
        assert_eq!(dna61_two_sided_rooms(&house), vec![id(1)]);
        assert_eq!(dna64_outdoor_rooms(&house), vec![id(1)]);
    }

    #[test]
    fn interior_window_spanning_two_sides_is_detected() {
        let house = House {
            rooms: vec![room(1, "Living", 9.0), room(2, "Balcony", 9.0)],
            glazings: vec![glazing(100, OpeningKind::Window, false)],
            room_glazing_relations: vec![
                RoomGlazingRelation::new(id(1), id(100), [Direction::North]),
                RoomGlazingRelation::new(id(2), id(100), [Direction::South]),
            ],
            ..House::default()
        };
        let roles = RoleIndex::new(&house, &RoleTable::default());
        assert_eq!(dna68_interior_window_rooms(&house), vec![id(1), id(2)]);
        // a semi-outdoor room exists, so the window overlooks life
        assert_eq!(
            dna67_overlooking_rooms(&house, &roles),
            vec![id(1), id(2)]
        );
    }

    #[test]
    fn overlooking_needs_a_semi_outdoor_room() {
        let house = House {
            rooms: vec![room(1, "Living", 9.0), room(2, "Study", 9.0)],
            glazings: vec![glazing(100, OpeningKind::Window, false)],
            room_glazing_relations: vec![
                RoomGlazingRelation::new(id(1), id(100), [Direction::North]),
                RoomGlazingRelation::new(id(2), id(100), [Direction::South]),
            ],
            ..House::default()
        };
        let roles = RoleIndex::new(&house, &RoleTable::default());
        assert!(dna67_overlooking_rooms(&house, &roles).is_empty());
        assert_eq!(dna68_interior_window_rooms(&house), vec![id(1), id(2)]);
    }

    #[test]
    fn asymmetric_bedroom_doors_mark_independence() {
        let house = House {
            rooms: vec![
                room(1, "Bedroom", 9.0),
                room(2, "Corridor", 9.0),
                room(3, "Bedroom 2", 9.0),
            ],
            room_connections: vec![
                // canonical ordering stores (1, 2): bedroom on the a side
                RoomConnection::new(id(2), id(1), OpeningKind::Door),
                // (2, 3): bedroom 3 on the b side only
                RoomConnection::new(id(2), id(3), OpeningKind::Door),
            ],
            ..House::default()
        };
        let roles = RoleIndex::new(&house, &RoleTable::default());
        assert_eq!(dna54_independent_bedrooms(&house, &roles), vec![id(1)]);
    }
}
