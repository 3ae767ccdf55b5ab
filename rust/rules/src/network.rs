// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rules judged from the room adjacency network.

use std::collections::BTreeSet;

use plan_dna_model::{ElementId, House, OpeningKind};

use crate::attribute::dna64_outdoor_rooms;
use crate::graphs::AdjacencyGraph;
use crate::roles::RoleIndex;

/// dna36: the plan moves from public to private as one walks in.
///
/// Judged from the first entrance: the nearest public room must be
/// closer than the farthest bedroom. Rooms unreachable from the
/// entrance do not take part in the comparison.
pub fn dna36_intimacy_gradient(graph: &AdjacencyGraph, roles: &RoleIndex) -> bool {
    let Some(&entrance) = roles.entrances.first() else {
        return false;
    };
    let reach = |rooms: &[ElementId]| -> Vec<usize> {
        rooms
            .iter()
            .filter_map(|&room| graph.distance(entrance, room))
            .collect()
    };
    let public = reach(&roles.public);
    let bedrooms = reach(&roles.bedrooms);
    match (public.iter().min(), bedrooms.iter().max()) {
        (Some(nearest_public), Some(farthest_bedroom)) => nearest_public < farthest_bedroom,
        _ => false,
    }
}

/// dna38: every room reaches every other without passing a corridor.
pub fn dna38_direct_connection(graph: &AdjacencyGraph, roles: &RoleIndex) -> bool {
    graph.components_without(&roles.corridors) == 1
}

/// dna41: public rooms whose closeness centrality beats every
/// non-public room's.
pub fn dna41_central_public(
    graph: &AdjacencyGraph,
    house: &House,
    roles: &RoleIndex,
) -> Vec<ElementId> {
    let public: BTreeSet<ElementId> = roles.public.iter().copied().collect();
    let max_other = house
        .rooms
        .iter()
        .filter(|r| !public.contains(&r.id))
        .map(|r| graph.closeness(r.id))
        .fold(None, |acc: Option<f64>, c| Some(acc.map_or(c, |a| a.max(c))));
    let Some(max_other) = max_other else {
        // every room is public, no benchmark to beat
        return Vec::new();
    };
    roles
        .public
        .iter()
        .copied()
        .filter(|&room| graph.closeness(room) > max_other)
        .collect()
}

/// dna43: corridors are not boring.
///
/// Holds when there is no corridor at all, when a corridor opens onto a
/// non-ancillary room across a separation line, or when a corridor has
/// its own window to the outdoors.
pub fn dna43_cheerful_corridor(house: &House, roles: &RoleIndex) -> bool {
    if roles.corridors.is_empty() {
        return true;
    }
    let corridors: BTreeSet<ElementId> = roles.corridors.iter().copied().collect();
    let ancillary: BTreeSet<ElementId> = roles.ancillary.iter().copied().collect();

    let open_connection = house.room_connections.iter().any(|conn| {
        conn.kind == OpeningKind::RoomSeparationLine
            && ((corridors.contains(&conn.a) && !ancillary.contains(&conn.b))
                || (corridors.contains(&conn.b) && !ancillary.contains(&conn.a)))
    });
    let window_out = dna64_outdoor_rooms(house)
        .iter()
        .any(|room| corridors.contains(room));

    open_connection || window_out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleTable;
    use plan_dna_model::{Glazing, Length, Room, RoomConnection, RoomGlazingRelation};

    fn id(raw: i64) -> ElementId {
        ElementId(raw)
    }

    fn room(raw: i64, name: &str) -> Room {
        Room::new(id(raw), name, Length::from_ft(9.0))
    }

    fn door(a: i64, b: i64) -> RoomConnection {
        RoomConnection::new(id(a), id(b), OpeningKind::Door)
    }

    fn roles(house: &House) -> RoleIndex {
        RoleIndex::new(house, &RoleTable::default())
    }

    /// Entrance - Living - Bedroom in a row.
    fn gradient_house() -> House {
        House {
            rooms: vec![room(1, "Entrance"), room(2, "Living"), room(3, "Bedroom")],
            room_connections: vec![door(1, 2), door(2, 3)],
            ..House::default()
        }
    }

    #[test]
    fn public_before_private_is_a_gradient() {
        let house = gradient_house();
        let graph = AdjacencyGraph::from_house(&house);
        assert!(dna36_intimacy_gradient(&graph, &roles(&house)));
    }

    #[test]
    fn bedroom_at_the_door_breaks_the_gradient() {
        // Entrance - Bedroom - Living
        let house = House {
            rooms: vec![room(1, "Entrance"), room(2, "Bedroom"), room(3, "Living")],
            room_connections: vec![door(1, 2), door(2, 3)],
            ..House::default()
        };
        let graph = AdjacencyGraph::from_house(&house);
        assert!(!dna36_intimacy_gradient(&graph, &roles(&house)));
    }

    #[test]
    fn no_entrance_means_no_gradient() {
        let house = House {
            rooms: vec![room(2, "Living"), room(3, "Bedroom")],
            room_connections: vec![door(2, 3)],
            ..House::default()
        };
        let graph = AdjacencyGraph::from_house(&house);
        assert!(!dna36_intimacy_gradient(&graph, &roles(&house)));
    }

    #[test]
    fn corridor_removal_reveals_indirection() {
        // two bedrooms joined only through a corridor
        let house = House {
            rooms: vec![room(1, "Bedroom"), room(2, "Corridor"), room(3, "Bedroom 2")],
            room_connections: vec![door(1, 2), door(2, 3)],
            ..House::default()
        };
        let graph = AdjacencyGraph::from_house(&house);
        assert!(!dna38_direct_connection(&graph, &roles(&house)));

        let direct = gradient_house();
        let graph = AdjacencyGraph::from_house(&direct);
        assert!(dna38_direct_connection(&graph, &roles(&direct)));
    }

    #[test]
    fn hub_living_room_is_central() {
        // Living is the hub of a star of private rooms
        let house = House {
            rooms: vec![
                room(1, "Living"),
                room(2, "Bedroom"),
                room(3, "Bedroom 2"),
                room(4, "Study"),
            ],
            room_connections: vec![door(1, 2), door(1, 3), door(1, 4)],
            ..House::default()
        };
        let graph = AdjacencyGraph::from_house(&house);
        assert_eq!(
            dna41_central_public(&graph, &house, &roles(&house)),
            vec![id(1)]
        );
    }

    #[test]
    fn corridorless_plan_is_cheerful_by_default() {
        let house = gradient_house();
        assert!(dna43_cheerful_corridor(&house, &roles(&house)));
    }

    #[test]
    fn corridor_needs_an_opening_or_a_window() {
        let closed = House {
            rooms: vec![room(1, "Corridor"), room(2, "Living")],
            room_connections: vec![door(1, 2)],
            ..House::default()
        };
        assert!(!dna43_cheerful_corridor(&closed, &roles(&closed)));

        let open = House {
            room_connections: vec![RoomConnection::new(
                id(1),
                id(2),
                OpeningKind::RoomSeparationLine,
            )],
            ..closed.clone()
        };
        assert!(dna43_cheerful_corridor(&open, &roles(&open)));

        let lit = House {
            glazings: vec![Glazing {
                id: id(100),
                kind: OpeningKind::Window,
                outmost: true,
            }],
            room_glazing_relations: vec![RoomGlazingRelation::new(
                id(1),
                id(100),
                [plan_dna_model::Direction::South],
            )],
            ..closed.clone()
        };
        assert!(dna43_cheerful_corridor(&lit, &roles(&lit)));
    }
}
