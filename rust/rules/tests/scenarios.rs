// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end engine scenarios on small synthetic houses.

use plan_dna_model::{
    Direction, ElementId, Glazing, House, Length, OpeningKind, Room, RoomConnection,
    RoomGlazingRelation,
};
use plan_dna_rules::{analyze, AdjacencyGraph, PatternId, RoleIndex, RoleTable};

fn id(raw: i64) -> ElementId {
    ElementId(raw)
}

fn room(raw: i64, name: &str) -> Room {
    Room::new(id(raw), name, Length::from_ft(9.0))
}

fn present(house: &House) -> Vec<PatternId> {
    analyze(house).nodes.into_iter().map(|(id, _)| id).collect()
}

/// Living - bedroom - dressing room in a row, no windows at all.
fn three_room_house() -> House {
    House {
        rooms: vec![
            room(1, "Living"),
            room(2, "Bedroom"),
            room(3, "Dress room"),
        ],
        room_connections: vec![
            RoomConnection::new(id(1), id(2), OpeningKind::Door),
            RoomConnection::new(id(2), id(3), OpeningKind::RoomSeparationLine),
        ],
        ..House::default()
    }
}

#[test]
fn windowless_house_is_still_a_house() {
    let patterns = present(&three_room_house());
    assert!(patterns.contains(&"dna1"));
    // no glazing anywhere, so no sun-dependent pattern can fire
    for sunny in ["dna37", "dna52", "dna61", "dna64", "dna67", "dna68"] {
        assert!(!patterns.contains(&sunny), "{sunny} without windows");
    }
}

#[test]
fn three_room_adjacency_is_one_component() {
    let house = three_room_house();
    let graph = AdjacencyGraph::from_house(&house);
    let roles = RoleIndex::new(&house, &RoleTable::default());
    assert!(roles.corridors.is_empty());
    assert_eq!(graph.components_without(&roles.corridors), 1);
    assert_eq!(graph.distance(id(1), id(3)), Some(2));
}

#[test]
fn dressing_and_bedroom_patterns_fire_by_name() {
    let patterns = present(&three_room_house());
    assert!(patterns.contains(&"dna46"));
    assert!(patterns.contains(&"dna53"));
    assert!(!patterns.contains(&"dna45"));
}

/// One room with a south outmost window, and a neighbor behind an
/// interior separation line whose facings span two clearly different
/// sides.
fn sunlit_pair() -> House {
    House {
        rooms: vec![room(1, "Living"), room(2, "Study")],
        glazings: vec![
            Glazing {
                id: id(100),
                kind: OpeningKind::Window,
                outmost: true,
            },
            Glazing {
                id: id(101),
                kind: OpeningKind::Window,
                outmost: false,
            },
        ],
        room_glazing_relations: vec![
            RoomGlazingRelation::new(id(1), id(100), [Direction::South]),
            RoomGlazingRelation::new(id(1), id(101), [Direction::North]),
            RoomGlazingRelation::new(id(2), id(101), [Direction::South]),
        ],
        ..House::default()
    }
}

#[test]
fn south_window_lights_the_room_chain() {
    let patterns = present(&sunlit_pair());
    assert!(patterns.contains(&"dna64"));
    // the interior window between the rooms spans north and south
    assert!(patterns.contains(&"dna68"));
    // but nothing semi-outdoor exists to overlook
    assert!(!patterns.contains(&"dna67"));
}

#[test]
fn asymmetric_bedroom_door_wins_a_room_of_ones_own() {
    let house = House {
        rooms: vec![room(1, "Bedroom"), room(2, "Corridor"), room(3, "Bedroom 2")],
        room_connections: vec![
            RoomConnection::new(id(2), id(1), OpeningKind::Door),
            RoomConnection::new(id(2), id(3), OpeningKind::Door),
        ],
        ..House::default()
    };
    let patterns = present(&house);
    assert!(patterns.contains(&"dna54"));
}

#[test]
fn nodes_come_out_in_catalog_order() {
    let analysis = analyze(&three_room_house());
    let ids: Vec<PatternId> = analysis.nodes.iter().map(|(id, _)| *id).collect();
    let mut sorted_by_catalog = ids.clone();
    sorted_by_catalog.sort_by_key(|id| {
        plan_dna_rules::CATALOG
            .iter()
            .position(|(candidate, _)| candidate == id)
    });
    assert_eq!(ids, sorted_by_catalog);
}

#[test]
fn analysis_is_idempotent() {
    for house in [three_room_house(), sunlit_pair(), House::default()] {
        assert_eq!(analyze(&house), analyze(&house));
    }
}

#[test]
fn every_edge_endpoint_is_an_emitted_node() {
    let analysis = analyze(&sunlit_pair());
    let nodes: Vec<PatternId> = analysis.nodes.iter().map(|(id, _)| *id).collect();
    for (from, to) in &analysis.edges {
        assert!(nodes.contains(from));
        assert!(nodes.contains(to));
    }
}
