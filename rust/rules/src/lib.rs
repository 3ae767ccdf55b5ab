// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Housing-pattern inference over the symbolic house model.
//!
//! The engine classifies rooms into roles by name, builds the adjacency
//! and sun-exposure graphs, evaluates the rule catalog and reports the
//! patterns present in the plan as graph nodes, joined by white edges
//! (always-compatible pattern pairs) and gray edges (pairs that also
//! need a structural condition to hold in this particular plan).

pub mod attribute;
pub mod catalog;
pub mod graphs;
pub mod gray;
pub mod network;
pub mod roles;
pub mod sunlight;

use std::collections::BTreeSet;

use plan_dna_model::House;
use tracing::debug;

pub use catalog::{label, PatternId, CATALOG, WHITE_EDGES};
pub use graphs::{AdjacencyGraph, SunExposureGraph, MAX_SUN_ORDER, SUN_DIRECTIONS};
pub use roles::{Role, RoleIndex, RoleTable};
pub use sunlight::SUNLIT_ORDER;

use attribute::{
    dna54_independent_bedrooms, dna55_height_variety, dna61_two_sided_rooms, dna64_outdoor_rooms,
    dna67_overlooking_rooms, dna68_interior_window_rooms,
};
use gray::{gray_edges, StructuralSets};
use network::{
    dna36_intimacy_gradient, dna38_direct_connection, dna41_central_public,
    dna43_cheerful_corridor,
};
use sunlight::{dna37_indoor_sunlight, dna52_sunlit_bedrooms, sun_orders};

/// The pattern graph of one analyzed house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Present patterns with their labels, in catalog order.
    pub nodes: Vec<(PatternId, &'static str)>,
    /// White edges first, then gray edges, in table order.
    pub edges: Vec<(PatternId, PatternId)>,
}

/// Analyze a house with the built-in role vocabulary.
pub fn analyze(house: &House) -> Analysis {
    analyze_with(house, &RoleTable::default())
}

/// Analyze a house with a custom role vocabulary.
pub fn analyze_with(house: &House, table: &RoleTable) -> Analysis {
    let roles = RoleIndex::new(house, table);
    let adjacency = AdjacencyGraph::from_house(house);
    let sun = SunExposureGraph::from_relations(house, &SUN_DIRECTIONS);
    let orders = sun_orders(house, &sun);

    let sunlit_gradient = dna37_indoor_sunlight(&orders, &roles);
    let central = dna41_central_public(&adjacency, house, &roles);
    let sunlit_bedrooms = dna52_sunlit_bedrooms(&orders, &roles);
    let independent = dna54_independent_bedrooms(house, &roles);
    let height_variety = dna55_height_variety(house, &roles);
    let two_sided = dna61_two_sided_rooms(house);
    let outdoor_windows = dna64_outdoor_rooms(house);
    let overlooking = dna67_overlooking_rooms(house, &roles);
    let interior_windows = dna68_interior_window_rooms(house);

    let mut present: BTreeSet<PatternId> = BTreeSet::new();
    let mut emit = |id: PatternId, holds: bool| {
        if holds {
            present.insert(id);
        }
    };
    emit("dna1", !house.rooms.is_empty());
    emit("dna29", !roles.semi_outdoor.is_empty());
    emit("dna33", !roles.entrances.is_empty());
    emit("dna34", !roles.entrances.is_empty());
    emit("dna36", dna36_intimacy_gradient(&adjacency, &roles));
    emit("dna37", !sunlit_gradient.is_empty());
    let direct = dna38_direct_connection(&adjacency, &roles);
    emit("dna38", direct);
    emit("dna38-1", !direct);
    emit("dna41", !central.is_empty());
    emit("dna41-1", central.is_empty());
    emit("dna42", !roles.entrances.is_empty());
    emit("dna43", dna43_cheerful_corridor(house, &roles));
    emit("dna45", !roles.main_bedrooms.is_empty());
    emit("dna46", !roles.child_bedrooms.is_empty());
    emit("dna48", !roles.kitchens.is_empty());
    emit("dna49", !roles.dining.is_empty());
    emit("dna50", !roles.bathrooms.is_empty());
    emit("dna51", !roles.storage.is_empty());
    emit("dna52", !sunlit_bedrooms.is_empty());
    emit("dna53", !roles.dressing.is_empty());
    emit("dna54", !independent.is_empty());
    emit("dna55", !height_variety.is_empty());
    emit("dna61", !two_sided.is_empty());
    emit("dna64", !outdoor_windows.is_empty());
    emit("dna67", !overlooking.is_empty());
    emit("dna68", !interior_windows.is_empty());

    let nodes: Vec<(PatternId, &'static str)> = CATALOG
        .iter()
        .filter(|(id, _)| present.contains(id))
        .map(|(id, label)| (*id, *label))
        .collect();

    let mut edges: Vec<(PatternId, PatternId)> = WHITE_EDGES
        .iter()
        .filter(|(a, b)| present.contains(a) && present.contains(b))
        .copied()
        .collect();

    let semi_outdoor: BTreeSet<_> = roles.semi_outdoor.iter().copied().collect();
    let sets = StructuralSets {
        two_sided: two_sided.into_iter().collect(),
        outdoor: orders
            .iter()
            .filter(|(_, &order)| order <= SUNLIT_ORDER)
            .map(|(&room, _)| room)
            .chain(outdoor_windows)
            .filter(|room| !semi_outdoor.contains(room))
            .collect(),
        overlooking: overlooking.into_iter().collect(),
        interior_window: interior_windows.into_iter().collect(),
    };
    edges.extend(gray_edges(house, &roles, &sets, &present));

    debug!(
        rooms = house.rooms.len(),
        patterns = nodes.len(),
        edges = edges.len(),
        "house analyzed"
    );
    Analysis { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_dna_model::{ElementId, Length, OpeningKind, Room, RoomConnection};

    fn id(raw: i64) -> ElementId {
        ElementId(raw)
    }

    fn room(raw: i64, name: &str) -> Room {
        Room::new(id(raw), name, Length::from_ft(9.0))
    }

    #[test]
    fn empty_house_has_no_patterns() {
        let analysis = analyze(&House::default());
        assert!(analysis.nodes.iter().all(|(id, _)| *id != "dna1"));
    }

    #[test]
    fn any_room_makes_a_house() {
        let house = House {
            rooms: vec![room(1, "Living")],
            ..House::default()
        };
        let analysis = analyze(&house);
        assert_eq!(analysis.nodes[0], ("dna1", "A house of its own"));
    }

    #[test]
    fn white_edges_require_both_endpoints() {
        let house = House {
            rooms: vec![room(1, "Entrance"), room(2, "Living"), room(3, "안방")],
            room_connections: vec![
                RoomConnection::new(id(1), id(2), OpeningKind::Door),
                RoomConnection::new(id(2), id(3), OpeningKind::Door),
            ],
            ..House::default()
        };
        let analysis = analyze(&house);
        let present: BTreeSet<PatternId> =
            analysis.nodes.iter().map(|(id, _)| *id).collect();
        // dna33 and dna34 ride on the entrance, so their edge appears
        assert!(analysis.edges.contains(&("dna33", "dna34")));
        for (a, b) in &analysis.edges {
            assert!(present.contains(a) && present.contains(b));
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let house = House {
            rooms: vec![
                room(1, "Entrance"),
                room(2, "Living"),
                room(3, "Bedroom"),
                room(4, "Kitchen"),
            ],
            room_connections: vec![
                RoomConnection::new(id(1), id(2), OpeningKind::Door),
                RoomConnection::new(id(2), id(3), OpeningKind::Door),
                RoomConnection::new(id(2), id(4), OpeningKind::Door),
            ],
            ..House::default()
        };
        assert_eq!(analyze(&house), analyze(&house));
    }
}
