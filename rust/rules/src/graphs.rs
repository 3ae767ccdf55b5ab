// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Graph views of the house: room adjacency and sun exposure.

use petgraph::algo::{connected_components, dijkstra};
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use plan_dna_model::{Direction, ElementId, House};
use rustc_hash::FxHashMap;

/// Sun orders saturate here; nine rooms deep is as dark as it gets.
pub const MAX_SUN_ORDER: usize = 9;

/// Directions a window faces when it admits direct sun, mid-latitude
/// northern hemisphere.
pub const SUN_DIRECTIONS: [Direction; 3] =
    [Direction::South, Direction::Southeast, Direction::Southwest];

/// Wider sun set used by the two-sided-light window count, which also
/// credits low morning and evening sun.
pub const WIDE_SUN_DIRECTIONS: [Direction; 5] = [
    Direction::South,
    Direction::Southeast,
    Direction::Southwest,
    Direction::East,
    Direction::West,
];

/// Undirected room adjacency: one node per room, one edge per
/// connection.
pub struct AdjacencyGraph {
    graph: UnGraph<ElementId, ()>,
    index: FxHashMap<ElementId, NodeIndex>,
}

impl AdjacencyGraph {
    pub fn from_house(house: &House) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut index = FxHashMap::default();
        for room in &house.rooms {
            index.entry(room.id).or_insert_with(|| graph.add_node(room.id));
        }
        for conn in &house.room_connections {
            if let (Some(&a), Some(&b)) = (index.get(&conn.a), index.get(&conn.b)) {
                graph.update_edge(a, b, ());
            }
        }
        AdjacencyGraph { graph, index }
    }

    /// Unweighted shortest-path length, `None` when either node is
    /// missing or unreachable.
    pub fn distance(&self, from: ElementId, to: ElementId) -> Option<usize> {
        let (&from, &to) = (self.index.get(&from)?, self.index.get(&to)?);
        let lengths = dijkstra(&self.graph, from, Some(to), |_| 1usize);
        lengths.get(&to).copied()
    }

    /// Number of connected components once the given rooms are removed.
    pub fn components_without(&self, removed: &[ElementId]) -> usize {
        let mut pruned = self.graph.clone();
        // collect first, removal invalidates indices
        let mut victims: Vec<NodeIndex> = removed
            .iter()
            .filter_map(|id| self.index.get(id).copied())
            .collect();
        victims.sort();
        for node in victims.into_iter().rev() {
            pruned.remove_node(node);
        }
        connected_components(&pruned)
    }

    /// Closeness centrality with the Wasserman-Faust reachable-fraction
    /// correction, matching what network analysis toolkits report.
    pub fn closeness(&self, room: ElementId) -> f64 {
        let Some(&node) = self.index.get(&room) else {
            return 0.0;
        };
        let n = self.graph.node_count();
        if n <= 1 {
            return 0.0;
        }
        let lengths = dijkstra(&self.graph, node, None, |_| 1usize);
        let reachable = lengths.len();
        let total: usize = lengths.values().sum();
        if reachable <= 1 || total == 0 {
            return 0.0;
        }
        let r = (reachable - 1) as f64;
        (r / total as f64) * (r / (n - 1) as f64)
    }
}

/// Directed sun-exposure graph over rooms and glazings.
///
/// A room points at a glazing it faces in a sun direction; a glazing
/// points at a room facing it from the opposite side. A path from a
/// room to an outmost glazing therefore traces how daylight reaches the
/// room, and its length is the room's sun order.
pub struct SunExposureGraph {
    graph: DiGraph<ElementId, ()>,
    index: FxHashMap<ElementId, NodeIndex>,
}

impl SunExposureGraph {
    pub fn from_relations(house: &House, sun_directions: &[Direction]) -> Self {
        let mut graph = DiGraph::new();
        let mut index: FxHashMap<ElementId, NodeIndex> = FxHashMap::default();
        let mut node = |graph: &mut DiGraph<ElementId, ()>, id: ElementId| {
            *index.entry(id).or_insert_with(|| graph.add_node(id))
        };
        let opposites: Vec<Direction> =
            sun_directions.iter().map(|d| d.opposite()).collect();

        for rel in &house.room_glazing_relations {
            if rel.facings.iter().any(|f| sun_directions.contains(f)) {
                let room = node(&mut graph, rel.room);
                let glazing = node(&mut graph, rel.glazing);
                graph.update_edge(room, glazing, ());
            }
            if rel.facings.iter().any(|f| opposites.contains(f)) {
                let glazing = node(&mut graph, rel.glazing);
                let room = node(&mut graph, rel.room);
                graph.update_edge(glazing, room, ());
            }
        }
        SunExposureGraph { graph, index }
    }

    /// Steps of borrowed light between a node and the nearest outmost
    /// glazing, capped at [`MAX_SUN_ORDER`]. A node with no window path
    /// to the outside (or absent from the graph entirely) gets the cap.
    pub fn sun_order(&self, from: ElementId, outmost: &[ElementId]) -> usize {
        let Some(&node) = self.index.get(&from) else {
            return MAX_SUN_ORDER;
        };
        let lengths = dijkstra(&self.graph, node, None, |_| 1usize);
        outmost
            .iter()
            .filter_map(|id| self.index.get(id))
            .filter_map(|node| lengths.get(node).copied())
            .fold(MAX_SUN_ORDER, usize::min)
    }
}
