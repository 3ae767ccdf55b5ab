// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly of the symbolic [`House`] from an extracted floor plan.

use std::collections::{BTreeMap, BTreeSet};

use geo::Polygon;
use plan_dna_model::{
    ElementId, Glazing, House, Length, OpeningKind, Room, RoomConnection, RoomGlazingRelation,
};
use tracing::debug;

use crate::extract::ExtractedPlan;
use crate::facing::{line_facings, point_facing, to_polygon};
use crate::segment::segment_polyline;

/// Doors at or above this surface transparency (percent) pass daylight
/// and count as glazing in addition to being connections.
pub const TRANSPARENCY_THRESHOLD: i32 = 10;

/// Build the symbolic house model from an extracted plan.
///
/// Rooms missing a name or height are dropped, and every adjoining-room
/// set is filtered down to the surviving rooms, so the result is
/// referentially closed. Output ordering is deterministic: rooms keep
/// the plan's order, connections, glazings and relations come out in
/// ascending id order.
pub fn build_house(plan: &ExtractedPlan) -> House {
    let rooms = collect_rooms(plan);
    let known: BTreeSet<ElementId> = rooms.iter().map(|r| r.id).collect();
    let room_polygons = collect_room_polygons(plan, &known);

    let adjoining = |id: ElementId| -> BTreeSet<ElementId> {
        plan.adjoining_rooms
            .get(&id)
            .map(|set| set.intersection(&known).copied().collect())
            .unwrap_or_default()
    };

    // Connections: doors and separation lines bridging 2 or more rooms.
    let mut connections: BTreeSet<RoomConnection> = BTreeSet::new();
    let passages = [
        (&plan.doors, OpeningKind::Door),
        (&plan.separation_lines, OpeningKind::RoomSeparationLine),
    ];
    for (ids, kind) in passages {
        for &id in ids {
            let adj = adjoining(id);
            if adj.len() < 2 {
                continue;
            }
            let adj: Vec<ElementId> = adj.into_iter().collect();
            for (i, &a) in adj.iter().enumerate() {
                for &b in &adj[i + 1..] {
                    connections.insert(RoomConnection::new(a, b, kind));
                }
            }
        }
    }

    // Glazings: windows, curtain walls and separation lines touching at
    // least one room, plus doors transparent enough to pass daylight.
    let mut glazings: BTreeMap<ElementId, Glazing> = BTreeMap::new();
    let panes = [
        (&plan.windows, OpeningKind::Window),
        (&plan.curtain_walls, OpeningKind::CurtainWall),
        (&plan.separation_lines, OpeningKind::RoomSeparationLine),
    ];
    for (ids, kind) in panes {
        for &id in ids {
            let adj = adjoining(id);
            if adj.is_empty() {
                continue;
            }
            glazings.insert(
                id,
                Glazing {
                    id,
                    kind,
                    outmost: adj.len() == 1,
                },
            );
        }
    }
    for &id in &plan.doors {
        let transparency = plan.transparencies.get(&id).copied().unwrap_or(0);
        if transparency < TRANSPARENCY_THRESHOLD {
            continue;
        }
        let adj = adjoining(id);
        if adj.is_empty() {
            continue;
        }
        glazings.insert(
            id,
            Glazing {
                id,
                kind: OpeningKind::Door,
                outmost: adj.len() == 1,
            },
        );
    }

    // Facing relations between each glazing and its adjoining rooms.
    let mut relations: Vec<RoomGlazingRelation> = Vec::new();
    for (&id, glazing) in &glazings {
        match glazing.kind {
            OpeningKind::Door | OpeningKind::Window => {
                let Some(&point) = plan.points.get(&id) else {
                    debug!(%id, "glazing has no placement point, skipping relations");
                    continue;
                };
                for room_id in adjoining(id) {
                    let Some(polygon) = room_polygons.get(&room_id) else {
                        continue;
                    };
                    if let Some(facing) = point_facing(point, polygon, plan.true_north) {
                        relations.push(RoomGlazingRelation::new(room_id, id, [facing]));
                    }
                }
            }
            OpeningKind::CurtainWall | OpeningKind::RoomSeparationLine => {
                let Some(polyline) = plan.polylines.get(&id) else {
                    debug!(%id, "glazing has no polyline, skipping relations");
                    continue;
                };
                let runs = segment_polyline(polyline, plan.true_north);
                for room_id in adjoining(id) {
                    let Some(polygon) = room_polygons.get(&room_id) else {
                        continue;
                    };
                    let facings = line_facings(&runs, polygon);
                    if !facings.is_empty() {
                        relations.push(RoomGlazingRelation::new(room_id, id, facings));
                    }
                }
            }
        }
    }

    House {
        rooms,
        room_connections: connections.into_iter().collect(),
        glazings: glazings.into_values().collect(),
        room_glazing_relations: relations,
    }
}

fn collect_rooms(plan: &ExtractedPlan) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(plan.rooms.len());
    for &id in &plan.rooms {
        let (Some(name), Some(&height)) = (plan.names.get(&id), plan.heights.get(&id)) else {
            debug!(%id, "room missing name or height, dropped");
            continue;
        };
        rooms.push(Room::new(id, name.clone(), Length::from_ft(height)));
    }
    rooms
}

fn collect_room_polygons(
    plan: &ExtractedPlan,
    known: &BTreeSet<ElementId>,
) -> BTreeMap<ElementId, Polygon<f64>> {
    let mut polygons = BTreeMap::new();
    for &id in known {
        let Some(rings) = plan.boundaries.get(&id) else {
            debug!(%id, "room has no boundary rings");
            continue;
        };
        match to_polygon(rings) {
            Some(polygon) => {
                polygons.insert(id, polygon);
            }
            None => debug!(%id, "room boundary is degenerate"),
        }
    }
    polygons
}
