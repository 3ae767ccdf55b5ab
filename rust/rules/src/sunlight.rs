// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rules judged from sun orders of rooms.

use std::collections::BTreeMap;

use plan_dna_model::{ElementId, House};

use crate::graphs::{SunExposureGraph, MAX_SUN_ORDER};
use crate::roles::RoleIndex;

/// A room counts as sunlit up to this many borrowed-light steps.
pub const SUNLIT_ORDER: usize = 3;

/// Sun order of every room in the house.
pub fn sun_orders(house: &House, graph: &SunExposureGraph) -> BTreeMap<ElementId, usize> {
    let outmost = house.outmost_glazing_ids();
    house
        .rooms
        .iter()
        .map(|room| (room.id, graph.sun_order(room.id, &outmost)))
        .collect()
}

fn order_of(orders: &BTreeMap<ElementId, usize>, room: ElementId) -> usize {
    orders.get(&room).copied().unwrap_or(MAX_SUN_ORDER)
}

/// dna37: living happens closer to the sun than serving does.
///
/// Compares average sun orders of main rooms against indoor ancillary
/// rooms and, when mains win, returns the rooms on the convincing side
/// of either average.
pub fn dna37_indoor_sunlight(
    orders: &BTreeMap<ElementId, usize>,
    roles: &RoleIndex,
) -> Vec<ElementId> {
    if roles.main.is_empty() || roles.indoor_ancillary.is_empty() {
        return Vec::new();
    }
    let average = |rooms: &[ElementId]| -> f64 {
        rooms.iter().map(|&r| order_of(orders, r) as f64).sum::<f64>() / rooms.len() as f64
    };
    let avg_main = average(&roles.main);
    let avg_ancillary = average(&roles.indoor_ancillary);
    if avg_main >= avg_ancillary {
        return Vec::new();
    }
    let mut rooms: Vec<ElementId> = roles
        .main
        .iter()
        .copied()
        .filter(|&room| (order_of(orders, room) as f64) < avg_ancillary)
        .collect();
    rooms.extend(
        roles
            .indoor_ancillary
            .iter()
            .copied()
            .filter(|&room| (order_of(orders, room) as f64) > avg_main),
    );
    rooms
}

/// dna52: bedrooms within sunlit reach.
pub fn dna52_sunlit_bedrooms(
    orders: &BTreeMap<ElementId, usize>,
    roles: &RoleIndex,
) -> Vec<ElementId> {
    roles
        .bedrooms
        .iter()
        .copied()
        .filter(|&room| order_of(orders, room) <= SUNLIT_ORDER)
        .collect()
}
