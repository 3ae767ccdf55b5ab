// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The canonical pattern catalog.
//!
//! Pattern ids follow the numbering of Alexander's "A Pattern Language";
//! `dna38-1` and `dna41-1` are the negations of their base patterns and
//! are emitted exactly when the base pattern is absent.

/// A pattern identifier, e.g. `"dna36"`.
pub type PatternId = &'static str;

/// Every pattern the engine can emit, in output order, with its display
/// label.
pub const CATALOG: &[(PatternId, &str)] = &[
    ("dna1", "A house of its own"),
    ("dna29", "Semi-outdoor space"),
    ("dna33", "Main entrance"),
    ("dna34", "Entrance transition"),
    ("dna36", "Intimacy gradient"),
    ("dna37", "Indoor sunlight"),
    ("dna38", "Direct connection"),
    ("dna38-1", "Corridor-mediated connection"),
    ("dna41", "Common rooms at the heart"),
    ("dna41-1", "Off-center common rooms"),
    ("dna42", "Entrance room"),
    ("dna43", "Cheerful corridor"),
    ("dna45", "Couple's realm"),
    ("dna46", "Children's realm"),
    ("dna48", "Kitchen"),
    ("dna49", "Eating atmosphere"),
    ("dna50", "Bathing room"),
    ("dna51", "Bulk storage"),
    ("dna52", "Sunlit bedrooms"),
    ("dna53", "Dressing room"),
    ("dna54", "A room of one's own"),
    ("dna55", "Ceiling height variety"),
    ("dna61", "Light on two sides"),
    ("dna64", "Windows to the outdoors"),
    ("dna67", "Windows overlooking life"),
    ("dna68", "Interior windows"),
];

/// Label of a pattern id.
pub fn label(id: PatternId) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, label)| *label)
}

/// Pattern pairs that are always compatible: an edge is emitted whenever
/// both endpoints are present, with no further structural condition.
pub const WHITE_EDGES: &[(PatternId, PatternId)] = &[
    ("dna33", "dna34"),
    ("dna34", "dna42"),
    ("dna36", "dna42"),
    ("dna36", "dna45"),
    ("dna36", "dna46"),
    ("dna37", "dna52"),
    ("dna38", "dna41"),
    ("dna41", "dna48"),
    ("dna41", "dna49"),
    ("dna45", "dna53"),
    ("dna46", "dna52"),
    ("dna48", "dna49"),
    ("dna50", "dna53"),
    ("dna55", "dna61"),
    ("dna61", "dna64"),
    ("dna64", "dna67"),
    ("dna67", "dna68"),
    ("dna29", "dna64"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: BTreeSet<PatternId> = CATALOG.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn white_edges_reference_cataloged_patterns() {
        for &(a, b) in WHITE_EDGES {
            assert!(label(a).is_some(), "unknown pattern {a}");
            assert!(label(b).is_some(), "unknown pattern {b}");
        }
    }

    #[test]
    fn labels_resolve() {
        assert_eq!(label("dna36"), Some("Intimacy gradient"));
        assert_eq!(label("dna99"), None);
    }
}
