// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room-role classification from display names.
//!
//! Roles are assigned by vocabulary matching against the room name after
//! normalization: trailing room numbers are dropped, surrounding
//! punctuation is stripped and the comparison is case-insensitive.
//! Exclusion terms always win over match terms. The built-in vocabulary
//! covers English and Korean naming conventions; a custom [`RoleTable`]
//! can replace it wholesale.

use std::collections::BTreeMap;

use plan_dna_model::{ElementId, House};

/// The nameable room roles. A room can hold several roles at once
/// ("LDK" is living, dining and kitchen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Entrance,
    Bedroom,
    MainBedroom,
    Living,
    Dining,
    Kitchen,
    Courtyard,
    Corridor,
    Bathroom,
    Dressing,
    Storage,
    SemiOutdoor,
}

/// All roles, for iteration.
pub const ROLES: [Role; 12] = [
    Role::Entrance,
    Role::Bedroom,
    Role::MainBedroom,
    Role::Living,
    Role::Dining,
    Role::Kitchen,
    Role::Courtyard,
    Role::Corridor,
    Role::Bathroom,
    Role::Dressing,
    Role::Storage,
    Role::SemiOutdoor,
];

/// Vocabulary for one role. `exact` terms must equal the whole
/// normalized name; `partial` terms match as substrings.
#[derive(Debug, Clone, Default)]
pub struct RoleSpec {
    pub exact: Vec<&'static str>,
    pub partial: Vec<&'static str>,
    pub exclude_exact: Vec<&'static str>,
    pub exclude_partial: Vec<&'static str>,
}

/// Role vocabulary table.
#[derive(Debug, Clone)]
pub struct RoleTable {
    specs: BTreeMap<Role, RoleSpec>,
}

/// Characters stripped from both ends of a room name before matching.
const NAME_PUNCTUATION: &str = " .,;'`-=&()[]{}";

/// Normalize a room name for vocabulary matching: drop trailing room
/// numbers, strip punctuation, lowercase.
fn normalize(name: &str) -> String {
    name.trim_end_matches(|c: char| c.is_ascii_digit())
        .trim_matches(|c: char| NAME_PUNCTUATION.contains(c))
        .to_lowercase()
}

impl RoleTable {
    pub fn new(specs: BTreeMap<Role, RoleSpec>) -> Self {
        RoleTable { specs }
    }

    /// Whether a room name carries the given role.
    pub fn matches(&self, role: Role, name: &str) -> bool {
        let Some(spec) = self.specs.get(&role) else {
            return false;
        };
        let name = normalize(name);
        if spec.exclude_exact.iter().any(|term| name == *term) {
            return false;
        }
        if spec.exclude_partial.iter().any(|term| name.contains(term)) {
            return false;
        }
        spec.exact.iter().any(|term| name == *term)
            || spec.partial.iter().any(|term| name.contains(term))
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        let mut specs = BTreeMap::new();
        specs.insert(
            Role::Entrance,
            RoleSpec {
                exact: vec!["현관", "ent", "hall", "foyer", "porch"],
                partial: vec!["입구", "entrance", "entry", "vestibule"],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Bedroom,
            RoleSpec {
                // main bedrooms are bedrooms too
                exact: vec!["침실", "안방", "부부 침실", "br", "mbr", "bed"],
                partial: vec!["침실", "bedroom"],
                exclude_partial: vec!["드레스"],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::MainBedroom,
            RoleSpec {
                exact: vec![
                    "안방",
                    "부부 침실",
                    "main bedroom",
                    "master bedroom",
                    "mbr",
                ],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Living,
            RoleSpec {
                exact: vec!["l", "ld", "lk", "ldk", "front room"],
                partial: vec![
                    "거실",
                    "응접실",
                    "마루",
                    "living",
                    "sitting",
                    "lounge",
                    "parlor",
                    "parlour",
                    "drawing",
                    "reception",
                    "salon",
                    "family",
                ],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Dining,
            RoleSpec {
                exact: vec!["d", "ld", "dk", "ldk"],
                partial: vec!["식당", "식사", "dining", "dine", "breakfast", "eating"],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Kitchen,
            RoleSpec {
                exact: vec!["k", "lk", "dk", "ldk"],
                partial: vec!["주방", "부엌", "kitchen", "cook", "scullery"],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Courtyard,
            RoleSpec {
                exact: vec!["마당"],
                partial: vec!["중정", "court"],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Corridor,
            RoleSpec {
                exact: vec!["co", "corr", "bdg"],
                partial: vec![
                    "복도",
                    "회랑",
                    "통로",
                    "corridor",
                    "hallway",
                    "passage",
                    "bridge",
                ],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Bathroom,
            RoleSpec {
                exact: vec!["bth", "wc"],
                partial: vec![
                    "욕실",
                    "화장실",
                    "세면",
                    "bath",
                    "toilet",
                    "wash",
                    "powder",
                ],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Dressing,
            RoleSpec {
                exact: vec!["wic", "closet", "clo"],
                partial: vec![
                    "드레스",
                    "옷방",
                    "dress",
                    "walk-in closet",
                    "w.i.c",
                    "shoe",
                    "cloak",
                ],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::Storage,
            RoleSpec {
                exact: vec!["창고", "sto", "wh", "ldy"],
                partial: vec![
                    "수납",
                    "다용도",
                    "팬트리",
                    "세탁",
                    "warehouse",
                    "storage",
                    "utility",
                    "pantry",
                    "laundry",
                    "linen",
                ],
                ..RoleSpec::default()
            },
        );
        specs.insert(
            Role::SemiOutdoor,
            RoleSpec {
                partial: vec![
                    "발코니",
                    "베란다",
                    "테라스",
                    "balcony",
                    "veranda",
                    "terrace",
                    "patio",
                    "deck",
                    "porch",
                    "sunroom",
                    "sun room",
                ],
                ..RoleSpec::default()
            },
        );
        RoleTable::new(specs)
    }
}

/// Per-role room lists for one house, each in model room order.
///
/// Derived classes follow the usual split: public rooms are the
/// sociopetal ones, ancillary rooms serve the rest, and main rooms are
/// everything not ancillary.
#[derive(Debug, Clone, Default)]
pub struct RoleIndex {
    pub entrances: Vec<ElementId>,
    pub bedrooms: Vec<ElementId>,
    pub main_bedrooms: Vec<ElementId>,
    /// Bedrooms that are not main bedrooms.
    pub child_bedrooms: Vec<ElementId>,
    pub living: Vec<ElementId>,
    pub dining: Vec<ElementId>,
    pub kitchens: Vec<ElementId>,
    pub courtyards: Vec<ElementId>,
    pub corridors: Vec<ElementId>,
    pub bathrooms: Vec<ElementId>,
    pub dressing: Vec<ElementId>,
    pub storage: Vec<ElementId>,
    pub semi_outdoor: Vec<ElementId>,
    /// Living, dining, kitchen, courtyard or corridor.
    pub public: Vec<ElementId>,
    /// Bathroom, dressing, storage, entrance or semi-outdoor.
    pub ancillary: Vec<ElementId>,
    /// Ancillary and not semi-outdoor.
    pub indoor_ancillary: Vec<ElementId>,
    /// Complement of ancillary.
    pub main: Vec<ElementId>,
}

impl RoleIndex {
    pub fn new(house: &House, table: &RoleTable) -> Self {
        let mut index = RoleIndex::default();
        for room in &house.rooms {
            let has = |role: Role| table.matches(role, &room.name);
            let id = room.id;

            if has(Role::Entrance) {
                index.entrances.push(id);
            }
            if has(Role::Bedroom) {
                index.bedrooms.push(id);
                if !has(Role::MainBedroom) {
                    index.child_bedrooms.push(id);
                }
            }
            if has(Role::MainBedroom) {
                index.main_bedrooms.push(id);
            }
            if has(Role::Living) {
                index.living.push(id);
            }
            if has(Role::Dining) {
                index.dining.push(id);
            }
            if has(Role::Kitchen) {
                index.kitchens.push(id);
            }
            if has(Role::Courtyard) {
                index.courtyards.push(id);
            }
            if has(Role::Corridor) {
                index.corridors.push(id);
            }
            if has(Role::Bathroom) {
                index.bathrooms.push(id);
            }
            if has(Role::Dressing) {
                index.dressing.push(id);
            }
            if has(Role::Storage) {
                index.storage.push(id);
            }
            if has(Role::SemiOutdoor) {
                index.semi_outdoor.push(id);
            }

            let public = has(Role::Living)
                || has(Role::Dining)
                || has(Role::Kitchen)
                || has(Role::Courtyard)
                || has(Role::Corridor);
            let ancillary = has(Role::Bathroom)
                || has(Role::Dressing)
                || has(Role::Storage)
                || has(Role::Entrance)
                || has(Role::SemiOutdoor);
            if public {
                index.public.push(id);
            }
            if ancillary {
                index.ancillary.push(id);
                if !has(Role::SemiOutdoor) {
                    index.indoor_ancillary.push(id);
                }
            } else {
                index.main.push(id);
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_dna_model::{Length, Room};

    fn table() -> RoleTable {
        RoleTable::default()
    }

    #[test]
    fn trailing_numbers_and_punctuation_are_ignored() {
        assert!(table().matches(Role::Bedroom, "Bedroom 2"));
        assert!(table().matches(Role::Bathroom, "bath (1)"));
        assert!(table().matches(Role::Entrance, "ENT."));
    }

    #[test]
    fn composite_names_carry_several_roles() {
        for role in [Role::Living, Role::Dining, Role::Kitchen] {
            assert!(table().matches(role, "LDK"));
        }
        assert!(!table().matches(Role::Bedroom, "LDK"));
    }

    #[test]
    fn exclusions_beat_matches() {
        // a dressing room is never a bedroom even when named in Korean
        // with the bedroom particle
        assert!(!table().matches(Role::Bedroom, "드레스룸"));
        assert!(table().matches(Role::Dressing, "드레스룸"));
    }

    #[test]
    fn korean_names_resolve() {
        assert!(table().matches(Role::Living, "거실"));
        assert!(table().matches(Role::MainBedroom, "안방"));
        assert!(table().matches(Role::Bedroom, "안방"));
        assert!(table().matches(Role::SemiOutdoor, "발코니1"));
    }

    #[test]
    fn index_derives_main_and_child_bedrooms() {
        let room = |id: i64, name: &str| Room::new(ElementId(id), name, Length::from_ft(9.0));
        let house = House {
            rooms: vec![
                room(1, "Living"),
                room(2, "mbr"),
                room(3, "Bedroom 1"),
                room(4, "Bath"),
                room(5, "Balcony"),
            ],
            ..House::default()
        };
        let index = RoleIndex::new(&house, &table());
        assert_eq!(index.bedrooms, vec![ElementId(2), ElementId(3)]);
        assert_eq!(index.main_bedrooms, vec![ElementId(2)]);
        assert_eq!(index.child_bedrooms, vec![ElementId(3)]);
        assert_eq!(index.public, vec![ElementId(1)]);
        assert_eq!(index.ancillary, vec![ElementId(4), ElementId(5)]);
        assert_eq!(index.indoor_ancillary, vec![ElementId(4)]);
        assert_eq!(
            index.main,
            vec![ElementId(1), ElementId(2), ElementId(3)]
        );
    }
}
