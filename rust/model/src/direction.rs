// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Compass directions in 8 horizontal buckets plus the two vertical ones.
//!
//! Every rotation (opposite, quarter turns to either side) is an explicit
//! match table rather than arithmetic on discriminants, so the enum
//! encoding can never leak into the results.

/// One of the 8 horizontal compass buckets, or straight up/down.
///
/// `Up` and `Down` exist for completeness of the building model; they do
/// not participate in horizontal-facing logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    Up,
    Down,
}

/// The 8 horizontal buckets in compass order, north first.
pub const COMPASS: [Direction; 8] = [
    Direction::North,
    Direction::Northeast,
    Direction::East,
    Direction::Southeast,
    Direction::South,
    Direction::Southwest,
    Direction::West,
    Direction::Northwest,
];

impl Direction {
    /// The opposite direction (4/8 rotation); involutive.
    pub fn opposite(self) -> Direction {
        use Direction::*;
        match self {
            North => South,
            Northeast => Southwest,
            East => West,
            Southeast => Northwest,
            South => North,
            Southwest => Northeast,
            West => East,
            Northwest => Southeast,
            Up => Down,
            Down => Up,
        }
    }

    /// Facing direction of the left-hand side of a linear feature that
    /// runs toward `self` (a 2/8 rotation clockwise).
    pub fn from_left(self) -> Direction {
        use Direction::*;
        match self {
            North => East,
            Northeast => Southeast,
            East => South,
            Southeast => Southwest,
            South => West,
            Southwest => Northwest,
            West => North,
            Northwest => Northeast,
            // vertical features face the same way all around
            Up => Up,
            Down => Down,
        }
    }

    /// Facing direction of the right-hand side of a linear feature that
    /// runs toward `self` (a 2/8 rotation counter-clockwise).
    pub fn from_right(self) -> Direction {
        use Direction::*;
        match self {
            North => West,
            Northeast => Northwest,
            East => North,
            Southeast => Northeast,
            South => East,
            Southwest => Southeast,
            West => South,
            Northwest => Southwest,
            Up => Up,
            Down => Down,
        }
    }

    /// 1-based compass bucket number (north = 1), `None` for Up/Down.
    pub fn bucket(self) -> Option<u8> {
        COMPASS
            .iter()
            .position(|&d| d == self)
            .map(|i| (i + 1) as u8)
    }

    /// Wire member name, matching the original enumeration spelling.
    pub fn wire_name(self) -> &'static str {
        use Direction::*;
        match self {
            North => "NORTH",
            Northeast => "NORTHEAST",
            East => "EAST",
            Southeast => "SOUTHEAST",
            South => "SOUTH",
            Southwest => "SOUTHWEST",
            West => "WEST",
            Northwest => "NORTHWEST",
            Up => "UP",
            Down => "DOWN",
        }
    }

    /// Inverse of [`Direction::wire_name`].
    pub fn from_wire_name(name: &str) -> Option<Direction> {
        use Direction::*;
        Some(match name {
            "NORTH" => North,
            "NORTHEAST" => Northeast,
            "EAST" => East,
            "SOUTHEAST" => Southeast,
            "SOUTH" => South,
            "SOUTHWEST" => Southwest,
            "WEST" => West,
            "NORTHWEST" => Northwest,
            "UP" => Up,
            "DOWN" => Down,
            _ => return None,
        })
    }
}

/// Check whether a facing set points to genuinely different sides.
///
/// Fuzziness of one bucket makes neighboring directions equal to each
/// other: `{North, Northeast}` is a single side, `{North, East}` is not.
/// Up/Down never contribute.
pub fn multiple_sides<'a, I>(directions: I) -> bool
where
    I: IntoIterator<Item = &'a Direction> + Clone,
{
    const NUM_DIRECTIONS: i32 = 8;
    const FUZZINESS: i32 = 1;

    let buckets: Vec<i32> = directions
        .into_iter()
        .filter_map(|d| d.bucket())
        .map(i32::from)
        .collect();

    for (i, a) in buckets.iter().enumerate() {
        for b in &buckets[i + 1..] {
            let diff = (a - b).abs();
            if diff > FUZZINESS && diff < NUM_DIRECTIONS - FUZZINESS {
                return true;
            }
        }
    }
    false
}
