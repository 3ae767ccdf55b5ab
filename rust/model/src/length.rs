// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// A length in millimetres, rounded to 2 decimal places at construction.
///
/// The host CAD application works in feet internally; [`Length::from_ft`]
/// converts using the exact definition 1 ft = 304.8 mm, so
/// `Length::from_ft(6.0)` is exactly 1828.8 mm.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Length {
    mm: f64,
}

impl Length {
    pub fn new(mm: f64) -> Self {
        // limit the precision so values survive a wire round trip
        Length {
            mm: (mm * 100.0).round() / 100.0,
        }
    }

    pub fn from_ft(feet: f64) -> Self {
        Length::new(feet * 304.8)
    }

    pub fn mm(self) -> f64 {
        self.mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rounds_to_two_decimals() {
        assert_relative_eq!(Length::new(100.12345).mm(), 100.12);
    }

    #[test]
    fn converts_from_feet_exactly() {
        assert_relative_eq!(Length::from_ft(6.0).mm(), 1828.8);
        assert_relative_eq!(Length::from_ft(10.0).mm(), 3048.0);
    }
}
