use crate::core::geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of sales territories that have a place on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "Europe")]
    Europe,
    #[serde(rename = "Asia-Pacific")]
    AsiaPacific,
    #[serde(rename = "South America")]
    SouthAmerica,
    #[serde(rename = "Middle East")]
    MiddleEast,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::SouthAmerica,
        Region::MiddleEast,
    ];

    /// Display name, identical to the wire value of `SalesRep::region`.
    pub fn name(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia-Pacific",
            Region::SouthAmerica => "South America",
            Region::MiddleEast => "Middle East",
        }
    }

    /// Canonical map coordinate of the territory (lng, lat).
    pub fn coordinate(&self) -> Point {
        match self {
            Region::NorthAmerica => Point::new(-100.0, 45.0),
            Region::Europe => Point::new(10.0, 50.0),
            Region::AsiaPacific => Point::new(110.0, 15.0),
            Region::SouthAmerica => Point::new(-60.0, -15.0),
            Region::MiddleEast => Point::new(45.0, 25.0),
        }
    }

    /// Resolves a region name. Matching is exact, as names come from the API verbatim.
    pub fn from_name(name: &str) -> Option<Region> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_name(region.name()), Some(region));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Region::from_name("Antarctica"), None);
        assert_eq!(Region::from_name("europe"), None);
    }

    #[test]
    fn test_coordinates_are_on_map() {
        for region in Region::ALL {
            assert!(region.coordinate().is_valid(), "{region} off the map");
        }
        assert_eq!(Region::Europe.coordinate(), Point::new(10.0, 50.0));
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("[{:<8}]", Region::Europe), "[Europe  ]");
        assert_eq!(format!("[{:>8}]", Region::Europe), "[  Europe]");
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Region::AsiaPacific).unwrap();
        assert_eq!(json, "\"Asia-Pacific\"");
    }
}
