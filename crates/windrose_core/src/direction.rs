use std::{f64::consts::PI, fmt, str::FromStr};

use serde::Serialize;

use crate::error::UnknownCompassCode;

/// Angular width of one compass sector in radians.
pub const SECTOR_WIDTH: f64 = 2.0 * PI / 16.0;

/// The sixteen compass points, ordered counter-clockwise starting at East.
///
/// The discriminant is the sector index, so `point as usize * SECTOR_WIDTH`
/// is the polar angle used when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum CompassPoint {
    East = 0,
    EastNorthEast,
    NorthEast,
    NorthNorthEast,
    North,
    NorthNorthWest,
    NorthWest,
    WestNorthWest,
    West,
    WestSouthWest,
    SouthWest,
    SouthSouthWest,
    South,
    SouthSouthEast,
    SouthEast,
    EastSouthEast,
}

pub const COMPASS_POINTS: [CompassPoint; 16] = [
    CompassPoint::East,
    CompassPoint::EastNorthEast,
    CompassPoint::NorthEast,
    CompassPoint::NorthNorthEast,
    CompassPoint::North,
    CompassPoint::NorthNorthWest,
    CompassPoint::NorthWest,
    CompassPoint::WestNorthWest,
    CompassPoint::West,
    CompassPoint::WestSouthWest,
    CompassPoint::SouthWest,
    CompassPoint::SouthSouthWest,
    CompassPoint::South,
    CompassPoint::SouthSouthEast,
    CompassPoint::SouthEast,
    CompassPoint::EastSouthEast,
];

impl CompassPoint {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Polar angle in radians, measured counter-clockwise from East.
    pub fn angle(self) -> f64 {
        self.index() as f64 * SECTOR_WIDTH
    }

    pub fn code(self) -> &'static str {
        match self {
            CompassPoint::East => "E",
            CompassPoint::EastNorthEast => "ENE",
            CompassPoint::NorthEast => "NE",
            CompassPoint::NorthNorthEast => "NNE",
            CompassPoint::North => "N",
            CompassPoint::NorthNorthWest => "NNW",
            CompassPoint::NorthWest => "NW",
            CompassPoint::WestNorthWest => "WNW",
            CompassPoint::West => "W",
            CompassPoint::WestSouthWest => "WSW",
            CompassPoint::SouthWest => "SW",
            CompassPoint::SouthSouthWest => "SSW",
            CompassPoint::South => "S",
            CompassPoint::SouthSouthEast => "SSE",
            CompassPoint::SouthEast => "SE",
            CompassPoint::EastSouthEast => "ESE",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<CompassPoint> for &'static str {
    fn from(value: CompassPoint) -> Self {
        value.code()
    }
}

impl FromStr for CompassPoint {
    type Err = UnknownCompassCode;

    // Codes are matched exactly; "ne" is not a known code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COMPASS_POINTS
            .iter()
            .copied()
            .find(|point| point.code() == s)
            .ok_or_else(|| UnknownCompassCode(s.to_string()))
    }
}
