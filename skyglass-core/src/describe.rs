//! Human-readable categories for raw weather readings.

use std::fmt;

/// Relative humidity bucket: `< 30` low, `30..=60` moderate, `> 60` high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidityLevel {
    Low,
    Moderate,
    High,
}

pub fn humidity_label(pct: u8) -> HumidityLevel {
    match pct {
        0..=29 => HumidityLevel::Low,
        30..=60 => HumidityLevel::Moderate,
        _ => HumidityLevel::High,
    }
}

impl fmt::Display for HumidityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HumidityLevel::Low => "Low",
            HumidityLevel::Moderate => "Moderate",
            HumidityLevel::High => "High",
        })
    }
}

/// Eight-point compass rose.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    const ALL: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a wind bearing to the nearest compass point.
///
/// Each point owns a 45° sector centred on it, so north covers 337.5°..22.5°.
/// Out-of-range bearings wrap modulo 360.
pub fn wind_direction_label(deg: i32) -> CompassPoint {
    let deg = deg.rem_euclid(360);
    // sector boundaries sit on half degrees, so integer input never ties
    let index = ((deg * 2 + 45) / 90) % 8;
    CompassPoint::ALL[index as usize]
}

/// Visibility bucket: `< 1000` m poor, `1000..=10000` m moderate, beyond that good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityLevel {
    Poor,
    Moderate,
    Good,
}

pub fn visibility_label(meters: u32) -> VisibilityLevel {
    match meters {
        0..=999 => VisibilityLevel::Poor,
        1_000..=10_000 => VisibilityLevel::Moderate,
        _ => VisibilityLevel::Good,
    }
}

impl fmt::Display for VisibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VisibilityLevel::Poor => "Poor",
            VisibilityLevel::Moderate => "Moderate",
            VisibilityLevel::Good => "Good",
        })
    }
}
