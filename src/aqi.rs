//! Air Quality Index (AQI) classification.
//!
//! Maps a pollutant concentration onto the standard AQI integer scale and its
//! colour category using piecewise-linear breakpoint tables. The band anchors
//! are offset from the raw breakpoints (each band's numerator starts one unit
//! in the last decimal above the previous band's upper bound) and the
//! interpolated index truncates toward zero. Both behaviours are relied upon
//! by dashboard consumers and must not be "corrected" to a generic
//! normalisation formula.

use serde::Serialize;
use strum_macros::Display;

/// Pollutant kinds with a breakpoint table.
///
/// Anything outside the known set is `Other` and cannot be classified.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Pollutant {
    /// Ozone, concentration in ppm
    Ozone,
    /// PM2.5, concentration in µg/m³
    Pm25,
    /// Unclassifiable pollutant
    Other,
}

impl Pollutant {
    /// Map a monitor CSV parameter label onto a pollutant kind.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "ozone" => Self::Ozone,
            "pm2.5 - local conditions" => Self::Pm25,
            _ => Self::Other,
        }
    }
}

/// AQI colour categories, from least to most severe.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
}

/// A classified concentration: AQI index and colour category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aqi {
    /// AQI index, always at least 1.
    pub index: u32,
    /// Colour category of the band the concentration fell in.
    pub category: Category,
}

/// Classify a pollutant concentration.
///
/// Returns `None` for [Pollutant::Other]; callers must treat this as "not
/// classifiable" rather than an error. The returned index is clamped to a
/// minimum of 1, so degenerate inputs (zero, negative) still classify.
pub fn classify(concentration: f64, pollutant: Pollutant) -> Option<Aqi> {
    let (index, category) = match pollutant {
        Pollutant::Ozone => ozone_aqi(concentration),
        Pollutant::Pm25 => pm25_aqi(concentration),
        Pollutant::Other => return None,
    };
    Some(Aqi {
        // Saturate rather than wrap for absurdly large extrapolated indices.
        index: u32::try_from(index.max(1)).unwrap_or(u32::MAX),
        category,
    })
}

/// Ozone breakpoint table (ppm).
///
/// Above 0.105 ppm the index extrapolates at a fixed 10 points per 0.01 ppm
/// with the purple category.
fn ozone_aqi(c: f64) -> (i64, Category) {
    if c <= 0.054 {
        (trunc(c / 0.054 * 50.0), Category::Green)
    } else if c <= 0.070 {
        (51 + trunc((c - 0.055) / (0.070 - 0.055) * 49.0), Category::Yellow)
    } else if c <= 0.085 {
        (101 + trunc((c - 0.071) / (0.085 - 0.071) * 49.0), Category::Orange)
    } else if c <= 0.105 {
        (151 + trunc((c - 0.086) / (0.105 - 0.086) * 49.0), Category::Red)
    } else {
        (201 + trunc((c - 0.106) / 0.01 * 10.0), Category::Purple)
    }
}

/// PM2.5 breakpoint table (µg/m³).
///
/// Above 250.4 µg/m³ the index extrapolates over the 301-500 sub-range with
/// the maroon category.
fn pm25_aqi(c: f64) -> (i64, Category) {
    if c <= 12.0 {
        (trunc(c / 12.0 * 50.0), Category::Green)
    } else if c <= 35.4 {
        (51 + trunc((c - 12.1) / (35.4 - 12.1) * 49.0), Category::Yellow)
    } else if c <= 55.4 {
        (101 + trunc((c - 35.5) / (55.4 - 35.5) * 49.0), Category::Orange)
    } else if c <= 150.4 {
        (151 + trunc((c - 55.5) / (150.4 - 55.5) * 49.0), Category::Red)
    } else if c <= 250.4 {
        (201 + trunc((c - 150.5) / (250.4 - 150.5) * 99.0), Category::Purple)
    } else {
        (301 + trunc((c - 250.5) / (500.0 - 250.5) * 199.0), Category::Maroon)
    }
}

/// Truncate toward zero, matching the legacy integer conversion.
fn trunc(value: f64) -> i64 {
    value as i64
}
