//! Metric/imperial conversion and display for tree measurements.
//!
//! Everything is stored in metric (centimetres for trunk diameter, metres for height,
//! square metres for area); these helpers convert at the display edge.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const CM_PER_INCH: f64 = 2.54;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const SQ_METERS_PER_SQ_FOOT: f64 = METERS_PER_FOOT * METERS_PER_FOOT;
pub const SQ_FEET_PER_ACRE: f64 = 43_560.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

pub fn sq_meters_to_sq_feet(area_m2: f64) -> f64 {
    area_m2 / SQ_METERS_PER_SQ_FOOT
}

pub fn sq_feet_to_sq_meters(area_ft2: f64) -> f64 {
    area_ft2 * SQ_METERS_PER_SQ_FOOT
}

/// Trunk diameter from a girth (circumference) measurement in the same unit.
pub fn circumference_to_diameter(circumference: f64) -> f64 {
    circumference / PI
}

/// Formats a trunk diameter stored in centimetres, one decimal place.
///
/// ```
/// use arboracle::units::{UnitSystem, format_diameter};
///
/// assert_eq!(format_diameter(30.0, UnitSystem::Metric), "30.0 cm");
/// assert_eq!(format_diameter(30.48, UnitSystem::Imperial), "12.0 in");
/// ```
pub fn format_diameter(cm: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => format!("{:.1} cm", cm),
        UnitSystem::Imperial => format!("{:.1} in", cm_to_inches(cm)),
    }
}

/// Formats a height stored in metres, one decimal place.
pub fn format_height(meters: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => format!("{:.1} m", meters),
        UnitSystem::Imperial => format!("{:.1} ft", meters_to_feet(meters)),
    }
}

/// Formats an area stored in m².
///
/// Metric output matches [`format_area`](crate::format_area). Imperial output uses acres
/// from one acre upwards and square feet below that.
pub fn format_area_in(area_m2: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => crate::precision::format_area(area_m2),
        UnitSystem::Imperial => {
            let sq_feet = sq_meters_to_sq_feet(area_m2);
            if sq_feet >= SQ_FEET_PER_ACRE {
                format!("{:.2} acres", sq_feet / SQ_FEET_PER_ACRE)
            } else {
                format!("{:.2} ft²", sq_feet)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        assert!((cm_to_inches(2.54) - 1.0).abs() < 1e-12);
        assert!((inches_to_cm(12.0) - 30.48).abs() < 1e-12);
        assert!((meters_to_feet(0.3048) - 1.0).abs() < 1e-12);
        assert!((feet_to_meters(10.0) - 3.048).abs() < 1e-12);
        assert!((inches_to_cm(cm_to_inches(47.3)) - 47.3).abs() < 1e-9);
    }

    #[test]
    fn test_area_conversions() {
        assert!((sq_feet_to_sq_meters(1.0) - 0.09290304).abs() < 1e-12);
        assert!((sq_meters_to_sq_feet(9.8) - 105.486_321).abs() < 1e-5);
    }

    #[test]
    fn test_circumference_to_diameter() {
        assert!((circumference_to_diameter(PI * 40.0) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_height() {
        assert_eq!(format_height(12.5, UnitSystem::Metric), "12.5 m");
        assert_eq!(format_height(3.048, UnitSystem::Imperial), "10.0 ft");
    }

    #[test]
    fn test_format_area_in() {
        assert_eq!(format_area_in(9.8, UnitSystem::Metric), "9.80 m²");
        assert_eq!(format_area_in(9.8, UnitSystem::Imperial), "105.49 ft²");
        assert_eq!(format_area_in(75_625.0, UnitSystem::Imperial), "18.69 acres");
    }

    #[test]
    fn test_unit_system_serde() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&UnitSystem::Imperial)?, "\"imperial\"");
        let parsed: UnitSystem = serde_json::from_str("\"metric\"")?;
        assert_eq!(parsed, UnitSystem::Metric);
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
        Ok(())
    }
}
