//! Precision levels, the ground area each one covers, and precision suggestions
//! from trunk size.

use crate::index::DEFAULT_PRECISION;

/// Approximate ground area in square metres covered by a code of each length.
///
/// Values are the cell size near the equator. Finer codes cover strictly smaller areas.
pub const PRECISION_AREAS: [(u8, f64); 7] = [
    (8, 75_625.0),
    (10, 193.21),
    (11, 9.8),
    (12, 0.4872),
    (13, 0.0242),
    (14, 0.0015),
    (15, 0.00007),
];

fn lookup(precision: u8) -> Option<f64> {
    PRECISION_AREAS
        .iter()
        .find(|(p, _)| *p == precision)
        .map(|(_, area)| *area)
}

/// Returns the soil responsibility area in m² for a precision level.
///
/// Precisions without a table entry get the area for [`DEFAULT_PRECISION`].
///
/// # Example
/// ```
/// use arboracle::area_for_precision;
///
/// assert_eq!(area_for_precision(11), 9.8);
/// assert_eq!(area_for_precision(9), area_for_precision(11));
/// ```
pub fn area_for_precision(precision: u8) -> f64 {
    lookup(precision)
        .or_else(|| lookup(DEFAULT_PRECISION))
        .unwrap_or_default()
}

/// Suggests a code precision from a trunk diameter at breast height (DBH) in centimetres.
///
/// Bigger trees get coarser codes so the cell covers a larger root zone.
///
/// | DBH (cm)     | Precision |
/// |--------------|-----------|
/// | `< 10`       | 13        |
/// | `< 30`       | 12        |
/// | `< 60`       | 11        |
/// | `< 100`      | 10        |
/// | otherwise    | 9         |
///
/// NaN compares false against every threshold and lands in the last tier.
pub fn precision_for_trunk_diameter(dbh_cm: f64) -> u8 {
    if dbh_cm < 10.0 {
        13
    } else if dbh_cm < 30.0 {
        12
    } else if dbh_cm < 60.0 {
        11
    } else if dbh_cm < 100.0 {
        10
    } else {
        9
    }
}

/// Formats an area given in m² using km², m² or cm², whichever fits.
///
/// # Example
/// ```
/// use arboracle::format_area;
///
/// assert_eq!(format_area(2_500_000.0), "2.50 km²");
/// assert_eq!(format_area(9.8), "9.80 m²");
/// assert_eq!(format_area(0.0006), "6.00 cm²");
/// ```
pub fn format_area(area_m2: f64) -> String {
    if area_m2 >= 1_000_000.0 {
        format!("{:.2} km²", area_m2 / 1_000_000.0)
    } else if area_m2 >= 1.0 {
        format!("{:.2} m²", area_m2)
    } else {
        format!("{:.2} cm²", area_m2 * 10_000.0)
    }
}
