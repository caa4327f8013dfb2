use crate::coord::Coordinate;
use crate::error::Result;
use crate::index::{
    AREA_PREFIX_LENGTH, CodeArea, GLOBAL_CODE_LENGTH, LocationEncoder, MAX_CODE_LENGTH,
    OpenLocationCode,
};
use crate::precision::{area_for_precision, format_area};
use geo_types::Polygon;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const TREE_ADDRESS_LABEL: &str = "Tree Address: ";

/// The Plus Code address of a tree at a chosen precision.
///
/// Built from a latitude/longitude pair. When encoding fails every string is empty and
/// the area is zero, see [`LocationCode::is_empty`].
///
/// # Example
///
/// ```
/// use arboracle::LocationCode;
///
/// let code = LocationCode::generate(37.7749, -122.4194, 11);
/// assert_eq!(code.global, "849VQHFJ+X6");
/// assert_eq!(code.local, "QHFJ+X6");
/// assert_eq!(code.precise, "849VQHFJ+X69");
/// assert_eq!(code.tree_address, "Tree Address: 849V+QHFJ+X69");
/// assert_eq!(code.soil_responsibility_area, 9.8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCode {
    /// Code at the standard length of 10 digits, including the area prefix
    pub global: String,
    /// `global` without its four character area prefix
    pub local: String,
    /// Code at the requested precision, at most 15 digits
    pub precise: String,
    /// Display address: area prefix, `+`, the rest of `global`, then any extra precise digits
    pub tree_address: String,
    /// Approximate ground area in m² for the precision used
    pub soil_responsibility_area: f64,
}

impl LocationCode {
    /// Generates a code with the native Open Location Code encoder.
    ///
    /// Never fails: if encoding fails the empty value is returned.
    pub fn generate(latitude: f64, longitude: f64, precision: u8) -> Self {
        Self::generate_with(&OpenLocationCode, latitude, longitude, precision)
    }

    /// Generates a code with the given encoder, returning the empty value on failure.
    pub fn generate_with<E: LocationEncoder + ?Sized>(
        encoder: &E,
        latitude: f64,
        longitude: f64,
        precision: u8,
    ) -> Self {
        match Self::try_generate_with(encoder, latitude, longitude, precision) {
            Ok(code) => code,
            Err(e) => {
                warn!(latitude, longitude, precision, error = %e, "location encoding failed");
                Self::default()
            }
        }
    }

    /// Generates a code with the native encoder, surfacing encoding failures.
    ///
    /// # Example
    /// ```
    /// use arboracle::{ArboracleError, LocationCode};
    ///
    /// let result = LocationCode::try_generate(f64::NAN, 0.0, 11);
    /// assert!(matches!(result, Err(ArboracleError::InvalidCoordinate { .. })));
    /// ```
    pub fn try_generate(latitude: f64, longitude: f64, precision: u8) -> Result<Self> {
        Self::try_generate_with(&OpenLocationCode, latitude, longitude, precision)
    }

    /// Generates a code with the given encoder, surfacing encoding failures.
    ///
    /// The precision is clamped to [`MAX_CODE_LENGTH`] before it is used for both the
    /// precise code and the area lookup.
    pub fn try_generate_with<E: LocationEncoder + ?Sized>(
        encoder: &E,
        latitude: f64,
        longitude: f64,
        precision: u8,
    ) -> Result<Self> {
        let precision = clamp_precision(precision);

        let global = encoder.encode(latitude, longitude, GLOBAL_CODE_LENGTH)?;
        let local = global.get(AREA_PREFIX_LENGTH..).unwrap_or_default().to_string();
        let precise = encoder.encode(latitude, longitude, precision as usize)?;
        let tree_address = compose_tree_address(&global, &precise);
        let soil_responsibility_area = area_for_precision(precision);

        debug!(latitude, longitude, precision, %precise, "generated location code");

        Ok(Self {
            global,
            local,
            precise,
            tree_address,
            soil_responsibility_area,
        })
    }

    /// Generates a code from a WGS84 coordinate (x = longitude, y = latitude).
    pub fn from_wgs84(coord: &impl Coordinate, precision: u8) -> Self {
        Self::generate(coord.latitude(), coord.longitude(), precision)
    }

    /// Returns true for the value produced by a failed encoding.
    ///
    /// A successful encoding never yields an empty global code, so this is the only way to
    /// tell a failure apart through [`LocationCode::generate`].
    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }

    /// The area prefix of the global code (its first four characters).
    pub fn area_prefix(&self) -> &str {
        self.global.get(..AREA_PREFIX_LENGTH).unwrap_or(&self.global)
    }

    /// The soil responsibility area formatted for display.
    pub fn formatted_area(&self) -> String {
        format_area(self.soil_responsibility_area)
    }

    /// Decodes the precise code into the area it covers.
    pub fn code_area(&self) -> Result<CodeArea> {
        self.code_area_with(&OpenLocationCode)
    }

    pub fn code_area_with<E: LocationEncoder + ?Sized>(&self, encoder: &E) -> Result<CodeArea> {
        encoder.decode(&self.precise)
    }

    /// Converts the precise code cell to a rectangular polygon in WGS84.
    pub fn to_polygon(&self) -> Result<Polygon<f64>> {
        Ok(self.code_area()?.to_polygon())
    }
}

/// Generates a [`LocationCode`], returning the empty value when encoding fails.
///
/// # Example
/// ```
/// use arboracle::{DEFAULT_PRECISION, generate_location_code};
///
/// let code = generate_location_code(51.5074, -0.1278, DEFAULT_PRECISION);
/// assert_eq!(code.global, "9C3XGV4C+XV");
///
/// let failed = generate_location_code(f64::NAN, -0.1278, DEFAULT_PRECISION);
/// assert!(failed.is_empty());
/// ```
pub fn generate_location_code(latitude: f64, longitude: f64, precision: u8) -> LocationCode {
    LocationCode::generate(latitude, longitude, precision)
}

/// Generates codes for many coordinates in parallel.
///
/// Output order matches input order. Failed encodings yield empty values.
pub fn generate_location_codes<C>(coords: &[C], precision: u8) -> Vec<LocationCode>
where
    C: Coordinate + Sync,
{
    coords
        .par_iter()
        .map(|c| LocationCode::from_wgs84(c, precision))
        .collect()
}

fn clamp_precision(precision: u8) -> u8 {
    precision.min(MAX_CODE_LENGTH as u8)
}

fn compose_tree_address(global: &str, precise: &str) -> String {
    let (area, local) = global
        .split_at_checked(AREA_PREFIX_LENGTH)
        .unwrap_or((global, ""));
    let extra = precise.get(global.len()..).unwrap_or_default();
    format!("{TREE_ADDRESS_LABEL}{area}+{local}{extra}")
}
