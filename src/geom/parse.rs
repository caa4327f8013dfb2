use crate::error::{ArboracleError, Result};
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| ArboracleError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => Geometry::try_from(geom)
            .map_err(|e| ArboracleError::GeometryParseError(e.to_string())),
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| {
                ArboracleError::GeometryParseError("Feature has no geometry".to_string())
            })
            .and_then(|g| {
                Geometry::try_from(g)
                    .map_err(|e| ArboracleError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(ArboracleError::GeometryParseError(
            "FeatureCollection not supported, use one geometry per tree".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| ArboracleError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        ArboracleError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

/// Reduces a geometry to the single point a tree is addressed by.
///
/// Points are returned as-is; anything else (a crown outline, a canopy multipolygon)
/// is reduced to its centroid.
pub fn anchor_point(geom: &Geometry<f64>) -> Result<Point<f64>> {
    match geom {
        Geometry::Point(pt) => Ok(*pt),
        other => other.centroid().ok_or_else(|| {
            ArboracleError::GeometryParseError("Geometry has no centroid".to_string())
        }),
    }
}
