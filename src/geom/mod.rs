mod parse;

pub use parse::{anchor_point, parse_geojson, parse_geometry, parse_wkt};

use geo_types::Polygon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Renders a polygon in the requested text format.
pub fn polygon_to_string(polygon: &Polygon<f64>, format: GeometryFormat) -> String {
    match format {
        GeometryFormat::Wkt => polygon_to_wkt(polygon),
        GeometryFormat::GeoJson => polygon_to_geojson(polygon),
    }
}

pub fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::index::decode;

    #[test]
    fn test_code_cell_as_wkt() -> Result<()> {
        let polygon = decode("7FG49Q00+")?.to_polygon();
        let wkt = polygon_to_string(&polygon, GeometryFormat::Wkt);
        assert!(wkt.starts_with("POLYGON"));

        let parsed = parse_geometry(&wkt)?;
        assert!(matches!(parsed, geo_types::Geometry::Polygon(_)));
        Ok(())
    }

    #[test]
    fn test_code_cell_as_geojson() -> Result<()> {
        let polygon = decode("7FG49Q00+")?.to_polygon();
        let json = polygon_to_string(&polygon, GeometryFormat::GeoJson);
        assert!(json.contains("\"Polygon\""));

        let parsed = parse_geometry(&json)?;
        let anchor = anchor_point(&parsed)?;
        assert!((anchor.x() - 2.775).abs() < 1e-9);
        assert!((anchor.y() - 20.375).abs() < 1e-9);
        Ok(())
    }
}
