//! # arboracle
//!
//! Plus Code (Open Location Code) addressing for tree inventories. There are currently
//! three main entry points.
//!
//! ### 1. `LocationCode` - Addressing a Single Tree
//!
//! ```
//! use arboracle::{LocationCode, format_area};
//!
//! let code = LocationCode::generate(37.7749, -122.4194, 11);
//! assert_eq!(code.global, "849VQHFJ+X6");
//! assert_eq!(code.tree_address, "Tree Address: 849V+QHFJ+X69");
//! println!("{}", format_area(code.soil_responsibility_area));
//! ```
//!
//! Encoding never panics: a location that cannot be encoded produces an empty
//! `LocationCode`. Use `LocationCode::try_generate` to get the error instead.
//!
//! ### 2. Precision Tiers
//!
//! Pick a precision from the trunk diameter, then look up the ground area it covers:
//!
//! ```
//! use arboracle::{area_for_precision, format_area, precision_for_trunk_diameter};
//!
//! let precision = precision_for_trunk_diameter(24.0);
//! assert_eq!(precision, 12);
//! println!("{}", format_area(area_for_precision(precision)));
//! ```
//!
//! ### 3. `csv_to_plus_code_csv` - CSV File Conversion
//!
//! Add Plus Code columns to a tree inventory CSV with latitude/longitude columns
//! or a WKT/GeoJSON geometry column:
//!
//! ```no_run
//! use arboracle::{CsvToPlusCodes, GeometryFormat, TreeCsvConfig};
//!
//! let config = TreeCsvConfig::from_coords("Latitude", "Longitude")
//!     .dbh_column("DBH")
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! "trees.csv".to_plus_code_csv("trees_coded.csv", &config).unwrap();
//! ```
//!

pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;
pub mod location;
pub mod precision;
pub mod tree;
pub mod units;

pub use coord::Coordinate;
pub use error::{ArboracleError, Result};
pub use geom::{GeometryFormat, anchor_point, parse_geometry};
pub use index::{
    CodeArea, DEFAULT_PRECISION, GLOBAL_CODE_LENGTH, LocationEncoder, MAX_CODE_LENGTH,
    OpenLocationCode, decode, encode, is_full, is_short, is_valid,
};
pub use io::{CoordinateSource, CsvToPlusCodes, TreeCsvConfig, csv_to_plus_code_csv};
pub use location::{LocationCode, generate_location_code, generate_location_codes};
pub use precision::{
    PRECISION_AREAS, area_for_precision, format_area, precision_for_trunk_diameter,
};
pub use tree::TreeRecord;
pub use units::UnitSystem;

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<()> {
        let precision = precision_for_trunk_diameter(45.0);
        let code = generate_location_code(37.7749, -122.4194, precision);

        assert!(!code.is_empty());
        assert_eq!(code.precise.len(), precision as usize + 1);
        assert_eq!(code.formatted_area(), "9.80 m²");

        let area = decode(&code.precise)?;
        assert_eq!(area.code_length, precision as usize);

        let polygon = code.to_polygon()?;
        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_points() {
        let pt = point! { x: -0.1278, y: 51.5074 };
        let code = LocationCode::from_wgs84(&pt, DEFAULT_PRECISION);
        assert_eq!(code.global, "9C3XGV4C+XV");
        assert!(pt.is_in_range());
    }

    #[test]
    fn test_all_table_precisions_encode() {
        for (precision, area) in PRECISION_AREAS {
            let code = generate_location_code(-41.2865, 174.7762, precision);
            assert!(!code.is_empty(), "precision {} failed", precision);
            assert_eq!(code.soil_responsibility_area, area);
        }
    }

    #[test]
    fn test_tree_record_workflow() {
        let mut tree = TreeRecord::new("plane-3", 51.5074, -0.1278).with_dbh(62.0);
        let code = tree.assign_location();

        assert_eq!(tree.suggested_precision(), 10);
        assert_eq!(code.precise, code.global);
        assert_eq!(code.tree_address, "Tree Address: 9C3X+GV4C+XV");
        assert_eq!(
            units::format_area_in(code.soil_responsibility_area, UnitSystem::Metric),
            "193.21 m²"
        );
    }

    #[test]
    fn test_custom_encoder_through_public_api() -> Result<()> {
        let code = LocationCode::try_generate_with(&OpenLocationCode, 20.3700625, 2.7821875, 10)?;
        assert_eq!(code.global, "7FG49QCJ+2V");
        assert_eq!(code.local, "9QCJ+2V");
        Ok(())
    }
}
