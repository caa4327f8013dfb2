use crate::error::{ArboracleError, Result};
use crate::geom::{GeometryFormat, anchor_point, parse_geometry, polygon_to_string};
use crate::index::DEFAULT_PRECISION;
use crate::location::LocationCode;
use crate::precision::precision_for_trunk_diameter;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Columns written ahead of the input columns, in order.
pub const OUTPUT_COLUMNS: [&str; 5] = [
    "plus_code_global",
    "plus_code_local",
    "plus_code_precise",
    "tree_address",
    "soil_responsibility_area",
];

/// Column holding the code cell geometry when requested.
pub const CELL_GEOMETRY_COLUMN: &str = "cell_geometry";

enum SourceIndices {
    Geometry(usize),
    Coordinates { lat_idx: usize, lng_idx: usize },
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry in WGS84
    GeometryColumn(String),
    /// Separate latitude and longitude columns
    CoordinateColumns {
        latitude_column: String,
        longitude_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct TreeCsvConfig {
    pub source: CoordinateSource,
    /// Column holding the trunk diameter in centimetres; drives the precision per row
    pub dbh_column: Option<String>,
    /// Precision used when a row has no trunk diameter
    pub precision: u8,
    pub exclude_columns: Vec<String>,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl TreeCsvConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use arboracle::TreeCsvConfig;
    ///
    /// let config = TreeCsvConfig::new("geometry");
    /// assert_eq!(config.precision, 11);
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            dbh_column: None,
            precision: DEFAULT_PRECISION,
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    /// Create config for a CSV with separate latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use arboracle::TreeCsvConfig;
    ///
    /// let config = TreeCsvConfig::from_coords("Latitude", "Longitude")
    ///     .dbh_column("DBH_cm")
    ///     .precision(12);
    /// ```
    pub fn from_coords(
        latitude_column: impl Into<String>,
        longitude_column: impl Into<String>,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                latitude_column: latitude_column.into(),
                longitude_column: longitude_column.into(),
            },
            dbh_column: None,
            precision: DEFAULT_PRECISION,
            exclude_columns: Vec::new(),
            include_cell_geometry: None,
        }
    }

    pub fn dbh_column(mut self, column: impl Into<String>) -> Self {
        self.dbh_column = Some(column.into());
        self
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    // Include the code cell polygon in output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToPlusCodes {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &TreeCsvConfig,
    ) -> Result<usize>;
}

impl<P: AsRef<Path>> CsvToPlusCodes for P {
    fn to_plus_code_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &TreeCsvConfig,
    ) -> Result<usize> {
        csv_to_plus_code_csv(self, output_path, config)
    }
}

fn column_index(headers: &csv::StringRecord, column: &str, label: &str) -> Result<usize> {
    if column.is_empty() {
        return Err(ArboracleError::CsvError(format!(
            "{} column name cannot be empty",
            label
        )));
    }
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ArboracleError::CsvError(format!("{} column '{}' not found", label, column)))
}

fn parse_number(record: &csv::StringRecord, idx: usize, label: &str) -> Result<f64> {
    let raw = record
        .get(idx)
        .ok_or_else(|| ArboracleError::CsvError(format!("Missing {} column at index {}", label, idx)))?
        .trim();
    raw.parse()
        .map_err(|_| ArboracleError::CsvError(format!("Invalid {}: '{}'", label, raw)))
}

/// Converts a tree CSV into a CSV with Plus Code columns prepended.
///
/// Rows are streamed. Each row's precision comes from its trunk diameter when a DBH
/// column is configured and the cell is non-empty, otherwise from `config.precision`.
/// Rows whose location cannot be encoded get empty code columns and a zero area.
///
/// Returns the number of data rows written.
///
/// # Example
///
/// ```no_run
/// use arboracle::{TreeCsvConfig, csv_to_plus_code_csv};
///
/// let config = TreeCsvConfig::from_coords("Latitude", "Longitude").dbh_column("DBH");
/// csv_to_plus_code_csv("trees.csv", "trees_coded.csv", &config).unwrap();
/// ```
pub fn csv_to_plus_code_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &TreeCsvConfig,
) -> Result<usize> {
    let csv_path = csv_path.as_ref();
    let file = File::open(csv_path).map_err(|e| ArboracleError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| ArboracleError::CsvError(e.to_string()))?
        .clone();

    // Source location columns never appear in the output
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column_index(&headers, col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            latitude_column,
            longitude_column,
        } => {
            let lat_idx = column_index(&headers, latitude_column, "Latitude")?;
            let lng_idx = column_index(&headers, longitude_column, "Longitude")?;
            (
                SourceIndices::Coordinates { lat_idx, lng_idx },
                HashSet::from([lat_idx, lng_idx]),
            )
        }
    };

    let dbh_idx = config
        .dbh_column
        .as_deref()
        .map(|col| column_index(&headers, col, "DBH"))
        .transpose()?;

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file =
        File::create(output_path).map_err(|e| ArboracleError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = OUTPUT_COLUMNS.to_vec();
    if config.include_cell_geometry.is_some() {
        header_row.push(CELL_GEOMETRY_COLUMN);
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| ArboracleError::CsvError(e.to_string()))?;

    info!(input = %csv_path.display(), precision = config.precision, "coding tree locations");

    let mut rows = 0usize;
    let mut uncoded = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| ArboracleError::CsvError(e.to_string()))?;

        let (latitude, longitude) = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    ArboracleError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let anchor = anchor_point(&parse_geometry(geom_str)?)?;
                (anchor.y(), anchor.x())
            }
            SourceIndices::Coordinates { lat_idx, lng_idx } => (
                parse_number(&record, *lat_idx, "latitude")?,
                parse_number(&record, *lng_idx, "longitude")?,
            ),
        };

        let precision = match dbh_idx {
            Some(idx) if record.get(idx).is_some_and(|v| !v.trim().is_empty()) => {
                precision_for_trunk_diameter(parse_number(&record, idx, "DBH")?)
            }
            _ => config.precision,
        };

        let code = LocationCode::generate(latitude, longitude, precision);
        if code.is_empty() {
            uncoded += 1;
        }

        let mut row: Vec<String> = vec![
            code.global.clone(),
            code.local.clone(),
            code.precise.clone(),
            code.tree_address.clone(),
            code.soil_responsibility_area.to_string(),
        ];

        if let Some(format) = config.include_cell_geometry {
            let geom_str = match code.to_polygon() {
                Ok(polygon) => polygon_to_string(&polygon, format),
                Err(e) => {
                    debug!(error = %e, "no cell geometry for row");
                    String::new()
                }
            };
            row.push(geom_str);
        }

        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| ArboracleError::CsvError(e.to_string()))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| ArboracleError::CsvError(e.to_string()))?;

    info!(rows, uncoded, "finished coding tree locations");

    Ok(rows)
}
