use thiserror::Error;

/// Error type for arboracle operations.
#[derive(Error, Debug, PartialEq)]
pub enum ArboracleError {
    /// The requested code length cannot be encoded (below 2, or odd and below 10).
    #[error("Invalid code length: {0}")]
    InvalidCodeLength(usize),
    /// Latitude or longitude is not a finite number.
    #[error("Invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    /// The string is not a valid Open Location Code.
    #[error("Invalid code: {0}")]
    InvalidCode(String),
    /// The code is valid but short, so it cannot be decoded without a reference location.
    #[error("Short code cannot be decoded: {0}")]
    ShortCode(String),
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(String),
    /// CSV parsing or reading error.
    #[error("CSV error: {0}")]
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    #[error("Geometry parse error: {0}")]
    GeometryParseError(String),
}

pub type Result<T> = std::result::Result<T, ArboracleError>;
