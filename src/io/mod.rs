pub mod csv;

pub use csv::{CoordinateSource, CsvToPlusCodes, TreeCsvConfig, csv_to_plus_code_csv};
