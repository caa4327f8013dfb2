use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use arboracle::units::{self, UnitSystem};
use arboracle::{
    DEFAULT_PRECISION, GeometryFormat, LocationCode, TreeCsvConfig, area_for_precision, decode,
    format_area, precision_for_trunk_diameter,
};

#[derive(Parser, Debug)]
#[command(name = "arboracle")]
#[command(about = "Plus Code addressing for tree inventories")]
struct Args {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the location code for a point
    Encode {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Code length, clamped to 15
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: u8,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the area covered by a full code
    Decode {
        code: String,

        #[arg(long)]
        json: bool,
    },

    /// Suggest a precision from a trunk diameter
    Suggest {
        /// Diameter at breast height
        #[arg(long)]
        dbh: f64,

        /// Unit system the diameter is given in
        #[arg(long, value_enum, default_value_t = Units::Metric)]
        units: Units,
    },

    /// Print the soil responsibility area for a precision
    Area {
        precision: u8,

        #[arg(long, value_enum, default_value_t = Units::Metric)]
        units: Units,
    },

    /// Add Plus Code columns to a tree CSV
    Csv {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Latitude column (use with --lng-column)
        #[arg(long, requires = "lng_column", conflicts_with = "geometry_column")]
        lat_column: Option<String>,

        /// Longitude column (use with --lat-column)
        #[arg(long, requires = "lat_column")]
        lng_column: Option<String>,

        /// WKT or GeoJSON geometry column
        #[arg(long)]
        geometry_column: Option<String>,

        /// Trunk diameter column in centimetres
        #[arg(long)]
        dbh_column: Option<String>,

        /// Precision for rows without a trunk diameter
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: u8,

        /// Columns to drop from the output
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Include the code cell polygon
        #[arg(long, value_enum)]
        cell_geometry: Option<CellGeometry>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Units {
    Metric,
    Imperial,
}

impl From<Units> for UnitSystem {
    fn from(units: Units) -> Self {
        match units {
            Units::Metric => UnitSystem::Metric,
            Units::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CellGeometry {
    Wkt,
    Geojson,
}

impl From<CellGeometry> for GeometryFormat {
    fn from(format: CellGeometry) -> Self {
        match format {
            CellGeometry::Wkt => GeometryFormat::Wkt,
            CellGeometry::Geojson => GeometryFormat::GeoJson,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Encode {
            lat,
            lng,
            precision,
            json,
        } => {
            let code = LocationCode::generate(lat, lng, precision);
            if json {
                println!("{}", serde_json::to_string_pretty(&code)?);
            } else if code.is_empty() {
                bail!("could not encode ({}, {}) at precision {}", lat, lng, precision);
            } else {
                println!("Global:  {}", code.global);
                println!("Local:   {}", code.local);
                println!("Precise: {}", code.precise);
                println!("{}", code.tree_address);
                println!("Soil responsibility area: {}", code.formatted_area());
            }
        }
        Command::Decode { code, json } => {
            let area = decode(&code).with_context(|| format!("decoding {}", code))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&area)?);
            } else {
                let center = area.center();
                println!("South/West: ({}, {})", area.south, area.west);
                println!("North/East: ({}, {})", area.north, area.east);
                println!("Center:     ({}, {})", center.y(), center.x());
                println!("Digits:     {}", area.code_length);
            }
        }
        Command::Suggest { dbh, units: unit } => {
            let dbh_cm = match unit {
                Units::Metric => dbh,
                Units::Imperial => units::inches_to_cm(dbh),
            };
            let precision = precision_for_trunk_diameter(dbh_cm);
            println!(
                "DBH {} -> precision {} ({})",
                units::format_diameter(dbh_cm, unit.into()),
                precision,
                format_area(area_for_precision(precision))
            );
        }
        Command::Area {
            precision,
            units: unit,
        } => {
            println!(
                "{}",
                units::format_area_in(area_for_precision(precision), unit.into())
            );
        }
        Command::Csv {
            input,
            output,
            lat_column,
            lng_column,
            geometry_column,
            dbh_column,
            precision,
            exclude,
            cell_geometry,
        } => {
            let mut config = match (lat_column, lng_column, geometry_column) {
                (Some(lat), Some(lng), None) => TreeCsvConfig::from_coords(lat, lng),
                (None, None, Some(geometry)) => TreeCsvConfig::new(geometry),
                _ => bail!("pass either --lat-column and --lng-column, or --geometry-column"),
            };
            config = config.precision(precision).exclude(exclude);
            if let Some(column) = dbh_column {
                config = config.dbh_column(column);
            }
            if let Some(format) = cell_geometry {
                config = config.with_cell_geometry(format.into());
            }

            let rows = arboracle::csv_to_plus_code_csv(&input, &output, &config)
                .with_context(|| format!("converting {}", input.display()))?;
            info!("Wrote {} rows to {}", rows, output.display());
        }
    }

    Ok(())
}
