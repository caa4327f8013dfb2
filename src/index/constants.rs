/// Digits used by Open Location Codes, in value order.
pub const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Separator between the first eight digits and the rest of the code.
pub const SEPARATOR: char = '+';

/// Number of digits before the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Padding character used for codes shorter than eight digits.
pub const PADDING_CHAR: char = '0';

/// Minimum number of digits in a code.
pub const MIN_CODE_LENGTH: usize = 2;

/// Maximum number of digits in a code. Longer requests are clamped to this.
pub const MAX_CODE_LENGTH: usize = 15;

/// Number of digits encoded as latitude/longitude pairs.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Number of digits encoded on the 4x5 refinement grid.
pub(crate) const GRID_CODE_LENGTH: usize = MAX_CODE_LENGTH - PAIR_CODE_LENGTH;

pub(crate) const ENCODING_BASE: i64 = 20;
pub(crate) const LATITUDE_MAX: i64 = 90;
pub(crate) const LONGITUDE_MAX: i64 = 180;
pub(crate) const GRID_COLUMNS: i64 = 4;
pub(crate) const GRID_ROWS: i64 = 5;

/// Place value of the first pair digit, in units of `PAIR_PRECISION`.
pub(crate) const PAIR_FIRST_PLACE_VALUE: i64 = 160_000;
/// Resolution of the last pair digit, in steps per degree.
pub(crate) const PAIR_PRECISION: i64 = 8_000;
pub(crate) const GRID_LAT_FIRST_PLACE_VALUE: i64 = 625;
pub(crate) const GRID_LNG_FIRST_PLACE_VALUE: i64 = 256;
/// Latitude steps per degree at full code length.
pub(crate) const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * 3_125;
/// Longitude steps per degree at full code length.
pub(crate) const FINAL_LNG_PRECISION: i64 = PAIR_PRECISION * 1_024;

/// Code length used for the global code of every location.
pub const GLOBAL_CODE_LENGTH: usize = 10;

/// Number of leading characters treated as the area prefix of a global code.
pub const AREA_PREFIX_LENGTH: usize = 4;

/// Precision used when the caller has no better hint.
pub const DEFAULT_PRECISION: u8 = 11;
