use crate::error::{ArboracleError, Result};
use crate::index::area::CodeArea;
use crate::index::constants::{
    CODE_ALPHABET, ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_CODE_LENGTH,
    GRID_COLUMNS, GRID_LAT_FIRST_PLACE_VALUE, GRID_LNG_FIRST_PLACE_VALUE, GRID_ROWS,
    LATITUDE_MAX, LONGITUDE_MAX, MAX_CODE_LENGTH, MIN_CODE_LENGTH, PADDING_CHAR,
    PAIR_CODE_LENGTH, PAIR_FIRST_PLACE_VALUE, PAIR_PRECISION, SEPARATOR, SEPARATOR_POSITION,
};

/// Encodes a WGS84 location as an Open Location Code.
///
/// # Process
///
/// 1. Rejects non-finite coordinates and unsupported code lengths
/// 2. Clamps the code length to [`MAX_CODE_LENGTH`]
/// 3. Clips latitude to `[-90, 90]` and wraps longitude into `[-180, 180)`
/// 4. Converts both to integer steps at the finest grid resolution
/// 5. Emits the five grid digits (only when more than 10 digits are requested),
///    then the five latitude/longitude digit pairs, least significant first
/// 6. Inserts the separator after eight digits, padding shorter codes with `0`
///
/// # Example
/// ```
/// use arboracle::encode;
///
/// let code = encode(37.7749, -122.4194, 10).unwrap();
/// assert_eq!(code, "849VQHFJ+X6");
///
/// let coarse = encode(37.7749, -122.4194, 6).unwrap();
/// assert_eq!(coarse, "849VQH00+");
/// ```
///
/// # Errors
///
/// - [`ArboracleError::InvalidCoordinate`] - latitude or longitude is NaN or infinite
/// - [`ArboracleError::InvalidCodeLength`] - length below 2, or odd and below 10
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(ArboracleError::InvalidCoordinate {
            latitude,
            longitude,
        });
    }
    if code_length < MIN_CODE_LENGTH || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1)
    {
        return Err(ArboracleError::InvalidCodeLength(code_length));
    }

    let code_length = code_length.min(MAX_CODE_LENGTH);
    let (lat_val, lng_val) = location_to_integers(latitude, longitude);
    Ok(encode_integers(lat_val, lng_val, code_length))
}

/// Decodes a full Open Location Code into the area it covers.
///
/// Padding and the separator are ignored, and lowercase digits are accepted.
///
/// # Example
/// ```
/// use arboracle::decode;
///
/// let area = decode("849VQHFJ+X6").unwrap();
/// assert!((area.south - 37.774875).abs() < 1e-9);
/// assert!((area.west - -122.4195).abs() < 1e-9);
/// assert_eq!(area.code_length, 10);
/// ```
///
/// # Errors
///
/// - [`ArboracleError::ShortCode`] - the code is valid but has its area prefix removed
/// - [`ArboracleError::InvalidCode`] - anything else that is not a full code
pub fn decode(code: &str) -> Result<CodeArea> {
    if !is_full(code) {
        if is_short(code) {
            return Err(ArboracleError::ShortCode(code.to_string()));
        }
        return Err(ArboracleError::InvalidCode(code.to_string()));
    }

    let digits: Vec<i64> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHAR)
        .filter_map(digit_value)
        .collect();

    let mut normal_lat = -LATITUDE_MAX * PAIR_PRECISION;
    let mut normal_lng = -LONGITUDE_MAX * PAIR_PRECISION;
    let mut grid_lat = 0;
    let mut grid_lng = 0;

    let pair_digits = digits.len().min(PAIR_CODE_LENGTH);
    let mut place_value = PAIR_FIRST_PLACE_VALUE;
    for i in (0..pair_digits).step_by(2) {
        normal_lat += digits[i] * place_value;
        normal_lng += digits[i + 1] * place_value;
        if i < pair_digits - 2 {
            place_value /= ENCODING_BASE;
        }
    }

    let mut lat_precision = place_value as f64 / PAIR_PRECISION as f64;
    let mut lng_precision = place_value as f64 / PAIR_PRECISION as f64;

    if digits.len() > PAIR_CODE_LENGTH {
        let mut row_place_value = GRID_LAT_FIRST_PLACE_VALUE;
        let mut col_place_value = GRID_LNG_FIRST_PLACE_VALUE;
        let grid_end = digits.len().min(MAX_CODE_LENGTH);
        for (i, &value) in digits.iter().enumerate().take(grid_end).skip(PAIR_CODE_LENGTH) {
            grid_lat += (value / GRID_COLUMNS) * row_place_value;
            grid_lng += (value % GRID_COLUMNS) * col_place_value;
            if i < grid_end - 1 {
                row_place_value /= GRID_ROWS;
                col_place_value /= GRID_COLUMNS;
            }
        }
        lat_precision = row_place_value as f64 / FINAL_LAT_PRECISION as f64;
        lng_precision = col_place_value as f64 / FINAL_LNG_PRECISION as f64;
    }

    let south = normal_lat as f64 / PAIR_PRECISION as f64 + grid_lat as f64 / FINAL_LAT_PRECISION as f64;
    let west = normal_lng as f64 / PAIR_PRECISION as f64 + grid_lng as f64 / FINAL_LNG_PRECISION as f64;

    Ok(CodeArea::new(
        south,
        west,
        south + lat_precision,
        west + lng_precision,
        digits.len().min(MAX_CODE_LENGTH),
    ))
}

/// Returns true if the string is a syntactically valid code, full or short.
pub fn is_valid(code: &str) -> bool {
    if !code.is_ascii() {
        return false;
    }
    let bytes = code.as_bytes();
    let separator = SEPARATOR as u8;
    let padding = PADDING_CHAR as u8;

    let Some(sep) = bytes.iter().position(|&c| c == separator) else {
        return false;
    };
    if bytes.iter().filter(|&&c| c == separator).count() != 1 {
        return false;
    }
    if sep > SEPARATOR_POSITION || sep % 2 == 1 {
        return false;
    }

    if let Some(pad_start) = bytes.iter().position(|&c| c == padding) {
        // Padding is a single even run directly before a trailing separator.
        if sep < SEPARATOR_POSITION || pad_start == 0 {
            return false;
        }
        if !bytes[pad_start..sep].iter().all(|&c| c == padding) {
            return false;
        }
        if (sep - pad_start) % 2 == 1 || bytes.len() != sep + 1 {
            return false;
        }
    }

    if bytes.len() - sep - 1 == 1 {
        return false;
    }

    code.chars()
        .all(|c| c == SEPARATOR || c == PADDING_CHAR || digit_value(c).is_some())
}

/// Returns true if the code is valid and has had its area prefix removed.
pub fn is_short(code: &str) -> bool {
    is_valid(code) && code.find(SEPARATOR).is_some_and(|sep| sep < SEPARATOR_POSITION)
}

/// Returns true if the code is valid, not short, and inside the encodable range.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }
    let mut chars = code.chars();
    let first_lat = chars.next().and_then(digit_value);
    if first_lat.is_none_or(|v| v * ENCODING_BASE >= 2 * LATITUDE_MAX) {
        return false;
    }
    let first_lng = chars.next().and_then(digit_value);
    !first_lng.is_some_and(|v| v * ENCODING_BASE >= 2 * LONGITUDE_MAX)
}

fn digit_value(c: char) -> Option<i64> {
    let upper = c.to_ascii_uppercase();
    if !upper.is_ascii() {
        return None;
    }
    CODE_ALPHABET
        .iter()
        .position(|&d| d == upper as u8)
        .map(|p| p as i64)
}

/// Converts degrees to integer steps, rounding away float noise before flooring.
fn scaled_floor(degrees: f64, steps_per_degree: i64) -> i64 {
    ((degrees * steps_per_degree as f64 * 1e6).round() / 1e6).floor() as i64
}

fn location_to_integers(latitude: f64, longitude: f64) -> (i64, i64) {
    let latitude = latitude.clamp(-(LATITUDE_MAX as f64), LATITUDE_MAX as f64);
    let longitude = if (-(LONGITUDE_MAX as f64)..LONGITUDE_MAX as f64).contains(&longitude) {
        longitude
    } else {
        (longitude + LONGITUDE_MAX as f64).rem_euclid(2.0 * LONGITUDE_MAX as f64)
            - LONGITUDE_MAX as f64
    };

    let lat_range = 2 * LATITUDE_MAX * FINAL_LAT_PRECISION;
    let lat_val = (scaled_floor(latitude, FINAL_LAT_PRECISION) + LATITUDE_MAX * FINAL_LAT_PRECISION)
        .clamp(0, lat_range - 1);

    let lng_range = 2 * LONGITUDE_MAX * FINAL_LNG_PRECISION;
    let lng_val = (scaled_floor(longitude, FINAL_LNG_PRECISION)
        + LONGITUDE_MAX * FINAL_LNG_PRECISION)
        .rem_euclid(lng_range);

    (lat_val, lng_val)
}

fn encode_integers(mut lat_val: i64, mut lng_val: i64, code_length: usize) -> String {
    let mut reversed: Vec<u8> = Vec::with_capacity(MAX_CODE_LENGTH);

    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let lat_digit = lat_val % GRID_ROWS;
            let lng_digit = lng_val % GRID_COLUMNS;
            reversed.push(CODE_ALPHABET[(lat_digit * GRID_COLUMNS + lng_digit) as usize]);
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }

    for _ in 0..PAIR_CODE_LENGTH / 2 {
        reversed.push(CODE_ALPHABET[(lng_val % ENCODING_BASE) as usize]);
        reversed.push(CODE_ALPHABET[(lat_val % ENCODING_BASE) as usize]);
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }

    let digits: Vec<char> = reversed.into_iter().rev().map(char::from).collect();

    let mut code = String::with_capacity(code_length.max(SEPARATOR_POSITION) + 1);
    if code_length >= SEPARATOR_POSITION {
        code.extend(&digits[..SEPARATOR_POSITION]);
        code.push(SEPARATOR);
        code.extend(&digits[SEPARATOR_POSITION..code_length]);
    } else {
        code.extend(&digits[..code_length]);
        code.extend(std::iter::repeat_n(PADDING_CHAR, SEPARATOR_POSITION - code_length));
        code.push(SEPARATOR);
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_locations() -> Result<()> {
        assert_eq!(encode(37.7749, -122.4194, 10)?, "849VQHFJ+X6");
        assert_eq!(encode(37.7749, -122.4194, 11)?, "849VQHFJ+X69");
        assert_eq!(encode(37.7749, -122.4194, 15)?, "849VQHFJ+X692525");
        assert_eq!(encode(20.3700625, 2.7821875, 10)?, "7FG49QCJ+2V");
        assert_eq!(encode(51.5074, -0.1278, 12)?, "9C3XGV4C+XV83");
        assert_eq!(encode(-41.2865, 174.7762, 11)?, "4VCPPQ7G+CF4");
        Ok(())
    }

    #[test]
    fn test_encode_short_lengths_are_padded() -> Result<()> {
        assert_eq!(encode(37.7749, -122.4194, 8)?, "849VQHFJ+");
        assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
        Ok(())
    }

    #[test]
    fn test_encode_clamps_length() -> Result<()> {
        assert_eq!(
            encode(37.7749, -122.4194, 20)?,
            encode(37.7749, -122.4194, 15)?
        );
        Ok(())
    }

    #[test]
    fn test_encode_clips_and_wraps() -> Result<()> {
        assert_eq!(encode(90.0, 1.0, 10)?, "CFX3X2X2+X2");
        assert_eq!(encode(120.0, 1.0, 10)?, encode(90.0, 1.0, 10)?);
        assert_eq!(encode(37.7749, 237.5806, 10)?, "849VQHFJ+X6");
        Ok(())
    }

    #[test]
    fn test_encode_rejects_bad_lengths() {
        assert_eq!(
            encode(37.7749, -122.4194, 9),
            Err(ArboracleError::InvalidCodeLength(9))
        );
        assert_eq!(
            encode(37.7749, -122.4194, 1),
            Err(ArboracleError::InvalidCodeLength(1))
        );
        assert!(encode(37.7749, -122.4194, 0).is_err());
    }

    #[test]
    fn test_encode_rejects_non_finite() {
        assert!(matches!(
            encode(f64::NAN, 0.0, 10),
            Err(ArboracleError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            encode(0.0, f64::INFINITY, 10),
            Err(ArboracleError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_decode_pair_code() -> Result<()> {
        let area = decode("7FG49QCJ+2V")?;
        assert!((area.south - 20.37).abs() < 1e-9);
        assert!((area.west - 2.782125).abs() < 1e-9);
        assert!((area.north - 20.370125).abs() < 1e-9);
        assert!((area.east - 2.78225).abs() < 1e-9);
        assert_eq!(area.code_length, 10);
        Ok(())
    }

    #[test]
    fn test_decode_padded_code() -> Result<()> {
        let area = decode("7FG49Q00+")?;
        assert!((area.south - 20.35).abs() < 1e-9);
        assert!((area.west - 2.75).abs() < 1e-9);
        assert!((area.north - 20.4).abs() < 1e-9);
        assert!((area.east - 2.8).abs() < 1e-9);
        assert_eq!(area.code_length, 6);
        Ok(())
    }

    #[test]
    fn test_decode_grid_code() -> Result<()> {
        let area = decode("849VQHFJ+X6X")?;
        assert!((area.south - 37.774975).abs() < 1e-9);
        assert!((area.west - -122.41940625).abs() < 1e-9);
        assert_eq!(area.code_length, 11);
        Ok(())
    }

    #[test]
    fn test_decode_contains_encoded_point() -> Result<()> {
        let (lat, lng) = (-41.2865317, 174.7762341);
        for length in [8, 10, 11, 12, 13, 14, 15] {
            let area = decode(&encode(lat, lng, length)?)?;
            assert!(area.south - 1e-9 <= lat && lat < area.north + 1e-9);
            assert!(area.west - 1e-9 <= lng && lng < area.east + 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_decode_accepts_lowercase() -> Result<()> {
        assert_eq!(decode("849vqhfj+x6")?, decode("849VQHFJ+X6")?);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_short_and_invalid() {
        assert!(matches!(decode("QHFJ+X6"), Err(ArboracleError::ShortCode(_))));
        assert!(matches!(decode("849VQHFJX6"), Err(ArboracleError::InvalidCode(_))));
        assert!(matches!(decode(""), Err(ArboracleError::InvalidCode(_))));
    }

    #[test]
    fn test_validity_rules() {
        assert!(is_valid("849VQHFJ+X6"));
        assert!(is_valid("QHFJ+X6"));
        assert!(is_valid("7FG49Q00+"));
        assert!(!is_valid("7FG49Q00+X6"));
        assert!(!is_valid("7FG4900Q+"));
        assert!(!is_valid("7FG49Q0+"));
        assert!(!is_valid("849VQHFJ+X"));
        assert!(!is_valid("849VQHFJ++X6"));
        assert!(!is_valid("849VQHFA+X6"));
        assert!(!is_valid("849VQHFJ+X6é"));

        assert!(is_short("QHFJ+X6"));
        assert!(!is_short("849VQHFJ+X6"));

        assert!(is_full("849VQHFJ+X6"));
        assert!(!is_full("QHFJ+X6"));
        // First latitude digit beyond 90 degrees.
        assert!(!is_full("X49VQHFJ+X6"));
    }
}
