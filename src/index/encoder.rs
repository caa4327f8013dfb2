use crate::error::Result;
use crate::index::area::CodeArea;
use crate::index::codec;

/// A location encoder that turns coordinates into codes and codes back into areas.
///
/// [`OpenLocationCode`] is the implementation used everywhere by default. Anything else
/// implementing this trait (a fake for tests, a remote service) can be passed to the
/// `*_with` constructors of [`LocationCode`](crate::LocationCode).
pub trait LocationEncoder: Send + Sync {
    /// Encodes `(latitude, longitude)` at the given code length.
    fn encode(&self, latitude: f64, longitude: f64, code_length: usize) -> Result<String>;

    /// Decodes a code into the area it covers.
    fn decode(&self, code: &str) -> Result<CodeArea>;
}

/// The native Open Location Code ("Plus Code") encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenLocationCode;

impl LocationEncoder for OpenLocationCode {
    fn encode(&self, latitude: f64, longitude: f64, code_length: usize) -> Result<String> {
        codec::encode(latitude, longitude, code_length)
    }

    fn decode(&self, code: &str) -> Result<CodeArea> {
        codec::decode(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object_dispatch() -> Result<()> {
        let encoder: &dyn LocationEncoder = &OpenLocationCode;
        let code = encoder.encode(51.5074, -0.1278, 10)?;
        assert_eq!(code, "9C3XGV4C+XV");

        let area = encoder.decode(&code)?;
        assert_eq!(area.code_length, 10);
        Ok(())
    }
}
