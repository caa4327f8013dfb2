use crate::index::DEFAULT_PRECISION;
use crate::location::LocationCode;
use crate::precision::precision_for_trunk_diameter;
use serde::{Deserialize, Serialize};

/// A tree in the inventory, with the Plus Code strings stored alongside it.
///
/// Only the global and local codes are persisted; the full [`LocationCode`] is
/// recomputed on demand.
///
/// # Example
///
/// ```
/// use arboracle::TreeRecord;
///
/// let mut tree = TreeRecord::new("oak-17", 51.5074, -0.1278)
///     .with_species("Quercus robur")
///     .with_dbh(45.0);
///
/// let code = tree.assign_location();
/// assert_eq!(tree.plus_code_global, "9C3XGV4C+XV");
/// assert_eq!(tree.plus_code_local, "GV4C+XV");
/// assert_eq!(code.soil_responsibility_area, 9.8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Diameter at breast height in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbh_cm: Option<f64>,
    #[serde(default)]
    pub plus_code_global: String,
    #[serde(default)]
    pub plus_code_local: String,
}

impl TreeRecord {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            ..Self::default()
        }
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_dbh(mut self, dbh_cm: f64) -> Self {
        self.dbh_cm = Some(dbh_cm);
        self
    }

    /// Precision suggested by the trunk diameter, or [`DEFAULT_PRECISION`] without one.
    pub fn suggested_precision(&self) -> u8 {
        self.dbh_cm
            .map(precision_for_trunk_diameter)
            .unwrap_or(DEFAULT_PRECISION)
    }

    /// Computes the location code at the suggested precision without storing it.
    pub fn location_code(&self) -> LocationCode {
        LocationCode::generate(self.latitude, self.longitude, self.suggested_precision())
    }

    /// Computes the location code and stores its global and local strings.
    ///
    /// A failed encoding clears both stored strings.
    pub fn assign_location(&mut self) -> LocationCode {
        let code = self.location_code();
        self.plus_code_global = code.global.clone();
        self.plus_code_local = code.local.clone();
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_precision() {
        let tree = TreeRecord::new("t1", 37.7749, -122.4194);
        assert_eq!(tree.suggested_precision(), DEFAULT_PRECISION);
        assert_eq!(tree.clone().with_dbh(5.0).suggested_precision(), 13);
        assert_eq!(tree.with_dbh(75.0).suggested_precision(), 10);
    }

    #[test]
    fn test_assign_location_stores_codes() {
        let mut tree = TreeRecord::new("t1", 37.7749, -122.4194).with_dbh(12.0);
        let code = tree.assign_location();

        assert_eq!(code.precise, "849VQHFJ+X692");
        assert_eq!(tree.plus_code_global, "849VQHFJ+X6");
        assert_eq!(tree.plus_code_local, "QHFJ+X6");
    }

    #[test]
    fn test_largest_trunks_get_no_code() {
        // DBH >= 100 suggests precision 9, which the encoder rejects.
        let mut tree = TreeRecord::new("giant", 37.7749, -122.4194).with_dbh(250.0);
        tree.plus_code_global = "stale".to_string();

        let code = tree.assign_location();
        assert!(code.is_empty());
        assert_eq!(tree.plus_code_global, "");
        assert_eq!(tree.plus_code_local, "");
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), serde_json::Error> {
        let json = r#"{"id":"t9","latitude":51.5074,"longitude":-0.1278}"#;
        let tree: TreeRecord = serde_json::from_str(json)?;
        assert_eq!(tree.species, None);
        assert_eq!(tree.dbh_cm, None);
        assert_eq!(tree.plus_code_global, "");

        let out = serde_json::to_string(&tree)?;
        assert!(!out.contains("species"));
        assert!(out.contains("\"plus_code_global\":\"\""));
        Ok(())
    }
}
