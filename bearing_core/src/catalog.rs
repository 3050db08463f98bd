//! # Bearing Catalog
//!
//! Catalog records for tapered roller bearings, one record per bearing
//! type. A catalog is an ordered `Vec<BearingRecord>`: loaded once,
//! read many times, never mutated.
//!
//! Lengths that feed the mounting geometry (`width_offset_m`,
//! `thickness_m`, `contact_offset_m`) are stored in metres; the catalog
//! loader converts them from the millimetre values printed in
//! manufacturer tables. Bore, outer and abutment diameters stay in
//! millimetres because they are only compared against shaft limits,
//! never mixed into the statics.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "bore_mm": 55.0,
//!   "outer_mm": 100.0,
//!   "static_rating_n": 112000.0,
//!   "dynamic_rating_n": 106000.0,
//!   "width_offset_m": 0.02175,
//!   "thickness_m": 0.02275,
//!   "contact_offset_m": 0.02,
//!   "load_ratio_e": 0.44,
//!   "y0_static": 0.75,
//!   "y1_dynamic": 1.36,
//!   "name": "32011-X",
//!   "da_min_mm": 64.0,
//!   "da_max_mm": 69.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// One catalog entry: geometry and load ratings for a single bearing type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingRecord {
    /// Bore diameter d (mm)
    pub bore_mm: f64,

    /// Outer diameter D (mm)
    pub outer_mm: f64,

    /// Basic static load rating C0 (N)
    pub static_rating_n: f64,

    /// Basic dynamic load rating C (N)
    pub dynamic_rating_n: f64,

    /// Axial width offset c used in the mounting-distance geometry (m)
    pub width_offset_m: f64,

    /// Bearing thickness T (m); carried for reporting, not consumed by
    /// the rating arithmetic
    pub thickness_m: f64,

    /// Axial offset a from the bearing face to the load center (m)
    pub contact_offset_m: f64,

    /// Load-ratio threshold e selecting the dynamic equivalent-load branch
    pub load_ratio_e: f64,

    /// Static axial load factor Y0
    pub y0_static: f64,

    /// Dynamic axial load factor Y1
    pub y1_dynamic: f64,

    /// Manufacturer designation (e.g. "32011-X")
    pub name: String,

    /// Minimum permissible abutment diameter da (mm)
    pub da_min_mm: f64,

    /// Maximum permissible abutment diameter da (mm)
    pub da_max_mm: f64,
}

impl BearingRecord {
    /// Validate that every rating and geometric field is strictly positive.
    ///
    /// The rating formulas divide by equivalent loads built from these
    /// fields, so a zero or negative entry is a data error, not a
    /// physical case.
    pub fn validate(&self) -> CalcResult<()> {
        let positive_fields = [
            ("bore_mm", self.bore_mm),
            ("outer_mm", self.outer_mm),
            ("static_rating_n", self.static_rating_n),
            ("dynamic_rating_n", self.dynamic_rating_n),
            ("width_offset_m", self.width_offset_m),
            ("thickness_m", self.thickness_m),
            ("contact_offset_m", self.contact_offset_m),
            ("load_ratio_e", self.load_ratio_e),
            ("y0_static", self.y0_static),
            ("y1_dynamic", self.y1_dynamic),
            ("da_min_mm", self.da_min_mm),
            ("da_max_mm", self.da_max_mm),
        ];

        for (field, value) in positive_fields {
            if !(value > 0.0) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be strictly positive",
                ));
            }
        }

        if self.name.trim().is_empty() {
            return Err(CalcError::missing_field("name"));
        }

        Ok(())
    }

    /// Whether the load-ratio threshold sits in the conventional (0, 1)
    /// range. Values outside it are suspect catalog data but not
    /// invalid, so this is a warning surface rather than part of
    /// [`validate`](Self::validate).
    pub fn has_conventional_load_ratio(&self) -> bool {
        self.load_ratio_e > 0.0 && self.load_ratio_e < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> BearingRecord {
        BearingRecord {
            bore_mm: 55.0,
            outer_mm: 100.0,
            static_rating_n: 112_000.0,
            dynamic_rating_n: 106_000.0,
            width_offset_m: 0.02175,
            thickness_m: 0.02275,
            contact_offset_m: 0.02,
            load_ratio_e: 0.44,
            y0_static: 0.75,
            y1_dynamic: 1.36,
            name: "32011-X".to_string(),
            da_min_mm: 64.0,
            da_max_mm: 69.0,
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(test_record().validate().is_ok());
    }

    #[test]
    fn test_zero_rating_rejected() {
        let mut record = test_record();
        record.static_rating_n = 0.0;
        let err = record.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_offset_rejected() {
        let mut record = test_record();
        record.contact_offset_m = -0.02;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_nan_field_rejected() {
        let mut record = test_record();
        record.y1_dynamic = f64::NAN;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut record = test_record();
        record.name = "  ".to_string();
        assert_eq!(record.validate().unwrap_err().error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_unconventional_load_ratio_is_valid_but_suspect() {
        let mut record = test_record();
        record.load_ratio_e = 1.7;
        assert!(record.validate().is_ok());
        assert!(!record.has_conventional_load_ratio());

        record.load_ratio_e = 0.44;
        assert!(record.has_conventional_load_ratio());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let record = test_record();
        let json = serde_json::to_string_pretty(&record).unwrap();
        let roundtrip: BearingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, roundtrip);
    }
}
