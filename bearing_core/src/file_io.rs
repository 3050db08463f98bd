//! # File I/O Module
//!
//! CSV catalog loading and result writing.
//!
//! ## Catalog Format
//!
//! One header row with the manufacturer-table column names, one row per
//! bearing type:
//!
//! ```text
//! d,D,C_0r,C_r,C,T,a,e,Y0,Y1,name,da_min,da_max
//! 55,100,112000,106000,21.75,22.75,20,0.44,0.75,1.36,32011-X,64,69
//! ```
//!
//! The length columns `C` (width offset), `T` and `a` are in
//! millimetres in the table and are converted to metres here, at load
//! time; the calculation layer never converts units. Every record is
//! validated on load and the first malformed or invalid row aborts the
//! load - a partially read catalog is worse than no catalog.

use std::path::Path;

use serde::Deserialize;

use crate::calculations::sweep::PairSelection;
use crate::catalog::BearingRecord;
use crate::errors::{CalcError, CalcResult};

const MM_PER_M: f64 = 1000.0;

/// One raw catalog row, named as the manufacturer table prints them.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    d: f64,
    #[serde(rename = "D")]
    outer: f64,
    #[serde(rename = "C_0r")]
    static_rating: f64,
    #[serde(rename = "C_r")]
    dynamic_rating: f64,
    /// Width offset c, in mm (the table labels this column "C")
    #[serde(rename = "C")]
    width_offset_mm: f64,
    #[serde(rename = "T")]
    thickness_mm: f64,
    /// Load-center offset a, in mm
    a: f64,
    e: f64,
    #[serde(rename = "Y0")]
    y0: f64,
    #[serde(rename = "Y1")]
    y1: f64,
    name: String,
    da_min: f64,
    da_max: f64,
}

impl From<CatalogRow> for BearingRecord {
    fn from(row: CatalogRow) -> Self {
        BearingRecord {
            bore_mm: row.d,
            outer_mm: row.outer,
            static_rating_n: row.static_rating,
            dynamic_rating_n: row.dynamic_rating,
            width_offset_m: row.width_offset_mm / MM_PER_M,
            thickness_m: row.thickness_mm / MM_PER_M,
            contact_offset_m: row.a / MM_PER_M,
            load_ratio_e: row.e,
            y0_static: row.y0,
            y1_dynamic: row.y1,
            name: row.name,
            da_min_mm: row.da_min,
            da_max_mm: row.da_max,
        }
    }
}

/// Load an ordered bearing catalog from a CSV file.
///
/// # Errors
///
/// * [`CalcError::FileError`] if the file cannot be opened
/// * [`CalcError::SerializationError`] for a missing or non-numeric
///   field, with the offending row identified
/// * [`CalcError::InvalidInput`] / [`CalcError::MissingField`] if a row
///   parses but fails [`BearingRecord::validate`]
pub fn load_catalog(path: &Path) -> CalcResult<Vec<BearingRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let mut catalog = Vec::new();
    for (index, row) in reader.deserialize::<CatalogRow>().enumerate() {
        // Header is line 1, first record line 2
        let line = index + 2;
        let row = row.map_err(|e| {
            CalcError::serialization_error(format!("catalog line {line}: {e}"))
        })?;
        let record = BearingRecord::from(row);
        record.validate()?;
        catalog.push(record);
    }

    Ok(catalog)
}

/// Result column names, in [`PairSelection`] field order.
///
/// Written explicitly so an empty result set still gets a header row.
const RESULT_HEADERS: [&str; 24] = [
    "bearing_c_name",
    "bearing_c_bore_mm",
    "bearing_c_outer_mm",
    "bearing_c_static_rating_n",
    "bearing_c_dynamic_rating_n",
    "bearing_c_width_offset_m",
    "bearing_c_thickness_m",
    "bearing_c_da_min_mm",
    "bearing_d_name",
    "bearing_d_bore_mm",
    "bearing_d_outer_mm",
    "bearing_d_static_rating_n",
    "bearing_d_dynamic_rating_n",
    "bearing_d_width_offset_m",
    "bearing_d_thickness_m",
    "bearing_d_da_min_mm",
    "static_safety_d",
    "fatigue_life_d",
    "static_safety_c",
    "fatigue_life_c",
    "static_equivalent_d_n",
    "static_equivalent_c_n",
    "dynamic_equivalent_d_n",
    "dynamic_equivalent_c_n",
];

/// Write accepted pairings to a CSV file, header included, in the order
/// given.
pub fn write_results(path: &Path, selections: &[PairSelection]) -> CalcResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;

    writer
        .write_record(RESULT_HEADERS)
        .map_err(|e| CalcError::serialization_error(e.to_string()))?;

    for selection in selections {
        writer
            .serialize(selection)
            .map_err(|e| CalcError::serialization_error(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CATALOG_CSV: &str = "\
d,D,C_0r,C_r,C,T,a,e,Y0,Y1,name,da_min,da_max
55,100,112000,106000,21.75,22.75,20,0.44,0.75,1.36,32011-X,64,69
60,110,140000,132000,23.75,24.75,22,0.42,0.8,1.45,32012-X,71,77
";

    #[test]
    fn test_load_catalog_converts_lengths_to_metres() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(&path, CATALOG_CSV).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = &catalog[0];
        assert_eq!(first.name, "32011-X");
        assert_eq!(first.bore_mm, 55.0);
        assert_eq!(first.static_rating_n, 112_000.0);
        assert!((first.width_offset_m - 0.02175).abs() < 1e-12);
        assert!((first.thickness_m - 0.02275).abs() < 1e-12);
        assert!((first.contact_offset_m - 0.02).abs() < 1e-12);
        // Diameters stay in mm
        assert_eq!(first.da_min_mm, 64.0);

        assert_eq!(catalog[1].name, "32012-X");
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        let err = load_catalog(Path::new("/nonexistent/catalog.csv")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_non_numeric_field_identifies_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(
            &path,
            "d,D,C_0r,C_r,C,T,a,e,Y0,Y1,name,da_min,da_max\n\
             55,100,heavy,106000,21.75,22.75,20,0.44,0.75,1.36,32011-X,64,69\n",
        )
        .unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_invalid_row_fails_fast() {
        // Second row carries a zero rating; nothing is returned, not
        // even the valid first row.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        fs::write(
            &path,
            "d,D,C_0r,C_r,C,T,a,e,Y0,Y1,name,da_min,da_max\n\
             55,100,112000,106000,21.75,22.75,20,0.44,0.75,1.36,32011-X,64,69\n\
             60,110,0,132000,23.75,24.75,22,0.42,0.8,1.45,32012-X,71,77\n",
        )
        .unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_results_roundtrip() {
        let selection = PairSelection {
            bearing_c_name: "32011-X".to_string(),
            bearing_c_bore_mm: 55.0,
            bearing_c_outer_mm: 100.0,
            bearing_c_static_rating_n: 112_000.0,
            bearing_c_dynamic_rating_n: 106_000.0,
            bearing_c_width_offset_m: 0.02175,
            bearing_c_thickness_m: 0.02275,
            bearing_c_da_min_mm: 64.0,
            bearing_d_name: "32012-X".to_string(),
            bearing_d_bore_mm: 60.0,
            bearing_d_outer_mm: 110.0,
            bearing_d_static_rating_n: 140_000.0,
            bearing_d_dynamic_rating_n: 132_000.0,
            bearing_d_width_offset_m: 0.02375,
            bearing_d_thickness_m: 0.02475,
            bearing_d_da_min_mm: 71.0,
            static_safety_d: 21.3,
            fatigue_life_d: 61_000.0,
            static_safety_c: 40.1,
            fatigue_life_c: 830_000.0,
            static_equivalent_d_n: 9650.5,
            static_equivalent_c_n: 2771.5,
            dynamic_equivalent_d_n: 9650.5,
            dynamic_equivalent_c_n: 3475.9,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        write_results(&path, std::slice::from_ref(&selection)).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<PairSelection> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows, vec![selection]);
    }

    #[test]
    fn test_empty_results_still_write_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        write_results(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("bearing_c_name,"));
        assert!(header.ends_with("dynamic_equivalent_c_n"));
        assert_eq!(lines.next(), None);
    }
}
