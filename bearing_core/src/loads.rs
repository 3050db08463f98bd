//! # Shaft Load Case
//!
//! The external load case and mounting geometry for a two-point
//! (opposed) tapered-bearing arrangement. Both were hard-coded
//! constants in the first cut of this tool; they are plain value types
//! now so the evaluator can be reused across shaft designs.

use serde::{Deserialize, Serialize};

/// Orientation of the two opposed bearings on the shaft.
///
/// The orientation decides how each bearing's load center offsets enter
/// the effective mounting distances, and which bearing the induced
/// axial thrust is tested against first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MountingConfig {
    /// Face-to-face (X arrangement): load centers pulled toward the
    /// shaft middle
    FaceToFace,
    /// Back-to-back (O arrangement): load centers pushed outward
    BackToBack,
}

/// External forces and mounting geometry applied to the shaft.
///
/// Forces are the three orthogonal components at the load application
/// point; distances locate the bearing seats relative to that point.
///
/// ## JSON Example
///
/// ```json
/// {
///   "radial_n": 3651.0,
///   "axial_n": 2282.0,
///   "tangential_n": 11829.0,
///   "mount_c_m": 0.27,
///   "mount_d_m": 0.078,
///   "radial_offset_m": 0.07
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Radial force component W_r (N)
    pub radial_n: f64,

    /// Axial force component W_z (N)
    pub axial_n: f64,

    /// Tangential force component W_t (N)
    pub tangential_n: f64,

    /// Nominal mounting distance from the load point to the C seat (m)
    pub mount_c_m: f64,

    /// Nominal mounting distance from the load point to the D seat (m)
    pub mount_d_m: f64,

    /// Radius at which the axial force acts, producing an overturning
    /// moment (m)
    pub radial_offset_m: f64,
}

impl Default for LoadCase {
    /// The intermediate-shaft scenario this tool was written for:
    /// gear separating/axial/tangential forces of 3651/2282/11829 N,
    /// seats at 270 mm and 78 mm, axial force acting at 70 mm radius.
    fn default() -> Self {
        LoadCase {
            radial_n: 3651.0,
            axial_n: 2282.0,
            tangential_n: 11829.0,
            mount_c_m: 0.27,
            mount_d_m: 0.078,
            radial_offset_m: 0.07,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_constants() {
        let load_case = LoadCase::default();
        assert_eq!(load_case.radial_n, 3651.0);
        assert_eq!(load_case.axial_n, 2282.0);
        assert_eq!(load_case.tangential_n, 11829.0);
        assert_eq!(load_case.mount_c_m, 0.27);
        assert_eq!(load_case.mount_d_m, 0.078);
        assert_eq!(load_case.radial_offset_m, 0.07);
    }

    #[test]
    fn test_mounting_config_serialization() {
        let json = serde_json::to_string(&MountingConfig::FaceToFace).unwrap();
        assert_eq!(json, "\"face-to-face\"");
        let roundtrip: MountingConfig = serde_json::from_str("\"back-to-back\"").unwrap();
        assert_eq!(roundtrip, MountingConfig::BackToBack);
    }
}
