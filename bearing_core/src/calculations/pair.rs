//! # Bearing Pair Rating
//!
//! Rates one candidate pairing of two tapered roller bearings mounted
//! in a two-point (opposed) arrangement on a shaft: bearing C at the
//! long seat, bearing D at the short seat.
//!
//! ## Assumptions
//!
//! - Two supports only; the shaft is statically determinate
//! - Rigid shaft, reactions from 2-D equilibrium (moments about D)
//! - Tapered bearings: induced axial thrust goes entirely to one of the
//!   two bearings, selected by the 0.6/Y capacity comparison
//! - Static equivalent load per `P0 = max(Fr, 0.5 Fr + Y0 Fa)`
//! - Dynamic equivalent load per the `Fa/Fr <= e` branch rule
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::calculations::pair::evaluate;
//! use bearing_core::catalog::BearingRecord;
//! use bearing_core::loads::{LoadCase, MountingConfig};
//!
//! let bearing = BearingRecord {
//!     bore_mm: 55.0,
//!     outer_mm: 100.0,
//!     static_rating_n: 112000.0,
//!     dynamic_rating_n: 106000.0,
//!     width_offset_m: 0.02175,
//!     thickness_m: 0.02275,
//!     contact_offset_m: 0.02,
//!     load_ratio_e: 0.44,
//!     y0_static: 0.75,
//!     y1_dynamic: 1.36,
//!     name: "32011-X".to_string(),
//!     da_min_mm: 64.0,
//!     da_max_mm: 69.0,
//! };
//!
//! let rating = evaluate(
//!     &bearing,
//!     &bearing,
//!     MountingConfig::FaceToFace,
//!     &LoadCase::default(),
//! )
//! .unwrap();
//!
//! println!("f_s at D: {:.2}", rating.static_safety_d);
//! println!("L10 at D: {:.0} Mrev", rating.fatigue_life_d);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::BearingRecord;
use crate::errors::{CalcError, CalcResult};
use crate::loads::{LoadCase, MountingConfig};

/// Life exponent for roller bearings (10/3)
const LIFE_EXPONENT: f64 = 10.0 / 3.0;

/// Rating outputs for one (C, D) bearing pairing.
///
/// No rounding is applied anywhere; values carry full floating-point
/// precision through to serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    // === Rating Checks ===
    /// Static safety factor f_s = C0 / P0 at position D
    pub static_safety_d: f64,

    /// Fatigue life L10 = (C / P)^(10/3) at position D (millions of revolutions)
    pub fatigue_life_d: f64,

    /// Static safety factor at position C
    pub static_safety_c: f64,

    /// Fatigue life at position C (millions of revolutions)
    pub fatigue_life_c: f64,

    // === Equivalent Loads ===
    /// Static equivalent load P0 at D (N)
    pub static_equivalent_d_n: f64,

    /// Static equivalent load P0 at C (N)
    pub static_equivalent_c_n: f64,

    /// Dynamic equivalent load P at D (N)
    pub dynamic_equivalent_d_n: f64,

    /// Dynamic equivalent load P at C (N)
    pub dynamic_equivalent_c_n: f64,

    // === Support Reactions (for reference) ===
    /// Radial resultant at C (N)
    pub radial_c_n: f64,

    /// Radial resultant at D (N)
    pub radial_d_n: f64,

    /// Axial load assigned to C (N); zero when D carries the thrust
    pub axial_c_n: f64,

    /// Axial load assigned to D (N); zero when C carries the thrust
    pub axial_d_n: f64,
}

/// Static equivalent load `P0 = max(Fr, 0.5 Fr + Y0 Fa)`.
fn static_equivalent(radial_n: f64, axial_n: f64, y0: f64) -> f64 {
    radial_n.max(0.5 * radial_n + y0 * axial_n)
}

/// Dynamic equivalent load: `Fr` while `Fa/Fr <= e`, otherwise
/// `0.4 Fr + Y1 Fa`.
///
/// A zero radial resultant is a valid limiting case, not an error; the
/// load ratio is defined as 0 there, which keeps the radial branch
/// selected for any non-negative `e`.
fn dynamic_equivalent(radial_n: f64, axial_n: f64, e: f64, y1: f64) -> f64 {
    let load_ratio = if radial_n == 0.0 {
        0.0
    } else {
        axial_n / radial_n
    };
    if load_ratio <= e {
        radial_n
    } else {
        0.4 * radial_n + y1 * axial_n
    }
}

/// Rate a candidate bearing pairing under the given mounting
/// configuration and load case.
///
/// Pure and deterministic: same inputs, same outputs, no side effects.
/// When the external load is zero the equivalent loads are zero and the
/// safety factor and life come out infinite, which compares sanely
/// against any finite acceptance threshold.
///
/// # Errors
///
/// * [`CalcError::InvalidInput`] if either record fails
///   [`BearingRecord::validate`]
/// * [`CalcError::DegenerateGeometry`] if the effective bearing span
///   `d_C + d_D` is zero (possible only with pathological mounting
///   distances)
pub fn evaluate(
    bearing_c: &BearingRecord,
    bearing_d: &BearingRecord,
    config: MountingConfig,
    load_case: &LoadCase,
) -> CalcResult<RatingResult> {
    bearing_c.validate()?;
    bearing_d.validate()?;

    // Effective axial distances from each load center to the reference.
    // Face-to-face pulls the load centers inward past the bearing face,
    // back-to-back pushes them outward.
    let (d_c, d_d) = match config {
        MountingConfig::FaceToFace => (
            load_case.mount_c_m - bearing_c.contact_offset_m + bearing_c.width_offset_m,
            load_case.mount_d_m - bearing_d.contact_offset_m + bearing_d.width_offset_m,
        ),
        MountingConfig::BackToBack => (
            load_case.mount_c_m + bearing_c.contact_offset_m,
            load_case.mount_d_m + bearing_d.contact_offset_m,
        ),
    };

    let span = d_c + d_d;
    if span == 0.0 {
        return Err(CalcError::degenerate_geometry(span));
    }

    // Reactions: moments about D, then force balance.
    let d_horizontal = (-d_c * load_case.radial_n - load_case.radial_offset_m * load_case.axial_n)
        / span;
    let d_vertical = d_c * load_case.tangential_n / span;
    let c_horizontal = -load_case.radial_n - d_horizontal;
    let c_vertical = load_case.tangential_n - d_vertical;

    let radial_d = (d_horizontal * d_horizontal + d_vertical * d_vertical).sqrt();
    let radial_c = (c_horizontal * c_horizontal + c_vertical * c_vertical).sqrt();

    // Induced axial thrust: the external axial force plus the thrust
    // induced by the radial load on the leading bearing goes entirely
    // to whichever bearing wins the 0.6/Y capacity comparison.
    let external_axial = load_case.axial_n;
    let (axial_c, axial_d) = match config {
        MountingConfig::FaceToFace => {
            let driving = external_axial + 0.6 / bearing_c.y1_dynamic * radial_c;
            let opposing = 0.6 / bearing_d.y1_dynamic * radial_d;
            if driving >= opposing {
                (0.0, driving)
            } else {
                (opposing - external_axial, 0.0)
            }
        }
        MountingConfig::BackToBack => {
            let driving = external_axial + 0.6 / bearing_d.y1_dynamic * radial_d;
            let opposing = 0.6 / bearing_c.y1_dynamic * radial_c;
            if driving >= opposing {
                (driving, 0.0)
            } else {
                (0.0, opposing - external_axial)
            }
        }
    };

    let static_equivalent_d = static_equivalent(radial_d, axial_d, bearing_d.y0_static);
    let static_equivalent_c = static_equivalent(radial_c, axial_c, bearing_c.y0_static);

    let dynamic_equivalent_d = dynamic_equivalent(
        radial_d,
        axial_d,
        bearing_d.load_ratio_e,
        bearing_d.y1_dynamic,
    );
    let dynamic_equivalent_c = dynamic_equivalent(
        radial_c,
        axial_c,
        bearing_c.load_ratio_e,
        bearing_c.y1_dynamic,
    );

    Ok(RatingResult {
        static_safety_d: bearing_d.static_rating_n / static_equivalent_d,
        static_safety_c: bearing_c.static_rating_n / static_equivalent_c,
        fatigue_life_d: (bearing_d.dynamic_rating_n / dynamic_equivalent_d).powf(LIFE_EXPONENT),
        fatigue_life_c: (bearing_c.dynamic_rating_n / dynamic_equivalent_c).powf(LIFE_EXPONENT),
        static_equivalent_d_n: static_equivalent_d,
        static_equivalent_c_n: static_equivalent_c,
        dynamic_equivalent_d_n: dynamic_equivalent_d,
        dynamic_equivalent_c_n: dynamic_equivalent_c,
        radial_c_n: radial_c,
        radial_d_n: radial_d,
        axial_c_n: axial_c,
        axial_d_n: axial_d,
    })
}
