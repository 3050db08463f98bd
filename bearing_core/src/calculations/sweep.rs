//! # Catalog Sweep
//!
//! Exhaustive search over every (C, D) pairing from a bearing catalog:
//! the full ordered Cartesian product of the catalog with itself,
//! self-pairs included. Each pairing is rated by
//! [`pair::evaluate`](crate::calculations::pair::evaluate) and kept only
//! if it clears the acceptance criteria.
//!
//! The sweep owns the counters (combinations tried, pairings accepted)
//! and returns them in the summary; it never prints. Any evaluation
//! error aborts the whole sweep, because a result set with silently
//! skipped pairings would not be an exhaustive search anymore.

use serde::{Deserialize, Serialize};

use crate::calculations::pair::{evaluate, RatingResult};
use crate::catalog::BearingRecord;
use crate::errors::CalcResult;
use crate::loads::{LoadCase, MountingConfig};

/// Thresholds a pairing must clear to be reported.
///
/// ## JSON Example
///
/// ```json
/// {
///   "min_static_safety": 20.0,
///   "min_fatigue_life_mrev": 50000.0,
///   "max_bore_c_mm": 66.0,
///   "max_da_min_d_mm": 86.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceCriteria {
    /// Minimum static safety factor, required at both positions
    pub min_static_safety: f64,

    /// Minimum L10 fatigue life (millions of revolutions), required at
    /// both positions
    pub min_fatigue_life_mrev: f64,

    /// Largest bore accepted at position C (mm)
    pub max_bore_c_mm: f64,

    /// Largest minimum abutment diameter accepted at position D (mm)
    pub max_da_min_d_mm: f64,
}

impl Default for AcceptanceCriteria {
    fn default() -> Self {
        AcceptanceCriteria {
            min_static_safety: 20.0,
            min_fatigue_life_mrev: 50_000.0,
            max_bore_c_mm: 66.0,
            max_da_min_d_mm: 86.0,
        }
    }
}

impl AcceptanceCriteria {
    /// Apply the acceptance predicate to one rated pairing.
    ///
    /// The geometric limits are deliberately asymmetric (bore at C,
    /// abutment diameter at D): the C seat is bored to 66 mm and the D
    /// side shoulder clears 86 mm on the shaft this tool was written
    /// for. Kept as-is rather than symmetrized.
    pub fn accepts(
        &self,
        rating: &RatingResult,
        bearing_c: &BearingRecord,
        bearing_d: &BearingRecord,
    ) -> bool {
        rating.static_safety_d > self.min_static_safety
            && rating.static_safety_c > self.min_static_safety
            && rating.fatigue_life_d > self.min_fatigue_life_mrev
            && rating.fatigue_life_c > self.min_fatigue_life_mrev
            && bearing_c.bore_mm <= self.max_bore_c_mm
            && bearing_d.da_min_mm <= self.max_da_min_d_mm
    }
}

/// One accepted pairing: the echoed catalog fields of both bearings
/// plus the computed rating outputs, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSelection {
    // === Bearing at C ===
    pub bearing_c_name: String,
    pub bearing_c_bore_mm: f64,
    pub bearing_c_outer_mm: f64,
    pub bearing_c_static_rating_n: f64,
    pub bearing_c_dynamic_rating_n: f64,
    pub bearing_c_width_offset_m: f64,
    pub bearing_c_thickness_m: f64,
    pub bearing_c_da_min_mm: f64,

    // === Bearing at D ===
    pub bearing_d_name: String,
    pub bearing_d_bore_mm: f64,
    pub bearing_d_outer_mm: f64,
    pub bearing_d_static_rating_n: f64,
    pub bearing_d_dynamic_rating_n: f64,
    pub bearing_d_width_offset_m: f64,
    pub bearing_d_thickness_m: f64,
    pub bearing_d_da_min_mm: f64,

    // === Computed Ratings ===
    pub static_safety_d: f64,
    pub fatigue_life_d: f64,
    pub static_safety_c: f64,
    pub fatigue_life_c: f64,
    pub static_equivalent_d_n: f64,
    pub static_equivalent_c_n: f64,
    pub dynamic_equivalent_d_n: f64,
    pub dynamic_equivalent_c_n: f64,
}

impl PairSelection {
    fn new(bearing_c: &BearingRecord, bearing_d: &BearingRecord, rating: &RatingResult) -> Self {
        PairSelection {
            bearing_c_name: bearing_c.name.clone(),
            bearing_c_bore_mm: bearing_c.bore_mm,
            bearing_c_outer_mm: bearing_c.outer_mm,
            bearing_c_static_rating_n: bearing_c.static_rating_n,
            bearing_c_dynamic_rating_n: bearing_c.dynamic_rating_n,
            bearing_c_width_offset_m: bearing_c.width_offset_m,
            bearing_c_thickness_m: bearing_c.thickness_m,
            bearing_c_da_min_mm: bearing_c.da_min_mm,
            bearing_d_name: bearing_d.name.clone(),
            bearing_d_bore_mm: bearing_d.bore_mm,
            bearing_d_outer_mm: bearing_d.outer_mm,
            bearing_d_static_rating_n: bearing_d.static_rating_n,
            bearing_d_dynamic_rating_n: bearing_d.dynamic_rating_n,
            bearing_d_width_offset_m: bearing_d.width_offset_m,
            bearing_d_thickness_m: bearing_d.thickness_m,
            bearing_d_da_min_mm: bearing_d.da_min_mm,
            static_safety_d: rating.static_safety_d,
            fatigue_life_d: rating.fatigue_life_d,
            static_safety_c: rating.static_safety_c,
            fatigue_life_c: rating.fatigue_life_c,
            static_equivalent_d_n: rating.static_equivalent_d_n,
            static_equivalent_c_n: rating.static_equivalent_c_n,
            dynamic_equivalent_d_n: rating.dynamic_equivalent_d_n,
            dynamic_equivalent_c_n: rating.dynamic_equivalent_c_n,
        }
    }
}

/// Outcome of a full catalog sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Combinations rated, always `catalog.len()²`
    pub combinations_evaluated: usize,

    /// Accepted pairings, in enumeration order (C outer, D inner)
    pub accepted: Vec<PairSelection>,
}

impl SweepSummary {
    /// Number of pairings that cleared the criteria
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

/// Rate every (C, D) combination from the catalog and keep the ones
/// clearing `criteria`.
///
/// Enumeration order is catalog order squared: the C position walks the
/// catalog in the outer loop, D in the inner. Accepted pairings appear
/// in exactly that order.
///
/// # Errors
///
/// The first evaluation error (invalid record, degenerate geometry)
/// aborts the sweep and no results are returned.
pub fn sweep(
    catalog: &[BearingRecord],
    config: MountingConfig,
    load_case: &LoadCase,
    criteria: &AcceptanceCriteria,
) -> CalcResult<SweepSummary> {
    let mut combinations_evaluated = 0;
    let mut accepted = Vec::new();

    for bearing_c in catalog {
        for bearing_d in catalog {
            let rating = evaluate(bearing_c, bearing_d, config, load_case)?;
            combinations_evaluated += 1;

            if criteria.accepts(&rating, bearing_c, bearing_d) {
                accepted.push(PairSelection::new(bearing_c, bearing_d, &rating));
            }
        }
    }

    Ok(SweepSummary {
        combinations_evaluated,
        accepted,
    })
}
