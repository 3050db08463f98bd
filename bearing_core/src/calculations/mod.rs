//! # Rating Calculations
//!
//! The calculation layer follows one pattern:
//!
//! - value-type inputs (catalog records, load case, criteria)
//! - `*Result` / `*Summary` outputs (JSON-serializable)
//! - pure functions in between, errors via `CalcResult`
//!
//! ## Available Calculations
//!
//! - [`pair`] - rate a single (C, D) bearing pairing
//! - [`sweep`] - exhaustive pairing search over a whole catalog

pub mod pair;
pub mod sweep;

// Re-export commonly used types
pub use pair::{evaluate, RatingResult};
pub use sweep::{sweep, AcceptanceCriteria, PairSelection, SweepSummary};
