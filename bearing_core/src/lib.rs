//! # bearing_core - Bearing Pair Rating Engine
//!
//! `bearing_core` is the computational heart of BearingSelect. It rates
//! candidate pairings of tapered roller bearings mounted in a two-point
//! (opposed) arrangement on a shaft, and sweeps a whole catalog for the
//! pairings that clear static-safety and fatigue-life requirements.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No hidden output**: The engine returns counters and sequences;
//!   printing and persistence belong to the caller
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use bearing_core::calculations::sweep::{sweep, AcceptanceCriteria};
//! use bearing_core::file_io::load_catalog;
//! use bearing_core::loads::{LoadCase, MountingConfig};
//!
//! let catalog = load_catalog(Path::new("bearing_specifications.csv")).unwrap();
//! let summary = sweep(
//!     &catalog,
//!     MountingConfig::FaceToFace,
//!     &LoadCase::default(),
//!     &AcceptanceCriteria::default(),
//! )
//! .unwrap();
//!
//! println!(
//!     "{} of {} combinations viable",
//!     summary.accepted_count(),
//!     summary.combinations_evaluated
//! );
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Bearing catalog records and validation
//! - [`loads`] - Shaft load case and mounting configuration
//! - [`calculations`] - Pair rating and exhaustive catalog sweep
//! - [`errors`] - Structured error types
//! - [`file_io`] - CSV catalog loading and result writing

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod file_io;
pub mod loads;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, sweep, AcceptanceCriteria, PairSelection, RatingResult, SweepSummary};
pub use catalog::BearingRecord;
pub use errors::{CalcError, CalcResult};
pub use loads::{LoadCase, MountingConfig};
