//! # BearingSelect CLI
//!
//! Loads a bearing catalog from CSV, rates every (C, D) pairing under
//! the shipped intermediate-shaft load case, and writes the pairings
//! that clear the acceptance criteria to a results CSV.
//!
//! All console output lives here; the engine only returns data.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use bearing_core::calculations::sweep::{sweep, AcceptanceCriteria};
use bearing_core::errors::CalcResult;
use bearing_core::file_io::{load_catalog, write_results};
use bearing_core::loads::{LoadCase, MountingConfig};

#[derive(Parser)]
#[command(
    name = "bearing_cli",
    version,
    about = "Sweep a bearing catalog for viable two-point shaft pairings"
)]
struct Args {
    /// Bearing catalog CSV (manufacturer-table columns)
    #[arg(long, default_value = "bearing_specifications.csv")]
    catalog: PathBuf,

    /// Output CSV for accepted pairings
    #[arg(long, default_value = "results.csv")]
    output: PathBuf,

    /// Bearing orientation on the shaft
    #[arg(long, value_enum, default_value = "face-to-face")]
    mounting: Mounting,
}

/// CLI-side mirror of [`MountingConfig`], so clap stays out of the
/// engine crate.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mounting {
    FaceToFace,
    BackToBack,
}

impl From<Mounting> for MountingConfig {
    fn from(mounting: Mounting) -> Self {
        match mounting {
            Mounting::FaceToFace => MountingConfig::FaceToFace,
            Mounting::BackToBack => MountingConfig::BackToBack,
        }
    }
}

fn run(args: &Args) -> CalcResult<()> {
    let catalog = load_catalog(&args.catalog)?;
    println!(
        "Loaded {} bearings from {}",
        catalog.len(),
        args.catalog.display()
    );

    for bearing in &catalog {
        if !bearing.has_conventional_load_ratio() {
            println!(
                "Warning: '{}' has load ratio e = {} outside (0, 1) - suspect catalog data",
                bearing.name, bearing.load_ratio_e
            );
        }
    }

    println!("Testing {} combinations...", catalog.len() * catalog.len());

    let criteria = AcceptanceCriteria::default();
    let summary = sweep(
        &catalog,
        args.mounting.into(),
        &LoadCase::default(),
        &criteria,
    )?;

    write_results(&args.output, &summary.accepted)?;

    println!("Completed! Tested {} combinations.", summary.combinations_evaluated);
    println!(
        "Valid combinations (f_s > {} and L_10 > {}): {}",
        criteria.min_static_safety,
        criteria.min_fatigue_life_mrev,
        summary.accepted_count()
    );
    println!("Results written to {}", args.output.display());

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}
