//! Command-line interface for checking and rendering the tables

use crate::analysis::accuracy::trig_accuracy;
use crate::analysis::avalanche::measure_avalanche;
use crate::hashing::{hash32, hash64};
use crate::io::configuration::{
    CURVE_OUTPUT_NAME, DEFAULT_ACCURACY_STEPS, DEFAULT_AVALANCHE_LENGTH,
    DEFAULT_AVALANCHE_SAMPLES, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DITHER_OUTPUT_NAMES,
    PALETTE_OUTPUT_NAME,
};
use crate::io::error::{PaletteError, Result, file_system_error};
use crate::io::image::{export_curve_png, export_multipliers_png, export_palette_map_png};
use crate::io::progress::SweepProgress;
use crate::spatial::hilbert::{HILBERT_POINTS, HILBERT_SIDE, hilbert_point};
use crate::spatial::pealbert::verify_pealbert;
use crate::spatial::verify::{CurveReport, verify_curve};
use crate::tables::{DEFAULT_PALETTE, dither_tables, palette_map};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "palettemath")]
#[command(
    author,
    version,
    about = "Inspect and render palette, dither, hash and curve tables"
)]
/// Command-line arguments for the diagnostic tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Only report warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Diagnostic operations
#[derive(Subcommand)]
pub enum Command {
    /// Walk both space-filling curves and verify adjacency and coverage
    CheckCurve,

    /// Report the worst error of every trig approximation
    Accuracy {
        /// Sample points per function
        #[arg(short = 'n', long, default_value_t = DEFAULT_ACCURACY_STEPS)]
        steps: usize,
    },

    /// Measure how many output bits change when one input bit flips
    Avalanche {
        /// Random seed for the sampled inputs
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Number of inputs to sample
        #[arg(short = 'n', long, default_value_t = DEFAULT_AVALANCHE_SAMPLES)]
        samples: usize,

        /// Length of each input in bytes
        #[arg(short, long, default_value_t = DEFAULT_AVALANCHE_LENGTH)]
        length: usize,
    },

    /// Print the 64-bit and 32-bit Water hash of a file's bytes
    Hash {
        /// File to hash
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Write the dither tables, palette map and curve slices as PNG files
    Render {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        out: PathBuf,
    },
}

/// Runs one parsed command
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Wrap parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if a curve check fails, parameters are invalid, or a
    /// file cannot be read or written
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::CheckCurve => Self::check_curves(),
            Command::Accuracy { steps } => {
                Self::accuracy(*steps);
                Ok(())
            }
            Command::Avalanche {
                seed,
                samples,
                length,
            } => self.avalanche(*seed, *samples, *length),
            Command::Hash { path } => {
                let bytes = std::fs::read(path).map_err(|e| file_system_error(path, "read", e))?;
                info!(
                    path = %path.display(),
                    bytes = bytes.len(),
                    hash64 = %format!("{:016x}", hash64(Some(&bytes))),
                    hash32 = %format!("{:08x}", hash32(Some(&bytes))),
                    "water hash"
                );
                Ok(())
            }
            Command::Render { out } => Self::render(out),
        }
    }

    fn check_curves() -> Result<()> {
        let base = verify_curve(HILBERT_POINTS as u32, HILBERT_SIDE, hilbert_point);
        Self::report_curve("hilbert", &base)?;
        Self::report_curve("pealbert", &verify_pealbert())
    }

    fn report_curve(curve: &'static str, report: &CurveReport) -> Result<()> {
        if report.is_valid() {
            info!(curve, %report, "curve ok");
            Ok(())
        } else {
            Err(PaletteError::CurveCheck {
                curve,
                summary: report.to_string(),
            })
        }
    }

    fn accuracy(steps: usize) {
        for row in trig_accuracy(steps) {
            info!(
                function = row.name,
                max_error = row.max_error,
                worst_input = row.worst_input,
                "accuracy"
            );
        }
    }

    fn avalanche(&self, seed: u64, samples: usize, length: usize) -> Result<()> {
        let progress = SweepProgress::new("avalanche", samples, self.cli.quiet);
        let report = measure_avalanche(samples, length, seed, |done| progress.update(done));
        progress.finish();
        let report = report?;

        info!(
            samples = report.samples,
            length = report.length,
            mean_64 = report.mean_fraction_64,
            mean_32 = report.mean_fraction_32,
            min_changed_64 = report.min_changed_64,
            max_changed_64 = report.max_changed_64,
            bias = report.bias(),
            "avalanche"
        );
        Ok(())
    }

    fn render(out: &Path) -> Result<()> {
        for (table, name) in dither_tables().tables().into_iter().zip(DITHER_OUTPUT_NAMES) {
            export_multipliers_png(table, &out.join(name))?;
        }
        export_palette_map_png(palette_map(), &DEFAULT_PALETTE, &out.join(PALETTE_OUTPUT_NAME))?;
        export_curve_png(&out.join(CURVE_OUTPUT_NAME))?;

        info!(out = %out.display(), "tables rendered");
        Ok(())
    }
}
