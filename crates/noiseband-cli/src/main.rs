//! Noiseband - spectrum-shaped noise generator
//!
//! Reads a sparse frequency response profile, synthesizes noise whose
//! spectrum follows it, and writes a mono 16-bit WAV file.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use noiseband_cli::{run, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            for warning in &summary.warnings {
                eprintln!("{} {}", "warning:".yellow().bold(), warning);
            }
            println!(
                "wrote {} ({} samples at {} Hz, seed {})",
                args.outfile.display(),
                summary.num_samples,
                summary.sample_rate,
                summary.seed,
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
