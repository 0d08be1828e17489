//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use noiseband_profile::{AmplitudeUnit, BoundaryPolicy};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliBoundaryPolicy {
    /// Zero magnitude outside the control points
    Zero,
    /// Hold the extremal point's amplitude
    Flat,
    /// Extrapolate the outermost segment's slope
    Linear,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliAmplitudeUnit {
    /// Amplitudes are plain linear magnitudes
    Linear,
    /// Amplitudes are decibels
    Db,
}

/// Generates spectrum-shaped noise from a frequency response profile
#[derive(Parser, Debug)]
#[command(name = "noiseband")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Control-point file: `frequency,amplitude` entries, one or more per
    /// line; `#` starts a comment
    pub infile: PathBuf,

    /// Output WAV file path
    pub outfile: PathBuf,

    /// Nyquist frequency of the output in Hz (exclusive with --sample-rate)
    #[arg(short = 'n', long, conflicts_with = "sample_rate")]
    pub nyquist: Option<f64>,

    /// Sample rate of the output in Hz (exclusive with --nyquist)
    #[arg(short = 'r', long)]
    pub sample_rate: Option<f64>,

    /// Duration of the generated signal in seconds
    #[arg(short, long, default_value_t = 10.0)]
    pub duration: f64,

    /// Envelope behavior below the lowest control frequency
    #[arg(long, value_enum, default_value_t = CliBoundaryPolicy::Linear)]
    pub lower_bound: CliBoundaryPolicy,

    /// Envelope behavior above the highest control frequency
    #[arg(long, value_enum, default_value_t = CliBoundaryPolicy::Linear)]
    pub upper_bound: CliBoundaryPolicy,

    /// Unit of the amplitude column in the input file
    #[arg(short, long, value_enum, default_value_t = CliAmplitudeUnit::Linear)]
    pub units: CliAmplitudeUnit,

    /// Seed for reproducible output; a random seed is drawn and reported
    /// when omitted
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Peak normalization target in (0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub peak: f64,
}

// Conversions from CLI enums to the core types
impl From<CliBoundaryPolicy> for BoundaryPolicy {
    fn from(policy: CliBoundaryPolicy) -> Self {
        match policy {
            CliBoundaryPolicy::Zero => BoundaryPolicy::Zero,
            CliBoundaryPolicy::Flat => BoundaryPolicy::Flat,
            CliBoundaryPolicy::Linear => BoundaryPolicy::Linear,
        }
    }
}

impl From<CliAmplitudeUnit> for AmplitudeUnit {
    fn from(unit: CliAmplitudeUnit) -> Self {
        match unit {
            CliAmplitudeUnit::Linear => AmplitudeUnit::Linear,
            CliAmplitudeUnit::Db => AmplitudeUnit::Decibels,
        }
    }
}
