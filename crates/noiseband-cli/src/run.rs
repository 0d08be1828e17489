//! Orchestration of one generation run.
//!
//! Order matters: the configuration is resolved before the input file is
//! touched, so contradictory rate flags fail without reading anything.

use anyhow::{ensure, Context};
use rand::Rng;

use noiseband_profile::{validate, ControlPointSet, SynthesisConfig, ValidationWarning};
use noiseband_synth::{generate_with, NoiseSynthesizer};

use crate::args::Args;
use crate::input;

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Seed the output was generated from (reported so a run without an
    /// explicit seed can still be reproduced).
    pub seed: u32,
    /// Number of samples written.
    pub num_samples: usize,
    /// Sample rate of the written file in Hz.
    pub sample_rate: u32,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Non-fatal diagnostics to show the user.
    pub warnings: Vec<ValidationWarning>,
}

/// Executes one run: resolve config, read profile, synthesize, write WAV.
///
/// The output file is written only after the full sample buffer has been
/// computed; a failing run leaves no partial output behind.
pub fn run(args: &Args) -> anyhow::Result<RunSummary> {
    let config = SynthesisConfig::new(
        args.nyquist,
        args.sample_rate,
        args.duration,
        args.lower_bound.into(),
        args.upper_bound.into(),
    )?;
    ensure!(
        args.peak > 0.0 && args.peak <= 1.0,
        "peak target must be in (0, 1], got {}",
        args.peak
    );

    let pairs = input::read_control_pairs(&args.infile)?;
    let points = ControlPointSet::parse(&pairs, args.units.into())?;
    let warnings = validate(&config, &points);

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let synthesizer = NoiseSynthesizer::new().with_peak_target(args.peak);
    let result = generate_with(points, &config, seed, &synthesizer)?;

    result
        .wav
        .write_to(&args.outfile)
        .with_context(|| format!("failed to write {}", args.outfile.display()))?;

    Ok(RunSummary {
        seed,
        num_samples: result.num_samples,
        sample_rate: result.wav.sample_rate,
        pcm_hash: result.wav.pcm_hash,
        warnings,
    })
}
