//! Main entry point for one synthesis run.
//!
//! Validates first, then runs envelope -> grid -> synthesis -> encode as a
//! single pure computation. Nothing is written anywhere; the caller owns the
//! finished WAV bytes.

use noiseband_profile::{ControlPointSet, SynthesisConfig};

use crate::envelope::SpectralEnvelope;
use crate::error::SynthResult;
use crate::grid;
use crate::rng::{create_rng, derive_component_seed};
use crate::synth::{NoiseSynthesizer, SpectrumTransform};
use crate::wav::WavResult;

/// Result of one synthesis run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Encoded WAV file and its PCM content hash.
    pub wav: WavResult,
    /// Length of the generated signal in samples.
    pub num_samples: usize,
    /// Number of spectral bins the envelope was sampled at.
    pub num_bins: usize,
    /// The seed the run was generated from.
    pub seed: u32,
}

/// Generates shaped noise with the default synthesizer.
///
/// # Arguments
/// * `points` - Control points, in any order
/// * `config` - Resolved synthesis configuration
/// * `seed` - Base seed; the same seed reproduces the output bit for bit
pub fn generate(
    points: ControlPointSet,
    config: &SynthesisConfig,
    seed: u32,
) -> SynthResult<GenerateResult> {
    generate_with(points, config, seed, &NoiseSynthesizer::new())
}

/// Generates shaped noise with a caller-configured synthesizer.
///
/// Use this to set a peak target below full scale or to substitute the
/// spectrum transform.
pub fn generate_with<T: SpectrumTransform>(
    points: ControlPointSet,
    config: &SynthesisConfig,
    seed: u32,
    synthesizer: &NoiseSynthesizer<T>,
) -> SynthResult<GenerateResult> {
    let sample_rate = config.sample_rate();
    let num_samples = grid::num_samples(sample_rate, config.duration_seconds())?;

    let envelope = SpectralEnvelope::new(points, config.lower_bound(), config.upper_bound());
    let bins = grid::build_grid(&envelope, sample_rate, config.duration_seconds())?;

    // Phase randomness gets its own derived stream so any future random
    // component draws independently of it.
    let mut rng = create_rng(derive_component_seed(seed, "phase"));
    let samples = synthesizer.synthesize(&bins, num_samples, &mut rng)?;

    let wav = WavResult::from_mono(&samples, sample_rate.round() as u32);

    Ok(GenerateResult {
        wav,
        num_samples,
        num_bins: bins.len(),
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use noiseband_profile::{AmplitudeUnit, BoundaryPolicy};

    fn simple_points() -> ControlPointSet {
        ControlPointSet::parse(
            &[("2000", "1"), ("6000", "1")],
            AmplitudeUnit::Linear,
        )
        .unwrap()
    }

    fn config() -> SynthesisConfig {
        SynthesisConfig::new(
            Some(8_000.0),
            None,
            0.5,
            BoundaryPolicy::Zero,
            BoundaryPolicy::Zero,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_basic() {
        let result = generate(simple_points(), &config(), 42).unwrap();

        assert_eq!(result.num_samples, 8_000);
        assert_eq!(result.num_bins, 4_001);
        assert_eq!(result.seed, 42);
        assert_eq!(result.wav.sample_rate, 16_000);
        assert_eq!(result.wav.num_samples, 8_000);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate(simple_points(), &config(), 42).unwrap();
        let b = generate(simple_points(), &config(), 42).unwrap();

        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        assert_eq!(a.wav.wav_data, b.wav.wav_data);
    }

    #[test]
    fn test_generate_seed_changes_output() {
        let a = generate(simple_points(), &config(), 42).unwrap();
        let b = generate(simple_points(), &config(), 43).unwrap();

        assert_ne!(a.wav.pcm_hash, b.wav.pcm_hash);
    }

    #[test]
    fn test_generate_with_peak_target() {
        let synth = NoiseSynthesizer::new().with_peak_target(0.8);
        let result = generate_with(simple_points(), &config(), 42, &synth).unwrap();

        // 0.8 of full scale leaves the top PCM codes unused.
        let pcm = crate::wav::extract_pcm_data(&result.wav.wav_data).unwrap();
        let peak = pcm
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]).unsigned_abs())
            .max()
            .unwrap();
        assert!(peak <= (0.8 * 32_767.0_f64).round() as u16);
        assert!(peak > (0.7 * 32_767.0) as u16);
    }

    #[test]
    fn test_generate_propagates_config_errors() {
        // Degenerate duration reaches the grid stage's sample-count check.
        let config = SynthesisConfig::new(
            None,
            Some(10.0),
            0.05,
            BoundaryPolicy::Zero,
            BoundaryPolicy::Zero,
        )
        .unwrap();

        let err = generate(simple_points(), &config, 42).unwrap_err();
        assert_eq!(err, crate::SynthError::TooFewSamples { num_samples: 1 });
    }
}
