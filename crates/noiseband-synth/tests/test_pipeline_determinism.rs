//! End-to-end determinism and output-contract tests for the full pipeline.

use noiseband_profile::{AmplitudeUnit, BoundaryPolicy, ControlPointSet, SynthesisConfig};
use noiseband_synth::wav::extract_pcm_data;
use noiseband_synth::{generate, generate_with, NoiseSynthesizer, SynthError};

fn db_profile() -> ControlPointSet {
    ControlPointSet::parse(
        &[("100", "0"), ("1000", "-10"), ("5000", "0")],
        AmplitudeUnit::Decibels,
    )
    .unwrap()
}

fn config(
    sample_rate: f64,
    duration: f64,
    lower: BoundaryPolicy,
    upper: BoundaryPolicy,
) -> SynthesisConfig {
    SynthesisConfig::new(None, Some(sample_rate), duration, lower, upper).unwrap()
}

#[test]
fn test_same_seed_bit_identical_output() {
    let cfg = config(10_000.0, 1.0, BoundaryPolicy::Zero, BoundaryPolicy::Zero);

    let a = generate(db_profile(), &cfg, 1234).unwrap();
    let b = generate(db_profile(), &cfg, 1234).unwrap();

    assert_eq!(a.wav.wav_data, b.wav.wav_data);
    assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
}

#[test]
fn test_different_seeds_produce_different_audio() {
    let cfg = config(10_000.0, 1.0, BoundaryPolicy::Zero, BoundaryPolicy::Zero);

    let a = generate(db_profile(), &cfg, 1).unwrap();
    let b = generate(db_profile(), &cfg, 2).unwrap();

    assert_ne!(a.wav.pcm_hash, b.wav.pcm_hash);
}

#[test]
fn test_result_shape() {
    let cfg = config(10_000.0, 1.0, BoundaryPolicy::Zero, BoundaryPolicy::Zero);
    let result = generate(db_profile(), &cfg, 42).unwrap();

    assert_eq!(result.num_samples, 10_000);
    assert_eq!(result.num_bins, 5_001);
    assert_eq!(result.wav.sample_rate, 10_000);
    assert_eq!(result.wav.num_samples, 10_000);

    // 44-byte header plus 2 bytes per sample
    assert_eq!(result.wav.wav_data.len(), 44 + 2 * 10_000);
}

#[test]
fn test_output_never_exceeds_full_scale() {
    let cfg = config(10_000.0, 1.0, BoundaryPolicy::Flat, BoundaryPolicy::Flat);
    let result = generate(db_profile(), &cfg, 42).unwrap();

    let pcm = extract_pcm_data(&result.wav.wav_data).unwrap();
    assert!(pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .all(|v| v > i16::MIN));
}

#[test]
fn test_peak_target_leaves_headroom() {
    let cfg = config(10_000.0, 0.5, BoundaryPolicy::Zero, BoundaryPolicy::Zero);
    let synth = NoiseSynthesizer::new().with_peak_target(0.5);
    let result = generate_with(db_profile(), &cfg, 42, &synth).unwrap();

    let pcm = extract_pcm_data(&result.wav.wav_data).unwrap();
    let peak = pcm
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]).unsigned_abs())
        .max()
        .unwrap();
    assert!(peak <= (0.5 * 32_767.0_f64).round() as u16);
}

#[test]
fn test_unsorted_profile_generates_like_sorted() {
    let unsorted = ControlPointSet::parse(
        &[("5000", "0"), ("100", "0"), ("1000", "-10")],
        AmplitudeUnit::Decibels,
    )
    .unwrap();

    let cfg = config(10_000.0, 1.0, BoundaryPolicy::Zero, BoundaryPolicy::Zero);

    let a = generate(unsorted, &cfg, 42).unwrap();
    let b = generate(db_profile().sorted(), &cfg, 42).unwrap();
    assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
}

#[test]
fn test_degenerate_duration_fails_cleanly() {
    let cfg = config(10.0, 0.05, BoundaryPolicy::Zero, BoundaryPolicy::Zero);
    let err = generate(db_profile(), &cfg, 42).unwrap_err();
    assert_eq!(err, SynthError::TooFewSamples { num_samples: 1 });
}
