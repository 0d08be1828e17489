//! Noiseband Synthesis Backend
//!
//! This crate turns a validated response profile into a mono WAV file whose
//! per-frequency energy follows the profile's amplitude envelope.
//!
//! # Overview
//!
//! The pipeline is a pure batch computation over in-memory data:
//!
//! 1. [`SpectralEnvelope`] interpolates the sparse control points into a
//!    continuous amplitude-vs-frequency function, applying boundary policies
//!    outside the supplied range.
//! 2. [`build_grid`](grid::build_grid) samples the envelope at every discrete
//!    frequency bin implied by the sample rate and duration, yielding linear
//!    magnitudes.
//! 3. [`NoiseSynthesizer`] assigns each bin a random phase, mirrors the
//!    spectrum for realness, runs the inverse transform, and normalizes the
//!    result to the configured peak.
//! 4. The [`wav`] module encodes the sample buffer as a 16-bit linear-PCM
//!    mono WAV file.
//!
//! # Determinism
//!
//! Given the same profile, configuration, and seed, the output is
//! byte-identical across runs. All randomness flows through an injected
//! PCG32 generator created in the [`rng`] module; nothing reads ambient
//! random state.
//!
//! # Example
//!
//! ```
//! use noiseband_profile::{AmplitudeUnit, BoundaryPolicy, ControlPointSet, SynthesisConfig};
//! use noiseband_synth::generate;
//!
//! let points = ControlPointSet::parse(&[("4000", "1")], AmplitudeUnit::Linear)
//!     .unwrap()
//!     .sorted();
//! let config = SynthesisConfig::new(
//!     Some(8000.0),
//!     None,
//!     1.0,
//!     BoundaryPolicy::Flat,
//!     BoundaryPolicy::Flat,
//! )
//! .unwrap();
//!
//! let result = generate(points, &config, 42).unwrap();
//! assert_eq!(result.num_samples, 16_000);
//! // std::fs::write("uniform.wav", &result.wav.wav_data)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point for one synthesis run
//! - [`envelope`] - Piecewise-linear envelope interpolation
//! - [`grid`] - Spectral grid construction
//! - [`synth`] - Random-phase inverse-transform synthesis
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - Deterministic WAV file encoder

pub mod envelope;
pub mod error;
pub mod generate;
pub mod grid;
pub mod rng;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use envelope::SpectralEnvelope;
pub use error::{SynthError, SynthResult};
pub use generate::{generate, generate_with, GenerateResult};
pub use grid::SpectralBin;
pub use synth::{InverseFft, NoiseSynthesizer, SpectrumTransform};
pub use wav::WavResult;
