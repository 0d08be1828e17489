//! Spectral grid construction.
//!
//! Samples the continuous envelope at every discrete frequency bin implied
//! by the sample rate and duration, converting amplitudes to linear
//! magnitude. The grid covers only the non-negative half of the spectrum;
//! the synthesizer reconstructs the conjugate-symmetric other half.

use crate::envelope::SpectralEnvelope;
use crate::error::{SynthError, SynthResult};

/// One discrete frequency sample of the magnitude spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralBin {
    /// Bin center frequency in Hz.
    pub frequency: f64,
    /// Linear magnitude, always non-negative.
    pub magnitude: f64,
}

/// Computes the signal length in samples for a rate/duration pair.
///
/// `N = round(duration × sample_rate)`.
///
/// # Errors
/// * [`SynthError::InvalidSampleRate`] when the rate is not positive finite
/// * [`SynthError::InvalidDuration`] when the duration is not positive finite
/// * [`SynthError::TooFewSamples`] when the product rounds below 2
pub fn num_samples(sample_rate: f64, duration_seconds: f64) -> SynthResult<usize> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(SynthError::InvalidSampleRate { rate: sample_rate });
    }
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(SynthError::InvalidDuration {
            duration: duration_seconds,
        });
    }

    let n = (duration_seconds * sample_rate).round() as usize;
    if n < 2 {
        return Err(SynthError::TooFewSamples { num_samples: n });
    }
    Ok(n)
}

/// Samples the envelope onto the discrete frequency grid.
///
/// Bin `k` sits at `k × df` with `df = sample_rate / N`, for `k` in
/// `[0, N/2]`. That is `N/2 + 1` bins for even `N`; odd `N` has no Nyquist
/// bin and one fewer. When `N` is even, the last bin lies exactly at the
/// Nyquist frequency and must stay purely real in the synthesized spectrum.
///
/// Amplitudes convert to linear magnitude here; a `Linear` boundary
/// extrapolation can cross zero, and negative magnitude is meaningless, so
/// values clamp at 0.
pub fn build_grid(
    envelope: &SpectralEnvelope,
    sample_rate: f64,
    duration_seconds: f64,
) -> SynthResult<Vec<SpectralBin>> {
    let n = num_samples(sample_rate, duration_seconds)?;
    let df = sample_rate / n as f64;

    let num_bins = n / 2 + 1;
    let mut bins = Vec::with_capacity(num_bins);
    for k in 0..num_bins {
        let frequency = k as f64 * df;
        let magnitude = envelope.amplitude_at(frequency)?.to_linear().max(0.0);
        bins.push(SpectralBin {
            frequency,
            magnitude,
        });
    }

    Ok(bins)
}
