//! Random-phase inverse-transform noise synthesis.
//!
//! Turns a half-spectrum of magnitudes into a real time-domain signal:
//! every interior bin gets a uniformly random phase, the upper half of the
//! spectrum is the conjugate mirror of the lower half, and an inverse FFT
//! brings the result into the time domain. Random phase is what makes the
//! output noise rather than a periodic tone stack.

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::{SynthError, SynthResult};
use crate::grid::SpectralBin;

/// Strategy for converting a full complex spectrum into time-domain samples.
///
/// The synthesizer only depends on this one operation, so a different
/// transform implementation can be swapped in without touching the
/// phase-randomization or normalization logic.
pub trait SpectrumTransform {
    /// Transforms an `N`-point complex spectrum into `N` real samples.
    fn transform(&self, spectrum: Vec<Complex<f64>>) -> Vec<f64>;
}

/// Inverse FFT transform backed by `rustfft`.
#[derive(Debug, Clone, Default)]
pub struct InverseFft;

impl SpectrumTransform for InverseFft {
    fn transform(&self, mut spectrum: Vec<Complex<f64>>) -> Vec<f64> {
        let n = spectrum.len();
        let mut planner = FftPlanner::new();
        let ifft = planner.plan_fft_inverse(n);
        ifft.process(&mut spectrum);

        // rustfft does not normalize; scale by 1/N. The spectrum is
        // conjugate-symmetric by construction, so the imaginary parts are
        // numerical noise and only the real parts are kept.
        spectrum.iter().map(|c| c.re / n as f64).collect()
    }
}

/// Noise synthesizer with randomized per-bin phase.
#[derive(Debug, Clone)]
pub struct NoiseSynthesizer<T: SpectrumTransform = InverseFft> {
    transform: T,
    peak_target: f64,
}

impl NoiseSynthesizer<InverseFft> {
    /// Creates a synthesizer with the default inverse-FFT transform and a
    /// full-scale peak target of 1.0.
    pub fn new() -> Self {
        Self::with_transform(InverseFft)
    }
}

impl Default for NoiseSynthesizer<InverseFft> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SpectrumTransform> NoiseSynthesizer<T> {
    /// Creates a synthesizer around a specific transform strategy.
    pub fn with_transform(transform: T) -> Self {
        Self {
            transform,
            peak_target: 1.0,
        }
    }

    /// Sets the peak absolute sample value the output is normalized to.
    ///
    /// Keeps output level independent of the arbitrary magnitude units used
    /// upstream, and leaves headroom when set below 1.0.
    pub fn with_peak_target(mut self, peak_target: f64) -> Self {
        self.peak_target = peak_target;
        self
    }

    /// The configured normalization target.
    pub fn peak_target(&self) -> f64 {
        self.peak_target
    }

    /// Synthesizes `num_samples` real samples from a half-spectrum.
    ///
    /// # Arguments
    /// * `bins` - Magnitudes for bins `[0, N/2]`; length must be `N/2 + 1`
    /// * `num_samples` - The `N` the grid was built for
    /// * `rng` - Injected phase RNG; same seed, same output
    ///
    /// # Errors
    /// [`SynthError::BinCountMismatch`] when the bin count does not match
    /// `num_samples` — a pipeline shape defect, not a user error.
    pub fn synthesize(
        &self,
        bins: &[SpectralBin],
        num_samples: usize,
        rng: &mut Pcg32,
    ) -> SynthResult<Vec<f64>> {
        let n = num_samples;
        let expected = n / 2 + 1;
        if bins.len() != expected {
            return Err(SynthError::BinCountMismatch {
                expected,
                found: bins.len(),
            });
        }

        let mut spectrum = vec![Complex::new(0.0, 0.0); n];

        // DC stays real; so does the Nyquist bin when N is even. Both are
        // their own mirror image, and a real signal requires X[k] = X*[N-k].
        spectrum[0] = Complex::new(bins[0].magnitude, 0.0);
        let nyquist_index = if n % 2 == 0 { Some(n / 2) } else { None };

        for (k, bin) in bins.iter().enumerate().skip(1) {
            if Some(k) == nyquist_index {
                spectrum[k] = Complex::new(bin.magnitude, 0.0);
            } else {
                let phase = rng.gen_range(0.0..TAU);
                spectrum[k] = Complex::from_polar(bin.magnitude, phase);
            }
        }

        // Mirror the interior bins into the upper half.
        for k in expected..n {
            spectrum[k] = spectrum[n - k].conj();
        }

        let mut samples = self.transform.transform(spectrum);
        normalize_peak(&mut samples, self.peak_target);
        Ok(samples)
    }
}

/// Scales samples so the peak absolute value equals `target`.
///
/// An all-zero buffer is left untouched.
fn normalize_peak(samples: &mut [f64], target: f64) {
    let max = samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b));

    if max > 0.0 {
        let scale = target / max;
        for s in samples.iter_mut() {
            *s *= scale;
        }
    }
}
