//! Synthesis configuration and envelope boundary policies.

use crate::error::ConfigError;

/// How the envelope behaves outside the supplied control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Zero magnitude outside the control points.
    Zero,
    /// The extremal point's amplitude is held flat.
    Flat,
    /// The slope of the outermost segment is extrapolated. With a single
    /// control point there is no segment, and this behaves like `Flat`.
    Linear,
}

/// Resolved configuration for one synthesis run.
///
/// Built through [`SynthesisConfig::new`], which enforces that the caller
/// supplies exactly one of the Nyquist frequency and the sample rate; the
/// other is derived. Errors here surface before any control-point input is
/// read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisConfig {
    sample_rate: f64,
    duration_seconds: f64,
    lower_bound: BoundaryPolicy,
    upper_bound: BoundaryPolicy,
}

impl SynthesisConfig {
    /// Resolves a configuration from user-supplied values.
    ///
    /// # Arguments
    /// * `nyquist` - Nyquist frequency in Hz, if given
    /// * `sample_rate` - Sample rate in Hz, if given (mutually exclusive
    ///   with `nyquist`; `sample_rate = 2 × nyquist`)
    /// * `duration_seconds` - Length of the generated signal
    /// * `lower_bound` - Envelope policy below the lowest control frequency
    /// * `upper_bound` - Envelope policy above the highest control frequency
    ///
    /// # Errors
    /// * [`ConfigError::RateMissing`] when neither rate value is given
    /// * [`ConfigError::RateOverspecified`] when both are given
    /// * [`ConfigError::NonPositiveRate`] when the given rate is not a
    ///   positive finite number
    /// * [`ConfigError::InvalidDuration`] when the duration is not a
    ///   positive finite number
    pub fn new(
        nyquist: Option<f64>,
        sample_rate: Option<f64>,
        duration_seconds: f64,
        lower_bound: BoundaryPolicy,
        upper_bound: BoundaryPolicy,
    ) -> Result<Self, ConfigError> {
        let sample_rate = match (nyquist, sample_rate) {
            (None, None) => return Err(ConfigError::RateMissing),
            (Some(_), Some(_)) => return Err(ConfigError::RateOverspecified),
            (Some(nyquist), None) => {
                if !nyquist.is_finite() || nyquist <= 0.0 {
                    return Err(ConfigError::NonPositiveRate { rate: nyquist });
                }
                2.0 * nyquist
            }
            (None, Some(rate)) => {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(ConfigError::NonPositiveRate { rate });
                }
                rate
            }
        };

        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(ConfigError::InvalidDuration {
                duration: duration_seconds,
            });
        }

        Ok(Self {
            sample_rate,
            duration_seconds,
            lower_bound,
            upper_bound,
        })
    }

    /// Sample rate of the generated signal in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Nyquist frequency, half the sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Duration of the generated signal in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Envelope policy below the lowest control frequency.
    pub fn lower_bound(&self) -> BoundaryPolicy {
        self.lower_bound
    }

    /// Envelope policy above the highest control frequency.
    pub fn upper_bound(&self) -> BoundaryPolicy {
        self.upper_bound
    }
}
