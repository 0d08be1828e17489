//! Piecewise-linear amplitude envelope over frequency.
//!
//! The envelope is the continuous amplitude-vs-frequency function implied by
//! a sparse control-point set. Between points it interpolates linearly in the
//! points' own unit space (decibel profiles interpolate in decibels).
//! Outside the points the configured boundary policies take over.

use noiseband_profile::{Amplitude, BoundaryPolicy, ControlPoint, ControlPointSet};

use crate::error::{SynthError, SynthResult};

/// Continuous amplitude envelope built from a control-point set.
#[derive(Debug, Clone)]
pub struct SpectralEnvelope {
    points: ControlPointSet,
    lower_bound: BoundaryPolicy,
    upper_bound: BoundaryPolicy,
}

impl SpectralEnvelope {
    /// Builds an envelope from a control-point set and boundary policies.
    ///
    /// The set is brought into canonical ascending order here, so callers
    /// may pass points in input order.
    pub fn new(
        points: ControlPointSet,
        lower_bound: BoundaryPolicy,
        upper_bound: BoundaryPolicy,
    ) -> Self {
        Self {
            points: points.sorted(),
            lower_bound,
            upper_bound,
        }
    }

    /// Evaluates the envelope at a frequency.
    ///
    /// Exact hits on a control frequency return that point's amplitude with
    /// no interpolation drift. A frequency strictly between two points
    /// interpolates linearly between them. Frequencies outside the control
    /// range follow the boundary policies:
    ///
    /// - `Zero` yields zero magnitude (silence, whatever the set's unit);
    /// - `Flat` holds the extremal point's amplitude;
    /// - `Linear` extrapolates the slope of the outermost segment, or
    ///   behaves like `Flat` when only one point exists.
    ///
    /// # Errors
    /// [`SynthError::FrequencyOutOfDomain`] for negative or non-finite
    /// input. That is a caller contract violation, not a user-input error:
    /// the grid builder only ever queries frequencies in `[0, nyquist]`.
    pub fn amplitude_at(&self, frequency: f64) -> SynthResult<Amplitude> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(SynthError::FrequencyOutOfDomain { frequency });
        }

        let points = self.points.points();
        debug_assert!(!points.is_empty(), "envelope built from an empty set");

        match points.binary_search_by(|p| p.frequency.total_cmp(&frequency)) {
            Ok(i) => Ok(points[i].amplitude),
            Err(0) => Ok(below_range(points, frequency, self.lower_bound)),
            Err(i) if i == points.len() => {
                Ok(above_range(points, frequency, self.upper_bound))
            }
            Err(i) => {
                let a = &points[i - 1];
                let b = &points[i];
                Ok(interpolate(a, b, frequency))
            }
        }
    }

    /// The boundary policy applied below the lowest control frequency.
    pub fn lower_bound(&self) -> BoundaryPolicy {
        self.lower_bound
    }

    /// The boundary policy applied above the highest control frequency.
    pub fn upper_bound(&self) -> BoundaryPolicy {
        self.upper_bound
    }
}

/// Linear interpolation between two bracketing points, in unit space.
fn interpolate(a: &ControlPoint, b: &ControlPoint, frequency: f64) -> Amplitude {
    let t = (frequency - a.frequency) / (b.frequency - a.frequency);
    a.amplitude.lerp(&b.amplitude, t)
}

/// Envelope value below the lowest control frequency.
fn below_range(points: &[ControlPoint], frequency: f64, policy: BoundaryPolicy) -> Amplitude {
    match policy {
        BoundaryPolicy::Zero => Amplitude::Linear(0.0),
        BoundaryPolicy::Flat => points[0].amplitude,
        BoundaryPolicy::Linear => {
            if points.len() < 2 {
                // No segment to take a slope from.
                points[0].amplitude
            } else {
                // lerp with t < 0 extrapolates the first segment's slope.
                interpolate(&points[0], &points[1], frequency)
            }
        }
    }
}

/// Envelope value above the highest control frequency.
fn above_range(points: &[ControlPoint], frequency: f64, policy: BoundaryPolicy) -> Amplitude {
    let last = points.len() - 1;
    match policy {
        BoundaryPolicy::Zero => Amplitude::Linear(0.0),
        BoundaryPolicy::Flat => points[last].amplitude,
        BoundaryPolicy::Linear => {
            if points.len() < 2 {
                points[last].amplitude
            } else {
                // lerp with t > 1 extrapolates the last segment's slope.
                interpolate(&points[last - 1], &points[last], frequency)
            }
        }
    }
}
