//! Non-fatal diagnostics for a profile/config combination.
//!
//! Warnings do not stop a run. A control frequency above Nyquist is legal
//! input (response curves often list points beyond the generated band); it
//! simply cannot contribute a bin of its own.

use crate::config::SynthesisConfig;
use crate::point::ControlPointSet;

/// A non-fatal condition detected before synthesis.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// A control frequency lies above the configured Nyquist frequency.
    /// Its contribution cannot be represented at this sample rate.
    AboveNyquist {
        /// The offending control frequency in Hz.
        frequency: f64,
        /// The configured Nyquist frequency in Hz.
        nyquist: f64,
    },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::AboveNyquist { frequency, nyquist } => write!(
                f,
                "control frequency {frequency} Hz is above the Nyquist frequency {nyquist} Hz \
                 and will not be represented in the output"
            ),
        }
    }
}

/// Checks a profile against a configuration, returning any warnings.
///
/// Warnings are ordered by the points' current order in the set.
pub fn validate(config: &SynthesisConfig, points: &ControlPointSet) -> Vec<ValidationWarning> {
    let nyquist = config.nyquist();
    points
        .points()
        .iter()
        .filter(|p| p.frequency > nyquist)
        .map(|p| ValidationWarning::AboveNyquist {
            frequency: p.frequency,
            nyquist,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryPolicy;
    use crate::point::AmplitudeUnit;

    fn config_with_rate(sample_rate: f64) -> SynthesisConfig {
        SynthesisConfig::new(
            None,
            Some(sample_rate),
            1.0,
            BoundaryPolicy::Zero,
            BoundaryPolicy::Zero,
        )
        .unwrap()
    }

    #[test]
    fn test_no_warnings_in_band() {
        let points = ControlPointSet::parse(
            &[("100", "1"), ("4000", "1")],
            AmplitudeUnit::Linear,
        )
        .unwrap();
        let warnings = validate(&config_with_rate(10_000.0), &points);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_above_nyquist_warns_but_is_not_fatal() {
        let points = ControlPointSet::parse(
            &[("100", "1"), ("9000", "1")],
            AmplitudeUnit::Linear,
        )
        .unwrap();
        let warnings = validate(&config_with_rate(10_000.0), &points);
        assert_eq!(
            warnings,
            vec![ValidationWarning::AboveNyquist {
                frequency: 9000.0,
                nyquist: 5000.0
            }]
        );
    }

    #[test]
    fn test_point_exactly_at_nyquist_is_fine() {
        let points =
            ControlPointSet::parse(&[("5000", "1")], AmplitudeUnit::Linear).unwrap();
        let warnings = validate(&config_with_rate(10_000.0), &points);
        assert!(warnings.is_empty());
    }
}
