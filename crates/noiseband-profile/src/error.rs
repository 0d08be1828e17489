//! Error types for profile parsing and configuration.

use thiserror::Error;

/// Errors produced while parsing raw control-point pairs.
///
/// Parsing is never retried; each variant carries enough context to report
/// the offending entry verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// An entry contained text that is not a finite number.
    #[error("entry {index}: malformed value '{text}'")]
    Malformed {
        /// Zero-based index of the offending entry.
        index: usize,
        /// The text that failed to parse.
        text: String,
    },

    /// A frequency was zero or negative.
    #[error("entry {index}: frequency must be positive, got {frequency} Hz")]
    NonPositiveFrequency {
        /// Zero-based index of the offending entry.
        index: usize,
        /// The rejected frequency value.
        frequency: f64,
    },

    /// Two entries share the same frequency, making the target amplitude
    /// ambiguous.
    #[error("duplicate control frequency {frequency} Hz")]
    DuplicateFrequency {
        /// The duplicated frequency value.
        frequency: f64,
    },

    /// The input contained no entries at all.
    #[error("profile contains no control points")]
    Empty,
}

/// Errors produced while resolving a [`SynthesisConfig`](crate::SynthesisConfig).
///
/// These are surfaced before any control-point parsing or synthesis begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Neither the Nyquist frequency nor the sample rate was supplied.
    #[error("either a nyquist frequency or a sample rate must be given")]
    RateMissing,

    /// Both the Nyquist frequency and the sample rate were supplied.
    /// Exactly one must be given; the other is derived.
    #[error("nyquist frequency and sample rate are mutually exclusive; give one")]
    RateOverspecified,

    /// The supplied rate was zero, negative, or not finite.
    #[error("invalid rate: {rate} Hz")]
    NonPositiveRate {
        /// The rejected rate value (Nyquist or sample rate, as given).
        rate: f64,
    },

    /// The duration was zero, negative, or not finite.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration value.
        duration: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_messages_carry_context() {
        let err = ParseError::Malformed {
            index: 3,
            text: "abc".to_string(),
        };
        assert!(err.to_string().contains("entry 3"));
        assert!(err.to_string().contains("abc"));

        let err = ParseError::NonPositiveFrequency {
            index: 0,
            frequency: -5.0,
        };
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_config_error_messages() {
        assert!(ConfigError::RateOverspecified
            .to_string()
            .contains("mutually exclusive"));
        let err = ConfigError::InvalidDuration { duration: 0.0 };
        assert!(err.to_string().contains("duration"));
    }
}
