//! Error types for the synthesis backend.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during noise synthesis.
///
/// All errors are terminal for the current run; nothing is retried and no
/// partial output is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// Sample rate was zero, negative, or not finite.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: f64,
    },

    /// Duration was zero, negative, or not finite.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// The requested signal rounds to fewer than two samples.
    #[error("signal would be {num_samples} samples long; at least 2 are required")]
    TooFewSamples {
        /// The rounded sample count.
        num_samples: usize,
    },

    /// A negative (or non-finite) frequency reached the envelope. The
    /// orchestration layer must only ever query non-negative frequencies, so
    /// this indicates a caller bug rather than bad user input.
    #[error("frequency outside envelope domain: {frequency} Hz")]
    FrequencyOutOfDomain {
        /// The offending frequency.
        frequency: f64,
    },

    /// The spectrum handed to the synthesizer does not match the sample
    /// count it was asked to produce. Internal pipeline shape mismatch,
    /// treated as a defect.
    #[error("spectrum shape mismatch: expected {expected} bins, found {found}")]
    BinCountMismatch {
        /// Bin count implied by the sample count.
        expected: usize,
        /// Bin count actually supplied.
        found: usize,
    },
}
