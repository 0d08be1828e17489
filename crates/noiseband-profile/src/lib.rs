//! Noiseband Response Profile Library
//!
//! This crate provides the data model consumed by the synthesis backend:
//! frequency/amplitude control points, the amplitude unit tagging that travels
//! with them, and the synthesis configuration resolved from user input.
//!
//! # Overview
//!
//! A response profile is a sparse set of `(frequency, amplitude)` control
//! points describing the desired spectral shape of the generated noise.
//! Profiles arrive as raw text pairs, are parsed and validated into a
//! [`ControlPointSet`], and are handed to the backend in canonical
//! (ascending-by-frequency) form together with a [`SynthesisConfig`].
//!
//! # Example
//!
//! ```
//! use noiseband_profile::{AmplitudeUnit, BoundaryPolicy, ControlPointSet, SynthesisConfig};
//!
//! let points = ControlPointSet::parse(
//!     &[("100", "0"), ("1000", "-10"), ("5000", "0")],
//!     AmplitudeUnit::Decibels,
//! )
//! .unwrap()
//! .sorted();
//!
//! let config = SynthesisConfig::new(
//!     None,
//!     Some(10_000.0),
//!     1.0,
//!     BoundaryPolicy::Zero,
//!     BoundaryPolicy::Zero,
//! )
//! .unwrap();
//!
//! assert_eq!(config.nyquist(), 5000.0);
//! assert_eq!(points.max_frequency(), Some(5000.0));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Parse and configuration error types
//! - [`point`]: Control points, amplitude unit tagging, and the point set
//! - [`config`]: Synthesis configuration and boundary policies
//! - [`validation`]: Non-fatal profile/config diagnostics

pub mod config;
pub mod error;
pub mod point;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::{BoundaryPolicy, SynthesisConfig};
pub use error::{ConfigError, ParseError};
pub use point::{Amplitude, AmplitudeUnit, ControlPoint, ControlPointSet};
pub use validation::{validate, ValidationWarning};
