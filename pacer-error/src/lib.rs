// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the pacer rate-limiting wrappers.
//!
//! Wrapped functions are never caught or converted: whatever they raise
//! unwinds to the caller that ran them. The only failures pacer reports
//! itself are configuration mistakes detected at construction time.
//!
//! # Examples
//!
//! ```
//! use pacer_error::{PacerError, Result};
//!
//! fn delay_from(ms: i64) -> Result<std::time::Duration> {
//!     u64::try_from(ms)
//!         .map(std::time::Duration::from_millis)
//!         .map_err(|_| PacerError::negative_duration("delay_ms", ms))
//! }
//!
//! assert!(delay_from(-5).is_err());
//! ```

/// Root error type for all pacer operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PacerError {
    /// A wrapper was constructed with an unusable parameter
    ///
    /// This is a caller programming error and is reported when the wrapper
    /// is built, never on a later `invoke`.
    #[error("Invalid configuration for `{parameter}`: {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: String,
        /// What is wrong with the supplied value
        reason: String,
    },
}

impl PacerError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create the error reported for a negative millisecond duration
    pub fn negative_duration(parameter: impl Into<String>, value_ms: i64) -> Self {
        Self::invalid_configuration(
            parameter,
            format!("duration must be non-negative, got {value_ms}ms"),
        )
    }

    /// Name of the parameter this error refers to
    #[must_use]
    pub fn parameter(&self) -> &str {
        match self {
            Self::InvalidConfiguration { parameter, .. } => parameter,
        }
    }
}

/// Specialized Result type for pacer operations
pub type Result<T> = std::result::Result<T, PacerError>;
