// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Millisecond-based configuration for the wrappers.
//!
//! Durations arriving from configuration files or other untyped sources are
//! signed millisecond counts. They are validated when a wrapper is built, so
//! a negative value fails at construction rather than on the first `invoke`.
//!
//! With the `serde` feature both types deserialize from a map, falling back
//! to their defaults for missing fields:
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # fn main() {
//! use pacer::config::DebounceConfig;
//!
//! let config: DebounceConfig = serde_json::from_str(r#"{ "delay_ms": 250 }"#).unwrap();
//! assert_eq!(config.duration().unwrap().as_millis(), 250);
//! # }
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```

use core::time::Duration;
use pacer_error::{PacerError, Result};

/// Settings for a [`Debouncer`](crate::Debouncer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebounceConfig {
    /// Quiet period after the last call before the wrapped function runs.
    pub delay_ms: i64,
}

impl DebounceConfig {
    pub const DEFAULT_DELAY_MS: i64 = 300;

    #[must_use]
    pub const fn new(delay_ms: i64) -> Self {
        Self { delay_ms }
    }

    /// The validated delay.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidConfiguration`] if `delay_ms` is negative.
    pub fn duration(&self) -> Result<Duration> {
        millis_to_duration("delay_ms", self.delay_ms)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY_MS)
    }
}

/// Settings for a [`Throttler`](crate::Throttler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThrottleConfig {
    /// Length of the cooldown window started by each call that fires.
    pub interval_ms: i64,
}

impl ThrottleConfig {
    pub const DEFAULT_INTERVAL_MS: i64 = 1000;

    #[must_use]
    pub const fn new(interval_ms: i64) -> Self {
        Self { interval_ms }
    }

    /// The validated cooldown interval.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidConfiguration`] if `interval_ms` is negative.
    pub fn duration(&self) -> Result<Duration> {
        millis_to_duration("interval_ms", self.interval_ms)
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}

pub(crate) fn millis_to_duration(parameter: &str, value_ms: i64) -> Result<Duration> {
    u64::try_from(value_ms)
        .map(Duration::from_millis)
        .map_err(|_| PacerError::negative_duration(parameter, value_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_three_hundred_millis() {
        assert_eq!(
            DebounceConfig::default().duration(),
            Ok(Duration::from_millis(300))
        );
    }

    #[test]
    fn default_interval_is_one_second() {
        assert_eq!(ThrottleConfig::default().duration(), Ok(Duration::from_secs(1)));
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(DebounceConfig::new(0).duration(), Ok(Duration::ZERO));
        assert_eq!(ThrottleConfig::new(0).duration(), Ok(Duration::ZERO));
    }

    #[test]
    fn negative_values_name_their_parameter() {
        let err = DebounceConfig::new(-1).duration().unwrap_err();
        assert_eq!(err.parameter(), "delay_ms");

        let err = ThrottleConfig::new(i64::MIN).duration().unwrap_err();
        assert_eq!(err.parameter(), "interval_ms");
    }
}
