// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "serde")]

use pacer::{DebounceConfig, Debouncer, PacerError, ThrottleConfig};
use pacer_test_utils::CallLog;
use std::time::Duration;

#[derive(Debug, serde::Deserialize)]
struct UiSettings {
    search: DebounceConfig,
    scroll: ThrottleConfig,
}

#[test]
fn test_settings_load_from_json() -> anyhow::Result<()> {
    let settings: UiSettings = serde_json::from_str(
        r#"{
            "search": { "delay_ms": 250 },
            "scroll": { "interval_ms": 16 }
        }"#,
    )?;

    assert_eq!(settings.search.duration()?, Duration::from_millis(250));
    assert_eq!(settings.scroll.duration()?, Duration::from_millis(16));

    Ok(())
}

#[test]
fn test_missing_fields_fall_back_to_defaults() -> anyhow::Result<()> {
    let settings: UiSettings = serde_json::from_str(r#"{ "search": {}, "scroll": {} }"#)?;

    assert_eq!(settings.search, DebounceConfig::default());
    assert_eq!(settings.scroll, ThrottleConfig::default());

    Ok(())
}

#[test]
fn test_negative_setting_fails_at_construction() -> anyhow::Result<()> {
    let config: DebounceConfig = serde_json::from_str(r#"{ "delay_ms": -20 }"#)?;
    let log = CallLog::<String>::new();

    let err = Debouncer::from_config(log.recorder(), &config).unwrap_err();

    assert_eq!(err, PacerError::negative_duration("delay_ms", -20));
    assert!(err.to_string().contains("-20ms"));

    Ok(())
}
