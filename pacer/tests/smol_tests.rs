// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-smol")]

use pacer::{Debouncer, RuntimeScheduler, Throttler};
use pacer_runtime::impls::smol::SmolRuntime;
use pacer_test_utils::CallLog;
use std::time::Duration;

fn scheduler() -> RuntimeScheduler<SmolRuntime> {
    RuntimeScheduler::new()
}

#[test]
fn test_debounce_on_smol() {
    smol::block_on(async {
        // Arrange
        let log = CallLog::new();
        let debounced = Debouncer::with_scheduler(log.recorder(), Duration::from_millis(20), scheduler());

        // Act
        debounced.invoke("a");
        debounced.invoke("b");
        smol::Timer::after(Duration::from_millis(200)).await;

        // Assert
        assert_eq!(log.args(), vec!["b"]);
    });
}

#[test]
fn test_throttle_on_smol() {
    smol::block_on(async {
        // Arrange
        let log = CallLog::new();
        let throttled = Throttler::with_scheduler(log.recorder(), Duration::from_millis(50), scheduler());

        // Act & Assert
        assert!(throttled.invoke(1));
        assert!(!throttled.invoke(2));

        smol::Timer::after(Duration::from_millis(200)).await;
        assert!(throttled.invoke(3));
        assert_eq!(log.args(), vec![1, 3]);
    });
}
