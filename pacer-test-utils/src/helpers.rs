// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::Receiver;
use std::time::Duration;
use tokio::time::timeout;

/// Yields repeatedly so tasks woken by the last clock movement can run.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Waits up to `timeout_ms` for the next value on `rx`.
pub async fn recv_timeout<T>(rx: &Receiver<T>, timeout_ms: u64) -> Option<T> {
    timeout(Duration::from_millis(timeout_ms), rx.recv())
        .await
        .ok()
        .and_then(Result::ok)
}

/// Asserts that nothing arrives on `rx` within `timeout_ms`.
///
/// # Panics
///
/// Panics if a value is received.
pub async fn assert_no_recv<T: std::fmt::Debug>(rx: &Receiver<T>, timeout_ms: u64) {
    if let Some(value) = recv_timeout(rx, timeout_ms).await {
        panic!("Unexpected value received, expected no output: {value:?}");
    }
}
