// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tests for the runtime-agnostic CancellationToken and ScheduledTask handle.

use core::future::Future;
use core::task::{Context, Poll};
use futures::task::noop_waker_ref;
use pacer_core::{CancellationToken, ScheduledTask};
use std::time::Duration;

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent() {
    let token = CancellationToken::default();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token1 = CancellationToken::new();
    let token2 = token1.clone();

    token2.cancel();

    assert!(token1.is_cancelled());
}

#[test]
fn test_cancelled_pending_then_ready() {
    let token = CancellationToken::new();
    let mut future = Box::pin(token.cancelled());
    let mut cx = Context::from_waker(noop_waker_ref());

    assert_eq!(future.as_mut().poll(&mut cx), Poll::Pending);

    token.cancel();

    assert_eq!(future.as_mut().poll(&mut cx), Poll::Ready(()));
}

#[test]
fn test_cancel_before_first_poll() {
    let token = CancellationToken::new();
    let mut future = Box::pin(token.cancelled());
    token.cancel();

    let mut cx = Context::from_waker(noop_waker_ref());
    assert_eq!(future.as_mut().poll(&mut cx), Poll::Ready(()));
}

// ============================================================================
// Async Tests
// ============================================================================

#[tokio::test]
async fn test_cancelled_future_outlives_token_handle() {
    let token = CancellationToken::new();
    let waiter = token.cancelled();

    let handle = tokio::spawn(waiter);
    token.cancel();
    drop(token);

    let result = tokio::time::timeout(Duration::from_millis(100), handle).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_dropping_scheduled_task_wakes_waiter() {
    let (task, token) = ScheduledTask::new();

    let handle = tokio::spawn(async move {
        token.cancelled().await;
        true
    });

    tokio::task::yield_now().await;
    drop(task);

    let result = tokio::time::timeout(Duration::from_millis(100), handle).await;
    assert!(matches!(result, Ok(Ok(true))));
}
