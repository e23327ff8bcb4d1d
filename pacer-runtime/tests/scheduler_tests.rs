// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![cfg(feature = "runtime-tokio")]

use pacer_runtime::impls::tokio::TokioRuntime;
use pacer_runtime::{RuntimeScheduler, Scheduler};
use pacer_test_utils::CallLog;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{pause, sleep};

fn counting_callback(counter: &Arc<AtomicUsize>) -> impl FnOnce() + Send + 'static {
    let counter = counter.clone();
    move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_callback_runs_after_delay() {
    // Arrange
    pause();
    let scheduler = RuntimeScheduler::<TokioRuntime>::new();
    let log = CallLog::new();
    let record = log.recorder();

    // Act
    let _task = scheduler.schedule(Duration::from_millis(300), move || record("fired"));

    sleep(Duration::from_millis(299)).await;
    assert!(log.is_empty());

    sleep(Duration::from_millis(2)).await;

    // Assert
    let calls = log.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].at, Duration::from_millis(300));
}

#[tokio::test]
async fn test_schedule_from_thread_outside_runtime() -> anyhow::Result<()> {
    // Arrange
    pause();
    let scheduler = RuntimeScheduler::<TokioRuntime>::new();
    let log = CallLog::new();

    // Act
    let record = log.recorder();
    let remote = scheduler.clone();
    let task = std::thread::spawn(move || {
        remote.schedule(Duration::from_millis(100), move || record("remote"))
    })
    .join()
    .map_err(|_| anyhow::anyhow!("scheduling thread panicked"))?;

    sleep(Duration::from_millis(150)).await;

    // Assert
    assert!(!task.is_cancelled());
    assert_eq!(log.args(), vec!["remote"]);

    Ok(())
}

#[tokio::test]
async fn test_zero_delay_is_deferred() {
    // Arrange
    pause();
    let scheduler = RuntimeScheduler::<TokioRuntime>::default();
    let counter = Arc::new(AtomicUsize::new(0));

    // Act
    let _task = scheduler.schedule(Duration::ZERO, counting_callback(&counter));

    // Assert
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    sleep(Duration::from_millis(1)).await;
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cancelled_task_never_runs() {
    // Arrange
    pause();
    let scheduler = RuntimeScheduler::<TokioRuntime>::new();
    let counter = Arc::new(AtomicUsize::new(0));

    // Act
    let task = scheduler.schedule(Duration::from_millis(100), counting_callback(&counter));
    sleep(Duration::from_millis(50)).await;
    task.cancel();
    sleep(Duration::from_millis(100)).await;

    // Assert
    assert!(task.is_cancelled());
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_dropped_task_never_runs() {
    // Arrange
    pause();
    let scheduler = RuntimeScheduler::<TokioRuntime>::new();
    let counter = Arc::new(AtomicUsize::new(0));

    // Act
    drop(scheduler.schedule(Duration::from_millis(100), counting_callback(&counter)));
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_independent_tasks_fire_in_deadline_order() {
    // Arrange
    pause();
    let scheduler = RuntimeScheduler::<TokioRuntime>::new();
    let log = CallLog::new();

    // Act
    let mut tasks = Vec::new();
    for (label, delay) in [("late", 30), ("early", 10), ("middle", 20)] {
        let record = log.recorder();
        tasks.push(scheduler.schedule(Duration::from_millis(delay), move || record(label)));
    }
    sleep(Duration::from_millis(50)).await;

    // Assert
    assert_eq!(log.args(), vec!["early", "middle", "late"]);
}
