// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The host scheduling primitive consumed by the rate-limiting wrappers.

use crate::runtime::Runtime;
use crate::scheduled_call::ScheduledCall;
use crate::timer::Timer;
use core::fmt::{self, Debug};
use core::time::Duration;
use pacer_core::ScheduledTask;

/// Runs callbacks after a delay, with cancellation through the returned handle.
///
/// `schedule` must never run `callback` synchronously, even for a zero
/// delay: the callback is deferred to the next scheduling opportunity.
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// Schedules `callback` to run once `delay` has elapsed.
    ///
    /// Dropping or cancelling the returned [`ScheduledTask`] before the delay
    /// elapses prevents the callback from running.
    fn schedule<F>(&self, delay: Duration, callback: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static;
}

/// [`Scheduler`] backed by a [`Runtime`]'s spawn and timer.
///
/// Each scheduled callback becomes one detached task that races the
/// runtime's sleep future against the handle's cancellation token.
///
/// The runtime handle is captured when the scheduler is built, so
/// `schedule` may be called from threads outside the runtime. The sleep
/// future is created inside the spawned task, on a runtime thread.
///
/// # Example
///
/// ```rust
/// use pacer_runtime::impls::tokio::TokioRuntime;
/// use pacer_runtime::{RuntimeScheduler, Scheduler};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let scheduler = RuntimeScheduler::<TokioRuntime>::new();
/// let (tx, rx) = std::sync::mpsc::channel();
///
/// let _task = scheduler.schedule(Duration::from_millis(5), move || {
///     tx.send("fired").unwrap();
/// });
///
/// tokio::time::sleep(Duration::from_millis(20)).await;
/// assert_eq!(rx.try_recv(), Ok("fired"));
/// # }
/// ```
pub struct RuntimeScheduler<R: Runtime> {
    runtime: R,
    timer: R::Timer,
}

impl<R: Runtime> RuntimeScheduler<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_runtime(R::default())
    }

    /// Spawns timer tasks on `runtime` instead of the caller's current one.
    #[must_use]
    pub fn with_runtime(runtime: R) -> Self {
        Self {
            runtime,
            timer: R::Timer::default(),
        }
    }
}

impl<R: Runtime> Scheduler for RuntimeScheduler<R> {
    fn schedule<F>(&self, delay: Duration, callback: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static,
    {
        let (task, token) = ScheduledTask::new();
        let cancelled = token.cancelled();
        let timer = self.timer.clone();
        self.runtime.spawn(async move {
            ScheduledCall::new(timer.sleep_future(delay), cancelled, callback).await;
        });
        task
    }
}

impl<R: Runtime> Clone for RuntimeScheduler<R> {
    fn clone(&self) -> Self {
        Self {
            runtime: self.runtime.clone(),
            timer: self.timer.clone(),
        }
    }
}

impl<R: Runtime> Default for RuntimeScheduler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Runtime> Debug for RuntimeScheduler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeScheduler")
            .field("runtime", &self.runtime)
            .field("timer", &self.timer)
            .finish()
    }
}
