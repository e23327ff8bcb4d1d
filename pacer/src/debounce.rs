// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing-edge debouncing of function calls.
//!
//! A [`Debouncer`] runs its function only after `delay` has passed without a
//! further call. Each call replaces the pending arguments and restarts the
//! timer, so of a burst of calls spaced closer than `delay` only the last one
//! reaches the function.
//!
//! State machine:
//! - `Idle` + `invoke` -> `Scheduled` (timer started)
//! - `Scheduled` + `invoke` -> `Scheduled` (old timer cancelled, new timer started, args replaced)
//! - `Scheduled` + timer fires -> `Idle` (slot cleared, then the function runs)
//!
//! # Example
//!
//! ```rust
//! use pacer::Debouncer;
//! use std::sync::mpsc;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, rx) = mpsc::channel();
//! let search = Debouncer::new(
//!     move |query: String| tx.send(query).unwrap(),
//!     Duration::from_millis(20),
//! );
//!
//! search.invoke("r".to_string());
//! search.invoke("ru".to_string());
//! search.invoke("rust".to_string());
//!
//! tokio::time::sleep(Duration::from_millis(100)).await;
//! assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["rust".to_string()]);
//! # }
//! ```

use crate::config::{millis_to_duration, DebounceConfig};
use core::fmt::{self, Debug};
use core::time::Duration;
use pacer_core::ScheduledTask;
use pacer_error::Result;
use pacer_runtime::{DefaultScheduler, Scheduler};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Callback<A> = Box<dyn Fn(A) + Send + Sync>;

/// Wraps a function so it runs once calls have been quiet for `delay`.
///
/// The wrapper is `Send + Sync`; share it behind an `Arc` to invoke it from
/// several tasks. Dropping it cancels any pending call.
pub struct Debouncer<A, S = DefaultScheduler>
where
    A: Send + 'static,
    S: Scheduler,
{
    shared: Arc<Shared<A>>,
    scheduler: S,
    delay: Duration,
}

struct Shared<A> {
    func: Callback<A>,
    state: Mutex<State<A>>,
}

struct State<A> {
    pending: Option<Pending<A>>,
    next_generation: u64,
}

struct Pending<A> {
    args: A,
    generation: u64,
    task: ScheduledTask,
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    /// Creates a debouncer on the default runtime.
    ///
    /// A zero `delay` still defers the call to the next scheduling
    /// opportunity; it never runs inside `invoke`.
    pub fn new<F>(func: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_scheduler(func, delay, DefaultScheduler::default())
    }

    /// Creates a debouncer whose function receives `receiver` on every call.
    ///
    /// ```rust
    /// use pacer::Debouncer;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::time::Duration;
    ///
    /// struct Editor {
    ///     saves: AtomicUsize,
    /// }
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let autosave = Debouncer::with_receiver(
    ///     Editor { saves: AtomicUsize::new(0) },
    ///     Duration::from_millis(10),
    ///     |editor: &Editor, ()| {
    ///         editor.saves.fetch_add(1, Ordering::SeqCst);
    ///     },
    /// );
    /// autosave.invoke(());
    /// # }
    /// ```
    pub fn with_receiver<C, F>(receiver: C, delay: Duration, func: F) -> Self
    where
        C: Send + Sync + 'static,
        F: Fn(&C, A) + Send + Sync + 'static,
    {
        Self::new(move |args| func(&receiver, args), delay)
    }

    /// Creates a debouncer from a signed millisecond delay.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidConfiguration`](pacer_error::PacerError::InvalidConfiguration)
    /// if `delay_ms` is negative.
    pub fn try_from_millis<F>(func: F, delay_ms: i64) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let delay = millis_to_duration("delay_ms", delay_ms)?;
        Ok(Self::new(func, delay))
    }

    /// Creates a debouncer from a [`DebounceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidConfiguration`](pacer_error::PacerError::InvalidConfiguration)
    /// if the configured delay is negative.
    pub fn from_config<F>(func: F, config: &DebounceConfig) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Ok(Self::new(func, config.duration()?))
    }
}

impl<A, S> Debouncer<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    /// Creates a debouncer that schedules its timers on `scheduler`.
    pub fn with_scheduler<F>(func: F, delay: Duration, scheduler: S) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                func: Box::new(func),
                state: Mutex::new(State {
                    pending: None,
                    next_generation: 0,
                }),
            }),
            scheduler,
            delay,
        }
    }

    /// Schedules the function to run with `args` once `delay` passes without
    /// another call.
    ///
    /// Any call still pending is discarded together with its arguments.
    ///
    /// # Panics
    ///
    /// With the tokio runtime, panics if the debouncer was built outside a
    /// Tokio runtime and `invoke` is also called outside one. A debouncer
    /// built inside a runtime can be invoked from any thread.
    pub fn invoke(&self, args: A) {
        let mut state = self.shared.state.lock();

        let generation = state.next_generation;
        state.next_generation = generation.wrapping_add(1);

        // Dropping the previous entry cancels its timer
        if state.pending.take().is_some() {
            trace!(generation, "debounce: pending call superseded");
        }

        let shared = Arc::downgrade(&self.shared);
        let task = self.scheduler.schedule(self.delay, move || {
            Shared::fire(&shared, generation);
        });

        state.pending = Some(Pending {
            args,
            generation,
            task,
        });
        trace!(generation, delay = ?self.delay, "debounce: call scheduled");
    }

    /// Drops the pending call, if any, and releases its timer.
    ///
    /// Returns `true` if a call was pending. The debouncer is back in its
    /// initial state afterwards.
    pub fn cancel(&self) -> bool {
        let cancelled = self.shared.state.lock().pending.take().is_some();
        if cancelled {
            debug!("debounce: pending call cancelled");
        }
        cancelled
    }

    /// Runs the pending call right now instead of waiting for its timer.
    ///
    /// Returns `true` if there was a pending call. The function runs on the
    /// caller's thread, and a panic in it propagates to the caller.
    pub fn flush(&self) -> bool {
        let pending = self.shared.state.lock().pending.take();
        match pending {
            Some(Pending { args, task, .. }) => {
                task.cancel();
                debug!("debounce: pending call flushed");
                (self.shared.func)(args);
                true
            }
            None => false,
        }
    }

    /// Whether a call is waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    /// Quiet period a call waits for before the function runs.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Shared<A> {
    fn fire(shared: &Weak<Self>, generation: u64) {
        // The debouncer was dropped: nothing left to run
        let Some(shared) = shared.upgrade() else {
            return;
        };

        let args = {
            let mut state = shared.state.lock();
            match state.pending.take() {
                Some(pending) if pending.generation == generation => pending.args,
                stale => {
                    state.pending = stale;
                    return;
                }
            }
        };

        trace!(generation, "debounce: firing");
        // Slot is already cleared, so a panic here leaves the debouncer idle
        (shared.func)(args);
    }
}

impl<A, S> Debug for Debouncer<A, S>
where
    A: Send + 'static,
    S: Scheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
