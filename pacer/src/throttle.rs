// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttling of function calls.
//!
//! A [`Throttler`] runs its function immediately on the first call, then
//! ignores every call for `interval`. After the interval expires the next
//! call fires immediately again. Suppressed calls are dropped outright: they
//! are not queued and there is no trailing call.
//!
//! State machine:
//! - `Ready` + `invoke` -> `CoolingDown` (cooldown timer started, then the function runs)
//! - `CoolingDown` + `invoke` -> `CoolingDown` (no-op)
//! - `CoolingDown` + timer fires -> `Ready`
//!
//! # Example
//!
//! ```rust
//! use pacer::Throttler;
//! use std::sync::mpsc;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, rx) = mpsc::channel();
//! let on_scroll = Throttler::new(move |offset: u32| tx.send(offset).unwrap(), Duration::from_secs(1));
//!
//! assert!(on_scroll.invoke(10));
//! assert!(!on_scroll.invoke(20));
//! assert!(!on_scroll.invoke(30));
//!
//! assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![10]);
//! # }
//! ```

use crate::config::{millis_to_duration, ThrottleConfig};
use core::fmt::{self, Debug};
use core::time::Duration;
use pacer_core::ScheduledTask;
use pacer_error::Result;
use pacer_runtime::{DefaultScheduler, Scheduler};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

type Callback<A> = Box<dyn Fn(A) + Send + Sync>;

/// Wraps a function so it runs at most once per `interval`, on the leading edge.
///
/// The wrapper is `Send + Sync`; share it behind an `Arc` to invoke it from
/// several tasks. Dropping it releases the cooldown timer.
pub struct Throttler<A, S = DefaultScheduler>
where
    A: 'static,
    S: Scheduler,
{
    func: Callback<A>,
    state: Arc<Mutex<State>>,
    scheduler: S,
    interval: Duration,
}

#[derive(Debug, Default)]
struct State {
    cooldown: Option<Cooldown>,
    next_generation: u64,
}

#[derive(Debug)]
struct Cooldown {
    generation: u64,
    _timer: ScheduledTask,
}

impl<A> Throttler<A>
where
    A: 'static,
{
    /// Creates a throttler on the default runtime.
    ///
    /// A zero `interval` disables throttling: every call fires.
    pub fn new<F>(func: F, interval: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_scheduler(func, interval, DefaultScheduler::default())
    }

    /// Creates a throttler whose function receives `receiver` on every call.
    pub fn with_receiver<C, F>(receiver: C, interval: Duration, func: F) -> Self
    where
        C: Send + Sync + 'static,
        F: Fn(&C, A) + Send + Sync + 'static,
    {
        Self::new(move |args| func(&receiver, args), interval)
    }

    /// Creates a throttler from a signed millisecond interval.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidConfiguration`](pacer_error::PacerError::InvalidConfiguration)
    /// if `interval_ms` is negative.
    pub fn try_from_millis<F>(func: F, interval_ms: i64) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let interval = millis_to_duration("interval_ms", interval_ms)?;
        Ok(Self::new(func, interval))
    }

    /// Creates a throttler from a [`ThrottleConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidConfiguration`](pacer_error::PacerError::InvalidConfiguration)
    /// if the configured interval is negative.
    pub fn from_config<F>(func: F, config: &ThrottleConfig) -> Result<Self>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Ok(Self::new(func, config.duration()?))
    }
}

impl<A, S> Throttler<A, S>
where
    A: 'static,
    S: Scheduler,
{
    /// Creates a throttler that schedules its cooldown timers on `scheduler`.
    pub fn with_scheduler<F>(func: F, interval: Duration, scheduler: S) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
            state: Arc::new(Mutex::new(State::default())),
            scheduler,
            interval,
        }
    }

    /// Runs the function with `args` unless a cooldown is active.
    ///
    /// Returns `true` if the function ran. The cooldown is armed before the
    /// function is called, so a panic in the function still starts it; the
    /// panic itself propagates to the caller.
    ///
    /// # Panics
    ///
    /// With the tokio runtime, panics if the throttler was built outside a
    /// Tokio runtime and `invoke` is also called outside one. A throttler
    /// built inside a runtime can be invoked from any thread.
    pub fn invoke(&self, args: A) -> bool {
        if !self.interval.is_zero() && !self.try_start_cooldown() {
            trace!("throttle: call suppressed during cooldown");
            return false;
        }

        trace!("throttle: firing");
        (self.func)(args);
        true
    }

    /// Ends an active cooldown early and releases its timer.
    ///
    /// Returns `true` if the throttler was cooling down. The next call fires
    /// immediately.
    pub fn cancel(&self) -> bool {
        let cancelled = self.state.lock().cooldown.take().is_some();
        if cancelled {
            debug!("throttle: cooldown cancelled");
        }
        cancelled
    }

    /// Whether calls are currently being suppressed.
    pub fn is_cooling_down(&self) -> bool {
        self.state.lock().cooldown.is_some()
    }

    /// Length of the cooldown started by each call that fires.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn try_start_cooldown(&self) -> bool {
        let mut state = self.state.lock();
        if state.cooldown.is_some() {
            return false;
        }

        let generation = state.next_generation;
        state.next_generation = generation.wrapping_add(1);

        let weak = Arc::downgrade(&self.state);
        let timer = self.scheduler.schedule(self.interval, move || {
            expire(&weak, generation);
        });

        state.cooldown = Some(Cooldown {
            generation,
            _timer: timer,
        });
        trace!(generation, interval = ?self.interval, "throttle: cooldown started");
        true
    }
}

fn expire(state: &Weak<Mutex<State>>, generation: u64) {
    let Some(state) = state.upgrade() else {
        return;
    };

    let mut state = state.lock();
    if state
        .cooldown
        .as_ref()
        .is_some_and(|cooldown| cooldown.generation == generation)
    {
        state.cooldown = None;
        debug!(generation, "throttle: cooldown expired");
    }
}

impl<A, S> Debug for Throttler<A, S>
where
    A: 'static,
    S: Scheduler,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttler")
            .field("interval", &self.interval)
            .field("cooling_down", &self.is_cooling_down())
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
