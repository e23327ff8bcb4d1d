// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// One recorded invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call<T> {
    pub args: T,
    /// Time since the owning [`CallLog`] was created.
    pub at: Duration,
}

/// Shared record of the invocations of a wrapped function.
///
/// Timestamps come from `tokio::time::Instant`, so they follow the paused
/// clock in tests that call `tokio::time::pause()`.
#[derive(Debug)]
pub struct CallLog<T> {
    calls: Arc<Mutex<Vec<Call<T>>>>,
    origin: Instant,
}

impl<T> CallLog<T>
where
    T: Clone + Send + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            origin: Instant::now(),
        }
    }

    /// Returns a function that appends its argument to this log.
    pub fn recorder(&self) -> impl Fn(T) + Send + Sync + 'static {
        let calls = self.calls.clone();
        let origin = self.origin;
        move |args| {
            calls.lock().push(Call {
                args,
                at: origin.elapsed(),
            });
        }
    }

    /// Returns a function that records its argument and panics when the
    /// argument equals `trigger`.
    pub fn panicking_recorder(&self, trigger: T) -> impl Fn(T) + Send + Sync + 'static
    where
        T: PartialEq + Sync,
    {
        let record = self.recorder();
        move |args| {
            let explode = args == trigger;
            record(args);
            if explode {
                panic!("wrapped function failed");
            }
        }
    }

    pub fn calls(&self) -> Vec<Call<T>> {
        self.calls.lock().clone()
    }

    pub fn args(&self) -> Vec<T> {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            origin: self.origin,
        }
    }
}

impl<T> Default for CallLog<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
