// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Debug};
use core::time::Duration;
use pacer_core::{CancellationToken, ScheduledTask};
use pacer_runtime::Scheduler;
use parking_lot::Mutex;
use std::sync::Arc;

type Callback = Box<dyn FnOnce() + Send>;

struct Entry {
    delay: Duration,
    token: CancellationToken,
    callback: Option<Callback>,
}

/// Scheduler that records callbacks and only runs them when told to.
///
/// Clones share the same queue, so a test can keep one handle while the
/// wrapper under test owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of `schedule` calls so far.
    pub fn scheduled_count(&self) -> usize {
        self.entries.lock().len()
    }

    /// Callbacks that have neither run nor been cancelled.
    pub fn live_count(&self) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.callback.is_some() && !entry.token.is_cancelled())
            .count()
    }

    /// Number of scheduled callbacks whose handle was cancelled or dropped.
    pub fn cancelled_count(&self) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.token.is_cancelled())
            .count()
    }

    /// Delay requested by the `index`-th `schedule` call.
    pub fn delay_of(&self, index: usize) -> Option<Duration> {
        self.entries.lock().get(index).map(|entry| entry.delay)
    }

    /// Runs the oldest live callback, as if its timer had fired.
    ///
    /// Returns `false` if there was nothing live to run.
    pub fn run_next(&self) -> bool {
        let callback = {
            let mut entries = self.entries.lock();
            entries
                .iter_mut()
                .find(|entry| entry.callback.is_some() && !entry.token.is_cancelled())
                .and_then(|entry| entry.callback.take())
        };

        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Runs every live callback, including ones scheduled while running.
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }

    /// Runs the `index`-th callback even if it was cancelled.
    ///
    /// Simulates a timer that fired on another thread just before its
    /// handle was cancelled.
    pub fn force_run(&self, index: usize) -> bool {
        let callback = self
            .entries
            .lock()
            .get_mut(index)
            .and_then(|entry| entry.callback.take());

        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule<F>(&self, delay: Duration, callback: F) -> ScheduledTask
    where
        F: FnOnce() + Send + 'static,
    {
        let (task, token) = ScheduledTask::new();
        self.entries.lock().push(Entry {
            delay,
            token,
            callback: Some(Box::new(callback)),
        });
        task
    }
}

impl Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("scheduled", &self.scheduled_count())
            .field("live", &self.live_count())
            .finish()
    }
}
