// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use core::future::Future;
#[cfg(feature = "runtime-tokio")]
use std::time::Duration;
#[cfg(feature = "runtime-tokio")]
use tokio::runtime::Handle;

#[cfg(feature = "runtime-tokio")]
use crate::{runtime::Runtime, timer::Timer};

/// Tokio executor handle.
///
/// `default()` captures the runtime the caller is running on, if any. A
/// value built outside any runtime falls back to the caller's context at
/// spawn time.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug)]
pub struct TokioRuntime {
    handle: Option<Handle>,
}

#[cfg(feature = "runtime-tokio")]
impl TokioRuntime {
    /// Spawns on the runtime behind `handle`, whichever thread calls `spawn`.
    #[must_use]
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

#[cfg(feature = "runtime-tokio")]
impl Default for TokioRuntime {
    fn default() -> Self {
        Self {
            handle: Handle::try_current().ok(),
        }
    }
}

#[cfg(feature = "runtime-tokio")]
impl Runtime for TokioRuntime {
    type Timer = TokioTimer;

    /// # Panics
    ///
    /// Panics if no handle was captured and the caller is outside the
    /// context of a Tokio runtime.
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match &self.handle {
            Some(handle) => {
                handle.spawn(future);
            }
            None => {
                tokio::spawn(future);
            }
        }
    }
}

#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }
}
