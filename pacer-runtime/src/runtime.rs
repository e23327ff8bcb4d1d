// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use core::fmt::Debug;
use core::future::Future;

/// Handle to an executor that timer tasks are spawned on.
///
/// A value is captured once, when a scheduler is built, so `spawn` works
/// from any thread afterwards, including threads the runtime does not own.
pub trait Runtime: Clone + Default + Send + Sync + Debug + 'static {
    type Timer: Timer + Default;

    /// Spawns a detached task on the runtime.
    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
