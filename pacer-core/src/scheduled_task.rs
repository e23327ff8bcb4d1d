// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Owned handle to a scheduled deferred callback.

use crate::CancellationToken;

/// Handle to a callback scheduled on a runtime, cancelled automatically on drop.
///
/// A scheduler hands the paired [`CancellationToken`] to the task it spawns
/// and returns the `ScheduledTask` to the caller. Cancelling the handle, or
/// simply dropping it, signals the task to exit without running its callback.
///
/// Exactly one owner holds a `ScheduledTask`; it is deliberately not `Clone`.
///
/// # Example
///
/// ```rust
/// use pacer_core::ScheduledTask;
///
/// let (task, token) = ScheduledTask::new();
/// assert!(!token.is_cancelled());
///
/// drop(task);
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug)]
pub struct ScheduledTask {
    cancel: CancellationToken,
}

impl ScheduledTask {
    /// Create a handle together with the token the scheduled task should observe.
    #[must_use]
    pub fn new() -> (Self, CancellationToken) {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        (Self { cancel }, token)
    }

    /// Manually cancel the scheduled callback.
    ///
    /// This signals the task but doesn't wait for it. If the callback is
    /// already running it is not interrupted.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_observed_by_token() {
        let (task, token) = ScheduledTask::new();
        assert!(!task.is_cancelled());

        task.cancel();

        assert!(task.is_cancelled());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_tokens_of_separate_tasks_are_independent() {
        let (first, first_token) = ScheduledTask::new();
        let (_second, second_token) = ScheduledTask::new();

        drop(first);

        assert!(first_token.is_cancelled());
        assert!(!second_token.is_cancelled());
    }
}
