// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the pacer workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CallLog<T>`
//!
//! Records every invocation of a wrapped function together with the
//! (virtual) time it happened, measured from the log's creation:
//!
//! ```rust
//! use pacer_test_utils::CallLog;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let log = CallLog::new();
//! let record = log.recorder();
//! record("a");
//! assert_eq!(log.args(), vec!["a"]);
//! # }
//! ```
//!
//! ## `ManualScheduler`
//!
//! A [`Scheduler`](pacer_runtime::Scheduler) that never runs anything on its
//! own: tests fire the recorded callbacks explicitly and inspect which timers
//! were cancelled.
//!
//! ## Helpers
//!
//! - `settle()` - yield so that spawned timer tasks get to run
//! - `recv_timeout()` / `assert_no_recv()` - channel assertions under virtual time

pub mod call_log;
pub mod helpers;
pub mod manual_scheduler;

pub use call_log::{Call, CallLog};
pub use manual_scheduler::ManualScheduler;
