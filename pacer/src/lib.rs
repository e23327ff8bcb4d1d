// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for plain functions.
//!
//! Both wrappers take a function and a duration and hand back an object whose
//! `invoke` stands in for the function:
//!
//! - **[`Debouncer`]** - runs the function once calls have been quiet for
//!   `delay`, with the arguments of the most recent call (trailing edge).
//! - **[`Throttler`]** - runs the function immediately, then drops every call
//!   for `interval` (leading edge only).
//!
//! Timers come from a [`Scheduler`]; by default
//! [`DefaultScheduler`] on the runtime selected through features:
//!
//! - `runtime-tokio` (default)
//! - `runtime-smol`
//!
//! Functions taking several arguments are wrapped with a tuple as the
//! argument type. A function that needs a receiver either captures it or
//! uses the `with_receiver` constructors.
//!
//! # Example
//!
//! ```rust
//! use pacer::{Debouncer, Throttler};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let save = Debouncer::new(
//!     |(path, bytes): (String, usize)| println!("saving {bytes} bytes to {path}"),
//!     Duration::from_millis(300),
//! );
//! save.invoke(("notes.md".to_string(), 42));
//!
//! let report = Throttler::new(|progress: u8| println!("{progress}%"), Duration::from_secs(1));
//! report.invoke(10);
//!
//! // Pending calls can be dropped explicitly; dropping the wrapper does the same
//! assert!(save.cancel());
//! # }
//! ```

#![allow(clippy::multiple_crate_versions)]

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("pacer requires a runtime: enable `runtime-tokio` or `runtime-smol`");

#[macro_use]
mod logging;

pub mod config;
mod debounce;
mod throttle;

pub use config::{DebounceConfig, ThrottleConfig};
pub use debounce::Debouncer;
pub use pacer_core::ScheduledTask;
pub use pacer_error::{PacerError, Result};
pub use pacer_runtime::{DefaultRuntime, DefaultScheduler, RuntimeScheduler, Scheduler};
pub use throttle::Throttler;
