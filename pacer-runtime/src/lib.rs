// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for pacer.
//!
//! Debouncing and throttling need exactly two things from their host: "run
//! this callback after N milliseconds" and "cancel a previously scheduled
//! callback". The [`Scheduler`](scheduler::Scheduler) trait expresses that
//! contract; [`RuntimeScheduler`](scheduler::RuntimeScheduler) implements it
//! for any [`Runtime`](runtime::Runtime) by pairing the runtime's spawn with
//! its [`Timer`](timer::Timer).
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - [`TokioRuntime`](impls::tokio::TokioRuntime)
//! - `runtime-smol` - [`SmolRuntime`](impls::smol::SmolRuntime)

pub mod impls;
pub mod runtime;
mod scheduled_call;
pub mod scheduler;
pub mod timer;

pub use scheduler::{RuntimeScheduler, Scheduler};

#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = impls::tokio::TokioRuntime;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = impls::smol::SmolRuntime;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub type DefaultScheduler = RuntimeScheduler<DefaultRuntime>;
