// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod scheduled_task;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::scheduled_task::ScheduledTask;
