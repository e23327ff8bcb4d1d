// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use pacer_core::Cancelled;
use pin_project::pin_project;

/// Future driving one scheduled callback: sleep, then run unless cancelled.
///
/// Cancellation is checked before the sleep on every poll, so a cancelled
/// call never runs its callback even if both became ready together.
#[pin_project]
pub(crate) struct ScheduledCall<S, F> {
    #[pin]
    sleep: S,
    cancelled: Cancelled,
    callback: Option<F>,
}

impl<S, F> ScheduledCall<S, F> {
    pub(crate) fn new(sleep: S, cancelled: Cancelled, callback: F) -> Self {
        Self {
            sleep,
            cancelled,
            callback: Some(callback),
        }
    }
}

impl<S, F> Future for ScheduledCall<S, F>
where
    S: Future<Output = ()>,
    F: FnOnce(),
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if Pin::new(this.cancelled).poll(cx).is_ready() {
            this.callback.take();
            return Poll::Ready(());
        }

        match this.sleep.poll(cx) {
            Poll::Ready(()) => {
                if let Some(callback) = this.callback.take() {
                    callback();
                }
                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
