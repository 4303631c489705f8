//! Lifetime guard for in-flight work started by a view. Requests themselves are
//! never aborted mid-flight; a result that arrives after the owning view was torn
//! down is simply dropped so it cannot write into disposed state.

use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token cancelled when the current reactive owner (view) is cleaned up.
    #[cfg(target_arch = "wasm32")]
    pub fn for_current_view() -> Self {
        let token = Self::new();
        let on_drop = token.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        token
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Awaits `future` and returns its output only if the token is still live.
    pub async fn guard<F: Future>(&self, future: F) -> Option<F::Output> {
        let output = future.await;
        if self.is_cancelled() {
            tracing::debug!("dropping result for a view that is gone");
            None
        } else {
            Some(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CancelToken;
    use futures::{channel::oneshot, executor::block_on, join};

    #[test]
    fn live_token_passes_results_through() {
        let token = CancelToken::new();
        assert_eq!(block_on(token.guard(async { 7 })), Some(7));
    }

    #[test]
    fn late_result_after_teardown_is_dropped() {
        let token = CancelToken::new();
        let (sender, receiver) = oneshot::channel::<u32>();

        let teardown = async {
            token.cancel();
            let _ = sender.send(42);
        };
        let (result, ()) = block_on(async { join!(token.guard(receiver), teardown) });

        assert!(result.is_none());
        assert!(token.is_cancelled());
    }

    #[test]
    fn clones_share_cancellation() {
        let token = CancelToken::new();
        let view_side = token.clone();
        token.cancel();
        assert!(view_side.is_cancelled());
    }
}
