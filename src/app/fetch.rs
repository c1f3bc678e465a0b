//! Rate fetching: issue requests on the runtime, feed completions back

use super::App;
use crate::converter::Event;
use crate::rates::{run_fetch, RateProvider};
use crate::types::{FetchCompletion, FetchRequest};
use eframe::egui;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Spawn one fetch on `handle`. Exactly one completion reaches `tx`, even if
/// the provider task panics; `on_done` runs after it is sent.
pub(crate) fn spawn_fetch<P, F>(
    handle: &tokio::runtime::Handle,
    provider: Arc<P>,
    request: FetchRequest,
    tx: mpsc::UnboundedSender<FetchCompletion>,
    on_done: F,
) where
    P: RateProvider + Send + Sync + 'static,
    F: FnOnce() + Send + 'static,
{
    let fallback = request.clone();
    handle.spawn(async move {
        let task = tokio::spawn(async move { run_fetch(provider.as_ref(), request).await });
        let completion = task.await.unwrap_or_else(|e| {
            error!(seq = fallback.seq, error = %e, "Rate fetch task aborted");
            FetchCompletion {
                request: fallback,
                quote: None,
                rate_missing: false,
            }
        });
        // Receiver is gone only when the window has closed
        tx.send(completion).ok();
        on_done();
    });
}

impl App {
    /// Start a fetch for the current selection and amount
    pub fn fetch_rate(&mut self, ctx: &egui::Context) {
        self.dispatch(Event::FetchStarted);
        let request = self.state.pending_request();

        info!(
            seq = request.seq,
            source = %request.source,
            target = %request.target,
            "Fetching exchange rate"
        );

        let ctx = ctx.clone();
        spawn_fetch(
            self.runtime.handle(),
            self.provider.clone(),
            request,
            self.completions_tx.clone(),
            move || ctx.request_repaint(),
        );
    }

    /// Apply completions that arrived since the last frame, in arrival order
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.dispatch(Event::FetchCompleted(completion));
        }
    }
}
