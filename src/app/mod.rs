//! App module - owns the converter state and drives it from the egui loop

mod fetch;
mod flags;
mod views;

use crate::converter::{reduce, ConverterState, Event};
use crate::rates::ErApi;
use crate::settings::Settings;
use crate::theme;
use crate::types::FetchCompletion;
use eframe::egui;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use flags::FlagCache;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) state: ConverterState,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) provider: Arc<ErApi>,
    // Fetch completions sent back from runtime tasks
    pub(crate) completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    pub(crate) completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
    pub(crate) flags: FlagCache,
    pub(crate) initial_fetch_done: bool,
    // Theme currently applied to the egui context
    pub(crate) applied_dark: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let state = ConverterState::new(
            &settings.default_source,
            &settings.default_target,
            settings.completion_order(),
        );
        theme::apply_visuals(&cc.egui_ctx, state.dark);

        let client = reqwest::Client::new();
        let provider = Arc::new(ErApi::new(client.clone(), settings.rates_base_url.clone()));
        let flags = FlagCache::new(client, settings.flags_base_url.clone());
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            applied_dark: state.dark,
            state,
            runtime,
            provider,
            completions_tx,
            completions_rx,
            flags,
            initial_fetch_done: false,
        }
    }

    /// Route an event through the converter's transition function
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Re-apply visuals after the theme flag flips
    pub(crate) fn sync_theme(&mut self, ctx: &egui::Context) {
        if self.applied_dark != self.state.dark {
            debug!(dark = self.state.dark, "Applying theme");
            theme::apply_visuals(ctx, self.state.dark);
            self.applied_dark = self.state.dark;
        }
    }
}
