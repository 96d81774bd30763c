//! Main application module

mod keyboard;
mod styles;

use eframe::egui;

use crate::canvas::CanvasPanel;
use crate::state::{AppState, Overrides};
use crate::ui::{controls, status_bar};

/// Main application
pub struct KochApp {
    state: AppState,
    canvas: CanvasPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl KochApp {
    pub fn new(cc: &eframe::CreationContext<'_>, overrides: Overrides) -> Self {
        let state = AppState::new(overrides);

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            canvas: CanvasPanel::new(),
            last_font_size,
        }
    }
}

impl eframe::App for KochApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Persist the spec so the next launch restores it
        if self.state.settings.snowflake != *self.state.snowflake.spec() {
            self.state.settings.snowflake = *self.state.snowflake.spec();
            self.state.settings.save();
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Controls ─────────────────────────────────────────
        egui::TopBottomPanel::top("controls")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                controls::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Central panel: snowflake canvas ──────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui, &self.state);
            });
    }
}
