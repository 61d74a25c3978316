//! Frame-by-frame update loop.
//!
//! Contains the [`eframe::App`] implementation for `StayScoutApp`: pending
//! submission processing, keyboard shortcuts, and the panel layout.

use crate::app::StayScoutApp;
use crate::util::constants;

impl eframe::App for StayScoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Complete a pending filter submission before rendering, so the
        //    panel disappears and the results view shows the new route in
        //    the same frame.
        self.process_submit();

        // 2. Handle keyboard shortcuts
        self.handle_keyboard_shortcuts(ctx);

        // ── Top toolbar ─────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .exact_height(38.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_toolbar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(28.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Left filter panel ───────────────────────────────────────
        egui::SidePanel::left("filter_panel")
            .resizable(true)
            .default_width(constants::FILTER_PANEL_WIDTH)
            .min_width(220.0)
            .max_width(400.0)
            .show_animated(ctx, self.show_filter_panel, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_filter_panel(ui);
                });
            });

        // ── Central results view ────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_results_view(ui);
        });

        // ── Floating popups ─────────────────────────────────────────
        self.render_about_dialog(ctx);
    }

    /// Return the clear colour used before each frame render.
    ///
    /// Matches the themed background so the GPU clear is the same
    /// colour as the app background, eliminating any flash.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        if self.dark_mode {
            crate::ui::theme::BG_DARK.to_normalized_gamma_f32()
        } else {
            crate::ui::theme::BG_LIGHT.to_normalized_gamma_f32()
        }
    }

    /// Persist user preferences to eframe storage on shutdown.
    ///
    /// Only the theme choice is saved. Filter state never persists —
    /// nothing survives a restart except what a navigation encodes.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "dark_mode", &self.dark_mode);
    }
}
