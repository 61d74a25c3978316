//! Bottom status bar: active-filter count and current location.

use crate::app::StayScoutApp;
use crate::ui::theme;

impl StayScoutApp {
    /// Render the status bar at the bottom of the window.
    pub fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            // ── Active filter count ─────────────────────────────────
            let active = self.filter_draft.active_filter_count();
            let count_text = if active == 0 {
                "Sem filtros ativos".to_owned()
            } else {
                format!("{active} filtro(s) ativo(s)")
            };
            ui.label(egui::RichText::new(count_text).color(theme::text_secondary(self.dark_mode)));

            ui.separator();

            // ── Current location ────────────────────────────────────
            let location = match self.router.current() {
                Some(request) => request.href(),
                None => "Início".to_owned(),
            };
            ui.label(
                egui::RichText::new(location)
                    .color(theme::text_dim(self.dark_mode))
                    .monospace(),
            );

            // ── Submission indicator ────────────────────────────────
            if self.is_submitting {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new("Aplicando filtros…")
                            .color(theme::text_secondary(self.dark_mode)),
                    );
                });
            }
        });
    }
}
