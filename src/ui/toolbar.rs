//! Top toolbar: filter-panel toggle, back navigation, theme toggle, About.

use crate::app::StayScoutApp;
use crate::ui::theme;

impl StayScoutApp {
    /// Render the top toolbar within the given `Ui` region.
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            // ── Filter panel toggle ─────────────────────────────────
            let filter_btn = ui
                .selectable_label(self.show_filter_panel, "🔍 Filtros")
                .on_hover_text("Mostrar ou ocultar o painel de filtros");
            if filter_btn.clicked() {
                if self.show_filter_panel {
                    self.show_filter_panel = false;
                } else {
                    self.open_filter_panel();
                }
            }

            ui.separator();

            // ── Back ────────────────────────────────────────────────
            let back_btn = ui
                .add_enabled(self.router.can_go_back(), egui::Button::new("⬅ Voltar"))
                .on_hover_text("Voltar para a busca anterior");
            if back_btn.clicked() {
                self.router.back();
            }

            // ── Right-aligned app title + about + theme toggle ──────
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let about_btn = ui.add(
                    egui::Button::new(egui::RichText::new("ℹ").size(14.0))
                        .min_size(egui::vec2(22.0, 22.0)),
                );
                if about_btn.on_hover_text("Sobre o StayScout").clicked() {
                    self.show_about = true;
                }

                // Theme toggle
                let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                let theme_tooltip = if self.dark_mode {
                    "Mudar para o tema claro"
                } else {
                    "Mudar para o tema escuro"
                };
                let theme_btn = ui.add(
                    egui::Button::new(egui::RichText::new(theme_icon).size(14.0))
                        .min_size(egui::vec2(22.0, 22.0)),
                );
                if theme_btn.on_hover_text(theme_tooltip).clicked() {
                    self.dark_mode = !self.dark_mode;
                    if self.dark_mode {
                        theme::apply_dark_theme(ui.ctx());
                    } else {
                        theme::apply_light_theme(ui.ctx());
                    }
                }

                ui.label(
                    egui::RichText::new("🏨 StayScout")
                        .color(theme::ACCENT)
                        .strong()
                        .size(16.0),
                );
            });
        });
    }
}
