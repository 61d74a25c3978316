//! Left-side filter panel: destination, travelers, date range, price range,
//! star rating, and the submit/clear controls.

use crate::app::StayScoutApp;
use crate::ui::{theme, widgets};
use crate::util::time;

impl StayScoutApp {
    /// Render the filter panel within the given `Ui` region.
    ///
    /// All inputs modify `self.filter_draft` on every change. Submission is
    /// deferred: pressing **FILTRAR** records a request and disables the
    /// button; the next update pass navigates and dismisses the panel.
    pub fn render_filter_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading(egui::RichText::new("Filtros").color(theme::ACCENT));
        ui.separator();

        // ── Destination ─────────────────────────────────────────────
        ui.label("Indo para");
        ui.add(
            egui::TextEdit::singleline(&mut self.filter_draft.going_to)
                .hint_text("Ex: Salvador")
                .desired_width(f32::INFINITY),
        )
        .on_hover_text("Busca por destino: cidade, bairro ou hotel.");
        ui.add_space(4.0);

        // ── Travelers ───────────────────────────────────────────────
        ui.label("Viajantes");
        ui.add(
            egui::TextEdit::singleline(&mut self.filter_draft.travelers)
                .hint_text("Ex: 1")
                .desired_width(120.0),
        )
        .on_hover_text("Quantidade de viajantes.");
        ui.add_space(4.0);

        // ── Date range ──────────────────────────────────────────────
        let today = time::today();
        let mut dates_changed = false;

        ui.label("Check in");
        dates_changed |= widgets::date_field(ui, "check_in", &mut self.filter_draft.check_in, today);

        ui.label("Check out");
        let checkout_fallback = self
            .filter_draft
            .check_in
            .map(time::min_check_out)
            .unwrap_or(today);
        dates_changed |= widgets::date_field(
            ui,
            "check_out",
            &mut self.filter_draft.check_out,
            checkout_fallback,
        );

        if dates_changed {
            self.filter_draft.normalize_dates(today);
        }

        // Range summary, e.g. "12 ago 2026 – 15 ago 2026 · 3 noites"
        if let (Some(check_in), Some(check_out)) =
            (self.filter_draft.check_in, self.filter_draft.check_out)
        {
            let nights = time::nights_between(check_in, check_out);
            ui.label(
                egui::RichText::new(format!(
                    "{} – {} · {} noite(s)",
                    time::format_picker_date(check_in),
                    time::format_picker_date(check_out),
                    nights,
                ))
                .color(theme::TEXT_SECONDARY)
                .small(),
            );
        }
        ui.add_space(4.0);

        // ── Price range ─────────────────────────────────────────────
        ui.label("Preço");
        widgets::price_range(ui, &mut self.filter_draft.price);
        ui.add_space(4.0);

        // ── Star rating ─────────────────────────────────────────────
        ui.label("Estrelas");
        widgets::star_rating(ui, &mut self.filter_draft.stars);

        ui.add_space(8.0);
        ui.separator();

        // ── Submit / Clear ──────────────────────────────────────────
        ui.horizontal(|ui| {
            let submit = ui.add_enabled(
                !self.is_submitting,
                egui::Button::new(egui::RichText::new("FILTRAR").color(theme::ACCENT).strong()),
            );
            if submit.clicked() {
                self.is_submitting = true;
                self.submit_requested = true;
            }
            if ui.button("Limpar").clicked() {
                self.filter_draft.clear();
            }
        });

        // ── Active filter indicator ─────────────────────────────────
        if !self.filter_draft.is_default() {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("🟢 Filtros ativos")
                    .color(theme::ACCENT)
                    .small(),
            );
        }
    }
}
