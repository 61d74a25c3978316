//! Central results view: reconstructs the applied filters from the current
//! route's query mapping. Shows a home placeholder before any search.

use crate::app::StayScoutApp;
use crate::core::filter::FilterValues;
use crate::ui::theme;
use crate::util::{constants, time};

impl StayScoutApp {
    /// Render the central view for the current route.
    pub fn render_results_view(&mut self, ui: &mut egui::Ui) {
        let Some(request) = self.router.current().cloned() else {
            self.render_home(ui);
            return;
        };

        let values = FilterValues::from_query(&request.query);

        ui.add_space(8.0);
        ui.heading(egui::RichText::new("Resultados da busca").color(theme::ACCENT));
        ui.label(
            egui::RichText::new(request.href())
                .color(theme::text_dim(self.dark_mode))
                .monospace()
                .small(),
        );
        ui.add_space(8.0);
        ui.separator();

        egui::Grid::new("applied_filters")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                let secondary = theme::text_secondary(self.dark_mode);

                ui.label(egui::RichText::new("Destino").color(secondary));
                ui.label(values.going_to.as_deref().unwrap_or("—"));
                ui.end_row();

                ui.label(egui::RichText::new("Viajantes").color(secondary));
                ui.label(values.travelers.as_deref().unwrap_or("—"));
                ui.end_row();

                ui.label(egui::RichText::new("Check in").color(secondary));
                ui.label(display_date(values.check_in.as_deref()));
                ui.end_row();

                ui.label(egui::RichText::new("Check out").color(secondary));
                ui.label(display_date(values.check_out.as_deref()));
                ui.end_row();

                ui.label(egui::RichText::new("Preço").color(secondary));
                let price_text = match &values.price {
                    Some([min, max]) => format!("R$ {min} – R$ {max}"),
                    None => "qualquer preço".to_owned(),
                };
                ui.label(price_text);
                ui.end_row();

                ui.label(egui::RichText::new("Estrelas").color(secondary));
                let stars_text = match values.stars.as_deref() {
                    Some(stars) => format!("{stars}+ estrelas"),
                    None => "—".to_owned(),
                };
                ui.label(stars_text);
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.separator();
        ui.label(
            egui::RichText::new("Nenhuma hospedagem carregada.")
                .color(theme::text_dim(self.dark_mode)),
        );
        if ui.button("✏ Refinar filtros").clicked() {
            self.open_filter_panel();
        }
    }

    /// Home placeholder shown before the first search.
    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(64.0);
            ui.heading(
                egui::RichText::new(format!("🏨 {}", constants::APP_NAME))
                    .color(theme::ACCENT)
                    .size(32.0),
            );
            ui.label(
                egui::RichText::new("Encontre a hospedagem ideal para a sua viagem.")
                    .color(theme::text_secondary(self.dark_mode)),
            );
            ui.add_space(16.0);
            if ui.button("🔍 Abrir filtros").clicked() {
                self.open_filter_panel();
            }
        });
    }
}

/// Render a query date for display, falling back to the raw value when it
/// does not parse.
fn display_date(raw: Option<&str>) -> String {
    match raw {
        Some(value) => match time::parse_query_date(value) {
            Ok(date) => time::format_picker_date(date),
            Err(_) => value.to_owned(),
        },
        None => "—".to_owned(),
    }
}
