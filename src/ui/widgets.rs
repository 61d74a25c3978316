//! Reusable filter widgets.
//!
//! Each widget takes a `&mut` value and reports whether it changed this
//! frame. The panel depends only on that contract (current value in, change
//! notification out), never on a concrete third-party widget type.

use chrono::NaiveDate;

use crate::core::filter::PriceRange;
use crate::ui::theme;
use crate::util::constants;

/// Five-star rating selector reporting 0–5.
///
/// Clicking a star selects that rating; clicking the current rating again
/// clears the filter back to 0.
pub fn star_rating(ui: &mut egui::Ui, value: &mut u8) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for star in 1..=constants::STARS_MAX {
            let filled = star <= *value;
            let icon = if filled { "★" } else { "☆" };
            let color = if filled {
                theme::STAR_ACTIVE
            } else {
                theme::TEXT_DIM
            };
            let response = ui.add(
                egui::Button::new(egui::RichText::new(icon).size(22.0).color(color)).frame(false),
            );
            if response.clicked() {
                *value = if *value == star { 0 } else { star };
                changed = true;
            }
        }
        if *value > 0 {
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("{}+", *value))
                    .color(theme::TEXT_SECONDARY)
                    .small(),
            );
        }
    });
    changed
}

/// Nightly price bounds as a min/max slider pair over the full span.
///
/// The pair invariant `min <= max` is enforced here: dragging one bound
/// past the other pushes the other bound along.
pub fn price_range(ui: &mut egui::Ui, price: &mut PriceRange) -> bool {
    let min_response = ui.add(
        egui::Slider::new(&mut price.min, constants::PRICE_MIN..=constants::PRICE_MAX)
            .prefix("R$ ")
            .text("mín"),
    );
    let max_response = ui.add(
        egui::Slider::new(&mut price.max, constants::PRICE_MIN..=constants::PRICE_MAX)
            .prefix("R$ ")
            .text("máx"),
    );

    if min_response.changed() && price.min > price.max {
        price.max = price.min;
    }
    if max_response.changed() && price.max < price.min {
        price.min = price.max;
    }

    min_response.changed() || max_response.changed()
}

/// An optional calendar-date field: a picker button once a date is chosen,
/// a placeholder button before that, and a clear control.
///
/// `fallback` is the date pre-selected when the field is first opened.
pub fn date_field(
    ui: &mut egui::Ui,
    id: &str,
    date: &mut Option<NaiveDate>,
    fallback: NaiveDate,
) -> bool {
    let mut changed = false;
    // Requested new state, applied after the borrow of `date` ends.
    let mut next: Option<Option<NaiveDate>> = None;

    ui.horizontal(|ui| match date.as_mut() {
        Some(selected) => {
            let response = ui.add(
                egui_extras::DatePickerButton::new(selected)
                    .id_salt(id)
                    .show_icon(true),
            );
            if response.changed() {
                changed = true;
            }
            if ui.small_button("✖").on_hover_text("Limpar data").clicked() {
                next = Some(None);
            }
        }
        None => {
            if ui.button("📅 Selecionar…").clicked() {
                next = Some(Some(fallback));
            }
        }
    });

    if let Some(value) = next {
        *date = value;
        changed = true;
    }
    changed
}
