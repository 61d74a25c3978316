//! Extended actions for [`StayScoutApp`]: submission processing, keyboard
//! shortcuts, and the About dialog.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs`
//! to keep file sizes manageable.

use crate::app::StayScoutApp;
use crate::core::router;
use crate::util::constants;

// ── Submission ──────────────────────────────────────────────────────────

impl StayScoutApp {
    /// Complete a pending filter submission.
    ///
    /// Called once per frame. If FILTRAR was pressed since the last pass,
    /// encode the draft, navigate to the results route, dismiss the panel
    /// exactly once, and re-enable the submit control. The button stays
    /// disabled for the whole frame in between, so a second press cannot
    /// slip in while the first submission is in flight.
    pub fn process_submit(&mut self) {
        if !self.submit_requested {
            return;
        }
        self.submit_requested = false;

        router::submit_search(&self.filter_draft, &mut self.router);

        self.show_filter_panel = false;
        self.is_submitting = false;
    }
}

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl StayScoutApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - **Ctrl+F**: Toggle the filter panel
    /// - **Ctrl+Shift+X**: Clear all filters
    /// - **Alt+Left**: Navigate back
    /// - **Escape**: Close the About dialog, then the filter panel
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            // Ctrl+F = toggle filter panel
            if i.modifiers.ctrl && i.key_pressed(egui::Key::F) {
                if self.show_filter_panel {
                    self.show_filter_panel = false;
                } else {
                    self.open_filter_panel();
                }
            }

            // Ctrl+Shift+X = clear all filters
            if i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::X) {
                self.filter_draft.clear();
            }

            // Alt+Left = back
            if i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft) {
                self.router.back();
            }

            // Escape = close dialogs, then the panel
            if i.key_pressed(egui::Key::Escape) {
                if self.show_about {
                    self.show_about = false;
                } else if self.show_filter_panel {
                    self.show_filter_panel = false;
                }
            }
        });
    }
}

// ── About dialog ────────────────────────────────────────────────────────

impl StayScoutApp {
    /// Render the About dialog (if visible).
    pub fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let mut open = true;
        egui::Window::new(format!("Sobre o {}", constants::APP_NAME))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "{} v{}",
                    constants::APP_NAME,
                    constants::APP_VERSION
                ));
                ui.label("Busca de hospedagens com filtros de destino, datas, preço e estrelas.");
            });

        if !open {
            self.show_about = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::StayScoutApp;
    use crate::core::filter::PriceRange;

    #[test]
    fn test_process_submit_navigates_and_dismisses_once() {
        let mut app = StayScoutApp::with_defaults();
        app.filter_draft.going_to = "Rio".into();
        app.is_submitting = true;
        app.submit_requested = true;

        app.process_submit();

        assert_eq!(app.router.depth(), 1);
        assert!(!app.show_filter_panel, "panel should be dismissed");
        assert!(!app.is_submitting, "submit control should be re-enabled");
        assert!(!app.submit_requested);

        // A second pass with no new request does nothing.
        app.process_submit();
        assert_eq!(app.router.depth(), 1);
    }

    #[test]
    fn test_process_submit_with_defaults_navigates_bare_path() {
        let mut app = StayScoutApp::with_defaults();
        app.submit_requested = true;

        app.process_submit();

        let current = app.router.current().expect("navigated");
        assert_eq!(current.href(), "/searchHotel");
    }

    #[test]
    fn test_reopening_panel_seeds_from_applied_filters() {
        let mut app = StayScoutApp::with_defaults();
        app.filter_draft.going_to = "Salvador".into();
        app.filter_draft.price = PriceRange { min: 100, max: 500 };
        app.submit_requested = true;
        app.process_submit();

        // Simulate editing the draft after submission, then reopening.
        app.filter_draft.clear();
        app.open_filter_panel();

        assert!(app.show_filter_panel);
        assert_eq!(app.filter_draft.going_to, "Salvador");
        assert_eq!(app.filter_draft.price, PriceRange { min: 100, max: 500 });
    }
}
