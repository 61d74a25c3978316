//! Top-level application state.
//!
//! `StayScoutApp` owns all UI state: the filter draft, the submission
//! flags, the router, and the theme preference. Rendering is delegated to
//! panel sub-modules in `ui/`.

use crate::core::filter::{FilterDraft, FilterValues};
use crate::core::router::Router;

/// Central application state for StayScout.
///
/// All fields are accessible to the UI rendering methods (defined in
/// `ui/*.rs` via `impl StayScoutApp` blocks).
pub struct StayScoutApp {
    // ── Filter panel ────────────────────────────────────────────
    /// The criteria currently being edited in the panel.
    pub filter_draft: FilterDraft,
    /// Whether the filter side panel is open.
    pub show_filter_panel: bool,

    // ── Submission ──────────────────────────────────────────────
    /// Set when FILTRAR is pressed; cleared only after the
    /// navigate-and-dismiss sequence completes. The submit button
    /// renders disabled while set.
    pub is_submitting: bool,
    /// Flag: complete the pending submission on the next update pass.
    pub submit_requested: bool,

    // ── Navigation ──────────────────────────────────────────────
    /// In-app navigation history; the results view reads its current
    /// location from here.
    pub router: Router,

    // ── Dialogs ─────────────────────────────────────────────────
    /// Whether the About dialog is open.
    pub show_about: bool,

    // ── Theme ───────────────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl StayScoutApp {
    /// Create a new `StayScoutApp` and apply the custom theme.
    ///
    /// Restores persisted UI preferences. Filter state is deliberately
    /// never persisted — a fresh session starts with a default draft and
    /// only a navigation carries filters forward.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        crate::ui::theme::apply_theme(&cc.egui_ctx);

        let mut app = Self::with_defaults();

        if let Some(storage) = cc.storage {
            if let Some(dark) = eframe::get_value::<bool>(storage, "dark_mode") {
                app.dark_mode = dark;
                if dark {
                    crate::ui::theme::apply_dark_theme(&cc.egui_ctx);
                } else {
                    crate::ui::theme::apply_light_theme(&cc.egui_ctx);
                }
            }
        }

        app
    }

    /// Fresh state: default draft, panel open, home route.
    pub fn with_defaults() -> Self {
        Self {
            filter_draft: FilterDraft::default(),
            show_filter_panel: true,

            is_submitting: false,
            submit_requested: false,

            router: Router::new(),

            show_about: false,

            dark_mode: true,
        }
    }

    /// Open the filter panel, seeding the draft from the filters applied
    /// by the current route (if any) so the panel reflects what the
    /// results view is showing.
    pub fn open_filter_panel(&mut self) {
        if let Some(request) = self.router.current() {
            let values = FilterValues::from_query(&request.query);
            self.filter_draft = FilterDraft::from_values(&values);
        }
        self.show_filter_panel = true;
    }
}
