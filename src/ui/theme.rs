//! Colour palette and style helpers for StayScout's themes.
//!
//! The accent green comes from the product's brand palette; star gold is
//! reserved for the rating widget.

use egui::Color32;

// ── Background colours ──────────────────────────────────────────────────

/// Main window background (dark theme).
pub const BG_DARK: Color32 = Color32::from_rgb(24, 30, 28);

/// Main window background (light theme).
pub const BG_LIGHT: Color32 = Color32::from_rgb(250, 250, 252);

/// Panel / sidebar background.
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 38, 35);

/// Currently selected / highlighted element.
pub const BG_SELECTED: Color32 = Color32::from_rgb(34, 66, 56);

// ── Text colours ────────────────────────────────────────────────────────

/// Primary text colour.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(208, 214, 210);

/// Secondary / muted text.
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(138, 150, 144);

/// Dim text (hints, placeholders).
pub const TEXT_DIM: Color32 = Color32::from_rgb(96, 108, 102);

// ── Accent colours ──────────────────────────────────────────────────────

/// Primary accent — the brand green.
pub const ACCENT: Color32 = Color32::from_rgb(0, 181, 135);

/// Dimmer accent for secondary highlights.
pub const ACCENT_DIM: Color32 = Color32::from_rgb(0, 140, 105);

/// Filled stars in the rating widget.
pub const STAR_ACTIVE: Color32 = Color32::from_rgb(255, 196, 37);

// ── Helpers ─────────────────────────────────────────────────────────────

/// Secondary text colour appropriate for the active theme.
pub fn text_secondary(dark_mode: bool) -> Color32 {
    if dark_mode {
        TEXT_SECONDARY
    } else {
        Color32::from_rgb(96, 104, 100)
    }
}

/// Dim text colour appropriate for the active theme.
pub fn text_dim(dark_mode: bool) -> Color32 {
    if dark_mode {
        TEXT_DIM
    } else {
        Color32::from_rgb(150, 158, 154)
    }
}

/// Apply the StayScout dark theme to the given egui context.
///
/// Should be called once during initialisation (in `App::new`).
pub fn apply_theme(ctx: &egui::Context) {
    apply_dark_theme(ctx);
}

/// Apply the StayScout dark theme.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    // Background tones
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = Color32::from_rgb(27, 34, 31);

    // Override all text to our primary colour
    visuals.override_text_color = Some(TEXT_PRIMARY);

    // Widget resting state
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(40, 50, 46);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(36, 45, 41);

    // Widget hover state
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(48, 62, 56);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    // Widget active state
    visuals.widgets.active.bg_fill = Color32::from_rgb(56, 74, 66);

    // Non-interactive backgrounds
    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    // Selection
    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    // Window appearance
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(45, 56, 51));

    ctx.set_visuals(visuals);
}

/// Apply the StayScout light theme.
pub fn apply_light_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    // Background tones — light palette
    visuals.panel_fill = Color32::from_rgb(244, 247, 245);
    visuals.window_fill = BG_LIGHT;
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(236, 241, 238);

    // Text
    visuals.override_text_color = Some(Color32::from_rgb(38, 46, 42));

    // Widget resting state
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(222, 230, 226);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(78, 92, 86));
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(228, 235, 231);

    // Widget hover state
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(205, 218, 212);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(38, 46, 42));

    // Widget active state
    visuals.widgets.active.bg_fill = Color32::from_rgb(188, 205, 197);

    // Non-interactive backgrounds
    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(240, 244, 242);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Color32::from_rgb(96, 110, 103));

    // Selection
    visuals.selection.bg_fill = Color32::from_rgb(178, 226, 210);
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT_DIM);

    // Window appearance
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(198, 206, 202));

    ctx.set_visuals(visuals);
}
