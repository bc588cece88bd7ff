//! AppKit-inspired light theme and the toast palette and motion curves.

use eframe::{egui, epaint};
use epaint::Color32;

pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(52, 199, 89);
pub const FAILURE_RED: Color32 = Color32::from_rgb(255, 59, 48);
pub const SEPARATOR: Color32 = Color32::from_rgb(209, 209, 214);
pub const TOAST_FILL: Color32 = Color32::from_rgba_premultiplied(246, 246, 246, 235);

/// Apply a macOS-like light theme to the current egui Context.
pub fn set_appkit_style(ctx: &egui::Context) {
    use egui::Visuals;

    let mut visuals = Visuals::light();
    visuals.window_fill = Color32::from_rgb(236, 236, 236);
    visuals.panel_fill = Color32::from_rgb(255, 255, 255);
    visuals.widgets.active.bg_fill = Color32::from_rgb(0, 122, 255);
    visuals.widgets.active.fg_stroke = epaint::Stroke::new(1.0, Color32::WHITE);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(245, 245, 247);
    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(255, 255, 255);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.menu_margin = egui::Margin::same(6);
    });
}

/// Damped spring from 0 to 1 with a small overshoot; `t` is normalized time.
pub fn spring(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return 1.0;
    }
    let damping = 6.0;
    let frequency = 2.5 * std::f32::consts::TAU;
    1.0 - (-damping * t).exp() * (frequency * t).cos()
}

/// Quadratic ease-in.
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}
