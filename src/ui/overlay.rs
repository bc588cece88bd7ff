//! Bottom-anchored stack of outcome banners.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use crate::style::{ease_in, spring, FAILURE_RED, SEPARATOR, SUCCESS_GREEN, TOAST_FILL};
use crate::toast::{Toast, ToastStack, FADE_OUT};
use crate::types::OutcomeKind;

const TOAST_WIDTH: f32 = 320.0;
const BOTTOM_PADDING: f32 = 16.0;
/// Distance the newest banner travels while springing in.
const SLIDE_DISTANCE: f32 = 36.0;
/// Seconds for the spring to settle.
const SLIDE_SECS: f32 = 0.6;

/// Render the stack. Returns true while an insertion or removal is still animating.
pub fn show(ctx: &egui::Context, toasts: &ToastStack, now: Instant) -> bool {
    if toasts.is_empty() {
        return false;
    }

    let slide = toasts
        .entries()
        .last()
        .map(|t| now.saturating_duration_since(t.shown_at).as_secs_f32() / SLIDE_SECS)
        .unwrap_or(1.0);
    let animating = slide < 1.0 || !toasts.leaving().is_empty();

    egui::Area::new(Id::new("action_result_overlay"))
        .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -BOTTOM_PADDING))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            for leaving in toasts.leaving() {
                let t = now.saturating_duration_since(leaving.since).as_secs_f32()
                    / FADE_OUT.as_secs_f32();
                banner(ui, &leaving.toast, 1.0 - ease_in(t), 0.0);
            }
            let newest = toasts.entries().len().saturating_sub(1);
            for (i, toast) in toasts.entries().iter().enumerate() {
                if i == newest {
                    banner(ui, toast, slide.clamp(0.0, 1.0), slide_offset(slide));
                } else {
                    banner(ui, toast, 1.0, 0.0);
                }
            }
        });

    animating
}

/// Downward displacement of the newest banner at `progress` (0 at insertion, 1 settled).
fn slide_offset(progress: f32) -> f32 {
    (1.0 - spring(progress)) * SLIDE_DISTANCE
}

/// Outer margin that paints a frame `offset` points lower without changing the space it takes.
fn shifted_margin(offset: f32) -> egui::Margin {
    let dy = offset.round().clamp(-100.0, 100.0) as i8;
    egui::Margin {
        left: 0,
        right: 0,
        top: dy,
        bottom: -dy,
    }
}

fn banner(ui: &mut egui::Ui, toast: &Toast, alpha: f32, offset: f32) {
    let (symbol, color) = match toast.kind {
        OutcomeKind::Success => ("✔", SUCCESS_GREEN),
        OutcomeKind::Failure => ("✖", FAILURE_RED),
    };

    ui.scope(|ui| {
        ui.multiply_opacity(alpha);
        egui::Frame::NONE
            .fill(TOAST_FILL)
            .stroke(egui::Stroke::new(1.0, SEPARATOR))
            .corner_radius(8.0)
            .inner_margin(12.0)
            .outer_margin(shifted_margin(offset))
            .shadow(egui::Shadow {
                offset: [0, 3],
                blur: 6,
                spread: 0,
                color: Color32::from_black_alpha(64),
            })
            .show(ui, |ui| {
                ui.set_width(TOAST_WIDTH - 24.0);
                ui.horizontal_top(|ui| {
                    ui.label(RichText::new(symbol).color(color).size(18.0));
                    ui.add(
                        egui::Label::new(RichText::new(&toast.message).strong())
                            .wrap_mode(egui::TextWrapMode::Wrap),
                    );
                    if let Some(icon) = &toast.icon {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
                                icon.id(),
                                Vec2::splat(24.0),
                            )));
                        });
                    }
                });
            });
    });
    ui.add_space(4.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_banner_starts_below_and_settles() {
        assert_eq!(slide_offset(0.0), SLIDE_DISTANCE);
        assert_eq!(slide_offset(1.0), 0.0);
        assert_eq!(slide_offset(2.5), 0.0);
        assert!(slide_offset(0.1) < SLIDE_DISTANCE);
    }

    #[test]
    fn test_shifted_margin_keeps_height() {
        for offset in [0.0, 12.4, SLIDE_DISTANCE, -7.0] {
            let margin = shifted_margin(offset);
            assert_eq!(margin.top as i32 + margin.bottom as i32, 0);
            assert_eq!(margin.top, offset.round() as i8);
        }
        assert_eq!(shifted_margin(0.0), egui::Margin::ZERO);
    }

    #[test]
    fn test_animating_only_while_newest_slides() {
        let ctx = egui::Context::default();
        let t0 = Instant::now();
        let mut toasts = ToastStack::new();
        for id in ["a", "b"] {
            toasts.post(Toast {
                kind: OutcomeKind::Success,
                id: id.to_string(),
                message: format!("message for {}", id),
                icon: None,
                shown_at: t0,
            });
        }
        let mut animating = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            animating = show(ctx, &toasts, t0 + std::time::Duration::from_secs(1));
        });
        assert!(!animating);

        let mut animating = false;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            animating = show(ctx, &toasts, t0);
        });
        assert!(animating);
    }
}
