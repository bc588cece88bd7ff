use std::collections::HashSet;

use crate::permissions::{self, Permission};
use crate::types::{RunningApp, StateColors};
use eframe::emath::Vec2;
use eframe::epaint::Shape;
use egui::{load::SizedTexture, RichText, TextureHandle, Ui};

use super::ResetKey;

/// Every row is exactly this tall; the list relies on it to lay out only visible rows.
pub const ROW_HEIGHT: f32 = 44.0;
const ICON_SIZE: f32 = 32.0;

/// One list row: icon, name, and the reset menu on the right.
/// Returns the permission the user picked this frame, if any.
pub fn app_row(
    ui: &mut Ui,
    app: &RunningApp,
    icon: Option<&TextureHandle>,
    in_flight: &HashSet<ResetKey>,
    colors: &StateColors,
) -> Option<Permission> {
    // background goes under the row, so reserve its slot before painting content
    let background = ui.painter().add(Shape::Noop);
    let mut picked = None;

    let inner = ui.horizontal(|ui| {
        ui.set_min_size(Vec2::new(ui.available_width(), ROW_HEIGHT));
        ui.add_space(6.0);
        match icon {
            Some(tex) => {
                ui.add(egui::Image::from_texture(SizedTexture::new(
                    tex.id(),
                    Vec2::splat(ICON_SIZE),
                )));
            }
            None => {
                ui.add_sized(
                    Vec2::splat(ICON_SIZE),
                    egui::Label::new(RichText::new("▢").size(26.0).weak()),
                );
            }
        }
        // filtered upstream, so the name is present
        ui.label(RichText::new(app.name.as_deref().unwrap_or_default()).size(18.0));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(6.0);
            picked = reset_menu(ui, app, in_flight);
        });
    });

    let rect = inner.response.rect;
    let fill = if ui.rect_contains_pointer(rect) {
        colors.hover
    } else {
        colors.default
    };
    ui.painter()
        .set(background, Shape::rect_filled(rect, 4.0, fill));

    picked
}

/// "Reset" menu: common services, grouped submenus, then the wildcard.
fn reset_menu(ui: &mut Ui, app: &RunningApp, in_flight: &HashSet<ResetKey>) -> Option<Permission> {
    let mut picked = None;
    ui.menu_button("Reset", |ui| {
        for p in permissions::COMMON {
            picked = picked.or(pick(permission_button(ui, app, p, in_flight), p));
        }
        ui.separator();
        for (title, group) in permissions::GROUPS {
            ui.menu_button(*title, |ui| {
                for p in group.iter() {
                    picked = picked.or(pick(permission_button(ui, app, p, in_flight), p));
                }
            });
        }
        ui.separator();
        let all = &permissions::ALL;
        picked = picked.or(pick(permission_button(ui, app, all, in_flight), all));
    });
    picked
}

/// Disabled while the app cannot be reset or this exact reset is still running.
fn permission_button(
    ui: &mut Ui,
    app: &RunningApp,
    permission: &Permission,
    in_flight: &HashSet<ResetKey>,
) -> egui::Response {
    let busy = in_flight.contains(&(app.pid, permission.command_name));
    let enabled = app.is_resettable() && !busy;
    let label = format!("{}  {}", permission.icon, permission.display_name);
    ui.add_enabled(enabled, egui::Button::new(label))
}

fn pick(resp: egui::Response, permission: &Permission) -> Option<Permission> {
    resp.clicked().then_some(*permission)
}
