//! Notification center window.
//!
//! Always mounted. It shows itself only while its own flag is set and
//! manages read/dismiss state without involving the navbar.

use crate::state::NotificationState;
use egui::RichText;
use unilink::{Priority, ThemeColors};

/// Renders the center. Returns the id of a notification the user opened.
pub fn render_notification_center(
    ctx: &egui::Context,
    notifications: &mut NotificationState,
    colors: &ThemeColors,
) -> Option<u64> {
    if !notifications.center_open() {
        return None;
    }

    let mut window_open = true;
    let mut opened = None;
    let mut dismissed = None;
    let mut mark_all = false;

    egui::Window::new("Notifications")
        .open(&mut window_open)
        .collapsible(false)
        .default_width(340.0)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 56.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} unread", notifications.feed().unread_count()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    mark_all = ui.small_button("Mark all read").clicked();
                });
            });
            ui.separator();

            if notifications.feed().is_empty() {
                ui.label(RichText::new("You're all caught up").color(colors.text_dim));
            }

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for n in notifications.feed().iter() {
                    ui.horizontal(|ui| {
                        let mut text =
                            RichText::new(format!("{} {}", n.kind.glyph(), n.headline()));
                        if !n.read {
                            text = text.strong();
                        }
                        if n.priority == Priority::High {
                            text = text.color(colors.primary);
                        }
                        if ui.add(egui::Button::new(text).frame(false)).clicked() {
                            opened = Some(n.id);
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                                dismissed = Some(n.id);
                            }
                        });
                    });
                }
            });
        });

    if mark_all {
        notifications.feed_mut().mark_all_read();
    }
    if let Some(id) = dismissed {
        notifications.feed_mut().dismiss(id);
    }
    if !window_open {
        notifications.close_center();
    }

    opened
}
