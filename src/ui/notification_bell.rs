//! Notification bell with unread badge.

use crate::state::NotificationState;
use egui::RichText;
use unilink::ThemeColors;

/// Draws the bell; clicking toggles the notification center.
pub fn render_bell(ui: &mut egui::Ui, notifications: &mut NotificationState, colors: &ThemeColors) {
    let unread = notifications.feed().unread_count();
    let text = if unread > 0 {
        RichText::new(format!("🔔 {}", unread)).size(16.0).color(colors.badge)
    } else {
        RichText::new("🔔").size(16.0)
    };
    if ui.button(text).on_hover_text("Notifications").clicked() {
        notifications.toggle_center();
    }
}
