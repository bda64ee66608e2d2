//! Landing page
//!
//! Brand header, hero copy and the embedded credential form. Reads only the
//! theme mode from the store.

use crate::state::LoginFormState;
use crate::ui::login_form;
use egui::RichText;
use unilink::{ThemeColors, ThemeMode};

/// Result of user interaction with the landing page
pub enum LoginInteraction {
    /// The form was submitted
    SignInRequested,
}

pub fn render_login_page(
    ui: &mut egui::Ui,
    form: &mut LoginFormState,
    mode: ThemeMode,
    colors: &ThemeColors,
) -> Option<LoginInteraction> {
    let mut interaction = None;

    egui::Frame::default()
        .fill(colors.panel_background)
        .inner_margin(egui::Margin::symmetric(24, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Uni").size(26.0).strong().color(colors.primary));
                ui.label(
                    RichText::new(" Link ")
                        .size(26.0)
                        .strong()
                        .color(colors.panel_background)
                        .background_color(colors.primary),
                );
            });
        });

    ui.add_space(32.0);

    ui.horizontal_top(|ui| {
        ui.add_space(48.0);
        ui.vertical(|ui| {
            ui.set_max_width(480.0);
            // Hero copy is lighter in dark mode
            let hero = if mode.is_dark() { colors.primary } else { colors.text_strong };
            ui.label(RichText::new("Welcome to your").size(34.0).color(hero));
            ui.label(
                RichText::new("professional university community")
                    .size(34.0)
                    .strong()
                    .color(hero),
            );
            ui.add_space(24.0);

            egui::Frame::default()
                .fill(colors.panel_background)
                .stroke(egui::Stroke::new(1.0, colors.border))
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(24.0)
                .show(ui, |ui| {
                    if login_form::render_login_form(ui, form, colors) {
                        interaction = Some(LoginInteraction::SignInRequested);
                    }
                });
        });

        if ui.available_width() > 360.0 {
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.label(RichText::new("🎓").size(160.0));
                ui.label(
                    RichText::new("Connect with classmates and alumni").color(colors.text_dim),
                );
            });
        }
    });

    interaction
}
