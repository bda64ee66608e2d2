//! Credential form embedded in the landing page.

use crate::state::LoginFormState;
use egui::RichText;
use unilink::ThemeColors;

/// Draws the form. Returns true when it was submitted (button or Enter).
pub fn render_login_form(
    ui: &mut egui::Ui,
    form: &mut LoginFormState,
    colors: &ThemeColors,
) -> bool {
    let mut submitted = false;

    ui.label(RichText::new("Sign in").size(20.0).strong());
    ui.add_space(8.0);

    let error = form.error().map(|e| e.to_string());
    let (email, password) = form.fields_mut();

    ui.label("Email");
    ui.add(
        egui::TextEdit::singleline(email)
            .hint_text("you@university.edu")
            .desired_width(f32::INFINITY),
    );
    ui.label("Password");
    let password_response = ui.add(
        egui::TextEdit::singleline(password)
            .password(true)
            .desired_width(f32::INFINITY),
    );

    if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submitted = true;
    }

    if let Some(error) = error {
        ui.colored_label(colors.error, error);
    }

    ui.add_space(8.0);
    let button = egui::Button::new(RichText::new("Sign in").strong().color(colors.panel_background))
        .fill(colors.primary)
        .min_size(egui::vec2(ui.available_width(), 32.0));
    if ui.add(button).clicked() {
        submitted = true;
    }

    submitted
}
