//! Navbar rendering
//!
//! Draws the top bar from the coordinator's state and reports gestures as
//! [`NavbarAction`]s. Nothing here mutates navbar or store state directly.

use crate::state::NotificationState;
use crate::ui::notification_bell;
use egui::{RichText, Stroke};
use unilink::{NavbarAction, NavbarCoordinator, Overlay, Session, SessionStore, ThemeColors};

/// Below this width the navbar switches to the compact layout.
const COMPACT_WIDTH: f32 = 768.0;

/// Read-only inputs of the navbar.
pub struct NavbarView<'a> {
    pub navbar: &'a NavbarCoordinator,
    pub store: &'a SessionStore,
    pub current_path: &'a str,
    pub colors: &'a ThemeColors,
}

/// Renders the navbar and returns the gestures made this frame.
pub fn render_navbar(
    ui: &mut egui::Ui,
    view: &NavbarView<'_>,
    notifications: &mut NotificationState,
) -> Vec<NavbarAction> {
    let mut actions = Vec::new();
    let colors = view.colors;
    let compact = ui.available_width() < COMPACT_WIDTH;
    let active = unilink::highlight(view.navbar.items(), view.current_path);

    ui.horizontal(|ui| {
        // Brand
        let logo = ui.add(
            egui::Label::new(RichText::new("UniL").size(24.0).strong().color(colors.primary))
                .sense(egui::Sense::click()),
        );
        if logo.clicked() {
            actions.push(NavbarAction::SelectLogo);
        }

        if !compact {
            let search = ui.add(
                egui::Button::new(RichText::new("🔍  Search").color(colors.text_dim))
                    .fill(colors.primary_soft)
                    .min_size(egui::vec2(220.0, 26.0)),
            );
            if search.clicked() {
                actions.push(NavbarAction::OpenSearch);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if compact {
                if ui.button(RichText::new("☰").size(20.0)).clicked() {
                    actions.push(NavbarAction::ToggleMobileMenu);
                }
                if ui.button(RichText::new("🔍").size(20.0)).clicked() {
                    actions.push(NavbarAction::OpenSearch);
                }
            } else {
                let avatar = render_avatar_button(ui, view.store.user(), colors);
                if avatar.clicked() {
                    actions.push(NavbarAction::ToggleProfileMenu);
                }
                if view.navbar.is_open(Overlay::ProfileMenu) {
                    render_profile_menu(
                        ui.ctx(),
                        avatar.rect,
                        view.store.user(),
                        colors,
                        &mut actions,
                    );
                }

                notification_bell::render_bell(ui, notifications, colors);

                let glyph = if view.store.mode().is_dark() { "☀" } else { "🌙" };
                let toggle = ui.button(RichText::new(glyph).size(18.0));
                if toggle.on_hover_text("Toggle theme").clicked() {
                    actions.push(NavbarAction::ToggleTheme);
                }
                ui.separator();
            }

            // Nav entries, laid out right to left so iterate in reverse
            for (index, item) in view.navbar.items().iter().enumerate().rev() {
                let is_active = active.contains(&index);
                let color = if is_active { colors.text_strong } else { colors.text_dim };
                let text = if compact {
                    RichText::new(item.icon.glyph()).size(20.0).color(color)
                } else {
                    RichText::new(format!("{}\n{}", item.icon.glyph(), item.label))
                        .size(12.0)
                        .color(color)
                };
                let response = ui.add(egui::Button::new(text).frame(false));
                if is_active {
                    ui.painter().hline(
                        response.rect.x_range(),
                        response.rect.bottom() + 4.0,
                        Stroke::new(2.0, colors.text_strong),
                    );
                }
                if response.clicked() {
                    actions.push(NavbarAction::SelectNavItem(index));
                }
            }
        });
    });

    actions
}

/// Avatar + "Me" button. Shows "?" when signed out.
fn render_avatar_button(
    ui: &mut egui::Ui,
    user: Option<&Session>,
    colors: &ThemeColors,
) -> egui::Response {
    let initials = user
        .map(Session::initials)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "?".to_string());
    let response = ui.add(
        egui::Button::new(
            RichText::new(format!("{}\nMe ⏷", initials))
                .size(12.0)
                .color(colors.text_dim),
        )
        .frame(false),
    );
    match user.filter(|u| !u.picture_path.is_empty()) {
        Some(u) => response.on_hover_text(u.picture_path.as_str()),
        None => response,
    }
}

/// Dropdown under the avatar: identity, View Profile, Sign Out.
fn render_profile_menu(
    ctx: &egui::Context,
    anchor: egui::Rect,
    user: Option<&Session>,
    colors: &ThemeColors,
    actions: &mut Vec<NavbarAction>,
) {
    egui::Area::new(egui::Id::new("profile_menu"))
        .order(egui::Order::Foreground)
        .pivot(egui::Align2::RIGHT_TOP)
        .fixed_pos(anchor.right_bottom() + egui::vec2(0.0, 8.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(240.0);

                // Missing session renders as blanks
                let name = unilink::display_name(user);
                let year = user.map(Session::year_label).unwrap_or_default();
                ui.label(RichText::new(name).strong());
                ui.label(RichText::new(year).small().color(colors.text_dim));
                ui.separator();

                let view_profile = ui.add_enabled(
                    user.is_some(),
                    egui::Button::new(RichText::new("View Profile").strong().color(colors.primary))
                        .frame(false),
                );
                if view_profile.clicked() {
                    actions.push(NavbarAction::ViewProfile);
                }
                if ui
                    .add(
                        egui::Button::new(RichText::new("Sign Out").color(colors.text_dim))
                            .frame(false),
                    )
                    .clicked()
                {
                    actions.push(NavbarAction::SignOut);
                }
            });
        });
}

/// Contents of the compact-layout menu.
pub fn render_mobile_menu(
    ui: &mut egui::Ui,
    store: &SessionStore,
    colors: &ThemeColors,
) -> Vec<NavbarAction> {
    let mut actions = Vec::new();

    ui.vertical(|ui| {
        let name = unilink::display_name(store.user());
        ui.label(RichText::new(name).strong().color(colors.text_strong));

        if ui.add_enabled(store.user().is_some(), egui::Button::new("View Profile")).clicked() {
            actions.push(NavbarAction::ViewProfile);
        }
        let theme_label = if store.mode().is_dark() { "☀ Light mode" } else { "🌙 Dark mode" };
        if ui.button(theme_label).clicked() {
            actions.push(NavbarAction::ToggleTheme);
        }
        if ui.button(RichText::new("Sign Out").color(colors.text_dim)).clicked() {
            actions.push(NavbarAction::SignOut);
        }
    });

    actions
}
