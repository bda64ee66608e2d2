//! Page content for each route.

use egui::RichText;
use unilink::{profile_path, Session, ThemeColors, UserDirectory, HOME_PATH, NETWORK_PATH};

/// Result of user interaction with page content
pub enum PageInteraction {
    Navigate(String),
    MessageMember { peer_id: String, peer_name: String },
    Back,
}

/// Renders whatever lives at `path`.
pub fn render_page(
    ui: &mut egui::Ui,
    path: &str,
    user: Option<&Session>,
    directory: &UserDirectory,
    colors: &ThemeColors,
) -> Option<PageInteraction> {
    if path == HOME_PATH {
        render_home(ui, user, colors);
        None
    } else if path == NETWORK_PATH {
        render_network(ui, user, directory, colors)
    } else if let Some(id) = path.strip_prefix("/profile/") {
        render_profile(ui, id, user, directory, colors)
    } else {
        render_not_found(ui, path, colors)
    }
}

fn card<R>(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::default()
        .fill(colors.panel_background)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width().min(640.0));
            add_contents(ui)
        })
        .inner
}

fn render_home(ui: &mut egui::Ui, user: Option<&Session>, colors: &ThemeColors) {
    card(ui, colors, |ui| {
        let greeting = match user {
            Some(u) if !u.first_name.is_empty() => format!("Welcome back, {}", u.first_name),
            _ => "Welcome back".to_string(),
        };
        ui.heading(greeting);
        ui.label(RichText::new("Your feed is up to date.").color(colors.text_dim));
    });
}

fn render_network(
    ui: &mut egui::Ui,
    user: Option<&Session>,
    directory: &UserDirectory,
    colors: &ThemeColors,
) -> Option<PageInteraction> {
    let mut interaction = None;
    let me = user.map(|u| u.id.as_str());

    ui.heading("My Network");
    ui.add_space(8.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for member in directory.members().iter().filter(|m| Some(m.id.as_str()) != me) {
            card(ui, colors, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(member.initials())
                            .size(20.0)
                            .strong()
                            .color(colors.primary),
                    );
                    ui.vertical(|ui| {
                        ui.label(RichText::new(member.full_name()).strong());
                        ui.label(RichText::new(member.year_label()).small().color(colors.text_dim));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Message").clicked() {
                            interaction = Some(PageInteraction::MessageMember {
                                peer_id: member.id.clone(),
                                peer_name: member.full_name(),
                            });
                        }
                        if ui.button("View profile").clicked() {
                            interaction = Some(PageInteraction::Navigate(profile_path(&member.id)));
                        }
                    });
                });
            });
            ui.add_space(6.0);
        }
    });

    interaction
}

fn render_profile(
    ui: &mut egui::Ui,
    id: &str,
    user: Option<&Session>,
    directory: &UserDirectory,
    colors: &ThemeColors,
) -> Option<PageInteraction> {
    let mut interaction = None;

    // Own profile comes from the session, others from the directory
    let member = user.filter(|u| u.id == id).or_else(|| directory.find_by_id(id));
    let is_me = user.is_some_and(|u| u.id == id);

    if ui.button("← Back").clicked() {
        interaction = Some(PageInteraction::Back);
    }
    ui.add_space(8.0);

    card(ui, colors, |ui| match member {
        Some(member) => {
            ui.heading(member.full_name());
            ui.label(RichText::new(member.year_label()).color(colors.text_dim));
            if !member.location.is_empty() {
                ui.label(format!("📍 {}", member.location));
            }
            if !member.email.is_empty() {
                ui.label(format!("✉ {}", member.email));
            }
            if !is_me {
                ui.add_space(8.0);
                if ui.button("Message").clicked() {
                    interaction = Some(PageInteraction::MessageMember {
                        peer_id: member.id.clone(),
                        peer_name: member.full_name(),
                    });
                }
            }
        }
        None => {
            ui.label(RichText::new(format!("No member with id {}", id)).color(colors.text_dim));
        }
    });

    interaction
}

fn render_not_found(
    ui: &mut egui::Ui,
    path: &str,
    colors: &ThemeColors,
) -> Option<PageInteraction> {
    let mut interaction = None;
    card(ui, colors, |ui| {
        ui.heading("Page not found");
        ui.label(RichText::new(path).monospace().color(colors.text_dim));
        if ui.button("← Back").clicked() {
            interaction = Some(PageInteraction::Back);
        }
    });
    interaction
}
