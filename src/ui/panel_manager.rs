//! Panel orchestration and layout management.
//!
//! Lays out the landing page or the navbar + page + overlays, and collects
//! what the user did this frame for the application coordinator.

use crate::app::AppState;
use crate::ui::chat_panel::ChatPanel;
use crate::ui::search_panel::{SearchInteraction, SearchPanel};
use crate::ui::{login_page, navbar, notification_center, pages};
use unilink::{NavbarAction, Overlay, Router, LOGIN_PATH};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInteraction {
    /// A navbar gesture for the navbar coordinator
    Navbar(NavbarAction),
    /// The credential form was submitted
    SignInRequested,
    /// A member was picked in the search overlay
    SearchMemberSelected(String),
    /// A page link was followed
    Navigate(String),
    /// "Message" was pressed for a member
    MessageMember { peer_id: String, peer_name: String },
    /// A notification in the center was clicked
    NotificationOpened(u64),
    /// Back button on a page
    NavigateBack,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole window for the current route.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();
        let colors = state.themes.theme(state.store.mode()).colors.clone();

        if state.router.current_path() == LOGIN_PATH {
            egui::CentralPanel::default()
                .frame(egui::Frame::default().fill(colors.background))
                .show(ctx, |ui| {
                    let login = login_page::render_login_page(
                        ui,
                        &mut state.login_form,
                        state.store.mode(),
                        &colors,
                    );
                    if let Some(login_page::LoginInteraction::SignInRequested) = login {
                        interactions.push(PanelInteraction::SignInRequested);
                    }
                });
            return interactions;
        }

        // Navbar at the top
        egui::TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::default()
                    .fill(colors.panel_background)
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                let view = navbar::NavbarView {
                    navbar: &state.navbar,
                    store: &state.store,
                    current_path: state.router.current_path(),
                    colors: &colors,
                };
                let actions = navbar::render_navbar(ui, &view, &mut state.notifications);
                interactions.extend(actions.into_iter().map(PanelInteraction::Navbar));
            });

        // Mobile menu drops down under the navbar
        if state.navbar.is_open(Overlay::MobileMenu) {
            egui::TopBottomPanel::top("mobile_menu").show(ctx, |ui| {
                let actions = navbar::render_mobile_menu(ui, &state.store, &colors);
                interactions.extend(actions.into_iter().map(PanelInteraction::Navbar));
            });
        }

        // Page content
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors.background).inner_margin(16.0))
            .show(ctx, |ui| {
                let page = pages::render_page(
                    ui,
                    state.router.current_path(),
                    state.store.user(),
                    &state.directory,
                    &colors,
                );
                if let Some(page) = page {
                    interactions.push(match page {
                        pages::PageInteraction::Navigate(path) => PanelInteraction::Navigate(path),
                        pages::PageInteraction::MessageMember { peer_id, peer_name } => {
                            PanelInteraction::MessageMember { peer_id, peer_name }
                        }
                        pages::PageInteraction::Back => PanelInteraction::NavigateBack,
                    });
                }
            });

        // Overlays, driven by the navbar's flags
        let mut search = SearchPanel::new(&mut state.search, &state.directory);
        if let Some(SearchInteraction::MemberSelected(member_id)) =
            state.navbar.show_overlay(Overlay::Search, &mut search, ctx)
        {
            interactions.push(PanelInteraction::SearchMemberSelected(member_id));
        }

        let mut chat = ChatPanel::new(&mut state.chat, state.store.user(), &colors);
        state.navbar.show_overlay(Overlay::Chat, &mut chat, ctx);

        // Always mounted; visibility is its own business
        let opened =
            notification_center::render_notification_center(ctx, &mut state.notifications, &colors);
        if let Some(id) = opened {
            interactions.push(PanelInteraction::NotificationOpened(id));
        }

        interactions
    }
}
