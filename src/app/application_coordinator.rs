//! Application-level coordination and workflow management.
//!
//! Handles sign-in, the route guard, store event follow-up and routing
//! panel interactions to the navbar coordinator or the collaborators.

use crate::app::{AppState, SettingsCoordinator, ThemeCoordinator};
use crate::ui::panel_manager::PanelInteraction;
use log::info;
use unilink::{
    guard_redirect, NavbarAction, NotificationKind, Router, Session, StoreEvent, StoreSnapshot,
    LOGIN_PATH,
};

pub const SESSION_KEY: &str = "session";

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Forwarding navbar gestures to the `NavbarCoordinator`
/// - Running the demo sign-in against the member directory
/// - Redirecting between the landing page and the app (route guard)
/// - Reacting to store events (member data load/reset)
/// - Restoring and persisting the store
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Reads the persisted theme mode and session.
    pub fn load_snapshot(storage: Option<&dyn eframe::Storage>) -> StoreSnapshot {
        StoreSnapshot {
            mode: ThemeCoordinator::load_mode_from_storage(storage),
            user: SettingsCoordinator::load_setting::<Option<Session>>(storage, SESSION_KEY),
        }
    }

    /// Persists the theme mode and session.
    pub fn save_snapshot(storage: &mut dyn eframe::Storage, state: &AppState) {
        ThemeCoordinator::save_mode_to_storage(storage, state.store.mode());
        SettingsCoordinator::save_setting(storage, SESSION_KEY, &state.store.user());
    }

    /// Handles one interaction reported by the panels.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::Navbar(action) => Self::dispatch_navbar(state, action),
            PanelInteraction::SignInRequested => Self::sign_in(state),
            PanelInteraction::SearchMemberSelected(member_id) => {
                state.search.reset();
                state.router.navigate(&unilink::profile_path(&member_id));
            }
            PanelInteraction::Navigate(path) => state.router.navigate(&path),
            PanelInteraction::MessageMember { peer_id, peer_name } => {
                Self::open_chat_with(state, &peer_id, &peer_name);
            }
            PanelInteraction::NotificationOpened(id) => Self::open_notification(state, id),
            PanelInteraction::NavigateBack => {
                state.router.back();
            }
        }
    }

    /// Forwards a gesture to the navbar coordinator.
    pub fn dispatch_navbar(state: &mut AppState, action: NavbarAction) {
        state.navbar.dispatch(action, &mut state.store, &mut state.router);
    }

    /// Checks the form's credentials and starts a session on success.
    pub fn sign_in(state: &mut AppState) {
        let result = state
            .directory
            .authenticate(state.login_form.email(), state.login_form.password());
        match result {
            Ok(session) => {
                info!("signed in as {}", session.id);
                state.login_form.reset();
                state.store.sign_in(session);
            }
            Err(e) => {
                info!("sign-in rejected: {}", e);
                state.login_form.set_error(e);
            }
        }
    }

    /// Applies store events published since the last frame.
    ///
    /// Returns true if any event arrived.
    pub fn process_store_events(state: &mut AppState) -> bool {
        let events = state.take_store_events();
        for event in &events {
            match event {
                StoreEvent::SignedIn(_) => state.load_member_data(),
                StoreEvent::SignedOut => {
                    info!("signed out");
                    state.reset_member_state();
                }
                StoreEvent::ModeChanged(mode) => info!("theme mode is now {}", mode),
            }
        }
        !events.is_empty()
    }

    /// Redirects away from routes the current session may not see.
    ///
    /// Landing on the login page drops the history, so the next session
    /// cannot walk back into the previous one. Returns true if a redirect
    /// happened.
    pub fn enforce_route_guard(state: &mut AppState) -> bool {
        let current = state.router.current_path().to_string();
        match guard_redirect(&current, state.store.is_signed_in()) {
            Some(target) => {
                info!("route guard: {} -> {}", current, target);
                if target == LOGIN_PATH {
                    state.router.reset(target);
                } else {
                    state.router.replace(target);
                }
                true
            }
            None => false,
        }
    }

    /// Opens the chat overlay on a thread with `peer_id`.
    fn open_chat_with(state: &mut AppState, peer_id: &str, peer_name: &str) {
        state.chat.select_peer(peer_id, peer_name);
        Self::dispatch_navbar(state, NavbarAction::OpenChat);
    }

    /// Marks a notification read and takes the user to what it is about.
    fn open_notification(state: &mut AppState, id: u64) {
        let Some(notification) = state.notifications.feed().get(id).cloned() else {
            return;
        };
        state.notifications.feed_mut().mark_read(id);
        state.notifications.close_center();

        match notification.kind {
            NotificationKind::Message => {
                Self::open_chat_with(state, &notification.actor_id, &notification.actor_name);
            }
            _ => state.router.navigate(&unilink::profile_path(&notification.actor_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings_coordinator::tests::MockStorage;
    use unilink::{Overlay, ThemeMode, AuthError};

    fn signed_in_state() -> AppState {
        let mut state = AppState::new();
        let (email, password) = state.login_form.fields_mut();
        email.push_str("ada@unilink.edu");
        password.push_str("secret");
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SignInRequested);
        ApplicationCoordinator::process_store_events(&mut state);
        ApplicationCoordinator::enforce_route_guard(&mut state);
        state
    }

    #[test]
    fn test_guard_keeps_signed_out_user_on_landing_page() {
        let mut state = AppState::with_snapshot(StoreSnapshot::default(), "/home".to_string());
        assert!(ApplicationCoordinator::enforce_route_guard(&mut state));
        assert_eq!(state.router.current_path(), "/");
        assert!(!ApplicationCoordinator::enforce_route_guard(&mut state));
    }

    #[test]
    fn test_sign_in_lands_on_home() {
        let state = signed_in_state();
        assert_eq!(state.store.user().map(|u| u.id.as_str()), Some("u1"));
        assert_eq!(state.router.current_path(), "/home");
        assert!(!state.notifications.feed().is_empty());
        assert!(state.login_form.email().is_empty());
    }

    #[test]
    fn test_sign_in_failure_sets_error() {
        let mut state = AppState::new();
        ApplicationCoordinator::sign_in(&mut state);
        assert_eq!(state.login_form.error(), Some(&AuthError::MissingCredentials));
        assert!(state.store.user().is_none());
    }

    #[test]
    fn test_sign_out_resets_member_state_and_guard_redirects() {
        let mut state = signed_in_state();
        for action in [
            NavbarAction::OpenSearch,
            NavbarAction::ToggleProfileMenu,
            NavbarAction::SignOut,
        ] {
            let interaction = PanelInteraction::Navbar(action);
            ApplicationCoordinator::handle_interaction(&mut state, interaction);
        }

        // The coordinator itself leaves the route alone.
        assert_eq!(state.router.current_path(), "/home");
        assert!(!state.navbar.is_open(Overlay::ProfileMenu));

        assert!(ApplicationCoordinator::process_store_events(&mut state));
        assert!(!state.navbar.is_open(Overlay::Search));
        assert!(state.notifications.feed().is_empty());

        assert!(ApplicationCoordinator::enforce_route_guard(&mut state));
        assert_eq!(state.router.current_path(), "/");
    }

    #[test]
    fn test_next_session_starts_without_previous_history() {
        let mut state = signed_in_state();
        state.router.navigate("/profile/u3");
        state.router.navigate("/home/alumniPage");

        ApplicationCoordinator::dispatch_navbar(&mut state, NavbarAction::SignOut);
        ApplicationCoordinator::process_store_events(&mut state);
        assert!(ApplicationCoordinator::enforce_route_guard(&mut state));
        assert_eq!(state.router.current_path(), "/");
        assert_eq!(state.router.history_len(), 0);

        let (email, password) = state.login_form.fields_mut();
        email.push_str("alan@unilink.edu");
        password.push_str("secret");
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::SignInRequested);
        ApplicationCoordinator::process_store_events(&mut state);
        assert!(ApplicationCoordinator::enforce_route_guard(&mut state));
        assert_eq!(state.router.current_path(), "/home");
        assert!(!state.router.can_go_back());

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::NavigateBack);
        assert_eq!(state.router.current_path(), "/home");
    }

    #[test]
    fn test_message_notification_opens_chat() {
        let mut state = signed_in_state();
        let id = state
            .notifications
            .feed()
            .iter()
            .find(|n| n.kind == NotificationKind::Message)
            .map(|n| n.id)
            .unwrap();

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::NotificationOpened(id),
        );

        assert!(state.navbar.is_open(Overlay::Chat));
        assert_eq!(state.chat.active_peer(), Some("u2"));
        assert!(state.notifications.feed().get(id).unwrap().read);
        assert_eq!(state.router.current_path(), "/home");
    }

    #[test]
    fn test_other_notification_navigates_to_actor() {
        let mut state = signed_in_state();
        let id = state
            .notifications
            .feed()
            .iter()
            .find(|n| n.kind == NotificationKind::ProfileView)
            .map(|n| n.id)
            .unwrap();

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::NotificationOpened(id),
        );
        assert_eq!(state.router.current_path(), "/profile/u3");
        assert!(!state.navbar.is_open(Overlay::Chat));
    }

    #[test]
    fn test_search_selection_navigates_to_profile() {
        let mut state = signed_in_state();
        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::SearchMemberSelected("u3".to_string()),
        );
        assert_eq!(state.router.current_path(), "/profile/u3");

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::NavigateBack);
        assert_eq!(state.router.current_path(), "/home");
    }

    #[test]
    fn test_snapshot_persistence() {
        let mut state = signed_in_state();
        state.store.toggle_mode();
        let mut storage = MockStorage::new();
        ApplicationCoordinator::save_snapshot(&mut storage, &state);

        let snapshot = ApplicationCoordinator::load_snapshot(Some(&storage));
        assert_eq!(snapshot.mode, ThemeMode::Dark);
        assert_eq!(snapshot.user.map(|u| u.id), Some("u1".to_string()));
    }
}
