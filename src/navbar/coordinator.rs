//! Applies navbar transitions to the store and router.

use super::overlay::{Overlay, OverlayState};
use super::reducer::{reduce, NavEffect, NavbarAction};
use crate::nav::{default_nav_items, highlight, NavItem};
use crate::router::Router;
use crate::store::SessionStore;
use log::{debug, warn};
use std::collections::BTreeSet;

/// A surface the navbar opens and closes but does not implement.
///
/// Each frame the collaborator is told whether it is visible and given a
/// callback to ask for closing. It owns everything else about itself.
pub trait OverlayCollaborator {
    /// Anything the collaborator wants to report back to the application.
    type Output;

    fn show(
        &mut self,
        ctx: &egui::Context,
        is_open: bool,
        request_close: &mut dyn FnMut(),
    ) -> Option<Self::Output>;
}

/// Owns the overlay flags of one navbar and mediates between gestures,
/// the session store and the router.
#[derive(Debug, Clone)]
pub struct NavbarCoordinator {
    overlays: OverlayState,
    items: Vec<NavItem>,
}

impl Default for NavbarCoordinator {
    fn default() -> Self {
        Self::new(default_nav_items())
    }
}

impl NavbarCoordinator {
    /// Fresh coordinator with every overlay closed.
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            overlays: OverlayState::new(),
            items,
        }
    }

    // ===== Queries =====

    pub fn overlays(&self) -> &OverlayState {
        &self.overlays
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.overlays.is_open(overlay)
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Indices of nav entries matching the router's current path.
    pub fn active_items(&self, router: &dyn Router) -> BTreeSet<usize> {
        highlight(&self.items, router.current_path())
    }

    // ===== Dispatch =====

    /// Runs one action: replaces the overlay state in a single assignment,
    /// then performs the effects in order.
    pub fn dispatch(
        &mut self,
        action: NavbarAction,
        store: &mut SessionStore,
        router: &mut dyn Router,
    ) {
        if action == NavbarAction::ViewProfile && store.user().is_none() {
            warn!(
                "view profile requested without a session; staying on {}",
                router.current_path()
            );
        }
        if let NavbarAction::SelectNavItem(index) = action {
            if index >= self.items.len() {
                warn!("nav item {} does not exist ({} items)", index, self.items.len());
            }
        }

        let transition = reduce(self.overlays, action, &self.items, store.user());
        if transition.state != self.overlays {
            debug!(
                "navbar {:?}: {:?} -> {:?}",
                action,
                self.overlays.open_overlays(),
                transition.state.open_overlays()
            );
        }
        self.overlays = transition.state;

        for effect in transition.effects {
            match effect {
                NavEffect::Navigate(path) => router.navigate(&path),
                NavEffect::ToggleMode => store.toggle_mode(),
                NavEffect::ClearSession => store.clear_session(),
            }
        }
    }

    // ===== Collaborator wiring =====

    /// Shows a collaborator with its visibility flag and a close callback.
    ///
    /// A close request raised during `show` is applied after the collaborator
    /// returns, as the matching close action. Only search and chat have
    /// collaborators; other overlays are drawn by the navbar itself.
    pub fn show_overlay<C: OverlayCollaborator>(
        &mut self,
        overlay: Overlay,
        collaborator: &mut C,
        ctx: &egui::Context,
    ) -> Option<C::Output> {
        let mut close_requested = false;
        let output = {
            let mut request_close = || close_requested = true;
            collaborator.show(ctx, self.overlays.is_open(overlay), &mut request_close)
        };

        if close_requested {
            let close = match overlay {
                Overlay::Search => Some(NavbarAction::CloseSearch),
                Overlay::Chat => Some(NavbarAction::CloseChat),
                Overlay::MobileMenu | Overlay::ProfileMenu => None,
            };
            if let Some(action) = close {
                // Close actions have no effects, so store and router are not needed.
                self.overlays = reduce(self.overlays, action, &self.items, None).state;
                debug!("{:?} closed by collaborator", overlay);
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::HistoryRouter;
    use crate::session::Session;

    /// Records what it was shown and optionally asks to close.
    struct ScriptedCollaborator {
        close_when_open: bool,
        shown_open: Vec<bool>,
    }

    impl OverlayCollaborator for ScriptedCollaborator {
        type Output = &'static str;

        fn show(
            &mut self,
            _ctx: &egui::Context,
            is_open: bool,
            request_close: &mut dyn FnMut(),
        ) -> Option<Self::Output> {
            self.shown_open.push(is_open);
            if is_open && self.close_when_open {
                request_close();
                return Some("closed");
            }
            None
        }
    }

    #[test]
    fn test_dispatch_applies_effects() {
        let mut coordinator = NavbarCoordinator::default();
        let mut store = SessionStore::new();
        store.sign_in(Session::new("u1", "Ada", "Lovelace"));
        let mut router = HistoryRouter::new("/home");

        coordinator.dispatch(NavbarAction::ToggleProfileMenu, &mut store, &mut router);
        coordinator.dispatch(NavbarAction::ViewProfile, &mut store, &mut router);
        assert_eq!(router.current_path(), "/profile/u1");
        assert!(!coordinator.is_open(Overlay::ProfileMenu));

        coordinator.dispatch(NavbarAction::ToggleTheme, &mut store, &mut router);
        assert!(store.mode().is_dark());

        coordinator.dispatch(NavbarAction::SignOut, &mut store, &mut router);
        assert!(store.user().is_none());
        // no redirect from the coordinator itself
        assert_eq!(router.current_path(), "/profile/u1");
    }

    #[test]
    fn test_active_items_follow_router() {
        let coordinator = NavbarCoordinator::default();
        let mut router = HistoryRouter::new("/home");
        assert_eq!(coordinator.active_items(&router).into_iter().collect::<Vec<_>>(), vec![0]);
        router.navigate("/profile/u1");
        assert!(coordinator.active_items(&router).is_empty());
    }

    #[test]
    fn test_collaborator_close_request_closes_overlay() {
        let ctx = egui::Context::default();
        let mut coordinator = NavbarCoordinator::default();
        let mut store = SessionStore::new();
        let mut router = HistoryRouter::new("/home");
        let mut search = ScriptedCollaborator {
            close_when_open: true,
            shown_open: Vec::new(),
        };

        assert_eq!(coordinator.show_overlay(Overlay::Search, &mut search, &ctx), None);

        coordinator.dispatch(NavbarAction::OpenSearch, &mut store, &mut router);
        coordinator.dispatch(NavbarAction::OpenChat, &mut store, &mut router);
        assert_eq!(coordinator.show_overlay(Overlay::Search, &mut search, &ctx), Some("closed"));

        assert_eq!(search.shown_open, vec![false, true]);
        assert!(!coordinator.is_open(Overlay::Search));
        assert!(coordinator.is_open(Overlay::Chat));
    }

    #[test]
    fn test_chat_close_request_leaves_search_open() {
        let ctx = egui::Context::default();
        let mut coordinator = NavbarCoordinator::default();
        let mut store = SessionStore::new();
        let mut router = HistoryRouter::new("/home");
        let mut chat = ScriptedCollaborator {
            close_when_open: true,
            shown_open: Vec::new(),
        };

        coordinator.dispatch(NavbarAction::SelectNavItem(2), &mut store, &mut router);
        coordinator.dispatch(NavbarAction::OpenSearch, &mut store, &mut router);
        assert_eq!(coordinator.show_overlay(Overlay::Chat, &mut chat, &ctx), Some("closed"));

        assert_eq!(chat.shown_open, vec![true]);
        assert!(!coordinator.is_open(Overlay::Chat));
        assert!(coordinator.is_open(Overlay::Search));

        // Closed now, so the next frame shows it hidden and nothing changes.
        assert_eq!(coordinator.show_overlay(Overlay::Chat, &mut chat, &ctx), None);
        assert_eq!(chat.shown_open, vec![true, false]);
        assert!(coordinator.is_open(Overlay::Search));
    }

    #[test]
    fn test_collaborator_that_stays_open() {
        let ctx = egui::Context::default();
        let mut coordinator = NavbarCoordinator::default();
        let mut store = SessionStore::new();
        let mut router = HistoryRouter::new("/home");
        let mut chat = ScriptedCollaborator {
            close_when_open: false,
            shown_open: Vec::new(),
        };

        coordinator.dispatch(NavbarAction::SelectNavItem(2), &mut store, &mut router);
        coordinator.show_overlay(Overlay::Chat, &mut chat, &ctx);
        assert!(coordinator.is_open(Overlay::Chat));
        assert_eq!(chat.shown_open, vec![true]);
    }
}
