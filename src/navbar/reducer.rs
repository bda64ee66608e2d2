//! Pure transition function for the navbar.
//!
//! `reduce` never touches the store or router. It returns the next overlay
//! state together with the effects the coordinator must perform, so every
//! transition can be tested without rendering anything.

use super::overlay::{Overlay, OverlayState};
use crate::nav::{NavItem, NavItemAction, NavTarget};
use crate::router::HOME_PATH;
use crate::session::Session;

/// A user gesture on the navbar, or a close request from a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarAction {
    /// Menu icon on narrow layouts
    ToggleMobileMenu,
    /// Search box clicked, or the mobile search icon tapped
    OpenSearch,
    /// Search collaborator asked to close
    CloseSearch,
    /// Chat opened from outside the nav list (e.g. a message notification)
    OpenChat,
    /// Chat collaborator asked to close
    CloseChat,
    /// Avatar button
    ToggleProfileMenu,
    ToggleTheme,
    SignOut,
    ViewProfile,
    /// Nav entry at this index was activated
    SelectNavItem(usize),
    /// Brand logo clicked
    SelectLogo,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    Navigate(String),
    ToggleMode,
    ClearSession,
}

/// Result of one action: the whole next state plus its effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: OverlayState,
    pub effects: Vec<NavEffect>,
}

impl Transition {
    fn local(state: OverlayState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with_effect(state: OverlayState, effect: NavEffect) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }
}

/// Computes the transition for `action`.
///
/// Opening one overlay never closes another. An out-of-range nav index is
/// ignored. "View Profile" without a session closes the menu and requests
/// no navigation.
pub fn reduce(
    state: OverlayState,
    action: NavbarAction,
    items: &[NavItem],
    session: Option<&Session>,
) -> Transition {
    match action {
        NavbarAction::ToggleMobileMenu => Transition::local(state.toggled(Overlay::MobileMenu)),
        NavbarAction::OpenSearch => Transition::local(state.with(Overlay::Search, true)),
        NavbarAction::CloseSearch => Transition::local(state.with(Overlay::Search, false)),
        NavbarAction::OpenChat => Transition::local(state.with(Overlay::Chat, true)),
        NavbarAction::CloseChat => Transition::local(state.with(Overlay::Chat, false)),
        NavbarAction::ToggleProfileMenu => Transition::local(state.toggled(Overlay::ProfileMenu)),
        NavbarAction::ToggleTheme => Transition::with_effect(state, NavEffect::ToggleMode),
        NavbarAction::SignOut => Transition::with_effect(
            state.with(Overlay::ProfileMenu, false),
            NavEffect::ClearSession,
        ),
        NavbarAction::ViewProfile => {
            let closed = state.with(Overlay::ProfileMenu, false);
            match session {
                Some(session) => {
                    Transition::with_effect(closed, NavEffect::Navigate(session.profile_path()))
                }
                None => Transition::local(closed),
            }
        }
        NavbarAction::SelectNavItem(index) => match items.get(index).map(|item| &item.target) {
            Some(NavTarget::Route(path)) => {
                Transition::with_effect(state, NavEffect::Navigate(path.clone()))
            }
            Some(NavTarget::Action(NavItemAction::OpenChat)) => {
                Transition::local(state.with(Overlay::Chat, true))
            }
            None => Transition::local(state),
        },
        NavbarAction::SelectLogo => {
            Transition::with_effect(state, NavEffect::Navigate(HOME_PATH.to_string()))
        }
    }
}
