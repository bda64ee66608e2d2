//! Navigation entries shown in the top bar and active-route highlighting.

use crate::router::HOME_PATH;
use std::collections::BTreeSet;

/// Path of the alumni / "My Network" page.
pub const NETWORK_PATH: &str = "/home/alumniPage";

/// Icon drawn for a nav entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Users,
    Messages,
}

impl NavIcon {
    /// Glyph used by the egui renderer.
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Home => "🏠",
            NavIcon::Users => "👥",
            NavIcon::Messages => "💬",
        }
    }
}

/// Inline actions a nav entry can trigger instead of navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemAction {
    OpenChat,
}

/// Either a route or an inline action, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Route(String),
    Action(NavItemAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub icon: NavIcon,
    pub label: String,
    pub target: NavTarget,
}

impl NavItem {
    pub fn route(icon: NavIcon, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            target: NavTarget::Route(path.into()),
        }
    }

    pub fn action(icon: NavIcon, label: impl Into<String>, action: NavItemAction) -> Self {
        Self {
            icon,
            label: label.into(),
            target: NavTarget::Action(action),
        }
    }

    /// The route this entry points at, if it is a route entry.
    pub fn destination(&self) -> Option<&str> {
        match &self.target {
            NavTarget::Route(path) => Some(path),
            NavTarget::Action(_) => None,
        }
    }
}

/// Home, My Network, Messaging.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::route(NavIcon::Home, "Home", HOME_PATH),
        NavItem::route(NavIcon::Users, "My Network", NETWORK_PATH),
        NavItem::action(NavIcon::Messages, "Messaging", NavItemAction::OpenChat),
    ]
}

/// Indices of the entries whose destination equals `current_path` exactly.
///
/// No prefix matching and no query-string normalization: `/home` is not
/// active on `/home/alumniPage`.
pub fn highlight(items: &[NavItem], current_path: &str) -> BTreeSet<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.destination() == Some(current_path))
        .map(|(index, _)| index)
        .collect()
}
