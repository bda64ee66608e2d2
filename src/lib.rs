pub mod session;
pub mod store;
pub mod router;
pub mod nav;
pub mod navbar;
pub mod theme;
pub mod directory;
pub mod notifications;
pub mod chat;
pub mod error;

// Session and store
pub use session::{Session, profile_path, display_name};
pub use store::{SessionStore, StoreEvent, StoreSnapshot, SubscriptionId};

// Routing and navigation entries
pub use router::{Router, HistoryRouter, guard_redirect, LOGIN_PATH, HOME_PATH};
pub use nav::{
    NavItem, NavTarget, NavItemAction, NavIcon, default_nav_items, highlight, NETWORK_PATH
};

// Navbar coordination
pub use navbar::{
    NavbarCoordinator, NavbarAction, NavEffect, Overlay, OverlayState,
    OverlayCollaborator, Transition, reduce
};

// Theme support
pub use theme::{Theme, ThemeColors, ThemeManager, ThemeMode, hex_to_color32};

// Collaborator data
pub use directory::{UserDirectory, SAMPLE_DIRECTORY};
pub use notifications::{Notification, NotificationFeed, NotificationKind, Priority};
pub use chat::{ChatBook, ChatMessage, Conversation};

pub use error::AuthError;
