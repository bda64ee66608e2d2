//! Centralized application state for the UniLink client.
//!
//! The shared session/theme store sits next to focused state components,
//! each owning one concern. Components never reach into each other; the
//! [`ApplicationCoordinator`](crate::app::ApplicationCoordinator) is the only
//! place that touches more than one of them.

use crate::state::{ChatState, LoginFormState, NotificationState, SearchState};
use std::cell::RefCell;
use std::rc::Rc;
use unilink::{
    ChatBook, HistoryRouter, NavbarCoordinator, NotificationFeed, SessionStore, StoreEvent,
    StoreSnapshot, ThemeManager, UserDirectory, LOGIN_PATH, SAMPLE_DIRECTORY,
};

/// Main application state.
pub struct AppState {
    // ===== Shared =====
    /// Session/theme store, the only shared mutable state
    pub store: SessionStore,

    /// Current route and history
    pub router: HistoryRouter,

    // ===== Navbar =====
    /// Overlay flags and nav entries of the top bar
    pub navbar: NavbarCoordinator,

    // ===== Collaborators =====
    pub search: SearchState,
    pub chat: ChatState,
    pub notifications: NotificationState,
    pub login_form: LoginFormState,

    // ===== Read-only data =====
    /// Members searchable and able to sign in
    pub directory: UserDirectory,

    /// Palettes for light and dark mode
    pub themes: ThemeManager,

    /// Store events received since the last frame
    store_events: Rc<RefCell<Vec<StoreEvent>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Signed out, light mode, on the landing page.
    pub fn new() -> Self {
        Self::with_snapshot(StoreSnapshot::default(), LOGIN_PATH.to_string())
    }

    /// Restores the store from storage and starts on `initial_path`.
    ///
    /// Collaborator data is seeded only when a session was restored.
    pub fn with_snapshot(snapshot: StoreSnapshot, initial_path: String) -> Self {
        let signed_in = snapshot.user.is_some();
        let mut store = SessionStore::from_snapshot(snapshot);
        let store_events = Rc::new(RefCell::new(Vec::new()));
        let inbox = Rc::clone(&store_events);
        store.subscribe(move |event| inbox.borrow_mut().push(event.clone()));

        let mut state = Self {
            store,
            router: HistoryRouter::new(initial_path),
            navbar: NavbarCoordinator::default(),
            search: SearchState::new(),
            chat: ChatState::default(),
            notifications: NotificationState::default(),
            login_form: LoginFormState::new(),
            directory: (*SAMPLE_DIRECTORY).clone(),
            themes: ThemeManager::new(),
            store_events,
        };
        if signed_in {
            state.load_member_data();
        }
        state
    }

    // ===== High-Level Coordination Methods =====

    /// Takes the store events published since the last call.
    pub fn take_store_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut *self.store_events.borrow_mut())
    }

    /// Seeds chat threads and notifications for the signed-in member.
    pub fn load_member_data(&mut self) {
        self.chat = ChatState::new(ChatBook::sample());
        self.notifications = NotificationState::new(NotificationFeed::sample());
    }

    /// Drops member data after sign-out and remounts the navbar, closing
    /// every overlay.
    pub fn reset_member_state(&mut self) {
        self.chat.clear();
        self.notifications.clear();
        self.search.reset();
        self.navbar = NavbarCoordinator::default();
    }
}
