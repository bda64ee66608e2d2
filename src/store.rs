//! Process-wide session and theme store.
//!
//! The store is injected into every component that needs it. Fields are
//! private: the navbar may only call [`SessionStore::toggle_mode`] and
//! [`SessionStore::clear_session`], and the credential form calls
//! [`SessionStore::sign_in`]. Readers that must react to changes subscribe
//! instead of polling.

use crate::session::Session;
use crate::theme::ThemeMode;
use log::debug;
use serde::{Deserialize, Serialize};

/// Notification delivered to subscribers after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    ModeChanged(ThemeMode),
    SignedIn(String),
    SignedOut,
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Persistable view of the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub mode: ThemeMode,
    pub user: Option<Session>,
}

/// Holder of the signed-in user and the light/dark preference.
pub struct SessionStore {
    user: Option<Session>,
    mode: ThemeMode,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.user.as_ref().map(|u| &u.id))
            .field("mode", &self.mode)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Empty store: signed out, light mode.
    pub fn new() -> Self {
        Self::from_snapshot(StoreSnapshot::default())
    }

    /// Restores a store from a persisted snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            user: snapshot.user,
            mode: snapshot.mode,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ===== Queries =====

    pub fn user(&self) -> Option<&Session> {
        self.user.as_ref()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Increases by one on every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            mode: self.mode,
            user: self.user.clone(),
        }
    }

    // ===== Actions =====

    /// Flips light/dark.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        debug!("theme mode -> {}", self.mode);
        self.publish(StoreEvent::ModeChanged(self.mode));
    }

    /// Forgets the signed-in user. Clearing an empty store changes nothing.
    pub fn clear_session(&mut self) {
        if self.user.take().is_some() {
            debug!("session cleared");
            self.publish(StoreEvent::SignedOut);
        }
    }

    /// Records a successful sign-in.
    pub fn sign_in(&mut self, session: Session) {
        let id = session.id.clone();
        self.user = Some(session);
        debug!("session started for {}", id);
        self.publish(StoreEvent::SignedIn(id));
    }

    // ===== Subscriptions =====

    /// Registers a listener called after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn publish(&mut self, event: StoreEvent) {
        self.revision += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
