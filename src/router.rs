//! Route state: the current path and navigation requests.

use log::debug;

/// Landing page (credential form).
pub const LOGIN_PATH: &str = "/";
/// Feed shown after sign-in.
pub const HOME_PATH: &str = "/home";

/// What the navbar needs from a router.
pub trait Router {
    /// Path currently displayed.
    fn current_path(&self) -> &str;

    /// Requests a route change. Paths are not validated here.
    fn navigate(&mut self, path: &str);
}

/// In-memory router with a back stack.
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    current: String,
    back_stack: Vec<String>,
}

impl HistoryRouter {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            current: initial_path.into(),
            back_stack: Vec::new(),
        }
    }

    /// Returns to the previous path. False when there is no history.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                debug!("route back {} -> {}", self.current, previous);
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Replaces the current path without pushing history (used for redirects).
    pub fn replace(&mut self, path: &str) {
        debug!("route replace {} -> {}", self.current, path);
        self.current = path.to_string();
    }

    /// Moves to `path` and forgets all history.
    pub fn reset(&mut self, path: &str) {
        debug!("route reset {} -> {} ({} dropped)", self.current, path, self.back_stack.len());
        self.current = path.to_string();
        self.back_stack.clear();
    }

    pub fn history_len(&self) -> usize {
        self.back_stack.len()
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new(LOGIN_PATH)
    }
}

impl Router for HistoryRouter {
    fn current_path(&self) -> &str {
        &self.current
    }

    fn navigate(&mut self, path: &str) {
        if path == self.current {
            return;
        }
        debug!("route {} -> {}", self.current, path);
        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.back_stack.push(previous);
    }
}

/// Where the route guard sends a user, if anywhere.
///
/// Signed-out users may only see the landing page; signed-in users skip it.
pub fn guard_redirect(path: &str, signed_in: bool) -> Option<&'static str> {
    match (signed_in, path == LOGIN_PATH) {
        (false, false) => Some(LOGIN_PATH),
        (true, true) => Some(HOME_PATH),
        _ => None,
    }
}
