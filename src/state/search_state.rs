//! Search overlay state.

/// Query text of the search overlay.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Forgets the query, called when the overlay closes.
    pub fn reset(&mut self) {
        self.query.clear();
    }

    /// Text buffer for the query input (for UI handlers).
    pub(crate) fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }
}
