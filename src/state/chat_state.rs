//! Messaging overlay state.

use unilink::ChatBook;

/// Conversations plus what the chat overlay is currently showing.
///
/// Responsibilities:
/// - Owning the conversation book
/// - Tracking the open thread and the composer draft
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    book: ChatBook,
    active_peer: Option<String>,
    draft: String,
}

impl ChatState {
    pub fn new(book: ChatBook) -> Self {
        Self {
            book,
            active_peer: None,
            draft: String::new(),
        }
    }

    // ===== Queries =====

    pub fn book(&self) -> &ChatBook {
        &self.book
    }

    pub fn active_peer(&self) -> Option<&str> {
        self.active_peer.as_deref()
    }

    // ===== Mutations =====

    /// Opens the thread with a peer (creating it) and marks it read.
    pub fn select_peer(&mut self, peer_id: &str, peer_name: &str) {
        self.book.open(peer_id, peer_name);
        self.book.mark_read(peer_id);
        self.active_peer = Some(peer_id.to_string());
        self.draft.clear();
    }

    /// Sends the draft to the active peer. Returns true if something was sent.
    pub fn send_draft(&mut self, sender_id: &str) -> bool {
        let Some(peer) = self.active_peer.clone() else {
            return false;
        };
        let sent = self.book.send(&peer, sender_id, &self.draft);
        if sent {
            self.draft.clear();
        }
        sent
    }

    /// Drops everything tied to the signed-in member.
    pub fn clear(&mut self) {
        self.book = ChatBook::new();
        self.active_peer = None;
        self.draft.clear();
    }

    /// Composer buffer (for UI handlers).
    pub(crate) fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }
}
