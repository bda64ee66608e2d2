//! In-memory conversations for the messaging overlay.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender_id: String,
    pub content: String,
    pub read: bool,
}

/// One thread with a peer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub peer_id: String,
    pub peer_name: String,
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Messages from the peer not read yet.
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.read && m.sender_id == self.peer_id)
            .count()
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// All conversations of the signed-in member, keyed by peer id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatBook {
    conversations: BTreeMap<String, Conversation>,
}

impl ChatBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversations(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.values()
    }

    pub fn conversation(&self, peer_id: &str) -> Option<&Conversation> {
        self.conversations.get(peer_id)
    }

    /// Opens (or returns) the thread with a peer.
    pub fn open(&mut self, peer_id: &str, peer_name: &str) -> &mut Conversation {
        self.conversations
            .entry(peer_id.to_string())
            .or_insert_with(|| Conversation {
                peer_id: peer_id.to_string(),
                peer_name: peer_name.to_string(),
                messages: Vec::new(),
            })
    }

    /// Appends a message. Blank content is dropped and returns false.
    pub fn send(&mut self, peer_id: &str, sender_id: &str, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        match self.conversations.get_mut(peer_id) {
            Some(conversation) => {
                conversation.messages.push(ChatMessage {
                    sender_id: sender_id.to_string(),
                    content: content.to_string(),
                    read: sender_id != conversation.peer_id,
                });
                true
            }
            None => false,
        }
    }

    pub fn mark_read(&mut self, peer_id: &str) {
        if let Some(conversation) = self.conversations.get_mut(peer_id) {
            for m in conversation.messages.iter_mut() {
                m.read = true;
            }
        }
    }

    pub fn total_unread(&self) -> usize {
        self.conversations.values().map(Conversation::unread_count).sum()
    }

    /// A couple of threads for the demo.
    pub fn sample() -> Self {
        let mut book = Self::new();
        book.open("u2", "Alan Turing");
        book.send("u2", "u2", "Are you coming to the alumni meetup?");
        book.open("u3", "Grace Hopper");
        book.send("u3", "u3", "Thanks for the referral!");
        book
    }
}
