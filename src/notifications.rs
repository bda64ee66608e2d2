//! Notification feed shown by the bell and the notification center.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Like,
    Message,
    ProfileView,
    FriendPost,
    FriendRequest,
}

impl NotificationKind {
    pub fn glyph(self) -> &'static str {
        match self {
            NotificationKind::Like => "👍",
            NotificationKind::Message => "💬",
            NotificationKind::ProfileView => "👀",
            NotificationKind::FriendPost => "📝",
            NotificationKind::FriendRequest => "🤝",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub actor_id: String,
    pub actor_name: String,
    pub message: String,
    pub read: bool,
    pub priority: Priority,
    /// How many similar events were folded into this one
    pub group_count: u32,
}

impl Notification {
    pub fn is_grouped(&self) -> bool {
        self.group_count > 1
    }

    /// Text shown in the center, e.g. "Ada Lovelace and 2 others liked your post".
    pub fn headline(&self) -> String {
        if self.is_grouped() {
            format!("{} and {} others {}", self.actor_name, self.group_count - 1, self.message)
        } else {
            format!("{} {}", self.actor_name, self.message)
        }
    }
}

/// Notifications, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationFeed {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unread notification at the top and returns its id.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        actor_id: impl Into<String>,
        actor_name: impl Into<String>,
        message: impl Into<String>,
        priority: Priority,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(
            0,
            Notification {
                id,
                kind,
                actor_id: actor_id.into(),
                actor_name: actor_name.into(),
                message: message.into(),
                read: false,
                priority,
                group_count: 1,
            },
        );
        id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Marks one notification read. False if the id is unknown.
    pub fn mark_read(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    /// Marks everything read and returns how many changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.items.iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        changed
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// A few notifications so the bell has something to show in the demo.
    pub fn sample() -> Self {
        let mut feed = Self::new();
        use NotificationKind::*;
        feed.push(ProfileView, "u3", "Grace Hopper", "viewed your profile", Priority::Low);
        feed.push(FriendRequest, "u4", "Katherine Johnson", "wants to connect", Priority::High);
        let liked = feed.push(Like, "u2", "Alan Turing", "liked your post", Priority::Medium);
        if let Some(n) = feed.items.iter_mut().find(|n| n.id == liked) {
            n.group_count = 3;
        }
        feed.push(Message, "u2", "Alan Turing", "sent you a message", Priority::High);
        feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_is_newest_first_and_unread() {
        let mut feed = NotificationFeed::new();
        let a = feed.push(NotificationKind::Like, "u1", "Ada", "liked your post", Priority::Low);
        let b = feed.push(
            NotificationKind::Message,
            "u2",
            "Alan",
            "sent you a message",
            Priority::High,
        );
        let ids: Vec<u64> = feed.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![b, a]);
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_and_all() {
        let mut feed = NotificationFeed::sample();
        let total = feed.len();
        let first = feed.iter().next().map(|n| n.id).unwrap();
        assert!(feed.mark_read(first));
        assert!(!feed.mark_read(999));
        assert_eq!(feed.unread_count(), total - 1);
        assert_eq!(feed.mark_all_read(), total - 1);
        assert_eq!(feed.mark_all_read(), 0);
    }

    #[test]
    fn test_dismiss() {
        let mut feed = NotificationFeed::sample();
        let id = feed.iter().next().map(|n| n.id).unwrap();
        assert!(feed.dismiss(id));
        assert!(!feed.dismiss(id));
        assert!(feed.get(id).is_none());
    }

    #[test]
    fn test_grouped_headline() {
        let feed = NotificationFeed::sample();
        let like = feed.iter().find(|n| n.kind == NotificationKind::Like).unwrap();
        assert!(like.is_grouped());
        assert_eq!(like.headline(), "Alan Turing and 2 others liked your post");
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let kind = serde_json::to_string(&NotificationKind::ProfileView).unwrap();
        assert_eq!(kind, "\"profile-view\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
    }
}
