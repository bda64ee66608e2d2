//! Authenticated member record.
//!
//! A `Session` is owned by the [`SessionStore`](crate::SessionStore); every other
//! component only reads it.

use serde::{Deserialize, Serialize};

/// The signed-in member.
///
/// Fields the backend leaves out deserialize to empty strings so a partial
/// record still renders (with gaps) instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub picture_path: String,
    #[serde(default, alias = "Year")]
    pub year: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
}

impl Session {
    /// Creates a session with just an id and a name.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// "First Last", trimmed when either half is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Caption shown under the name in the profile menu, e.g. "3rd year student".
    pub fn year_label(&self) -> String {
        if self.year.is_empty() {
            "student".to_string()
        } else {
            format!("{} student", self.year)
        }
    }

    /// Route of this member's profile page.
    pub fn profile_path(&self) -> String {
        profile_path(&self.id)
    }

    /// Up to two uppercase initials, used when no picture is available.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Builds `/profile/{id}`.
pub fn profile_path(id: &str) -> String {
    format!("/profile/{}", id)
}

/// Full name of an optional session, empty when signed out.
pub fn display_name(session: Option<&Session>) -> String {
    session.map(Session::full_name).unwrap_or_default()
}
