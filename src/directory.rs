//! Member directory used by search and by the demo sign-in.

use crate::error::AuthError;
use crate::session::Session;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Sample directory bundled with the binary.
pub static SAMPLE_DIRECTORY: Lazy<UserDirectory> = Lazy::new(|| {
    UserDirectory::from_json(include_str!("../assets/directory.json")).unwrap_or_else(|e| {
        log::warn!("bundled directory is invalid: {:#}", e);
        UserDirectory::default()
    })
});

/// Searchable list of member profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDirectory {
    members: Vec<Session>,
}

impl UserDirectory {
    pub fn new(members: Vec<Session>) -> Self {
        Self { members }
    }

    /// Parses `{"members": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse member directory")
    }

    pub fn members(&self) -> &[Session] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members whose full name contains `query`, ignoring case.
    ///
    /// A blank query matches nobody.
    pub fn search(&self, query: &str) -> Vec<&Session> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.members
            .iter()
            .filter(|m| m.full_name().to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Session> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Session> {
        let email = email.trim();
        self.members.iter().find(|m| m.email.eq_ignore_ascii_case(email))
    }

    /// Demo credential check: any non-empty password for a known email.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        self.find_by_email(email)
            .cloned()
            .ok_or_else(|| AuthError::UnknownAccount(email.trim().to_string()))
    }
}
