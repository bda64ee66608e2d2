//! Typed errors surfaced to the user.

use thiserror::Error;

/// Reasons the credential form can refuse a sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("email and password are required")]
    MissingCredentials,
    #[error("no account registered for {0}")]
    UnknownAccount(String),
}
