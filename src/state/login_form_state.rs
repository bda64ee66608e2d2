//! Credential form state.

use unilink::AuthError;

#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    email: String,
    password: String,
    error: Option<AuthError>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error(&self) -> Option<&AuthError> {
        self.error.as_ref()
    }

    pub fn set_error(&mut self, error: AuthError) {
        self.error = Some(error);
    }

    /// Clears credentials and error after a successful sign-in.
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.error = None;
    }

    /// Mutable access to both text buffers (for UI handlers, splits borrows).
    pub(crate) fn fields_mut(&mut self) -> (&mut String, &mut String) {
        (&mut self.email, &mut self.password)
    }
}
