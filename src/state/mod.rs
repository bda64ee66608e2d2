//! State owned by the overlay collaborators and the credential form.
//!
//! None of this is visible to the navbar coordinator:
//! - Search state (query text)
//! - Chat state (conversations, active thread, draft)
//! - Notification state (feed and the center's own visibility)
//! - Login form state (credentials and last error)

mod search_state;
mod chat_state;
mod notification_state;
mod login_form_state;

pub use search_state::SearchState;
pub use chat_state::ChatState;
pub use notification_state::NotificationState;
pub use login_form_state::LoginFormState;
