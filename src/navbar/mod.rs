//! Top navigation bar coordination.
//!
//! This module contains the state machine behind the navbar, kept apart
//! from any rendering:
//! - Overlay flags (mobile menu, profile menu, search, chat)
//! - The pure transition function mapping a user action to a new overlay
//!   state plus store/router effects
//! - The coordinator that applies those effects and wires overlay
//!   collaborators

mod overlay;
mod reducer;
mod coordinator;

pub use overlay::{Overlay, OverlayState};
pub use reducer::{reduce, NavEffect, NavbarAction, Transition};
pub use coordinator::{NavbarCoordinator, OverlayCollaborator};
