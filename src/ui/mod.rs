//! UI panel rendering subsystem
//!
//! This module contains all egui rendering for the UniLink client:
//! - Navbar (brand, search box, nav entries, theme toggle, bell, profile menu)
//! - Landing page and its credential form
//! - Page content per route
//! - Overlay collaborators: search, chat, notification center
//! - Panel manager (layout and interaction collection)

pub mod navbar;
pub mod login_page;
pub mod login_form;
pub mod pages;
pub mod search_panel;
pub mod chat_panel;
pub mod notification_bell;
pub mod notification_center;
pub mod panel_manager;
