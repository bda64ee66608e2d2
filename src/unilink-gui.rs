//! UniLink desktop client
//!
//! A university social-networking client built with egui:
//! - Landing page with the credential form
//! - Top navbar with search, messaging, notifications, theme toggle and a
//!   profile menu, each overlay toggled independently
//! - Route guard keeping signed-out users on the landing page
//! - Theme mode and session persisted between runs
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators (navbar dispatch, sign-in, persistence)
//! - `state/` - State owned by the overlay collaborators and the credential form
//! - `ui/` - Panel rendering and interaction collection

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use ui::panel_manager::PanelManager;
use unilink::LOGIN_PATH;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Launches the client. An optional first argument is the initial route.
fn main() -> eframe::Result {
    setup_logging();

    let initial_path = std::env::args().nth(1).unwrap_or_else(|| LOGIN_PATH.to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("UniLink"),
        ..Default::default()
    };

    eframe::run_native(
        "UniLink",
        options,
        Box::new(move |cc| Ok(Box::new(UniLinkApp::new(cc, initial_path)))),
    )
}

/// The UniLink application.
///
/// Most work is delegated:
/// - `ApplicationCoordinator` handles navbar dispatch, sign-in, the route guard and persistence
/// - `ThemeCoordinator` applies the store's theme mode
/// - `PanelManager` handles layout and rendering
struct UniLinkApp {
    state: AppState,
}

impl UniLinkApp {
    /// Restores theme mode and session from storage and starts on `initial_path`.
    fn new(cc: &eframe::CreationContext, initial_path: String) -> Self {
        let snapshot = ApplicationCoordinator::load_snapshot(cc.storage);
        log::info!(
            "starting on {} ({}, {})",
            initial_path,
            snapshot.mode,
            if snapshot.user.is_some() { "session restored" } else { "signed out" }
        );

        let mut state = AppState::with_snapshot(snapshot, initial_path);
        ApplicationCoordinator::enforce_route_guard(&mut state);
        Self { state }
    }

    /// Reacts to store changes and re-checks the route.
    fn settle(&mut self) -> bool {
        let changed = ApplicationCoordinator::process_store_events(&mut self.state);
        let redirected = ApplicationCoordinator::enforce_route_guard(&mut self.state);
        changed || redirected
    }
}

impl eframe::App for UniLinkApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ApplicationCoordinator::save_snapshot(storage, &self.state);
    }

    /// Main update loop:
    /// 1. Settle store events and the route guard
    /// 2. Apply theme
    /// 3. Render all panels
    /// 4. Handle interactions, then settle again so the next frame is consistent
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.settle();

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let interactions = PanelManager::render_all_panels(ctx, &mut self.state);
        let interacted = !interactions.is_empty();
        for interaction in interactions {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
        }

        if self.settle() || interacted {
            // Persist during the frame for crash resilience
            if let Some(storage) = frame.storage_mut() {
                ApplicationCoordinator::save_snapshot(storage, &self.state);
            }
            ctx.request_repaint();
        }
    }
}
