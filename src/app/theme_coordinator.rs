//! Theme mode persistence and application.
//!
//! Handles restoring the light/dark preference, saving it, and applying the
//! matching palette to egui.

use crate::app::{AppState, SettingsCoordinator};
use unilink::ThemeMode;

pub const THEME_MODE_KEY: &str = "theme_mode";

/// Coordinates theme persistence and application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the saved mode, defaulting to light.
    pub fn load_mode_from_storage(storage: Option<&dyn eframe::Storage>) -> ThemeMode {
        SettingsCoordinator::load_setting(storage, THEME_MODE_KEY)
    }

    /// Saves the current mode.
    pub fn save_mode_to_storage(storage: &mut dyn eframe::Storage, mode: ThemeMode) {
        SettingsCoordinator::save_setting(storage, THEME_MODE_KEY, &mode);
    }

    /// Applies the store's current mode to the egui context.
    ///
    /// Called every frame so a toggle from any component is picked up on the
    /// next repaint.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        ctx.set_visuals(state.themes.visuals(state.store.mode()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings_coordinator::tests::MockStorage;

    #[test]
    fn test_mode_defaults_to_light() {
        assert_eq!(ThemeCoordinator::load_mode_from_storage(None), ThemeMode::Light);
        let storage = MockStorage::new();
        assert_eq!(ThemeCoordinator::load_mode_from_storage(Some(&storage)), ThemeMode::Light);
    }

    #[test]
    fn test_mode_persists() {
        let mut storage = MockStorage::new();
        ThemeCoordinator::save_mode_to_storage(&mut storage, ThemeMode::Dark);
        assert_eq!(ThemeCoordinator::load_mode_from_storage(Some(&storage)), ThemeMode::Dark);
    }

    #[test]
    fn test_apply_sets_dark_visuals() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.store.toggle_mode();
        ThemeCoordinator::apply_current_theme(&ctx, &state);
        assert!(ctx.style().visuals.dark_mode);
    }
}
