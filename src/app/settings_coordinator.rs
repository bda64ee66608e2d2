//! Generic settings persistence coordination.
//!
//! Every persisted value (theme mode, session snapshot) is stored as a JSON
//! string under its own key in eframe's storage.

use log::warn;
use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()` when it is missing or
    /// cannot be decoded.
    ///
    /// # Examples
    /// ```ignore
    /// let mode: ThemeMode = SettingsCoordinator::load_setting(storage, "theme_mode");
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Saves a setting and flushes storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => warn!("failed to encode setting {}: {}", key, e),
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// Invalid data is logged and otherwise ignored.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("ignoring unreadable setting {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use unilink::{Session, StoreSnapshot, ThemeMode};

    /// Simple mock storage for testing
    pub(crate) struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        pub(crate) fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_snapshot() {
        let mut storage = MockStorage::new();
        let snapshot = StoreSnapshot {
            mode: ThemeMode::Dark,
            user: Some(Session::new("u1", "Ada", "Lovelace")),
        };

        SettingsCoordinator::save_setting(&mut storage, "session", &snapshot);

        let loaded: StoreSnapshot = SettingsCoordinator::load_setting(Some(&storage), "session");
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = MockStorage::new();
        let loaded: StoreSnapshot =
            SettingsCoordinator::load_setting(Some(&storage), "missing_key");
        assert_eq!(loaded, StoreSnapshot::default());

        let mode: ThemeMode = SettingsCoordinator::load_setting(Some(&storage), "missing_key");
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_corrupt_value_is_ignored() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, "theme_mode", "\"purple\"".to_string());

        let result: Option<ThemeMode> =
            SettingsCoordinator::try_load_setting(Some(&storage), "theme_mode");
        assert_eq!(result, None);
        let mode: ThemeMode = SettingsCoordinator::load_setting(Some(&storage), "theme_mode");
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_no_storage() {
        let result: Option<i32> = SettingsCoordinator::try_load_setting(None, "anything");
        assert_eq!(result, None);
    }
}
