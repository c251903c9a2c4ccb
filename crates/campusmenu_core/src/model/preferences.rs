//! Application preferences, a singleton value object.

use serde::{Deserialize, Serialize};

/// Per-category notification switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub menu_updates: bool,
    pub announcements: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            menu_updates: true,
            announcements: true,
        }
    }
}

/// Whole-app preferences, persisted as one document and replaced as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPreferences {
    pub is_dark_mode: bool,
    /// BCP 47-ish language code; the source app shipped Turkish-first.
    pub language: String,
    pub theme: String,
    pub notification_settings: NotificationSettings,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            is_dark_mode: false,
            language: "tr".to_string(),
            theme: "orange".to_string(),
            notification_settings: NotificationSettings::default(),
        }
    }
}
