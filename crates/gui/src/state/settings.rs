//! Application settings

use koch_core::SnowflakeSpec;
use serde::{Deserialize, Serialize};

/// Canvas display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Margin around the snowflake, as a fraction of the panel size
    pub margin: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background_color: [18, 18, 24],
            margin: 0.05,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// Snowflake spec restored on the next launch
    #[serde(default)]
    pub snowflake: SnowflakeSpec,
    /// Canvas settings
    #[serde(default)]
    pub canvas: CanvasSettings,
    /// UI settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "koch", "koch-gui") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "koch", "koch-gui") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip_json() {
        let mut settings = AppSettings::default();
        settings.snowflake.depth = 2;
        settings.snowflake.face_count = 5;
        settings.ui.font_size = 16.0;

        let json = serde_json::to_string(&settings).unwrap();
        let restored: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let restored: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, AppSettings::default());
    }
}
