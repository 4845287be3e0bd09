use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

pub const APP_DIR_NAME: &str = "timeline";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background_color: [u8; 3],
    pub panel_color: [u8; 3],
    pub text_color: [u8; 3],
    pub secondary_text_color: [u8; 3],
    pub border_color: [u8; 3],
    pub accent_color: [u8; 3],
    pub like_color: [u8; 3],
    pub repost_color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub font_size: f32,
    pub feed_width: f32,
    pub window_size: [f32; 2],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            // Dark timeline palette
            background_color: [0, 0, 0],
            panel_color: [10, 10, 10],
            text_color: [255, 255, 255],
            secondary_text_color: [113, 118, 123],
            border_color: [47, 51, 54],
            accent_color: [29, 155, 240],
            like_color: [239, 68, 68],
            repost_color: [74, 222, 128],
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            feed_width: 600.0,
            window_size: [680.0, 900.0],
        }
    }
}

impl AppConfig {
    /// Default location, `<config dir>/timeline/config.json`.
    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration. A missing file is created with defaults;
    /// an unreadable one is left untouched and defaults are used for this run.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_init(&path),
            Err(err) => {
                warn!(error = %err, "using default configuration");
                Self::default()
            }
        }
    }

    pub fn load_or_init(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, writing defaults");
                let default_config = Self::default();
                if let Err(save_err) = default_config.save_to(path) {
                    warn!(error = %save_err, path = %path.display(), "failed to save default config");
                }
                default_config
            }
            Err(err) => {
                warn!(error = %err, path = %path.display(), "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        // Atomic write through a temp file
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

impl ThemeConfig {
    pub fn background_color32(&self) -> egui::Color32 {
        rgb(self.background_color)
    }

    pub fn panel_color32(&self) -> egui::Color32 {
        rgb(self.panel_color)
    }

    pub fn text_color32(&self) -> egui::Color32 {
        rgb(self.text_color)
    }

    pub fn secondary_text_color32(&self) -> egui::Color32 {
        rgb(self.secondary_text_color)
    }

    pub fn border_color32(&self) -> egui::Color32 {
        rgb(self.border_color)
    }

    pub fn accent_color32(&self) -> egui::Color32 {
        rgb(self.accent_color)
    }

    /// Accent colour at the given opacity, for hover and selection fills.
    pub fn accent_tint(&self, alpha: u8) -> egui::Color32 {
        let [r, g, b] = self.accent_color;
        egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)
    }

    pub fn like_color32(&self) -> egui::Color32 {
        rgb(self.like_color)
    }

    pub fn repost_color32(&self) -> egui::Color32 {
        rgb(self.repost_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_missing_sections() {
        let config: AppConfig = serde_json::from_str(r#"{ "ui": { "font_size": 20.0, "feed_width": 500.0, "window_size": [1.0, 2.0] } }"#).unwrap();
        assert_eq!(config.ui.font_size, 20.0);
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn partial_section_keeps_given_fields() {
        let config: AppConfig = serde_json::from_str(
            r#"{ "theme": { "background_color": [1, 2, 3] }, "ui": { "font_size": 22.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.theme.background_color, [1, 2, 3]);
        assert_eq!(config.theme.accent_color, ThemeConfig::default().accent_color);
        assert_eq!(config.ui.font_size, 22.0);
        assert_eq!(config.ui.feed_width, UiConfig::default().feed_width);
    }

    #[test]
    fn accent_tint_follows_configured_accent() {
        let theme = ThemeConfig {
            accent_color: [10, 20, 30],
            ..ThemeConfig::default()
        };
        assert_eq!(
            theme.accent_tint(60),
            egui::Color32::from_rgba_unmultiplied(10, 20, 30, 60)
        );
    }

    #[test]
    fn theme_colors_convert() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.like_color32(), egui::Color32::from_rgb(239, 68, 68));
        assert_eq!(theme.background_color32(), egui::Color32::BLACK);
    }
}
