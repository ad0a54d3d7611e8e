//! Window and asset configuration.
//!
//! Stored as JSON at `~/.local/share/anchor-ui/config.json`. Loaded once on
//! startup; a missing or broken file falls back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::widget::Color;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("anchor-ui")
        .join("config.json")
}

/// Persisted host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_width")]
    pub window_width: f32,
    #[serde(default = "default_height")]
    pub window_height: f32,
    #[serde(default = "default_title")]
    pub window_title: String,
    #[serde(default = "default_background")]
    pub background: Color,
    /// Directory sprite sources are resolved against.
    #[serde(default = "default_texture_root")]
    pub texture_root: PathBuf,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_width() -> f32 { 800.0 }
fn default_height() -> f32 { 600.0 }
fn default_title() -> String { "anchor-ui".into() }
fn default_background() -> Color { Color::FRESH_AIR }
fn default_texture_root() -> PathBuf { PathBuf::from(".") }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_width(),
            window_height: default_height(),
            window_title: default_title(),
            background: default_background(),
            texture_root: default_texture_root(),
            path: default_path(),
        }
    }
}

impl UiConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        };
        config.path = path.to_path_buf();
        config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// One-line header naming the window and its size.
    pub fn banner(&self) -> String {
        format!("{} ({}x{})", self.window_title, self.window_width, self.window_height)
    }

    /// Persist current config to disk.
    pub fn save(&self) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = UiConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config.window_width, 800.0);
        assert_eq!(config.window_height, 600.0);
        assert_eq!(config.background, Color::FRESH_AIR);
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = UiConfig::load_from(&path);
        config.window_width = 1024.0;
        config.texture_root = PathBuf::from("assets");
        config.save().unwrap();

        let reloaded = UiConfig::load_from(&path);
        assert_eq!(reloaded.window_width, 1024.0);
        assert_eq!(reloaded.texture_root, PathBuf::from("assets"));
        assert_eq!(reloaded.path(), path.as_path());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"window_height": 300}"#).unwrap();
        let config = UiConfig::load_from(&path);
        assert_eq!(config.window_height, 300.0);
        assert_eq!(config.window_title, "anchor-ui");
    }

    #[test]
    fn banner_uses_title_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"window_title": "Menu test", "window_width": 640}"#).unwrap();
        assert_eq!(UiConfig::load_from(&path).banner(), "Menu test (640x600)");
    }
}
