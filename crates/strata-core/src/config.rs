//! Configuration management for Strata
//!
//! Settings shared by the CLI and the terminal viewer: default viewport,
//! root path, date detection and the logical-unit to terminal-cell scale.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Size, StrataError, ROOT_PATH};

/// Project-level Strata configuration
///
/// Loaded from `.strata/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrataConfig {
    /// Path of the root node
    #[serde(default = "default_root_path")]
    pub root_path: String,

    /// Treat RFC 3339 strings in JSON input as dates
    #[serde(default)]
    pub detect_dates: bool,

    /// Viewport size in logical units
    #[serde(default = "default_size")]
    pub size: Size,

    /// Logical units per terminal cell
    #[serde(default)]
    pub scale: ScaleConfig,

    /// Interactive viewer settings
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Logical units covered by one terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,

    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
}

/// Interactive viewer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Rows scrolled per arrow key press
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,

    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

// Default value providers
fn default_size() -> Size {
    Size::new(640.0, 480.0)
}

fn default_root_path() -> String {
    ROOT_PATH.to_string()
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_cell_height() -> f64 {
    20.0
}

fn default_scroll_step() -> u16 {
    1
}

fn default_tick_ms() -> u64 {
    100
}

impl StrataConfig {
    /// Load configuration from `.strata/config.toml` or use defaults
    pub fn load_or_default(project_root: &Path) -> crate::Result<Self> {
        let config_path = project_root.join(".strata/config.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = toml::from_str(&content)
                .map_err(|e| StrataError::Config(format!("Failed to parse config file: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Write default configuration to `.strata/config.toml`
    pub fn write_default(project_root: &Path) -> crate::Result<()> {
        let config_dir = project_root.join(".strata");
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| StrataError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        crate::check_root_path(&self.root_path)?;

        if !(self.size.width >= 0.0 && self.size.height >= 0.0) {
            return Err(StrataError::Config(format!(
                "size must be non-negative, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        if !(self.scale.cell_width > 0.0 && self.scale.cell_height > 0.0) {
            return Err(StrataError::Config(
                "scale.cell_width and scale.cell_height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StrataConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            detect_dates: false,
            size: default_size(),
            scale: ScaleConfig::default(),
            viewer: ViewerConfig::default(),
        }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
            tick_ms: default_tick_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StrataConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.size, Size::new(640.0, 480.0));
        assert_eq!(config.root_path, "$");
        assert!(!config.detect_dates);
        assert_eq!(config.scale.cell_height, 20.0);
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        StrataConfig::write_default(dir.path()).unwrap();
        assert!(dir.path().join(".strata/config.toml").exists());

        let config = StrataConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.viewer.tick_ms, 100);
    }

    #[test]
    fn test_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".strata")).unwrap();
        std::fs::write(
            dir.path().join(".strata/config.toml"),
            "detect_dates = true\n\n[size]\nwidth = 320.0\nheight = 200.0\n",
        )
        .unwrap();

        let config = StrataConfig::load_or_default(dir.path()).unwrap();
        assert!(config.detect_dates);
        assert_eq!(config.size, Size::new(320.0, 200.0));
        assert_eq!(config.root_path, "$");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".strata")).unwrap();
        std::fs::write(dir.path().join(".strata/config.toml"), "root_path = \"root\"\n").unwrap();
        assert!(matches!(
            StrataConfig::load_or_default(dir.path()),
            Err(StrataError::InvalidPath(_))
        ));

        std::fs::write(dir.path().join(".strata/config.toml"), "size = 3\n").unwrap();
        assert!(matches!(
            StrataConfig::load_or_default(dir.path()),
            Err(StrataError::Config(_))
        ));
    }
}
