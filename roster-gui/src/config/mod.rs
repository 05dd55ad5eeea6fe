use std::{path::Path, sync::Arc};

use parking_lot::RwLock;
use roster_lib::fs::{config_dir, read_toml, write_toml};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

/// Shared handle to the GUI configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// Front-end preferences, serialized to TOML. Profile data is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub theme: Theme,
    /// Card descriptions longer than this many characters are cut short
    pub description_chars: usize,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            description_chars: 120,
        }
    }
}

impl GuiConfig {
    /// Load from the user's config directory, writing defaults on first run.
    pub fn load() -> Self {
        match config_dir() {
            Ok(dir) => Self::load_from(&dir.join(FILE_NAME)),
            Err(e) => {
                warn!("Using default configuration: {e}");
                Self::default()
            }
        }
    }

    /// Load from `path`. Any problem with the file falls back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match read_toml(path) {
            Ok(Some(cfg)) => cfg,
            Ok(None) => {
                let cfg = Self::default();
                if let Err(e) = write_toml(path, &cfg) {
                    warn!("Failed to write default configuration: {e}");
                }
                cfg
            }
            Err(e) => {
                warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::tempdir;

    use super::{GuiConfig, Theme};

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");

        assert_eq!(GuiConfig::load_from(&path), GuiConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");
        fs::write(&path, "theme = \"Nord\"\n").unwrap();

        let cfg = GuiConfig::load_from(&path);

        assert_eq!(cfg.theme, Theme::Nord);
        assert_eq!(cfg.description_chars, 120);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");
        fs::write(&path, "theme = 7").unwrap();

        assert_eq!(GuiConfig::load_from(&path), GuiConfig::default());
    }

    #[test]
    fn test_description_chars() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");
        fs::write(&path, "theme = \"Light\"\ndescription_chars = 40\n").unwrap();

        let cfg = GuiConfig::load_from(&path);

        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.description_chars, 40);
    }

    #[test]
    fn test_defaults_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");

        GuiConfig::load_from(&path);
        let written = fs::read_to_string(&path).unwrap();

        assert!(written.contains("description_chars = 120"));
        assert!(!written.contains("[gallery]"));
    }
}
