//! Directory paths for application state and configuration.
//!
//! Only the top-level `main` function should use `dirs::*` to construct
//! this; all other code receives it by parameter passing. Tests use
//! isolated temp directories and never touch the real system paths.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct AppDirs {
    /// Persistent state (theme preference)
    /// e.g., ~/.local/share/folio on Linux
    pub data_dir: PathBuf,

    /// User configuration
    /// e.g., ~/.config/folio on Linux
    pub config_dir: PathBuf,
}

impl AppDirs {
    /// Build from the system directories. Call only from `main`.
    pub fn from_system() -> std::io::Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine data directory",
                )
            })?
            .join("folio");

        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join("folio");

        Ok(Self {
            data_dir,
            config_dir,
        })
    }

    /// All paths under subdirectories of the given temp dir.
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            data_dir: temp_dir.join("data"),
            config_dir: temp_dir.join("config"),
        }
    }

    /// The theme preference file.
    pub fn theme_pref_path(&self) -> PathBuf {
        self.data_dir.join("theme.json")
    }

    /// The user config file.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(crate::config::Config::FILENAME)
    }

    /// User theme override files ({themes_dir}/{dark|light}.json).
    pub fn themes_dir(&self) -> PathBuf {
        self.config_dir.join("themes")
    }
}

/// Default log file location, under the system temp dir.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(format!("folio-{}.log", std::process::id()))
}
