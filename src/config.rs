use crate::services::app_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Session theme override ("dark" or "light"). When unset, the saved
    /// preference and then the site default apply.
    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Where content documents come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Local directory holding site.json / projects.json / programs.json.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Base URL serving the same documents. Tried once, no retry.
    #[serde(default)]
    pub remote_url: Option<String>,
}

/// Timing knobs for the UI, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// How long each splash tagline stays up before rotating.
    #[serde(default = "default_tagline_interval_ms")]
    pub tagline_interval_ms: u64,

    /// Pause before an animated `run` response starts revealing lines.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

fn default_tick_ms() -> u64 {
    250
}

fn default_tagline_interval_ms() -> u64 {
    3000
}

fn default_reveal_delay_ms() -> u64 {
    500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            tagline_interval_ms: default_tagline_interval_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

impl UiConfig {
    /// Tagline rotation interval expressed in ticks, at least one.
    pub fn tagline_interval_ticks(&self) -> u64 {
        (self.tagline_interval_ms / self.tick_ms.max(1)).max(1)
    }

    /// Reveal delay expressed in ticks, at least one.
    pub fn reveal_delay_ticks(&self) -> u64 {
        (self.reveal_delay_ms / self.tick_ms.max(1)).max(1)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub const FILENAME: &'static str = "config.json";

    /// Load configuration from a specific JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))
    }

    /// Config search paths: project-local first, then the user config dir.
    /// Only returns paths that exist on disk.
    fn config_search_paths(dirs: &AppDirs, working_dir: &Path) -> Vec<PathBuf> {
        let local = working_dir.join(".folio").join(Self::FILENAME);
        let mut paths = Vec::with_capacity(2);

        if local.exists() {
            paths.push(local);
        }

        let user = dirs.config_path();
        if !paths.contains(&user) && user.exists() {
            paths.push(user);
        }

        paths
    }

    /// Load configuration, checking the working directory first, then the
    /// user config dir. Falls back to defaults if no config file is found
    /// or all fail to load.
    pub fn load_for_working_dir(dirs: &AppDirs, working_dir: &Path) -> Self {
        for path in Self::config_search_paths(dirs, working_dir) {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load config from {}: {}, trying next option",
                        path.display(),
                        e
                    );
                }
            }
        }
        tracing::debug!("No config file found, using defaults");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.theme.is_none());
        assert!(config.content.dir.is_none());
        assert_eq!(config.ui.tick_ms, 250);
        assert_eq!(config.ui.tagline_interval_ms, 3000);
    }

    #[test]
    fn sparse_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(Config::FILENAME);
        std::fs::write(&path, r#"{"theme": "light"}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.theme.as_deref(), Some("light"));
        assert_eq!(config.ui.tick_ms, 250);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(Config::FILENAME);
        std::fs::write(&path, "{oops").unwrap();
        assert!(matches!(
            Config::load_from_file(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn local_config_wins_over_user_config() {
        let temp = TempDir::new().unwrap();
        let dirs = AppDirs::for_testing(temp.path());
        let working_dir = temp.path().join("project");

        let user_path = dirs.config_path();
        std::fs::create_dir_all(user_path.parent().unwrap()).unwrap();
        std::fs::write(&user_path, r#"{"ui": {"tick_ms": 100}}"#).unwrap();

        let local_path = working_dir.join(".folio").join(Config::FILENAME);
        std::fs::create_dir_all(local_path.parent().unwrap()).unwrap();
        std::fs::write(&local_path, r#"{"ui": {"tick_ms": 50}}"#).unwrap();

        let config = Config::load_for_working_dir(&dirs, &working_dir);
        assert_eq!(config.ui.tick_ms, 50);
    }

    #[test]
    fn no_config_files_means_defaults() {
        let temp = TempDir::new().unwrap();
        let dirs = AppDirs::for_testing(temp.path());
        let config = Config::load_for_working_dir(&dirs, temp.path());
        assert_eq!(config.ui.tick_ms, 250);
    }

    #[test]
    fn interval_conversion_never_yields_zero_ticks() {
        let ui = UiConfig {
            tick_ms: 10_000,
            tagline_interval_ms: 3000,
            reveal_delay_ms: 500,
        };
        assert_eq!(ui.tagline_interval_ticks(), 1);
        assert_eq!(ui.reveal_delay_ticks(), 1);
    }
}
