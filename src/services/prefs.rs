//! The persisted theme preference.
//!
//! One value under one known file: read at startup, written on every
//! toggle. Failures degrade to defaults and are logged, never surfaced.

use crate::view::theme::ThemeChoice;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct ThemePref {
    theme: ThemeChoice,
}

/// Read the saved theme. Returns `None` if the file doesn't exist, can't be
/// read, or is malformed.
pub fn load_theme(path: &Path) -> Option<ThemeChoice> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str::<ThemePref>(&content) {
        Ok(pref) => Some(pref.theme),
        Err(e) => {
            tracing::debug!("Ignoring malformed theme preference {}: {}", path.display(), e);
            None
        }
    }
}

/// Write the theme preference, creating parent directories as needed.
/// Returns false (and logs) on failure.
pub fn save_theme(path: &Path, theme: ThemeChoice) -> bool {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create preference directory: {}", e);
            return false;
        }
    }

    let pref = ThemePref { theme };
    let json = match serde_json::to_string_pretty(&pref) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to serialize theme preference: {}", e);
            return false;
        }
    };

    match std::fs::write(path, json) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to write theme preference {}: {}", path.display(), e);
            false
        }
    }
}
