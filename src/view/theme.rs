use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Dark => ThemeChoice::Light,
            ThemeChoice::Light => ThemeChoice::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeChoice::Dark => "dark",
            ThemeChoice::Light => "light",
        }
    }

    /// Parse a configured theme name; unknown names fall back to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => ThemeChoice::Light,
            _ => ThemeChoice::Dark,
        }
    }
}

/// Serializable color representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorDef {
    /// RGB color as [r, g, b]
    Rgb(u8, u8, u8),
    /// Named color
    Named(String),
}

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        match def {
            ColorDef::Rgb(r, g, b) => Color::Rgb(r, g, b),
            ColorDef::Named(name) => match name.as_str() {
                "Black" => Color::Black,
                "Red" => Color::Red,
                "Green" => Color::Green,
                "Yellow" => Color::Yellow,
                "Blue" => Color::Blue,
                "Magenta" => Color::Magenta,
                "Cyan" => Color::Cyan,
                "Gray" => Color::Gray,
                "DarkGray" => Color::DarkGray,
                "LightRed" => Color::LightRed,
                "LightGreen" => Color::LightGreen,
                "LightYellow" => Color::LightYellow,
                "LightBlue" => Color::LightBlue,
                "LightMagenta" => Color::LightMagenta,
                "LightCyan" => Color::LightCyan,
                "White" => Color::White,
                // Default/Reset uses the terminal's default color
                "Default" | "Reset" => Color::Reset,
                _ => Color::White, // Default fallback
            },
        }
    }
}

/// Serializable theme definition (matches the JSON structure of theme
/// override files under the themes dir)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    bg: ColorDef,
    fg: ColorDef,
    accent: ColorDef,
    accent_alt: ColorDef,
    highlight: ColorDef,
    muted: ColorDef,
    prompt: ColorDef,
    source: ColorDef,
    border: ColorDef,
    tag_fg: ColorDef,
    tag_bg: ColorDef,
    selection_bg: ColorDef,
    status_fg: ColorDef,
    status_bg: ColorDef,
}

/// Resolved colors used by every view.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    /// Primary accent (nav highlights, project titles).
    pub accent: Color,
    /// Secondary accent (the name gradient stand-in, tagline).
    pub accent_alt: Color,
    /// Emphasized output lines and featured markers.
    pub highlight: Color,
    pub muted: Color,
    /// The `$` prompt.
    pub prompt: Color,
    /// Source-listing output lines.
    pub source: Color,
    pub border: Color,
    pub tag_fg: Color,
    pub tag_bg: Color,
    pub selection_bg: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(17, 24, 39),
            fg: Color::Rgb(229, 231, 235),
            accent: Color::Rgb(129, 140, 248),
            accent_alt: Color::Rgb(192, 132, 252),
            highlight: Color::Rgb(244, 114, 182),
            muted: Color::Rgb(156, 163, 175),
            prompt: Color::Rgb(74, 222, 128),
            source: Color::Rgb(125, 211, 252),
            border: Color::Rgb(99, 102, 241),
            tag_fg: Color::Rgb(199, 210, 254),
            tag_bg: Color::Rgb(55, 48, 163),
            selection_bg: Color::Rgb(49, 46, 129),
            status_fg: Color::Rgb(156, 163, 175),
            status_bg: Color::Rgb(31, 41, 55),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(249, 250, 251),
            fg: Color::Rgb(17, 24, 39),
            accent: Color::Rgb(79, 70, 229),
            accent_alt: Color::Rgb(126, 34, 206),
            highlight: Color::Rgb(219, 39, 119),
            muted: Color::Rgb(107, 114, 128),
            prompt: Color::Rgb(22, 163, 74),
            source: Color::Rgb(3, 105, 161),
            border: Color::Rgb(99, 102, 241),
            tag_fg: Color::Rgb(55, 48, 163),
            tag_bg: Color::Rgb(224, 231, 255),
            selection_bg: Color::Rgb(199, 210, 254),
            status_fg: Color::Rgb(75, 85, 99),
            status_bg: Color::Rgb(229, 231, 235),
        }
    }

    pub fn builtin(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Load the theme for a choice, preferring a user override file
    /// ({themes_dir}/{name}.json) and falling back to the built-in palette.
    pub fn load(choice: ThemeChoice, themes_dir: &Path) -> Self {
        let path = themes_dir.join(format!("{}.json", choice.name()));
        if !path.exists() {
            return Self::builtin(choice);
        }
        match Self::load_from_file(&path) {
            Ok(theme) => {
                tracing::info!("Loaded theme from {}", path.display());
                theme
            }
            Err(e) => {
                tracing::warn!("Failed to load theme from {}: {}", path.display(), e);
                Self::builtin(choice)
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let file: ThemeFile = serde_json::from_str(&content)?;
        Ok(Self {
            bg: file.bg.into(),
            fg: file.fg.into(),
            accent: file.accent.into(),
            accent_alt: file.accent_alt.into(),
            highlight: file.highlight.into(),
            muted: file.muted.into(),
            prompt: file.prompt.into(),
            source: file.source.into(),
            border: file.border.into(),
            tag_fg: file.tag_fg.into(),
            tag_bg: file.tag_bg.into(),
            selection_bg: file.selection_bg.into(),
            status_fg: file.status_fg.into(),
            status_bg: file.status_bg.into(),
        })
    }
}
