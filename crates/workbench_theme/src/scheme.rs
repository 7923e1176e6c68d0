//! Theme mode (user preference) and color scheme (resolved value)

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use workbench_platform::WindowTheme;

/// Concrete color scheme applied to the UI
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Get the opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ColorScheme> for WindowTheme {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => WindowTheme::Light,
            ColorScheme::Dark => WindowTheme::Dark,
        }
    }
}

/// User's stored theme choice
///
/// `System` follows the OS dark-mode signal; the other two pin a scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Parse a persisted value
    ///
    /// Only the exact strings written by [`ThemeMode::as_str`] are accepted;
    /// anything else is treated as absent.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn is_system(self) -> bool {
        self == ThemeMode::System
    }

    /// Resolve against the current OS scheme
    pub fn resolve(self, system: ColorScheme) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
            ThemeMode::System => system,
        }
    }

    /// Explicit mode that pins `scheme`
    pub fn pinned(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemeMode::Light,
            ColorScheme::Dark => ThemeMode::Dark,
        }
    }

    /// Decoration request for the native window
    pub fn window_theme(self) -> Option<WindowTheme> {
        match self {
            ThemeMode::Light => Some(WindowTheme::Light),
            ThemeMode::Dark => Some(WindowTheme::Dark),
            ThemeMode::System => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::from_stored(&normalized).ok_or_else(|| ThemeError::InvalidMode(s.to_string()))
    }
}
