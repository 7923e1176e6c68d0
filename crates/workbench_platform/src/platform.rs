//! Host platform detection
//!
//! The shell draws an overlay title bar on macOS and relies on the native
//! title bar everywhere else, so layout needs to know which OS it runs on.

use crate::display::DisplayRoot;

/// Style property carrying the title bar safe-area height
pub const TITLEBAR_HEIGHT_PROPERTY: &str = "--titlebar-height";

/// Overlay title bar height on macOS (Big Sur and later), in logical pixels
const MACOS_TITLEBAR_HEIGHT: u32 = 28;

/// Operating system the shell is running on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
    #[default]
    Unknown,
}

impl Platform {
    /// Platform of the compile target
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::MacOS,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            _ => Platform::Unknown,
        }
    }

    /// Best-effort detection from a user agent string
    ///
    /// Used when the shell is hosted in a plain browser during development
    /// and the native OS query is unavailable.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("mac") {
            Platform::MacOS
        } else if ua.contains("win") {
            Platform::Windows
        } else if ua.contains("linux") {
            Platform::Linux
        } else {
            Platform::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::Unknown => "unknown",
        }
    }

    /// Height of the title bar safe area the content must leave free
    pub fn titlebar_height(self) -> u32 {
        match self {
            Platform::MacOS => MACOS_TITLEBAR_HEIGHT,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publish the title bar safe area on the display root
///
/// Returns the height that was applied.
pub fn apply_titlebar_height(root: &dyn DisplayRoot, platform: Platform) -> u32 {
    let height = platform.titlebar_height();
    root.set_style_property(TITLEBAR_HEIGHT_PROPERTY, &format!("{height}px"));
    tracing::debug!(platform = %platform, height, "applied titlebar height");
    height
}
