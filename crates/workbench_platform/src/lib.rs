//! Workbench Platform
//!
//! Platform surfaces the workbench shell talks to:
//!
//! - [`Platform`]: which OS the shell runs on, and the title bar safe area
//!   that follows from it
//! - [`DisplayRoot`]: the global UI root that in-app styling keys off
//! - [`WindowDecoration`]: native window chrome with its own color scheme
//!
//! The `desktop` feature adds [`WinitDecoration`] for real winit windows.

pub mod display;
pub mod error;
pub mod platform;
pub mod window;

#[cfg(feature = "desktop")]
pub mod desktop;

pub use display::{DisplayRoot, DocumentRoot};
pub use error::{PlatformError, Result};
pub use platform::{apply_titlebar_height, Platform, TITLEBAR_HEIGHT_PROPERTY};
pub use window::{DecorationCallback, HeadlessWindow, WindowDecoration, WindowTheme};

#[cfg(feature = "desktop")]
pub use desktop::WinitDecoration;
