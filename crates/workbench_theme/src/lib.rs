//! Workbench Theme System
//!
//! Light/dark theming for the workbench shell, with system dark-mode
//! following.
//!
//! # Overview
//!
//! - **Preference**: [`ThemeMode`] is what the user picked (`light`, `dark`
//!   or `system`) and the only thing persisted
//! - **Resolved scheme**: [`ColorScheme`] is what is on screen; in `system`
//!   mode it tracks the OS dark-mode signal
//! - **Store**: [`ThemeStore`] resolves the preference and mirrors the result
//!   into the display root, the preference storage and the native window
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use workbench_theme::{FileStorage, ManualSchemeSource, ThemeMode, ThemeStore};
//!
//! let store = ThemeStore::builder()
//!     .storage(Arc::new(FileStorage::open_default().unwrap()))
//!     .source(Arc::new(ManualSchemeSource::from_system()))
//!     .build();
//!
//! store.subscribe(|change| println!("now {}", change.scheme));
//! store.set_mode(ThemeMode::System);
//! store.toggle();
//! ```
//!
//! # System Scheme
//!
//! [`detect_system_color_scheme`] queries the OS once. For change
//! notifications either feed a [`ManualSchemeSource`] from the windowing
//! layer or enable the `watcher` feature for a polling source.

pub mod config;
pub mod error;
pub mod scheme;
pub mod state;
pub mod storage;
pub mod system;

#[cfg(feature = "watcher")]
pub mod watcher;

pub use config::{ThemeConfig, WorkbenchConfig};
pub use error::{Result, ThemeError};
pub use scheme::{ColorScheme, ThemeMode};
pub use state::{
    stored_mode, ObserverId, ThemeChange, ThemeObserver, ThemeStore, ThemeStoreBuilder,
};
pub use storage::{
    default_storage_path, FileStorage, MemoryStorage, PreferenceStorage, THEME_STORAGE_KEY,
};
pub use system::{
    detect_system_color_scheme, ListenerId, ManualSchemeSource, SchemeListener, SchemeSource,
};

#[cfg(feature = "watcher")]
pub use watcher::{SchemeProbe, SystemSchemeWatcher, WatcherConfig};
