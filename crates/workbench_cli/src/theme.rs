//! `workbench theme` subcommands

use anyhow::{Context, Result};
use clap::Subcommand;
use std::sync::Arc;
use std::time::Duration;
use workbench_platform::{DocumentRoot, HeadlessWindow};
use workbench_theme::{
    detect_system_color_scheme, stored_mode, ColorScheme, FileStorage, ManualSchemeSource,
    SchemeSource, SystemSchemeWatcher, ThemeConfig, ThemeMode, ThemeStore, WatcherConfig,
};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the stored preference and the scheme it resolves to
    Show,

    /// Store a new preference
    Set {
        /// light, dark or system
        mode: ThemeMode,
    },

    /// Flip between light and dark
    Toggle,

    /// Follow the OS color scheme and print every change
    Watch {
        /// Stop after this many seconds (runs until interrupted when omitted)
        #[arg(long)]
        seconds: Option<u64>,
    },
}

pub fn run(action: ThemeAction, config: &ThemeConfig) -> Result<()> {
    let storage = open_storage(config)?;
    let path = storage.path().display().to_string();

    match action {
        ThemeAction::Show => {
            let (mode, scheme) = describe(&storage, config, detect_system_color_scheme());
            println!("mode:     {mode}");
            println!("resolved: {scheme}");
            println!("storage:  {path}");
        }
        ThemeAction::Set { mode } => {
            let store = build_store(storage, config, Arc::new(ManualSchemeSource::from_system()));
            store.set_mode(mode);
            println!("{} ({})", store.mode(), store.resolved());
        }
        ThemeAction::Toggle => {
            let store = build_store(storage, config, Arc::new(ManualSchemeSource::from_system()));
            let mode = store.toggle();
            println!("{} ({})", mode, store.resolved());
        }
        ThemeAction::Watch { seconds } => {
            let watcher = SystemSchemeWatcher::new(WatcherConfig {
                poll_interval: config.poll_interval(),
            });
            let store = build_store(storage, config, Arc::new(watcher));
            if !store.mode().is_system() {
                tracing::warn!(
                    "Preference is '{}', OS changes are ignored until it is set to system",
                    store.mode()
                );
            }

            println!("{} ({})", store.mode(), store.resolved());
            store.subscribe(|change| println!("{} ({})", change.mode, change.scheme));

            match seconds {
                Some(seconds) => std::thread::sleep(Duration::from_secs(seconds)),
                None => loop {
                    std::thread::park();
                },
            }
            store.dispose();
        }
    }

    Ok(())
}

fn open_storage(config: &ThemeConfig) -> Result<FileStorage> {
    let path = config
        .resolved_storage_path()
        .context("No config directory on this platform; set theme.storage_path in workbench.toml")?;
    Ok(FileStorage::new(path))
}

/// Stored preference and its resolution, without touching the file
fn describe(
    storage: &FileStorage,
    config: &ThemeConfig,
    system: ColorScheme,
) -> (ThemeMode, ColorScheme) {
    let mode = stored_mode(storage, &config.storage_key);
    (mode, mode.resolve(system))
}

fn build_store(
    storage: FileStorage,
    config: &ThemeConfig,
    source: Arc<dyn SchemeSource>,
) -> ThemeStore {
    ThemeStore::builder()
        .storage(Arc::new(storage))
        .storage_key(config.storage_key.clone())
        .source(source)
        .display(Arc::new(DocumentRoot::new()))
        .window(Arc::new(HeadlessWindow::new()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_open_storage_uses_configured_path() {
        let config = ThemeConfig {
            storage_path: Some(PathBuf::from("/tmp/workbench-prefs.json")),
            ..ThemeConfig::default()
        };
        let storage = open_storage(&config).unwrap();
        assert_eq!(storage.path(), PathBuf::from("/tmp/workbench-prefs.json"));
    }

    #[test]
    fn test_show_leaves_preference_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let config = ThemeConfig {
            storage_path: Some(path.clone()),
            ..ThemeConfig::default()
        };

        let storage = open_storage(&config).unwrap();
        assert_eq!(
            describe(&storage, &config, ColorScheme::Dark),
            (ThemeMode::Light, ColorScheme::Light)
        );
        assert!(!path.exists());

        let corrupt = r#"{"dy-auto-work-theme": "blue"}"#;
        fs::write(&path, corrupt).unwrap();
        assert_eq!(
            describe(&storage, &config, ColorScheme::Dark),
            (ThemeMode::Light, ColorScheme::Light)
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), corrupt);

        fs::write(&path, r#"{"dy-auto-work-theme": "system"}"#).unwrap();
        assert_eq!(
            describe(&storage, &config, ColorScheme::Dark),
            (ThemeMode::System, ColorScheme::Dark)
        );
    }
}
