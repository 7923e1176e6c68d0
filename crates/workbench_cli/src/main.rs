//! Workbench CLI
//!
//! Inspect and change the shell's theme preference from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use workbench_platform::{apply_titlebar_height, DocumentRoot, Platform};
use workbench_theme::WorkbenchConfig;

mod theme;

#[derive(Parser)]
#[command(name = "workbench")]
#[command(author, version, about = "Workbench shell utilities", long_about = None)]
struct Cli {
    /// Directory containing workbench.toml (or the file itself)
    #[arg(long, global = true, default_value = ".")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the theme preference
    Theme {
        #[command(subcommand)]
        action: theme::ThemeAction,
    },

    /// Show the detected platform and title bar safe area
    Platform,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = WorkbenchConfig::load_from_dir(&cli.config)?;

    match cli.command {
        Commands::Theme { action } => theme::run(action, &config.theme),
        Commands::Platform => {
            show_platform();
            Ok(())
        }
    }
}

fn show_platform() {
    let platform = Platform::current();
    let root = DocumentRoot::new();
    let height = apply_titlebar_height(&root, platform);
    println!("platform:        {platform}");
    println!("titlebar height: {height}px");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use workbench_theme::ThemeMode;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_theme_set() {
        let cli = Cli::parse_from(["workbench", "theme", "set", "System"]);
        match cli.command {
            Commands::Theme {
                action: theme::ThemeAction::Set { mode },
            } => assert_eq!(mode, ThemeMode::System),
            _ => panic!("expected theme set"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["workbench", "theme", "set", "blue"]).is_err());
    }
}
