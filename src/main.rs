//! # Code Explainer
//!
//! Write or paste code, pick a language, press Explain, and read what a
//! local explanation service has to say about it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run against the default service at http://127.0.0.1:5000/explain
//! cargo run
//!
//! # Point at another service
//! cargo run -- --endpoint http://localhost:8080/explain
//!
//! # Start in light mode with Python selected
//! cargo run -- --light --language python
//!
//! # Write the current settings and the built-in theme for editing
//! cargo run -- --write-config --export-theme theme.json
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use explainer_core::{Config, ExplainClient, Language};
use explainer_ui::{Flags, Theme, run};

/// Code Explainer - ask a local service what your code does
#[derive(Parser, Debug)]
#[command(name = "code-explainer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Explanation service URL
    #[arg(short, long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Language selected at startup
    #[arg(short, long, value_name = "NAME")]
    language: Option<Language>,

    /// Start in light mode
    #[arg(long)]
    light: bool,

    /// Write the resolved config file and exit
    #[arg(long)]
    write_config: bool,

    /// Write the built-in theme as JSON and exit
    #[arg(long, value_name = "FILE")]
    export_theme: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Loads the config and applies command line overrides.
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?,
            None => Config::load(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.service.endpoint = endpoint.clone();
        }
        if let Some(language) = self.language {
            config.ui.default_language = language;
        }
        if self.light {
            config.ui.dark_mode = false;
        }

        config.validate()?;
        Ok(config)
    }

    /// Handles the write-and-exit flags. Returns true if the app should not start.
    fn write_files(&self, config: &Config) -> anyhow::Result<bool> {
        let mut wrote = false;

        if self.write_config {
            let path = match &self.config {
                Some(path) => {
                    config.save_to(path)?;
                    path.clone()
                }
                None => {
                    config.save()?;
                    Config::default_path()?
                }
            };
            println!("Wrote config to {}", path.display());
            wrote = true;
        }

        if let Some(path) = &self.export_theme {
            Theme::builtin().save(path)?;
            println!("Wrote theme to {}", path.display());
            wrote = true;
        }

        Ok(wrote)
    }
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Code Explainer v{}", env!("CARGO_PKG_VERSION"));

    let config = args.resolve_config()?;
    if args.write_files(&config)? {
        return Ok(());
    }

    let client = ExplainClient::new(&config.service)?;
    tracing::info!("Explanation service: {}", client.endpoint());

    // Run the application
    run(Flags { config, client }).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["code-explainer"]);
        assert!(args.endpoint.is_none());
        assert!(args.language.is_none());
        assert!(!args.light);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_overrides() {
        let args = Args::parse_from([
            "code-explainer",
            "--endpoint",
            "http://localhost:5000/explain",
            "--language",
            "c++",
            "--light",
            "-vv",
        ]);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:5000/explain"));
        assert_eq!(args.language, Some(Language::Cpp));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndefault_language = \"java\"\n").unwrap();

        let args = Args::parse_from([
            "code-explainer",
            "--config",
            path.to_str().unwrap(),
            "--endpoint",
            "http://localhost:9000/explain",
            "--light",
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.service.endpoint, "http://localhost:9000/explain");
        assert_eq!(config.ui.default_language, Language::Java);
        assert!(!config.ui.dark_mode);
    }

    #[test]
    fn test_bad_endpoint_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let args = Args::parse_from([
            "code-explainer",
            "--config",
            path.to_str().unwrap(),
            "--endpoint",
            "nonsense",
        ]);
        assert!(args.resolve_config().is_err());
    }

    #[test]
    fn test_write_config_saves_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let args = Args::parse_from([
            "code-explainer",
            "--config",
            path.to_str().unwrap(),
            "--language",
            "python",
            "--write-config",
        ]);
        let config = Config {
            ui: explainer_core::config::UiConfig {
                default_language: Language::Python,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(args.write_files(&config).unwrap());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ui.default_language, Language::Python);
    }

    #[test]
    fn test_export_theme_writes_loadable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");

        let args = Args::parse_from(["code-explainer", "--export-theme", path.to_str().unwrap()]);
        assert!(args.write_files(&Config::default()).unwrap());

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme, Theme::builtin());
    }

    #[test]
    fn test_no_write_flags_starts_app() {
        let args = Args::parse_from(["code-explainer"]);
        assert!(!args.write_files(&Config::default()).unwrap());
    }
}
