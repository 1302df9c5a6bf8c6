use crate::model::Theme;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Command line arguments. Anything given here overrides the config file.
#[derive(Debug, Default, Parser)]
#[command(name = "folio-tui", version, about = "A terminal portfolio viewer")]
pub struct Args {
    /// Portfolio content file (JSON). Uses the built-in portfolio when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Configuration file path.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory that site-relative image and résumé paths resolve against.
    #[arg(long, value_name = "DIR")]
    pub asset_root: Option<PathBuf>,

    /// Initial color theme.
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Skip the splash screen.
    #[arg(long)]
    pub no_splash: bool,

    /// Disable mouse capture.
    #[arg(long)]
    pub no_mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    #[serde(default)]
    pub asset_root: Option<PathBuf>,
    /// Theme at startup. Toggling at runtime is never written back.
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub mouse: bool,
    #[serde(default = "default_true")]
    pub show_splash: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: None,
            asset_root: None,
            theme: Theme::Dark,
            log_level: LogLevel::Info,
            log_path: None,
            mouse: true,
            show_splash: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".folio-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Read a config file. A missing file is not an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(Some(config))
    }

    /// Build the effective configuration from the config file and the CLI
    pub fn resolve(args: &Args) -> anyhow::Result<Config> {
        let file_config = match args.config.clone().or_else(Self::config_path) {
            Some(path) => Self::load_from(&path)?,
            None => None,
        };
        Ok(file_config.unwrap_or_default().merge_args(args))
    }

    fn merge_args(mut self, args: &Args) -> Config {
        if let Some(content) = &args.content {
            self.content_path = Some(content.clone());
        }
        if let Some(root) = &args.asset_root {
            self.asset_root = Some(root.clone());
        }
        if let Some(theme) = args.theme {
            self.theme = theme;
        }
        if let Some(level) = args.log_level {
            self.log_level = level;
        }
        if let Some(path) = &args.log_path {
            self.log_path = Some(path.clone());
        }
        if args.no_splash {
            self.show_splash = false;
        }
        if args.no_mouse {
            self.mouse = false;
        }
        self
    }

    /// Where log output goes: the configured path or `~/.folio-tui/folio.log`
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("folio.log")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "theme": "light", "log_level": "debug" }}"#).unwrap();

        let config = Config::load_from(file.path()).unwrap().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.mouse);
        assert!(config.show_splash);
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "theme": "light", "mouse": true }}"#).unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            theme: Some(Theme::Dark),
            content: Some(PathBuf::from("site.json")),
            no_mouse: true,
            no_splash: true,
            ..Args::default()
        };

        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.content_path, Some(PathBuf::from("site.json")));
        assert!(!config.mouse);
        assert!(!config.show_splash);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "folio-tui",
            "--content",
            "me.json",
            "--theme",
            "light",
            "--log-level",
            "warn",
            "--no-splash",
        ]);
        assert_eq!(args.content, Some(PathBuf::from("me.json")));
        assert_eq!(args.theme, Some(Theme::Light));
        assert_eq!(args.log_level, Some(LogLevel::Warn));
        assert!(args.no_splash);
    }

    #[test]
    fn test_explicit_log_path_wins() {
        let config = Config {
            log_path: Some(PathBuf::from("/tmp/folio.log")),
            ..Config::default()
        };
        assert_eq!(config.effective_log_path(), Some(PathBuf::from("/tmp/folio.log")));
    }
}
