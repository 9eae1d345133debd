//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::domain::validation::{DEFAULT_NAME_MAX_LENGTH, DEFAULT_NAME_MIN_LENGTH};
use crate::domain::{RulesError, ValidationRules};

const APP_NAME: &str = "loginflow";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "example";

const DEFAULT_SPLASH_DELAY_MS: u64 = 3000;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, from file then CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Field validation settings.
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Splash screen settings.
    #[serde(default)]
    pub splash: SplashConfig,
}

/// Field validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum length of name-like fields, inclusive.
    #[serde(default = "default_name_min_length")]
    pub name_min_length: usize,

    /// Maximum length of name-like fields, inclusive.
    #[serde(default = "default_name_max_length")]
    pub name_max_length: usize,

    /// Replaces the built-in email pattern. Matched against the whole value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_pattern: Option<String>,
}

impl ValidationConfig {
    /// Builds validation rules.
    ///
    /// # Errors
    /// Returns error if the bounds are inverted.
    pub const fn rules(&self) -> Result<ValidationRules, RulesError> {
        ValidationRules::new(self.name_min_length, self.name_max_length)
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min_length: DEFAULT_NAME_MIN_LENGTH,
            name_max_length: DEFAULT_NAME_MAX_LENGTH,
            email_pattern: None,
        }
    }
}

/// Splash screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplashConfig {
    /// Time on the splash screen before login, in milliseconds.
    #[serde(default = "default_splash_delay_ms")]
    pub delay_ms: u64,

    /// Enable `TachyonFX` intro animation.
    #[serde(default = "default_true")]
    pub animations: bool,
}

impl SplashConfig {
    /// Returns the splash delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SPLASH_DELAY_MS,
            animations: true,
        }
    }
}

const fn default_name_min_length() -> usize {
    DEFAULT_NAME_MIN_LENGTH
}

const fn default_name_max_length() -> usize {
    DEFAULT_NAME_MAX_LENGTH
}

const fn default_splash_delay_ms() -> u64 {
    DEFAULT_SPLASH_DELAY_MS
}

const fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(min) = args.name_min_length {
            self.validation.name_min_length = min;
        }
        if let Some(max) = args.name_max_length {
            self.validation.name_max_length = max;
        }
        if let Some(pattern) = args.email_pattern {
            self.validation.email_pattern = Some(pattern);
        }
        if let Some(delay_ms) = args.splash_delay_ms {
            self.splash.delay_ms = delay_ms;
        }
        if args.no_animations {
            self.splash.animations = false;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("loginflow.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.validation.rules(), Ok(ValidationRules::default()));
        assert_eq!(config.validation.email_pattern, None);
        assert_eq!(config.splash.delay(), Duration::from_millis(3000));
        assert!(config.splash.animations);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [validation]
            name_max_length = 12

            [splash]
            delay_ms = 500
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.validation.name_min_length, 3);
        assert_eq!(config.validation.name_max_length, 12);
        assert_eq!(config.splash.delay_ms, 500);
        assert!(config.splash.animations);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config: AppConfig = toml::from_str(
            r"
            [validation]
            name_min_length = 40
        ",
        )
        .expect("Failed to parse config");

        assert!(config.validation.rules().is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let args = CliArgs::parse_from([
            "loginflow",
            "--log-level",
            "trace",
            "--name-min-length",
            "1",
            "--splash-delay-ms",
            "0",
            "--no-animations",
        ]);
        let mut config = AppConfig::default();
        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.validation.name_min_length, 1);
        assert_eq!(config.validation.name_max_length, 30);
        assert_eq!(config.splash.delay(), Duration::ZERO);
        assert!(!config.splash.animations);
    }

    #[test]
    fn test_serialized_default_round_trips() {
        let content = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(!content.contains("email_pattern"));

        let config: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.splash.delay_ms, 3000);
    }
}
