//! Infrastructure layer with configuration and collaborator adapters.

/// Application configuration.
pub mod config;
/// Email pattern matcher.
pub mod email;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use email::PatternEmailMatcher;
