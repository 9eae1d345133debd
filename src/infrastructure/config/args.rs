use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments. Each set flag overrides the config file.
#[derive(Debug, Parser)]
#[command(
    name = "loginflow",
    version,
    about = "A terminal sign-in flow with login and registration forms",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Minimum length of username, password and name fields.
    #[arg(long, value_name = "CHARS")]
    pub name_min_length: Option<usize>,

    /// Maximum length of username, password and name fields.
    #[arg(long, value_name = "CHARS")]
    pub name_max_length: Option<usize>,

    /// Custom email pattern, matched against the whole value.
    #[arg(long, value_name = "REGEX")]
    pub email_pattern: Option<String>,

    /// Splash screen duration in milliseconds.
    #[arg(long, value_name = "MS")]
    pub splash_delay_ms: Option<u64>,

    /// Disable splash animation.
    #[arg(long)]
    pub no_animations: bool,
}
