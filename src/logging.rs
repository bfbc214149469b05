//! Logging setup for binaries and demos embedding the game.
//!
//! The library itself only emits `tracing` events:
//! - `debug` for every tap
//! - `info` when a glass is served
//! - `warn` when an injected squeeze source misbehaves
//!
//! Hosts install a subscriber with [`LoggingConfig::init`] or [`init_default`].
//!
//! ```no_run
//! use lemonade::logging::{LogFormat, LoggingConfig};
//!
//! LoggingConfig::new(LogFormat::Pretty, "debug".to_string()).init();
//! ```

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// One JSON object per line
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: String) -> Self {
        Self { format, level }
    }

    /// Install a global subscriber writing to stderr.
    ///
    /// `RUST_LOG` overrides the configured level. Returns `false` if a
    /// subscriber was already installed.
    pub fn init(&self) -> bool {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .flatten_event(true)
                .with_target(true)
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };
        result.is_ok()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(LogFormat::Text, "warn".to_string())
    }
}

/// Initialize logging from `LEMONADE_LOG_FORMAT` and `LEMONADE_LOG_LEVEL`.
///
/// Falls back to text format at `warn` level.
pub fn init_default() -> bool {
    config_from_env().init()
}

fn config_from_env() -> LoggingConfig {
    let defaults = LoggingConfig::default();
    let format = std::env::var("LEMONADE_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(defaults.format);
    let level = std::env::var("LEMONADE_LOG_LEVEL").unwrap_or(defaults.level);
    LoggingConfig::new(format, level)
}
