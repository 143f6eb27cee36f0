//! Logging subsystem for Quillbox
//!
//! A unified logging interface over the `tracing` crate. Respects
//! `RUST_LOG` when set; otherwise the configured level applies. Output
//! is plain text or JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod level;

pub use error::LoggingError;
pub use level::{LogLevel, ParseLevelError};

/// Configuration for the logging subsystem
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum level to emit
    pub level: LogLevel,
    /// Emit JSON records instead of plain text
    pub json: bool,
    /// Include the target module in each record
    pub show_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            json: false,
            show_target: true,
        }
    }
}

impl LogConfig {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    pub fn show_target(mut self, enabled: bool) -> Self {
        self.show_target = enabled;
        self
    }
}

impl TryFrom<&crate::config::LoggingConfig> for LogConfig {
    type Error = LoggingError;

    fn try_from(settings: &crate::config::LoggingConfig) -> Result<Self, Self::Error> {
        let level = settings
            .level
            .parse::<LogLevel>()
            .map_err(|err| LoggingError::InvalidConfiguration(err.to_string()))?;
        Ok(LogConfig {
            level,
            json: settings.json_format,
            show_target: settings.with_target,
        })
    }
}

/// Initialize logging with the default configuration.
pub fn init() -> Result<(), LoggingError> {
    init_with(LogConfig::default())
}

/// Initialize logging with a custom configuration.
///
/// May be called at most once per process; a second call reports
/// `InitializationFailed`.
pub fn init_with(config: LogConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let fmt_layer = fmt::layer().with_target(config.show_target);

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json {
        registry
            .with(fmt_layer.json())
            .try_init()
            .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;
    } else {
        registry
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new(LogLevel::Debug).json(true).show_target(false);
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.json);
        assert!(!config.show_target);
    }

    #[test]
    fn test_log_config_from_settings() {
        let settings = crate::config::LoggingConfig {
            level: "warn".to_string(),
            json_format: true,
            with_target: true,
        };
        let config = LogConfig::try_from(&settings).unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert!(config.json);
    }

    #[test]
    fn test_bad_level_in_settings() {
        let settings = crate::config::LoggingConfig {
            level: "shout".to_string(),
            json_format: false,
            with_target: true,
        };
        assert!(LogConfig::try_from(&settings).is_err());
    }
}
