use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::types::CapacityConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Tool configuration, usually read from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting staffing values
    pub defaults: CapacityConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How often the clock is re-read when no key is pressed
    pub tick_interval_ms: u64,
    /// Disable for monochrome terminals
    pub use_colors: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub log_to_file: bool,
    pub log_file: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            use_colors: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: false,
            log_file: Some("intake-tui.log".to_string()),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::from)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default configuration rendered as TOML
    pub fn generate_example() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| "# Failed to generate config".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.defaults.clinicians == 0 {
            return Err(invalid("defaults.clinicians", "must be at least 1"));
        }
        if self.defaults.closing_hour > 23 {
            return Err(invalid(
                "defaults.closing_hour",
                format!("{} is not an hour of the day", self.defaults.closing_hour),
            ));
        }
        if self.ui.tick_interval_ms == 0 {
            return Err(invalid("ui.tick_interval_ms", "must be greater than 0"));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(invalid("logging.level", self.logging.level.clone()));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: impl Into<String>) -> crate::IntakeError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.into(),
    }
    .into()
}
