//! Configuration loading for the intake TUI
//!
//! The file format lives in `intake_common::config`; this module layers
//! command line overrides on top of it.

use anyhow::{Context, Result};
use intake_common::Config;
use std::path::Path;

/// Values given on the command line, each replacing the file setting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub clinicians: Option<u32>,
    pub closing_hour: Option<u32>,
    pub log_level: Option<String>,
    /// Also turns file logging on
    pub log_file: Option<String>,
}

impl ConfigOverrides {
    /// Apply these overrides to `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(clinicians) = self.clinicians {
            config.defaults.clinicians = clinicians;
        }
        if let Some(hour) = self.closing_hour {
            config.defaults.closing_hour = hour;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.log_file = Some(file.clone());
            config.logging.log_to_file = true;
        }
    }
}

/// Load configuration from file or use defaults, then apply overrides
pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::default(),
    };

    overrides.apply(&mut config);
    config
        .validate()
        .context("Invalid configuration after command line overrides")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = load(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("intake.toml");
        fs::write(&path, "[defaults]\nclinicians = 3\nclosing_hour = 18\n").unwrap();

        let overrides = ConfigOverrides {
            closing_hour: Some(20),
            log_file: Some("session.log".to_string()),
            ..Default::default()
        };
        let config = load(Some(&path), &overrides).unwrap();

        assert_eq!(config.defaults.clinicians, 3);
        assert_eq!(config.defaults.closing_hour, 20);
        assert!(config.logging.log_to_file);
        assert_eq!(config.logging.log_file.as_deref(), Some("session.log"));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = ConfigOverrides {
            closing_hour: Some(25),
            ..Default::default()
        };
        let err = load(None, &overrides).unwrap_err();
        assert!(format!("{:#}", err).contains("closing_hour"));
    }
}
