use thiserror::Error;

/// Result alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration file and value errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Failed to read configuration file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Rejections from the manual override panel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverrideError {
    /// Confirmation attempted with an empty or whitespace-only reason
    #[error("Override reason required")]
    EmptyReason,

    /// Confirmation attempted while the panel is closed
    #[error("Override panel is not open")]
    NotEditing,
}
