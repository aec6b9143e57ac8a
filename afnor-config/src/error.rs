//! Error type of the keymap loader.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File I/O error
    FileRead { path: String, message: String },
    /// TOML parsing error
    TomlParse { path: String, message: String },
    /// Validation error with context
    Validation { field: String, message: String },
    /// Missing required field
    MissingField { field: String },
    /// Invalid value
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
    /// A name that is neither an `FR_*` binding nor a keycode
    UnknownKey { layer: String, key: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read keymap file '{}': {}", path, message)
            }
            ConfigError::TomlParse { path, message } => {
                write!(f, "Failed to parse '{}': {}", path, message)
            }
            ConfigError::Validation { field, message } => {
                write!(f, "Validation error in '{}': {}", field, message)
            }
            ConfigError::MissingField { field } => {
                write!(f, "Missing required field: {}", field)
            }
            ConfigError::InvalidValue {
                field,
                value,
                expected,
            } => {
                write!(f, "Invalid value '{}' for '{}', expected: {}", value, field, expected)
            }
            ConfigError::UnknownKey { layer, key } => {
                write!(f, "Unknown key '{}' in layer '{}'", key, layer)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for keymap loading
pub type ConfigResult<T> = Result<T, ConfigError>;
