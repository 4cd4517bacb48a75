use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Top-level table of `config.toml` a setting lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Server,
    Database,
    Currency,
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Server => "server",
            Self::Database => "database",
            Self::Currency => "currency",
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A loaded value failed `validate()`
    #[error("Invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: ConfigSection,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<S: Into<String>>(section: ConfigSection, message: S) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Section of a validation failure; `None` for load errors
    pub fn section(&self) -> Option<ConfigSection> {
        match self {
            Self::Invalid { section, .. } => Some(*section),
            Self::Io { .. } | Self::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = Result<T, ConfigError>;
