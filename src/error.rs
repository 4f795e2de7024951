use std::fmt;

use thiserror::Error;

/// Which selector table a key was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    FurnitureFamily,
    CarModel,
    Router,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectorKind::FurnitureFamily => "furniture family",
            SelectorKind::CarModel => "car model",
            SelectorKind::Router => "router",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("unrecognized {kind} key: '{key}'")]
    UnknownKey { kind: SelectorKind, key: String },

    #[error("failed to parse demo settings: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl PatternError {
    pub fn unknown_key(kind: SelectorKind, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.into(),
        }
    }

    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for the one domain failure every pattern shares.
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, PatternError::UnknownKey { .. })
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
