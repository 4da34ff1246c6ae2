//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! catalog lookups that miss, unknown layer kinds, interactive control violations,
//! invalid configuration, IO, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("category '{category}' not found")]
    CategoryNotFound { category: String },

    #[error("example '{example}' not found in category '{category}'")]
    ExampleNotFound { category: String, example: String },

    #[error("unknown layer kind '{name}'")]
    UnknownLayerKind { name: String },

    #[error("unknown control '{name}'")]
    UnknownControl { name: String },

    #[error("value {value} for control '{name}' is not a finite number")]
    ControlNotFinite { name: String, value: f64 },

    #[error("value {value} for control '{name}' is outside [{min}, {max}]")]
    ControlOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("value {value} for control '{name}' is not a multiple of {step} from {min}")]
    ControlOffStep {
        name: String,
        value: f64,
        min: f64,
        step: f64,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Returns `true` when the error reports a category or example label missing from a catalog.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::CategoryNotFound { .. } | Error::ExampleNotFound { .. }
        )
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
