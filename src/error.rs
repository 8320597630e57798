//! Error types.
//!
//! Each concern has its own error enum; [`Error`] wraps them so callers can
//! propagate with `?` and still match on the specific failure.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Properties(#[from] PropertiesError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors reading or writing a `key.properties` file.
#[derive(Error, Debug)]
pub enum PropertiesError {
    /// A non-blank, non-comment line is not a `key=value` pair.
    #[error("{}:{line}: malformed line '{content}': {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        reason: &'static str,
    },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors in `keyprops.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read keyprops.toml: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid keyprops.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Readiness failures reported by an explicit signing check.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("signing profile incomplete: missing {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("keystore not found: {}", .0.display())]
    StoreFileNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
