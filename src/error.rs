//! Error types for navwalker
//!
//! Rendering itself never fails; these cover reading menus and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for navwalker operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for navwalker operations
#[derive(Error, Debug)]
pub enum NavError {
    /// Menu file extension is not one of json, yaml, yml or toml
    #[error("unsupported menu format for {path} - expected .json, .yaml, .yml or .toml")]
    UnsupportedFormat { path: PathBuf },

    /// Menu file could not be deserialized
    #[error("invalid menu in {file}: {message}")]
    InvalidMenu { file: PathBuf, message: String },

    /// Configuration file could not be deserialized
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
