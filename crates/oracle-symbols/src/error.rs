//! Error types for symbol lookup and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while looking up or exporting symbols.
#[derive(Debug, Error)]
pub enum SymbolError {
    /// No symbol has this key.
    #[error("unknown symbol '{0}' (expected one of: sun, leaf, flame, star, moon)")]
    UnknownKey(String),

    /// A color was not a `#RRGGBB` hex string.
    #[error("invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    /// Markup does not have a usable `<svg>` root element.
    #[error("invalid SVG document: {0}")]
    InvalidSvg(String),

    /// The target file exists and overwriting was not requested.
    #[error("refusing to overwrite existing file: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Filesystem error while writing an export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
