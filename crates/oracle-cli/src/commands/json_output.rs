//! JSON output types for machine-readable CLI output.
//!
//! Every `--json` command prints one object with `success`, `errors` and, on
//! success, a `result` payload.

use anyhow::{Context, Result};
use oracle_dice::{Distribution, Formula};
use oracle_symbols::{ExportedFile, SymbolDefinition, SymbolError, SymbolKey};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_001";
    /// Target file already exists
    pub const ALREADY_EXISTS: &str = "CLI_002";
    /// Invalid color argument
    pub const INVALID_COLOR: &str = "CLI_003";
    /// Unknown symbol key
    pub const UNKNOWN_SYMBOL: &str = "CLI_004";
    /// Generated document failed validation
    pub const INVALID_SVG: &str = "CLI_005";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File path involved (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Converts a symbol error into a JSON error with a stable code.
pub fn symbol_error_to_json(error: &SymbolError) -> JsonError {
    let code = match error {
        SymbolError::UnknownKey(_) => error_codes::UNKNOWN_SYMBOL,
        SymbolError::InvalidColor(_) => error_codes::INVALID_COLOR,
        SymbolError::InvalidSvg(_) => error_codes::INVALID_SVG,
        SymbolError::AlreadyExists(_) => error_codes::ALREADY_EXISTS,
        SymbolError::Io(_) => error_codes::FILE_WRITE,
        SymbolError::Json(_) => error_codes::JSON_SERIALIZE,
    };
    let json = JsonError::new(code, error.to_string());
    match error {
        SymbolError::AlreadyExists(path) => json.with_file(path.display().to_string()),
        _ => json,
    }
}

/// Generic command envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command payload (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Payload of `oracle dist --json`.
#[derive(Debug, Clone, Serialize)]
pub struct DistResult {
    #[serde(flatten)]
    pub distribution: Distribution,
    pub formulas: &'static [Formula],
}

/// Payload entry of `oracle symbols list --json` and `show --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolInfo {
    #[serde(flatten)]
    pub symbol: SymbolDefinition,
    pub file_name: String,
    /// Print size of 6 mm at 72 and 96 DPI.
    pub print_px_72dpi: u32,
    pub print_px_96dpi: u32,
}

/// One exported file in `symbols export --json` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportedFileJson {
    pub key: SymbolKey,
    pub path: String,
    pub hash: String,
    pub bytes: usize,
}

impl From<&ExportedFile> for ExportedFileJson {
    fn from(file: &ExportedFile) -> Self {
        Self {
            key: file.key,
            path: file.path.display().to_string(),
            hash: file.hash.clone(),
            bytes: file.bytes,
        }
    }
}

/// Payload of the export commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    pub files: Vec<ExportedFileJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_failure_omits_result() {
        let output: CommandOutput<ExportResult> =
            CommandOutput::failure(vec![JsonError::new(error_codes::FILE_WRITE, "disk full")]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0]["code"], "CLI_001");
        assert!(value.get("result").is_none());
        assert!(value["errors"][0].get("file").is_none());
    }

    #[test]
    fn test_already_exists_carries_file() {
        let err = SymbolError::AlreadyExists(PathBuf::from("out/order_sun.svg"));
        let json = symbol_error_to_json(&err);
        assert_eq!(json.code, error_codes::ALREADY_EXISTS);
        assert_eq!(json.file.as_deref(), Some("out/order_sun.svg"));
    }
}
