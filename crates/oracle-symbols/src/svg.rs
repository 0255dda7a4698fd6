//! SVG document checks and export documents.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::catalog::SymbolDefinition;
use crate::error::SymbolError;
use crate::key::SymbolKey;

/// SVG namespace required on the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Optional XML declaration, then a `<svg ...>` root closed at the very end.
const SVG_ROOT_PATTERN: &str = r"(?s)\A\s*(?:<\?xml[^>]*\?>\s*)?<svg\b([^>]*)>.*</svg>\s*\z";

const HEX_COLOR_PATTERN: &str = r"\A#[0-9A-Fa-f]{6}\z";

static SVG_ROOT_REGEX: OnceLock<Regex> = OnceLock::new();
static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn svg_root_regex() -> &'static Regex {
    SVG_ROOT_REGEX.get_or_init(|| Regex::new(SVG_ROOT_PATTERN).expect("invalid regex pattern"))
}

fn hex_color_regex() -> &'static Regex {
    HEX_COLOR_REGEX.get_or_init(|| Regex::new(HEX_COLOR_PATTERN).expect("invalid regex pattern"))
}

/// Returns true for `#RRGGBB` colors.
pub fn is_hex_color(color: &str) -> bool {
    hex_color_regex().is_match(color)
}

/// Checks that `markup` is a single `<svg>` element with the SVG namespace
/// and a `viewBox`.
pub fn validate_svg(markup: &str) -> Result<(), SymbolError> {
    if markup.trim().is_empty() {
        return Err(SymbolError::InvalidSvg("document is empty".to_string()));
    }
    let captures = svg_root_regex()
        .captures(markup)
        .ok_or_else(|| SymbolError::InvalidSvg("missing <svg> root element".to_string()))?;
    let attributes = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

    if !attributes.contains(&format!("xmlns=\"{}\"", SVG_NAMESPACE)) {
        return Err(SymbolError::InvalidSvg(
            "root element is missing the SVG namespace".to_string(),
        ));
    }
    if !attributes.contains("viewBox=") {
        return Err(SymbolError::InvalidSvg(
            "root element is missing a viewBox".to_string(),
        ));
    }
    Ok(())
}

/// An SVG file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SvgDocument {
    /// Symbol the document renders.
    pub key: SymbolKey,
    /// `order_<key>.svg`.
    pub file_name: String,
    /// Complete document text.
    pub contents: String,
    /// BLAKE3 hash of `contents` (64 lowercase hex characters).
    pub hash: String,
}

impl SvgDocument {
    pub(crate) fn new(symbol: &SymbolDefinition, contents: String) -> Self {
        let hash = blake3::hash(contents.as_bytes()).to_hex().to_string();
        Self {
            key: symbol.key,
            file_name: symbol.key.file_name(),
            contents,
            hash,
        }
    }

    /// Size of the document in bytes.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
