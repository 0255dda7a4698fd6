//! Oracle Order Symbols
//!
//! The five Order symbols of the Oracle card game as static SVG line art,
//! with their terminal glyphs, colors and species, plus an exporter that
//! saves them as `order_<key>.svg` files.
//!
//! # Example
//!
//! ```no_run
//! use oracle_symbols::{export_symbol, Exporter, SymbolKey};
//!
//! let doc = export_symbol(SymbolKey::Sun);
//! assert_eq!(doc.file_name, "order_sun.svg");
//!
//! let written = Exporter::new("symbols").write_all().unwrap();
//! assert_eq!(written.len(), 5);
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod key;
pub mod svg;

pub use catalog::{all_symbols, find_symbol, pixels_for_mm, symbol, SymbolDefinition};
pub use error::SymbolError;
pub use export::{
    export_all, export_recolored, export_symbol, ExportManifest, ExportedFile, Exporter,
    ManifestEntry, MANIFEST_FILE_NAME, MANIFEST_VERSION,
};
pub use key::SymbolKey;
pub use svg::{is_hex_color, validate_svg, SvgDocument, SVG_NAMESPACE};
