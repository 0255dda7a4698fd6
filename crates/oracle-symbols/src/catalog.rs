//! The static catalog of Order symbols.
//!
//! Each symbol is simple line art in a 100x100 viewBox with a stroke width of
//! about 4 units, which stays legible when printed at 6 mm on physical cards.
//! The Unicode glyphs are the terminal stand-ins for the same Orders.

use serde::Serialize;

use crate::error::SymbolError;
use crate::key::SymbolKey;
use crate::svg::{is_hex_color, validate_svg};

/// A fixed Order symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymbolDefinition {
    pub key: SymbolKey,
    /// Display name, e.g. "Order A - Dawn Light".
    pub name: &'static str,
    /// Code point of the terminal glyph, e.g. "U+2600".
    pub unicode_codepoint: &'static str,
    /// The terminal glyph itself.
    pub glyph: &'static str,
    /// Primary stroke color as `#RRGGBB`.
    pub color_hex: &'static str,
    /// Complete standalone SVG document.
    pub svg_markup: &'static str,
    /// Species belonging to this Order.
    pub species: [&'static str; 3],
}

impl SymbolDefinition {
    /// Markup with the primary stroke color replaced by `color`.
    ///
    /// Secondary accents (the inner flame) keep their own color.
    pub fn recolored(&self, color: &str) -> Result<String, SymbolError> {
        if !is_hex_color(color) {
            return Err(SymbolError::InvalidColor(color.to_string()));
        }
        let markup = self.svg_markup.replace(self.color_hex, color);
        validate_svg(&markup)?;
        Ok(markup)
    }
}

const SUN_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <!-- Sun rays -->
  <line x1="50" y1="10" x2="50" y2="25" stroke="#FFA500" stroke-width="4" stroke-linecap="round"/>
  <line x1="50" y1="75" x2="50" y2="90" stroke="#FFA500" stroke-width="4" stroke-linecap="round"/>
  <line x1="10" y1="50" x2="25" y2="50" stroke="#FFA500" stroke-width="4" stroke-linecap="round"/>
  <line x1="75" y1="50" x2="90" y2="50" stroke="#FFA500" stroke-width="4" stroke-linecap="round"/>
  <line x1="21" y1="21" x2="32" y2="32" stroke="#FFA500" stroke-width="4" stroke-linecap="round"/>
  <line x1="68" y1="68" x2="79" y2="79" stroke="#FFA500" stroke-width="4" stroke-linecap="round"/>
  <line x1="79" y1="21" x2="68" y2="32" stroke="#FFA500" stroke-width="4" stroke-linecap="round"/>
  <line x1="32" y1="68" x2="21" y2="79" stroke="#FFA500" stroke-width="4" stroke-linecap="round"/>
  <!-- Center circle -->
  <circle cx="50" cy="50" r="18" fill="none" stroke="#FFA500" stroke-width="4"/>
</svg>"##;

const LEAF_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <!-- Leaf outline -->
  <path d="M 50 15 Q 70 30 75 50 Q 70 70 50 85 Q 30 70 25 50 Q 30 30 50 15 Z"
        fill="none" stroke="#228B22" stroke-width="4" stroke-linejoin="round"/>
  <!-- Center vein -->
  <line x1="50" y1="15" x2="50" y2="85" stroke="#228B22" stroke-width="3"/>
  <!-- Side veins -->
  <line x1="50" y1="30" x2="35" y2="40" stroke="#228B22" stroke-width="2"/>
  <line x1="50" y1="30" x2="65" y2="40" stroke="#228B22" stroke-width="2"/>
  <line x1="50" y1="50" x2="30" y2="55" stroke="#228B22" stroke-width="2"/>
  <line x1="50" y1="50" x2="70" y2="55" stroke="#228B22" stroke-width="2"/>
  <line x1="50" y1="70" x2="35" y2="72" stroke="#228B22" stroke-width="2"/>
  <line x1="50" y1="70" x2="65" y2="72" stroke="#228B22" stroke-width="2"/>
</svg>"##;

const FLAME_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <!-- Outer flame -->
  <path d="M 50 15 Q 60 30 65 45 Q 68 60 65 70 Q 60 80 50 85 Q 40 80 35 70 Q 32 60 35 45 Q 40 30 50 15 Z"
        fill="none" stroke="#DC143C" stroke-width="4" stroke-linejoin="round"/>
  <!-- Inner flame -->
  <path d="M 50 30 Q 56 40 58 52 Q 58 62 50 70 Q 42 62 42 52 Q 44 40 50 30 Z"
        fill="none" stroke="#FF6347" stroke-width="3" stroke-linejoin="round"/>
  <!-- Flame wisp at top -->
  <path d="M 50 15 Q 48 10 50 5" fill="none" stroke="#DC143C" stroke-width="2" stroke-linecap="round"/>
</svg>"##;

const STAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <!-- 4-pointed star -->
  <path d="M 50 10 L 55 45 L 90 50 L 55 55 L 50 90 L 45 55 L 10 50 L 45 45 Z"
        fill="none" stroke="#9932CC" stroke-width="4" stroke-linejoin="miter"/>
  <!-- Inner diamond for depth -->
  <path d="M 50 30 L 60 50 L 50 70 L 40 50 Z"
        fill="none" stroke="#9932CC" stroke-width="2"/>
</svg>"##;

const MOON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <!-- Crescent moon - outer arc -->
  <path d="M 30 10 C 15 20, 10 40, 10 50 C 10 60, 15 80, 30 90"
        fill="none" stroke="#028eb5" stroke-width="5" stroke-linecap="round"/>
  <!-- Crescent moon - inner arc -->
  <path d="M 30 10 C 50 25, 60 40, 60 50 C 60 60, 50 75, 30 90"
        fill="none" stroke="#028eb5" stroke-width="5" stroke-linecap="round"/>
</svg>"##;

static SYMBOLS: [SymbolDefinition; 5] = [
    SymbolDefinition {
        key: SymbolKey::Sun,
        name: "Order A - Dawn Light",
        unicode_codepoint: "U+2600",
        glyph: "\u{2600}",
        color_hex: "#FFA500",
        svg_markup: SUN_SVG,
        species: ["Human", "Elf", "Dwarf"],
    },
    SymbolDefinition {
        key: SymbolKey::Leaf,
        name: "Order B - Verdant Light",
        unicode_codepoint: "U+1F343",
        glyph: "\u{1F343}",
        color_hex: "#228B22",
        svg_markup: LEAF_SVG,
        species: ["Hobbit", "Faun", "Centaur"],
    },
    SymbolDefinition {
        key: SymbolKey::Flame,
        name: "Order C - Ember Light",
        unicode_codepoint: "U+1F525",
        glyph: "\u{1F525}",
        color_hex: "#DC143C",
        svg_markup: FLAME_SVG,
        species: ["Orc", "Goblin", "Minotaur"],
    },
    SymbolDefinition {
        key: SymbolKey::Star,
        name: "Order D - Eternal Light",
        unicode_codepoint: "U+2B50",
        glyph: "\u{2B50}",
        color_hex: "#9932CC",
        svg_markup: STAR_SVG,
        species: ["Dragon", "Cyclops", "Fairy"],
    },
    SymbolDefinition {
        key: SymbolKey::Moon,
        name: "Order E - Moonlight",
        unicode_codepoint: "U+1F319",
        glyph: "\u{1F319}",
        color_hex: "#028eb5",
        svg_markup: MOON_SVG,
        species: ["Aven", "Koatl", "Lycan"],
    },
];

/// All symbols in catalog order (sun, leaf, flame, star, moon).
pub fn all_symbols() -> &'static [SymbolDefinition] {
    &SYMBOLS
}

/// Looks up a symbol by key.
pub fn symbol(key: SymbolKey) -> &'static SymbolDefinition {
    // SYMBOLS is declared in SymbolKey::ALL order.
    &SYMBOLS[key as usize]
}

/// Looks up a symbol by its key string (case-insensitive).
pub fn find_symbol(key: &str) -> Result<&'static SymbolDefinition, SymbolError> {
    key.parse::<SymbolKey>().map(symbol)
}

/// Pixel size of a physical print size, rounded to the nearest pixel.
///
/// 6 mm is about 17 px at 72 DPI and 23 px at 96 DPI.
pub fn pixels_for_mm(mm: f64, dpi: f64) -> u32 {
    (mm / 25.4 * dpi).round().max(0.0) as u32
}
