//! Symbol keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SymbolError;

/// Identifies one of the five Order symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKey {
    /// Order A - Dawn Light.
    Sun,
    /// Order B - Verdant Light.
    Leaf,
    /// Order C - Ember Light.
    Flame,
    /// Order D - Eternal Light.
    Star,
    /// Order E - Moonlight.
    Moon,
}

impl SymbolKey {
    /// All keys in catalog order.
    pub const ALL: [SymbolKey; 5] = [
        SymbolKey::Sun,
        SymbolKey::Leaf,
        SymbolKey::Flame,
        SymbolKey::Star,
        SymbolKey::Moon,
    ];

    /// Returns the lowercase key string (e.g., "sun").
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKey::Sun => "sun",
            SymbolKey::Leaf => "leaf",
            SymbolKey::Flame => "flame",
            SymbolKey::Star => "star",
            SymbolKey::Moon => "moon",
        }
    }

    /// File name used when exporting this symbol, `order_<key>.svg`.
    pub fn file_name(&self) -> String {
        format!("order_{}.svg", self.as_str())
    }
}

impl fmt::Display for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolKey {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SymbolKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SymbolError::UnknownKey(s.to_string()))
    }
}
