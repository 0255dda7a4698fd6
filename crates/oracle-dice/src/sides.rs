//! Validated die sizes for the distribution viewer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distribution::{rows_for_positive_sides, DistributionRow};
use crate::error::DiceError;
use crate::statistics::Statistics;

/// Smallest die offered by the selector (d4).
pub const MIN_SIDES: u32 = 4;

/// Largest die offered by the selector (d20).
pub const MAX_SIDES: u32 = 20;

/// Die selected when none is given.
pub const DEFAULT_SIDES: u32 = 8;

/// Number of sides of a fair die, restricted to `MIN_SIDES..=MAX_SIDES`.
///
/// The raw [`compute_distribution`](crate::compute_distribution) and
/// [`compute_statistics`](crate::compute_statistics) functions accept
/// any positive size; this type carries the narrower range the tools expose, and
/// makes the per-die queries infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DieSides(u32);

impl DieSides {
    /// Creates a die size, rejecting values outside `MIN_SIDES..=MAX_SIDES`.
    pub fn new(sides: u32) -> Result<Self, DiceError> {
        if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
            return Err(DiceError::SidesOutOfRange {
                sides,
                min: MIN_SIDES,
                max: MAX_SIDES,
            });
        }
        Ok(Self(sides))
    }

    /// Returns the number of sides.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Iterates every supported die size in ascending order.
    pub fn all() -> impl Iterator<Item = DieSides> {
        (MIN_SIDES..=MAX_SIDES).map(DieSides)
    }

    /// Probability rows for `max(d1, d2)` on this die.
    pub fn distribution(self) -> Vec<DistributionRow> {
        rows_for_positive_sides(self.0)
    }

    /// Summary statistics for `max(d1, d2)` on this die.
    pub fn statistics(self) -> Statistics {
        Statistics::for_positive_sides(self.0)
    }
}

impl Default for DieSides {
    fn default() -> Self {
        Self(DEFAULT_SIDES)
    }
}

impl fmt::Display for DieSides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}

impl TryFrom<u32> for DieSides {
    type Error = DiceError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DieSides> for u32 {
    fn from(value: DieSides) -> Self {
        value.0
    }
}

impl FromStr for DieSides {
    type Err = DiceError;

    /// Accepts `"8"`, `"d8"` and `"D8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('d')
            .or_else(|| trimmed.strip_prefix('D'))
            .unwrap_or(trimmed);
        let sides = digits
            .parse::<u32>()
            .map_err(|_| DiceError::InvalidSides(s.to_string()))?;
        Self::new(sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert!(DieSides::new(4).is_ok());
        assert!(DieSides::new(20).is_ok());
        assert_eq!(
            DieSides::new(3),
            Err(DiceError::SidesOutOfRange {
                sides: 3,
                min: 4,
                max: 20
            })
        );
        assert!(DieSides::new(21).is_err());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("8".parse::<DieSides>().unwrap().get(), 8);
        assert_eq!("d12".parse::<DieSides>().unwrap().get(), 12);
        assert_eq!(" D20 ".parse::<DieSides>().unwrap().get(), 20);
        assert!(matches!(
            "dx".parse::<DieSides>(),
            Err(DiceError::InvalidSides(_))
        ));
        assert!(matches!(
            "d2".parse::<DieSides>(),
            Err(DiceError::SidesOutOfRange { .. })
        ));
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(DieSides::default().get(), DEFAULT_SIDES);
        assert_eq!(DieSides::default().to_string(), "d8");
    }

    #[test]
    fn test_all_covers_selector_range() {
        let all: Vec<u32> = DieSides::all().map(DieSides::get).collect();
        assert_eq!(all.first(), Some(&4));
        assert_eq!(all.last(), Some(&20));
        assert_eq!(all.len(), 17);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let parsed: Result<DieSides, _> = serde_json::from_str("6");
        assert_eq!(parsed.unwrap().get(), 6);
        let rejected: Result<DieSides, _> = serde_json::from_str("40");
        assert!(rejected.is_err());
    }
}
