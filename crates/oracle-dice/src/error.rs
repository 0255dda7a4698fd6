//! Error types for dice distribution queries.

use thiserror::Error;

/// Errors produced when a die size cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// A zero-sided die has no outcomes, so no distribution exists.
    #[error("a die must have at least one side")]
    ZeroSides,

    /// The die size is outside the supported selector range.
    #[error("die size d{sides} is out of range (expected d{min} to d{max})")]
    SidesOutOfRange {
        /// Requested number of sides.
        sides: u32,
        /// Smallest supported die.
        min: u32,
        /// Largest supported die.
        max: u32,
    },

    /// The die size could not be parsed.
    #[error("invalid die size '{0}' (expected a number like 8 or d8)")]
    InvalidSides(String),
}
