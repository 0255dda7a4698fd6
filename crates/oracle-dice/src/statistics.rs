//! Closed-form moments of `M = max(d1, d2)`.

use serde::{Deserialize, Serialize};

use crate::error::DiceError;

/// Summary statistics of the distribution. Derived from `n` only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// `E[M] = (2n^2 + 3n + 1) / (3n)`.
    pub mean: f64,
    /// `Var(M) = (n^2 - 1) / 18`.
    pub variance: f64,
    /// `sqrt(Var(M))`.
    pub std_dev: f64,
    /// Most likely value; always `n`.
    pub mode: u32,
    /// `P(M = n) = (2n - 1) / n^2`.
    pub mode_probability: f64,
}

impl Statistics {
    pub(crate) fn for_positive_sides(sides: u32) -> Self {
        let n = sides as f64;
        let variance = (n * n - 1.0) / 18.0;
        Self {
            mean: (2.0 * n * n + 3.0 * n + 1.0) / (3.0 * n),
            variance,
            std_dev: variance.sqrt(),
            mode: sides,
            mode_probability: (2.0 * n - 1.0) / (n * n),
        }
    }

    /// Lower end of the one-sigma band, `mean - std_dev`.
    pub fn lower_sigma(&self) -> f64 {
        self.mean - self.std_dev
    }

    /// Upper end of the one-sigma band, `mean + std_dev`.
    pub fn upper_sigma(&self) -> f64 {
        self.mean + self.std_dev
    }
}

/// Computes the statistics for a die with `sides >= 1` faces.
pub fn compute_statistics(sides: u32) -> Result<Statistics, DiceError> {
    if sides == 0 {
        return Err(DiceError::ZeroSides);
    }
    Ok(Statistics::for_positive_sides(sides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d6_moments() {
        let stats = compute_statistics(6).unwrap();
        assert!((stats.mean - 91.0 / 18.0).abs() < 1e-12);
        assert!((stats.variance - 35.0 / 18.0).abs() < 1e-12);
        assert!((stats.std_dev - (35.0f64 / 18.0).sqrt()).abs() < 1e-12);
        assert_eq!(stats.mode, 6);
        assert!((stats.mode_probability - 11.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_d20_mode() {
        let stats = compute_statistics(20).unwrap();
        assert_eq!(stats.mode, 20);
        assert!((stats.mode_probability - 0.0975).abs() < 1e-12);
    }

    #[test]
    fn test_single_sided_die_has_no_spread() {
        let stats = compute_statistics(1).unwrap();
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mode_probability, 1.0);
    }

    #[test]
    fn test_zero_sides_rejected() {
        assert_eq!(compute_statistics(0), Err(DiceError::ZeroSides));
    }

    #[test]
    fn test_sigma_band() {
        let stats = compute_statistics(8).unwrap();
        assert!(stats.lower_sigma() < stats.mean);
        assert!((stats.upper_sigma() - stats.lower_sigma() - 2.0 * stats.std_dev).abs() < 1e-12);
    }
}
