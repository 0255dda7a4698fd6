//! Probability mass of `M = max(d1, d2)` for two fair n-sided dice.
//!
//! `P(M = k) = (2k - 1) / n^2` for `k` in `1..=n`: of the `n^2` equally likely
//! outcomes, exactly `2k - 1` have their larger face equal to `k`.

use serde::{Deserialize, Serialize};

use crate::error::DiceError;
use crate::sides::DieSides;
use crate::statistics::Statistics;

/// One value of the distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    /// Value of the maximum (1-based).
    pub k: u32,
    /// `P(M = k)` in `[0, 1]`.
    pub probability: f64,
    /// `probability * 100` with two decimals, e.g. `"30.56"`.
    pub percentage: String,
    /// Numerator of the exact fraction, `2k - 1`.
    pub numerator: u64,
    /// Denominator of the exact fraction, `n^2`.
    pub denominator: u64,
}

impl DistributionRow {
    fn new(k: u32, sides: u32) -> Self {
        let numerator = 2 * u64::from(k) - 1;
        let denominator = u64::from(sides) * u64::from(sides);
        let probability = numerator as f64 / denominator as f64;
        Self {
            k,
            probability,
            percentage: format!("{:.2}", probability * 100.0),
            numerator,
            denominator,
        }
    }

    /// The exact probability as a `"num/den"` string, e.g. `"11/36"`.
    pub fn fraction(&self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }
}

/// Computes the rows for `k = 1..=sides`, ascending.
///
/// Valid for any `sides >= 1`. The selector range is enforced separately by
/// [`DieSides`].
pub fn compute_distribution(sides: u32) -> Result<Vec<DistributionRow>, DiceError> {
    if sides == 0 {
        return Err(DiceError::ZeroSides);
    }
    Ok(rows_for_positive_sides(sides))
}

pub(crate) fn rows_for_positive_sides(sides: u32) -> Vec<DistributionRow> {
    (1..=sides).map(|k| DistributionRow::new(k, sides)).collect()
}

/// A distribution row as shown in the probability table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// The underlying row.
    #[serde(flatten)]
    pub row: DistributionRow,
    /// `P(M <= k)`.
    pub cumulative: f64,
    /// Whether `k` is the mode.
    pub is_mode: bool,
}

/// Adds running cumulative probabilities and mode flags to ordered rows.
pub fn table_rows(rows: &[DistributionRow], mode: u32) -> Vec<TableRow> {
    let mut cumulative = 0.0;
    rows.iter()
        .map(|row| {
            cumulative += row.probability;
            TableRow {
                row: row.clone(),
                cumulative,
                is_mode: row.k == mode,
            }
        })
        .collect()
}

/// Everything the viewer shows for one die: rows, statistics and table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// The die the distribution was computed for.
    pub sides: DieSides,
    /// Summary statistics.
    pub statistics: Statistics,
    /// Table rows (includes every distribution row), ascending by `k`.
    pub table: Vec<TableRow>,
}

impl Distribution {
    /// Computes the full view for a die. Nothing is cached; every call
    /// recomputes from the closed forms.
    pub fn for_die(sides: DieSides) -> Self {
        let statistics = sides.statistics();
        let rows = sides.distribution();
        let table = table_rows(&rows, statistics.mode);
        Self {
            sides,
            statistics,
            table,
        }
    }

    /// Iterates the plain distribution rows.
    pub fn rows(&self) -> impl Iterator<Item = &DistributionRow> {
        self.table.iter().map(|t| &t.row)
    }

    /// Largest probability in the distribution.
    pub fn max_probability(&self) -> f64 {
        self.rows().map(|r| r.probability).fold(0.0, f64::max)
    }
}
