//! Reference formulas shown next to the distribution.

use serde::Serialize;

/// A named closed-form expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Formula {
    /// Short title, e.g. "Expectation".
    pub title: &'static str,
    /// Plain-text expression in terms of `k` and `n`.
    pub expression: &'static str,
}

static FORMULAS: [Formula; 4] = [
    Formula {
        title: "Probability Mass Function",
        expression: "P(M = k) = (2k - 1) / n²",
    },
    Formula {
        title: "Expectation",
        expression: "E[M] = (2n² + 3n + 1) / (3n)",
    },
    Formula {
        title: "Variance",
        expression: "Var(M) = (n² - 1) / 18",
    },
    Formula {
        title: "Standard Deviation",
        expression: "σ(M) = √[(n² - 1) / 18]",
    },
];

/// The formulas behind [`compute_distribution`](crate::compute_distribution)
/// and [`compute_statistics`](crate::compute_statistics), in display order.
pub fn formulas() -> &'static [Formula] {
    &FORMULAS
}
