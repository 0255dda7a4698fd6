//! Oracle Dice Math
//!
//! Exact distribution of `M = max(d1, d2)`, the larger of two independent rolls
//! of a fair n-sided die, as used by the Oracle advantage rolls.
//!
//! # Example
//!
//! ```
//! use oracle_dice::{compute_distribution, compute_statistics, DieSides, Distribution};
//!
//! let rows = compute_distribution(6).unwrap();
//! assert_eq!(rows[5].fraction(), "11/36");
//!
//! let stats = compute_statistics(6).unwrap();
//! assert_eq!(stats.mode, 6);
//!
//! let view = Distribution::for_die(DieSides::new(6).unwrap());
//! assert_eq!(view.table.len(), 6);
//! ```
//!
//! # Modules
//!
//! - [`distribution`]: probability rows and the cumulative table
//! - [`statistics`]: mean, variance, standard deviation and mode
//! - [`sides`]: validated die sizes (d4 to d20)
//! - [`formula`]: reference formulas
//! - [`chart`]: SVG bar chart rendering

pub mod chart;
pub mod distribution;
pub mod error;
pub mod formula;
pub mod sides;
pub mod statistics;

pub use chart::{render_chart, ChartOptions};
pub use distribution::{compute_distribution, table_rows, Distribution, DistributionRow, TableRow};
pub use error::DiceError;
pub use formula::{formulas, Formula};
pub use sides::{DieSides, DEFAULT_SIDES, MAX_SIDES, MIN_SIDES};
pub use statistics::{compute_statistics, Statistics};
