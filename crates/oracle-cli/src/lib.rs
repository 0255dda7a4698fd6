//! Oracle CLI library.
//!
//! Command implementations behind the `oracle` binary: dice distribution
//! reports and charts, and Order symbol listing and export.

pub mod commands;
