//! CLI command implementations

pub mod chart;
pub mod dist;
pub mod json_output;
pub mod symbols;
