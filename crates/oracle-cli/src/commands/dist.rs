//! Dist command implementation
//!
//! Prints the distribution of the maximum of two dice: statistics panel,
//! formula reference and probability table.

use anyhow::Result;
use colored::Colorize;
use oracle_dice::{formulas, DieSides, Distribution};
use std::process::ExitCode;

use super::json_output::{print_json, CommandOutput, DistResult};

/// Run the dist command
///
/// # Arguments
/// * `sides` - Die to analyze
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success
pub fn run(sides: DieSides, json_output: bool) -> Result<ExitCode> {
    let distribution = Distribution::for_die(sides);
    if json_output {
        print_json(&CommandOutput::success(build_result(distribution)))?;
    } else {
        print_human(&distribution);
    }
    Ok(ExitCode::SUCCESS)
}

/// Builds the `--json` payload.
pub fn build_result(distribution: Distribution) -> DistResult {
    DistResult {
        distribution,
        formulas: formulas(),
    }
}

fn print_human(distribution: &Distribution) {
    let sides = distribution.sides;
    let stats = &distribution.statistics;

    println!(
        "{}",
        format!("Maximum of Two {} Dice Rolls", sides).cyan().bold()
    );
    println!("{}", format!("M = max(d1({0}), d2({0}))", sides.get()).dimmed());
    println!();

    println!("{}", "Statistics:".bold());
    println!("  {:<12} {}", "Mean (μ)", format!("{:.3}", stats.mean).green());
    println!(
        "  {:<12} {}",
        "Std Dev (σ)",
        format!("{:.3}", stats.std_dev).yellow()
    );
    println!(
        "  {:<12} {} ({:.4})",
        "Mode",
        stats.mode.to_string().magenta(),
        stats.mode_probability
    );
    println!(
        "  {:<12} {}",
        "Variance",
        format!("{:.3}", stats.variance).blue()
    );
    println!(
        "  {:<12} {:.3} .. {:.3}",
        "μ ± σ",
        stats.lower_sigma(),
        stats.upper_sigma()
    );
    println!();

    println!("{}", "Formulas:".bold());
    for formula in formulas() {
        println!("  {:<26} {}", format!("{}:", formula.title), formula.expression);
    }
    println!();

    println!(
        "{}",
        format!("Probability Distribution Table for {}", sides).bold()
    );
    println!(
        "  {:>3}  {:>9}  {:>8}  {:>10}  {:>10}",
        "k", "P(M = k)", "Decimal", "Percentage", "Cumulative"
    );
    for entry in &distribution.table {
        let line = format!(
            "  {:>3}  {:>9}  {:>8.4}  {:>9}%  {:>10.4}",
            entry.row.k,
            entry.row.fraction(),
            entry.row.probability,
            entry.row.percentage,
            entry.cumulative
        );
        if entry.is_mode {
            println!("{}  {}", line.magenta().bold(), "<- mode".dimmed());
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_result_contains_table_and_formulas() {
        let dist = Distribution::for_die(DieSides::new(6).unwrap());
        let value = serde_json::to_value(CommandOutput::success(build_result(dist))).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["result"]["sides"], 6);
        assert_eq!(value["result"]["table"].as_array().unwrap().len(), 6);
        assert_eq!(value["result"]["formulas"].as_array().unwrap().len(), 4);
        assert_eq!(value["result"]["table"][5]["numerator"], 11);
        assert_eq!(value["result"]["table"][5]["denominator"], 36);
    }
}
