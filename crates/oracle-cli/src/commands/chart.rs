//! Chart command implementation
//!
//! Writes the distribution bar chart as an SVG file.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use oracle_dice::{render_chart, ChartOptions, DieSides, Distribution};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Default chart file name for a die, e.g. `max_of_two_d8.svg`.
pub fn default_file_name(sides: DieSides) -> String {
    format!("max_of_two_{}.svg", sides)
}

/// Resolves the chart path: an explicit `out` wins, otherwise the default
/// file name inside `out_dir`.
pub fn resolve_output_path(sides: DieSides, out: Option<&Path>, out_dir: &Path) -> PathBuf {
    match out {
        Some(path) => path.to_path_buf(),
        None => out_dir.join(default_file_name(sides)),
    }
}

/// Run the chart command
///
/// # Arguments
/// * `sides` - Die to chart
/// * `out` - Explicit output file (overrides `out_dir`)
/// * `out_dir` - Directory for the default file name
/// * `options` - Canvas size
/// * `force` - Overwrite an existing chart file
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    sides: DieSides,
    out: Option<&Path>,
    out_dir: &Path,
    options: ChartOptions,
    force: bool,
) -> Result<ExitCode> {
    let path = resolve_output_path(sides, out, out_dir);
    println!("{} {}", "Charting:".cyan().bold(), sides);

    let distribution = Distribution::for_die(sides);
    let svg = render_chart(&distribution, &options);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    write_chart(&path, svg.as_bytes(), force)?;

    println!(
        "{} Wrote {} ({} bytes, {}x{})",
        "SUCCESS".green().bold(),
        path.display(),
        svg.len(),
        options.width,
        options.height
    );
    Ok(ExitCode::SUCCESS)
}

fn write_chart(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    if force {
        return fs::write(path, bytes)
            .with_context(|| format!("Failed to write chart: {}", path.display()));
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!(
                "refusing to overwrite existing file: {} (use --force)",
                path.display()
            )
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to write chart: {}", path.display()))
        }
    };
    file.write_all(bytes)
        .with_context(|| format!("Failed to write chart: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_resolution() {
        let d12 = DieSides::new(12).unwrap();
        assert_eq!(
            resolve_output_path(d12, None, Path::new("charts")),
            PathBuf::from("charts/max_of_two_d12.svg")
        );
        assert_eq!(
            resolve_output_path(d12, Some(Path::new("x.svg")), Path::new("charts")),
            PathBuf::from("x.svg")
        );
    }

    #[test]
    fn test_existing_chart_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        fs::write(&path, "hello").unwrap();

        let err = write_chart(&path, b"<svg/>", false).unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");

        write_chart(&path, b"<svg/>", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }
}
