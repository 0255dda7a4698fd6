//! Symbols command implementations
//!
//! Lists, shows and exports the Order symbols.

use anyhow::Result;
use colored::Colorize;
use oracle_symbols::{
    all_symbols, export_recolored, export_symbol, pixels_for_mm, symbol, ExportedFile, Exporter,
    SymbolDefinition, SymbolError, SymbolKey,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use super::json_output::{
    print_json, symbol_error_to_json, CommandOutput, ExportResult, ExportedFileJson, SymbolInfo,
};

/// Physical size of a symbol on a printed card.
pub const CARD_SYMBOL_MM: f64 = 6.0;

/// Builds the listing entry for one symbol.
pub fn symbol_info(def: &SymbolDefinition) -> SymbolInfo {
    SymbolInfo {
        symbol: *def,
        file_name: def.key.file_name(),
        print_px_72dpi: pixels_for_mm(CARD_SYMBOL_MM, 72.0),
        print_px_96dpi: pixels_for_mm(CARD_SYMBOL_MM, 96.0),
    }
}

/// Run `symbols list`
pub fn list(json_output: bool) -> Result<ExitCode> {
    if json_output {
        let infos: Vec<SymbolInfo> = all_symbols().iter().map(symbol_info).collect();
        print_json(&CommandOutput::success(infos))?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Oracle Order Symbols".cyan().bold());
    println!("{}", "====================".cyan());
    println!();
    for def in all_symbols() {
        println!(
            "  {:<2} {:<6} {:<8} {} {}",
            def.glyph,
            def.key.as_str().bold(),
            def.unicode_codepoint.green(),
            def.color_hex.dimmed(),
            def.name
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Run `symbols show`
pub fn show(key: SymbolKey, json_output: bool) -> Result<ExitCode> {
    let def = symbol(key);
    if json_output {
        print_json(&CommandOutput::success(symbol_info(def)))?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", def.glyph, def.name.cyan().bold());
    println!("  {:<10} {}", "Key:", def.key);
    println!("  {:<10} {}", "Unicode:", def.unicode_codepoint.green());
    println!("  {:<10} {}", "Color:", def.color_hex);
    println!("  {:<10} {}", "Species:", def.species.join(", "));
    println!("  {:<10} {}", "File:", def.key.file_name());
    println!(
        "  {:<10} {} px at 72 DPI, {} px at 96 DPI ({} mm)",
        "Print:",
        pixels_for_mm(CARD_SYMBOL_MM, 72.0),
        pixels_for_mm(CARD_SYMBOL_MM, 96.0),
        CARD_SYMBOL_MM
    );
    println!();
    println!("{}", def.svg_markup);
    Ok(ExitCode::SUCCESS)
}

/// Run `symbols export` for a single symbol
///
/// # Arguments
/// * `key` - Symbol to export
/// * `out_dir` - Directory receiving `order_<key>.svg`
/// * `color` - Optional replacement for the primary stroke color
/// * `force` - Overwrite an existing file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the file could not be written
pub fn export(
    key: SymbolKey,
    out_dir: &Path,
    color: Option<&str>,
    force: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let exporter = Exporter::new(out_dir).with_overwrite(force);
    let result = match color {
        Some(color) => export_recolored(key, color).and_then(|doc| exporter.write_document(&doc)),
        None => exporter.write_document(&export_symbol(key)),
    };
    report(result.map(|file| (vec![file], None)), json_output)
}

/// Run `symbols export-all`
///
/// # Arguments
/// * `out_dir` - Directory receiving the five files
/// * `stagger_ms` - Pause between consecutive files in milliseconds
/// * `manifest` - Also write `manifest.json`
/// * `force` - Overwrite existing files
/// * `json_output` - Whether to output machine-readable JSON
pub fn export_all(
    out_dir: &Path,
    stagger_ms: u64,
    manifest: bool,
    force: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let exporter = Exporter::new(out_dir)
        .with_overwrite(force)
        .with_stagger(Duration::from_millis(stagger_ms));
    if !json_output {
        println!(
            "{} {}",
            "Exporting to:".cyan().bold(),
            exporter.out_dir().display()
        );
    }

    let result = exporter.write_all().and_then(|files| {
        let manifest_path = if manifest {
            Some(exporter.write_manifest(&files)?)
        } else {
            None
        };
        Ok((files, manifest_path))
    });
    report(result, json_output)
}

fn report(
    result: Result<(Vec<ExportedFile>, Option<PathBuf>), SymbolError>,
    json_output: bool,
) -> Result<ExitCode> {
    match result {
        Ok((files, manifest)) => {
            if json_output {
                print_json(&CommandOutput::success(ExportResult {
                    files: files.iter().map(ExportedFileJson::from).collect(),
                    manifest: manifest.map(|p| p.display().to_string()),
                }))?;
            } else {
                for file in &files {
                    println!(
                        "  {} {} ({} bytes, {})",
                        "ok".green(),
                        file.path.display(),
                        file.bytes,
                        &file.hash[..16]
                    );
                }
                if let Some(path) = manifest {
                    println!("  {} {}", "ok".green(), path.display());
                }
                println!(
                    "{} Exported {} symbol file(s)",
                    "SUCCESS".green().bold(),
                    files.len()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if json_output {
                print_json(&CommandOutput::<ExportResult>::failure(vec![
                    symbol_error_to_json(&e),
                ]))?;
            } else {
                eprintln!("{}: {}", "error".red(), e);
                if matches!(e, SymbolError::AlreadyExists(_)) {
                    eprintln!("  {}", "Use --force to overwrite.".dimmed());
                }
            }
            Ok(ExitCode::from(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_info_print_sizes() {
        let info = symbol_info(symbol(SymbolKey::Sun));
        assert_eq!(info.file_name, "order_sun.svg");
        assert_eq!(info.print_px_72dpi, 17);
        assert_eq!(info.print_px_96dpi, 23);
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["key"], "sun");
        assert_eq!(value["unicode_codepoint"], "U+2600");
    }
}
