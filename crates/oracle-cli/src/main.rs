//! Oracle CLI - dice statistics and Order symbol export
//!
//! This binary reports the distribution of the maximum of two dice, writes it
//! as an SVG chart, and lists or exports the Order symbols.

use clap::{Parser, Subcommand};
use oracle_dice::{ChartOptions, DieSides};
use oracle_symbols::SymbolKey;
use std::path::PathBuf;
use std::process::ExitCode;

use oracle_cli::commands;

/// Oracle - dice statistics and Order symbol assets
#[derive(Parser)]
#[command(name = "oracle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the distribution of the maximum of two dice
    Dist {
        /// Die to analyze, d4 to d20 (e.g. 8 or d8)
        #[arg(short, long, default_value_t = DieSides::default())]
        sides: DieSides,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write the distribution as an SVG bar chart
    Chart {
        /// Die to chart, d4 to d20 (e.g. 8 or d8)
        #[arg(short, long, default_value_t = DieSides::default())]
        sides: DieSides,

        /// Output file (default: <out-dir>/max_of_two_d<N>.svg)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output directory for the default file name
        #[arg(long, env = "ORACLE_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Chart width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Chart height in pixels
        #[arg(long, default_value_t = 480)]
        height: u32,

        /// Overwrite an existing chart file
        #[arg(long)]
        force: bool,
    },

    /// List, inspect and export the Order symbols
    Symbols {
        #[command(subcommand)]
        command: SymbolsCommands,
    },
}

#[derive(Subcommand)]
enum SymbolsCommands {
    /// List all symbols
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one symbol's details and markup
    Show {
        /// Symbol key (sun, leaf, flame, star, moon)
        key: SymbolKey,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Export one symbol as order_<key>.svg
    Export {
        /// Symbol key (sun, leaf, flame, star, moon)
        key: SymbolKey,

        /// Output directory
        #[arg(long, env = "ORACLE_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Replace the primary stroke color (#RRGGBB)
        #[arg(long)]
        color: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Export all five symbols
    ExportAll {
        /// Output directory
        #[arg(long, env = "ORACLE_OUT_DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Pause between files in milliseconds
        #[arg(long, env = "ORACLE_EXPORT_STAGGER_MS", default_value_t = 0)]
        stagger_ms: u64,

        /// Also write manifest.json with BLAKE3 hashes
        #[arg(long)]
        manifest: bool,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dist { sides, json } => commands::dist::run(sides, json),
        Commands::Chart {
            sides,
            out,
            out_dir,
            width,
            height,
            force,
        } => commands::chart::run(
            sides,
            out.as_deref(),
            &out_dir,
            ChartOptions { width, height },
            force,
        ),
        Commands::Symbols { command } => match command {
            SymbolsCommands::List { json } => commands::symbols::list(json),
            SymbolsCommands::Show { key, json } => commands::symbols::show(key, json),
            SymbolsCommands::Export {
                key,
                out_dir,
                color,
                force,
                json,
            } => commands::symbols::export(key, &out_dir, color.as_deref(), force, json),
            SymbolsCommands::ExportAll {
                out_dir,
                stagger_ms,
                manifest,
                force,
                json,
            } => commands::symbols::export_all(&out_dir, stagger_ms, manifest, force, json),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_dist_default() {
        let cli = Cli::try_parse_from(["oracle", "dist"]).unwrap();
        match cli.command {
            Commands::Dist { sides, json } => {
                assert_eq!(sides.get(), 8);
                assert!(!json);
            }
            _ => panic!("expected dist command"),
        }
    }

    #[test]
    fn test_cli_parses_die_notation() {
        let cli = Cli::try_parse_from(["oracle", "dist", "--sides", "d12", "--json"]).unwrap();
        match cli.command {
            Commands::Dist { sides, json } => {
                assert_eq!(sides.get(), 12);
                assert!(json);
            }
            _ => panic!("expected dist command"),
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_die() {
        assert!(Cli::try_parse_from(["oracle", "dist", "--sides", "3"]).is_err());
        assert!(Cli::try_parse_from(["oracle", "chart", "-s", "21"]).is_err());
    }

    #[test]
    fn test_cli_parses_symbol_export() {
        let cli = Cli::try_parse_from([
            "oracle",
            "symbols",
            "export",
            "Flame",
            "--out-dir",
            "cards",
            "--color",
            "#000000",
            "--force",
        ])
        .unwrap();
        match cli.command {
            Commands::Symbols {
                command:
                    SymbolsCommands::Export {
                        key,
                        out_dir,
                        color,
                        force,
                        json,
                    },
            } => {
                assert_eq!(key, SymbolKey::Flame);
                assert_eq!(out_dir, PathBuf::from("cards"));
                assert_eq!(color.as_deref(), Some("#000000"));
                assert!(force);
                assert!(!json);
            }
            _ => panic!("expected symbols export command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_symbol() {
        assert!(Cli::try_parse_from(["oracle", "symbols", "show", "comet"]).is_err());
    }

    #[test]
    fn test_cli_parses_export_all_flags() {
        let cli = Cli::try_parse_from([
            "oracle",
            "symbols",
            "export-all",
            "--stagger-ms",
            "100",
            "--manifest",
        ])
        .unwrap();
        match cli.command {
            Commands::Symbols {
                command:
                    SymbolsCommands::ExportAll {
                        stagger_ms,
                        manifest,
                        ..
                    },
            } => {
                assert_eq!(stagger_ms, 100);
                assert!(manifest);
            }
            _ => panic!("expected symbols export-all command"),
        }
    }
}
