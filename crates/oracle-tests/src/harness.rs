//! Test harness utilities for running commands and inspecting outputs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use oracle_cli::commands;
use oracle_dice::{ChartOptions, DieSides};
use oracle_symbols::{ExportManifest, SymbolKey, MANIFEST_FILE_NAME};
use tempfile::TempDir;

/// A temporary working directory for command runs.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Run `oracle symbols export-all` into the work dir.
    pub fn export_all(&self, manifest: bool, force: bool) -> ExitCode {
        commands::symbols::export_all(self.path(), 0, manifest, force, true)
            .expect("export-all returned an error")
    }

    /// Run `oracle symbols export <key>` into the work dir.
    pub fn export(&self, key: SymbolKey, color: Option<&str>, force: bool) -> ExitCode {
        commands::symbols::export(key, self.path(), color, force, true)
            .expect("export returned an error")
    }

    /// Run `oracle chart` with the default file name in the work dir.
    pub fn chart(&self, sides: u32) -> PathBuf {
        let sides = DieSides::new(sides).expect("die out of range");
        commands::chart::run(sides, None, self.path(), ChartOptions::default(), false)
            .expect("chart returned an error");
        self.path().join(commands::chart::default_file_name(sides))
    }

    /// Sorted names of the `.svg` files in the work dir.
    pub fn svg_files(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path())
            .expect("Failed to read work dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".svg"))
            .collect();
        names.sort();
        names
    }

    /// Read a file from the work dir as text.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// Parse `manifest.json` from the work dir.
    pub fn manifest(&self) -> ExportManifest {
        serde_json::from_str(&self.read(MANIFEST_FILE_NAME)).expect("Invalid manifest JSON")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// BLAKE3 hex digest of `bytes`.
pub fn compute_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}
