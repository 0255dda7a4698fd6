//! Export of symbol documents to disk.
//!
//! [`export_symbol`] and [`export_all`] build documents in memory; an
//! [`Exporter`] writes them into a directory as `order_<key>.svg`, optionally
//! with a `manifest.json` of BLAKE3 hashes.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{all_symbols, symbol};
use crate::error::SymbolError;
use crate::key::SymbolKey;
use crate::svg::SvgDocument;

/// Version of the manifest layout.
pub const MANIFEST_VERSION: u32 = 1;

/// File name of the export manifest.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Builds the SVG document for one symbol from its static markup.
pub fn export_symbol(key: SymbolKey) -> SvgDocument {
    let def = symbol(key);
    SvgDocument::new(def, def.svg_markup.to_string())
}

/// Builds the document for one symbol with its primary color replaced.
pub fn export_recolored(key: SymbolKey, color: &str) -> Result<SvgDocument, SymbolError> {
    let def = symbol(key);
    let markup = def.recolored(color)?;
    Ok(SvgDocument::new(def, markup))
}

/// Builds every symbol's document, in catalog order.
pub fn export_all() -> Vec<SvgDocument> {
    all_symbols().iter().map(|s| export_symbol(s.key)).collect()
}

/// A document written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// Symbol the file was written for.
    pub key: SymbolKey,
    /// Full path of the written file.
    pub path: PathBuf,
    /// BLAKE3 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub bytes: usize,
}

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Symbol the file holds.
    pub key: SymbolKey,
    /// File name relative to the manifest.
    pub file: String,
    /// BLAKE3 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub bytes: usize,
}

/// Index of an export directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportManifest {
    /// Manifest layout version ([`MANIFEST_VERSION`]).
    pub version: u32,
    /// Written files in export order.
    pub symbols: Vec<ManifestEntry>,
}

impl ExportManifest {
    /// Builds a manifest from written files.
    pub fn from_files(files: &[ExportedFile]) -> Self {
        let symbols = files
            .iter()
            .map(|f| ManifestEntry {
                key: f.key,
                file: f.key.file_name(),
                hash: f.hash.clone(),
                bytes: f.bytes,
            })
            .collect();
        Self {
            version: MANIFEST_VERSION,
            symbols,
        }
    }
}

/// Writes symbol documents into a directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    out_dir: PathBuf,
    stagger: Duration,
    overwrite: bool,
}

impl Exporter {
    /// Creates an exporter for `out_dir` (created on first write).
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            stagger: Duration::ZERO,
            overwrite: false,
        }
    }

    /// Pause between consecutive files in [`Exporter::write_all`].
    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    /// Allows replacing existing files.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Writes a prepared document.
    pub fn write_document(&self, document: &SvgDocument) -> Result<ExportedFile, SymbolError> {
        let path = self.out_dir.join(&document.file_name);
        self.write_bytes(&path, document.contents.as_bytes())?;
        Ok(ExportedFile {
            key: document.key,
            path,
            hash: document.hash.clone(),
            bytes: document.len(),
        })
    }

    /// Writes one symbol as `order_<key>.svg`.
    pub fn write_symbol(&self, key: SymbolKey) -> Result<ExportedFile, SymbolError> {
        self.write_document(&export_symbol(key))
    }

    /// Writes every symbol in catalog order, pausing `stagger` between files.
    ///
    /// Stops at the first failure; files already written are left in place.
    pub fn write_all(&self) -> Result<Vec<ExportedFile>, SymbolError> {
        let mut written = Vec::with_capacity(SymbolKey::ALL.len());
        for (index, document) in export_all().iter().enumerate() {
            if index > 0 && !self.stagger.is_zero() {
                thread::sleep(self.stagger);
            }
            written.push(self.write_document(document)?);
        }
        Ok(written)
    }

    /// Writes `manifest.json` describing `files`.
    pub fn write_manifest(&self, files: &[ExportedFile]) -> Result<PathBuf, SymbolError> {
        let manifest = ExportManifest::from_files(files);
        let json = serde_json::to_string_pretty(&manifest)?;
        let path = self.out_dir.join(MANIFEST_FILE_NAME);
        self.write_bytes(&path, json.as_bytes())?;
        Ok(path)
    }

    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), SymbolError> {
        fs::create_dir_all(&self.out_dir)?;
        if self.overwrite {
            fs::write(path, bytes)?;
            return Ok(());
        }
        // create_new makes the existence check and the create a single step.
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => SymbolError::AlreadyExists(path.to_path_buf()),
                _ => SymbolError::Io(e),
            })?;
        file.write_all(bytes)?;
        Ok(())
    }
}
