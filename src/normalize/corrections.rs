// src/normalize/corrections.rs
//! Persisted original → corrected mappings.
//!
//! On disk each store is a two-column CSV (`Original,Corrected`). A store is
//! loaded lazily on first lookup and every new decision is appended and
//! flushed straight away, so a crash never loses an operator's answer.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::core::sanitize::normalize_ws;
use crate::error::{ExportError, Result};

const HEADER: [&str; 2] = ["Original", "Corrected"];

#[derive(Debug)]
pub struct CorrectionStore {
    /// `None` for a memory-only store (nothing is written).
    path: Option<PathBuf>,
    /// `None` until first use.
    entries: Option<HashMap<String, String>>,
}

impl CorrectionStore {
    /// Backed by `path`; the file is not touched until the first lookup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()), entries: None }
    }

    pub fn in_memory() -> Self {
        Self { path: None, entries: Some(HashMap::new()) }
    }

    fn entries(&mut self) -> &mut HashMap<String, String> {
        let path = self.path.as_deref();
        self.entries.get_or_insert_with(|| match path {
            Some(p) => load(p).unwrap_or_else(|e| {
                logw!("ignoring correction store {}: {e}", p.display());
                HashMap::new()
            }),
            None => HashMap::new(),
        })
    }

    pub fn lookup(&mut self, original: &str) -> Option<String> {
        self.entries().get(original).cloned()
    }

    /// Remember a decision and append it to the backing file.
    /// The in-memory entry is kept even if the write fails.
    pub fn record(&mut self, original: &str, corrected: &str) -> Result<()> {
        self.entries().insert(s!(original), s!(corrected));
        match &self.path {
            Some(p) => append(p, original, corrected),
            None => Ok(()),
        }
    }

    pub fn len(&mut self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.entries().is_empty()
    }
}

/// Read a store file. Missing file ⇒ empty map; unreadable or ragged file ⇒ error.
/// Keys are whitespace-collapsed so hand-edited files still match.
pub fn load(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let store_err = |reason: String| ExportError::Store { path: path.to_path_buf(), reason };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| store_err(e.to_string()))?;

    let mut out = HashMap::new();
    for row in rdr.records() {
        let row = row.map_err(|e| store_err(e.to_string()))?;
        let (Some(original), Some(corrected)) = (row.get(0), row.get(1)) else {
            return Err(store_err(format!("expected 2 columns, got {}", row.len())));
        };
        let original = normalize_ws(original);
        if original.is_empty() {
            continue;
        }
        out.insert(original, s!(corrected.trim()));
    }
    logd!("loaded {} corrections from {}", out.len(), path.display());
    Ok(out)
}

/// Append one pair, creating the file (with its header row) on first use.
pub fn append(path: &Path, original: &str, corrected: &str) -> Result<()> {
    let store_err = |reason: String| ExportError::Store { path: path.to_path_buf(), reason };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)?;
    let fresh = file.metadata()?.len() == 0;
    if !fresh && !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    if fresh {
        wtr.write_record(HEADER).map_err(|e| store_err(e.to_string()))?;
    }
    wtr.write_record([original, corrected]).map_err(|e| store_err(e.to_string()))?;
    wtr.flush()?;
    Ok(())
}

fn ends_with_newline(file: &mut File) -> Result<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
