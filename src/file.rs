// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone};

use crate::config::consts::{DEFAULT_OUT_DIR, MERGED_FILE_STEM, TIMESTAMP_FORMAT, UNKNOWN_COMPETITION};
use crate::core::sanitize::sanitize_file_stem;
use crate::data::{Record, CLUB, COMPETITION, DATE, NAME, SCORE, SESSION, YOB};
use crate::error::{ExportError, Result};
use crate::normalize::Schema;

/// Columns that lead every export, in this order, when the schema has them.
pub const PRIORITY: &[&str] = &[COMPETITION, SESSION, NAME, YOB, CLUB, SCORE, DATE];

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Priority prefix, then every other schema field alphabetically.
pub fn column_order(schema: &Schema) -> Vec<String> {
    let mut order: Vec<String> = PRIORITY
        .iter()
        .filter(|f| schema.contains(f))
        .map(|f| s!(*f))
        .collect();
    // Schema iterates in sorted order already.
    order.extend(schema.iter().filter(|f| !PRIORITY.contains(f)).map(String::from));
    order
}

/// Write `records` as UTF-8 CSV (with BOM) to `dest`. Fields outside the
/// schema are ignored; missing ones are written empty. Returns the row count.
pub fn export(records: &[Record], schema: &Schema, dest: &Path) -> Result<usize> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let destination = |source: std::io::Error| ExportError::Destination { path: dest.to_path_buf(), source };

    let file = File::create(dest).map_err(destination)?;
    let mut out = BufWriter::new(file);
    out.write_all(BOM).map_err(destination)?;

    let columns = column_order(schema);
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(&columns)?;
    for rec in records {
        wtr.write_record(columns.iter().map(|c| rec.get(c).unwrap_or("")))?;
    }
    wtr.flush().map_err(destination)?;

    logf!("wrote {} records to {}", records.len(), dest.display());
    Ok(records.len())
}

/// `<stem>-<YYYYmmddHHMM>.csv`; the stem is the competition title for a single
/// competition, `merged` otherwise.
pub fn default_filename<Tz: TimeZone>(title: Option<&str>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let stem = match title {
        Some(t) => sanitize_file_stem(t, UNKNOWN_COMPETITION),
        None => s!(MERGED_FILE_STEM),
    };
    format!("{stem}-{}.csv", now.format(TIMESTAMP_FORMAT))
}

/// Resolve the user's `-o` against a default file name. Empty ⇒ `out/<default>`;
/// a directory (existing, or hinted by a trailing separator) ⇒ `<dir>/<default>`.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf> {
    if user_o.is_empty() { return Ok(PathBuf::from(DEFAULT_OUT_DIR).join(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?; Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::Destination {
            path: dir.to_path_buf(),
            source: std::io::Error::other("path exists but is not a directory"),
        });
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
