// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::{ExportError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListFilter {
    All,
    LiveOnly,
    Keyword(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// `id_prop` values, in the order given. More than one ⇒ merged export.
    pub competitions: Vec<String>,
    /// User `-o`: a file, or a directory hint ending in a separator.
    pub out: Option<PathBuf>,
    /// Holds the correction stores and the debug log.
    pub store_dir: PathBuf,
    pub request_pause: Duration,
    pub fetch_timeout: Duration,
    /// Prompt on ambiguous 3+ word names; otherwise leave them as scraped.
    pub interactive: bool,
    pub debug: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            competitions: Vec::new(),
            out: None,
            store_dir: PathBuf::from(STORE_DIR),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            interactive: true,
            debug: false,
        }
    }
}

impl RunOptions {
    pub fn athlete_store_path(&self) -> PathBuf {
        self.store_dir.join(ATHLETE_CORRECTIONS_FILE)
    }

    pub fn club_store_path(&self) -> PathBuf {
        self.store_dir.join(CLUB_CORRECTIONS_FILE)
    }

    pub fn is_merged(&self) -> bool {
        self.competitions.len() > 1
    }

    /// Add one competition id, rejecting anything that is not all digits.
    pub fn push_competition(&mut self, raw: &str) -> Result<()> {
        let id = validate_competition_id(raw)?;
        if !self.competitions.contains(&id) {
            self.competitions.push(id);
        }
        Ok(())
    }
}

pub fn validate_competition_id(raw: &str) -> Result<String> {
    let id = raw.trim();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ExportError::InvalidCompetitionId(s!(id)));
    }
    Ok(s!(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competition_ids_must_be_digits() {
        assert_eq!(validate_competition_id(" 8819 ").unwrap(), "8819");
        assert!(validate_competition_id("").is_err());
        assert!(validate_competition_id("88a19").is_err());
    }

    #[test]
    fn duplicate_ids_are_ignored_and_merge_needs_two() {
        let mut opts = RunOptions::default();
        opts.push_competition("1").unwrap();
        opts.push_competition("1").unwrap();
        assert!(!opts.is_merged());
        opts.push_competition("2").unwrap();
        assert!(opts.is_merged());
        assert_eq!(opts.competitions, vec!["1", "2"]);
    }

    #[test]
    fn store_paths_live_under_store_dir() {
        let opts = RunOptions { store_dir: PathBuf::from("x"), ..Default::default() };
        assert_eq!(opts.athlete_store_path(), PathBuf::from("x").join(ATHLETE_CORRECTIONS_FILE));
        assert_eq!(opts.club_store_path(), PathBuf::from("x").join(CLUB_CORRECTIONS_FILE));
    }
}
