// src/normalize/rows.rs
//! One results `<tr>` → one [`Record`].
//!
//! Cells come in as raw inner markup. The athlete cell is "name<br>club",
//! the name usually wrapped in a link. Every other column is kept under its
//! canonical header unless the header policy drops it.

use super::clubs::ClubNormalizer;
use super::columns::{self, ColumnRoles};
use super::names::NameResolver;
use super::schema::canonical_header;
use crate::config::consts::UNKNOWN;
use crate::core::html::{link_text, split_first_br, strip_tags};
use crate::data::{Record, CLUB, NAME, SCORE, YOB};
use crate::error::{ExportError, Result};

/// Rows narrower than this are separators or stray header rows.
pub const MIN_CELLS: usize = 4;

pub struct RowExtractor {
    names: NameResolver,
    clubs: ClubNormalizer,
}

impl RowExtractor {
    pub fn new(names: NameResolver, clubs: ClubNormalizer) -> Self {
        Self { names, clubs }
    }

    /// `None` for non-data rows. Name/club trouble never drops a row; it
    /// turns both fields into `Unknown`.
    pub fn extract(&mut self, headers: &[String], cells: &[String]) -> Option<Record> {
        if cells.len() < MIN_CELLS {
            return None;
        }
        let text: Vec<String> = cells.iter().map(strip_tags).collect();
        let roles = columns::assign(headers, &text);

        let mut rec = Record::new();
        let athlete = roles.athlete.and_then(|i| cells.get(i).map(|cell| (i, cell)));
        let (name, club) = match athlete {
            Some((i, cell)) => self.athlete(cell).unwrap_or_else(|e| {
                logw!("athlete cell {i} unreadable ({e}): {}", strip_tags(cell));
                (s!(UNKNOWN), s!(UNKNOWN))
            }),
            None => (s!(UNKNOWN), s!(UNKNOWN)),
        };
        rec.set(NAME, name);
        rec.set(CLUB, club);
        rec.set(YOB, roles.birth_year.and_then(|i| text.get(i)).cloned().unwrap_or_default());

        self.rest(&mut rec, headers, &text, roles);
        rec.fill(SCORE, "");
        Some(rec)
    }

    fn athlete(&mut self, raw_cell: &str) -> Result<(String, String)> {
        let (name_part, club_part) = split_first_br(raw_cell);
        let snippet = link_text(name_part).unwrap_or_else(|| strip_tags(name_part));
        if snippet.is_empty() {
            return Err(ExportError::Row(s!("no athlete name")));
        }
        let name = self.names.resolve(&snippet)?;
        let club = club_part
            .map(|c| self.clubs.normalize(&strip_tags(c)))
            .unwrap_or_default();
        Ok((name, club))
    }

    /// Every unclaimed column under its canonical header.
    fn rest(&mut self, rec: &mut Record, headers: &[String], text: &[String], roles: ColumnRoles) {
        for (i, value) in text.iter().enumerate() {
            if roles.is_claimed(i) {
                continue;
            }
            let Some(field) = canonical_header(headers.get(i).map(String::as_str), i) else {
                continue;
            };
            match field.as_str() {
                NAME => {}
                CLUB => {
                    let club = self.clubs.normalize(value);
                    rec.fill(CLUB, &club);
                }
                _ => rec.fill(&field, value),
            }
        }
    }
}
