// src/data.rs
//
// Record: one athlete row after normalization, keyed by canonical field name.
// Built by the row extractor, finished by the aggregator (Session, Date,
// Competition), then treated as read-only.

use std::collections::BTreeMap;

pub const COMPETITION: &str = "Competition";
pub const SESSION: &str = "Session";
pub const NAME: &str = "Name";
pub const YOB: &str = "YOB";
pub const CLUB: &str = "Club";
pub const SCORE: &str = "Score";
pub const DATE: &str = "Date";

/// Fields every record carries (Competition only in merged runs).
pub const BASE_FIELDS: &[&str] = &[NAME, CLUB, YOB, SCORE, SESSION, DATE];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool { self.fields.contains_key(field) }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Set unless the field already holds a non-empty value.
    pub fn fill(&mut self, field: &str, value: &str) {
        match self.fields.get_mut(field) {
            Some(existing) if !existing.is_empty() => {}
            Some(existing) => *existing = s!(value),
            None => { self.fields.insert(s!(field), s!(value)); }
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut r = Record::new();
        for (k, v) in iter { r.set(k, v); }
        r
    }
}
