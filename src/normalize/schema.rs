// src/normalize/schema.rs
//! Header policy and the run-wide field superset.

use std::collections::BTreeSet;

use super::columns;
use crate::data::{SCORE, YOB};

/// Raw header → canonical field.
pub const RENAMES: &[(&str, &str)] = &[
    ("SV", SCORE),
    ("Total", SCORE),
    ("Born", YOB),
    ("born", YOB),
];

/// Canonical fields that never reach a record.
pub const DROPPED: &[&str] = &["E", "Bonus", "Comp", "ND", "D"];

pub fn is_dropped(field: &str) -> bool {
    DROPPED.contains(&field)
}

/// Canonical name for the header at `index`, or `None` if the policy drops it.
/// Blank headers become `Col_<index>`.
pub fn canonical_header(raw: Option<&str>, index: usize) -> Option<String> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Some(format!("Col_{index}"));
    }
    let field = RENAMES
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |(_, to)| *to);
    (!is_dropped(field)).then(|| s!(field))
}

/// Canonical names for a whole header row, positionally.
pub fn map_headers(headers: &[String]) -> Vec<Option<String>> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| canonical_header(Some(h), i))
        .collect()
}

/// Union of every field seen in a run. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    fields: BTreeSet<String>,
}

impl Schema {
    pub fn new() -> Self { Self::default() }

    pub fn with_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        let mut s = Self::new();
        s.absorb(fields);
        s
    }

    pub fn absorb<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) {
        for f in fields {
            if !self.fields.contains(f) {
                self.fields.insert(s!(f));
            }
        }
    }

    /// Contribution of one session's header row: every kept canonical header
    /// except the athlete and birth-year columns, which land in `Name`, `Club`
    /// and `YOB` instead. Absorbing the same headers again changes nothing.
    pub fn absorb_headers(&mut self, headers: &[String]) {
        let roles = columns::header_roles(headers);
        let mapped = map_headers(headers);
        self.absorb(
            mapped
                .iter()
                .enumerate()
                .filter(|(i, _)| !roles.is_claimed(*i))
                .filter_map(|(_, field)| field.as_deref()),
        );
    }

    pub fn merge(&mut self, other: &Schema) {
        self.absorb(other.iter());
    }

    pub fn contains(&self, field: &str) -> bool { self.fields.contains(field) }
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.fields.iter().map(String::as_str) }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renames_and_drops() {
        let mapped = map_headers(&v(&["SV", "Born", "born", "Total", "E", "D", "ND", "Bonus", "Comp", "Vault", " "]));
        let got: Vec<Option<&str>> = mapped.iter().map(|m| m.as_deref()).collect();
        assert_eq!(
            got,
            vec![
                Some("Score"), Some("YOB"), Some("YOB"), Some("Score"),
                None, None, None, None, None, Some("Vault"), Some("Col_10"),
            ]
        );
    }

    #[test]
    fn missing_header_is_synthesized() {
        assert_eq!(canonical_header(None, 7).as_deref(), Some("Col_7"));
    }

    #[test]
    fn absorbing_headers_twice_changes_nothing() {
        let headers = v(&["Rank", "Gymnast", "Born", "SV", "E", "Vault"]);
        let mut schema = Schema::new();
        schema.absorb_headers(&headers);
        let once = schema.clone();
        schema.absorb_headers(&headers);
        assert_eq!(schema, once);
        assert_eq!(schema.iter().collect::<Vec<_>>(), vec!["Rank", "Score", "Vault"]);
    }

    #[test]
    fn union_is_order_independent() {
        let s1 = Schema::with_fields(["Name", "Vault", "Score"]);
        let s2 = Schema::with_fields(["Name", "Beam", "Col_9"]);

        let mut a = Schema::new();
        a.merge(&s1);
        a.merge(&s2);
        let mut b = Schema::new();
        b.merge(&s2);
        b.merge(&s1);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }
}
