// src/normalize/clubs.rs
//! Club names: operator corrections first, then drop a trailing
//! "Inc." / "ON" suffix (either order, optional parentheses or commas).

use std::sync::LazyLock;

use regex::Regex;

use super::corrections::CorrectionStore;
use crate::core::sanitize::normalize_ws;

static SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:[\s,]+\(?(?:inc\.?|on)\)?)+[\s.,]*$").expect("static regex")
});

pub struct ClubNormalizer {
    store: CorrectionStore,
}

impl ClubNormalizer {
    pub fn new(store: CorrectionStore) -> Self {
        Self { store }
    }

    pub fn normalize(&mut self, raw: &str) -> String {
        let club = normalize_ws(raw);
        if club.is_empty() {
            return club;
        }
        let club = self.store.lookup(&club).unwrap_or(club);
        strip_suffix(&club)
    }

    pub fn store_mut(&mut self) -> &mut CorrectionStore {
        &mut self.store
    }
}

/// Remove a trailing "Inc." / "ON" run anchored at the end of the name.
pub fn strip_suffix(club: &str) -> String {
    s!(SUFFIX.replace(club, "").trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_in_either_order() {
        assert_eq!(strip_suffix("Gym Club Inc. ON"), "Gym Club");
        assert_eq!(strip_suffix("Gym Club ON Inc."), "Gym Club");
        assert_eq!(strip_suffix("Gym Club, Inc."), "Gym Club");
        assert_eq!(strip_suffix("Gym Club (ON)"), "Gym Club");
        assert_eq!(strip_suffix("Gym Club inc on"), "Gym Club");
    }

    #[test]
    fn words_ending_in_on_are_kept() {
        assert_eq!(strip_suffix("Gymnastics Ontario"), "Gymnastics Ontario");
        assert_eq!(strip_suffix("Kingston"), "Kingston");
        assert_eq!(strip_suffix("Incline Gym"), "Incline Gym");
        assert_eq!(strip_suffix("ON"), "ON");
    }

    #[test]
    fn correction_applies_before_stripping() {
        let mut store = CorrectionStore::in_memory();
        store.record("GCI", "Gym Club Inc.").unwrap();
        let mut clubs = ClubNormalizer::new(store);
        assert_eq!(clubs.normalize("  GCI "), "Gym Club");
        assert_eq!(clubs.normalize("Other  Club ON"), "Other Club");
        assert_eq!(clubs.normalize(""), "");
    }
}
