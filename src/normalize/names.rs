// src/normalize/names.rs
//! Athlete display names arrive as "LAST First…". One- and two-word names are
//! settled automatically; longer names have no reliable split point, so the
//! caller supplies a [`Disambiguate`] strategy (a console prompt in the CLI).
//! Whatever it picks is persisted, so each raw name is asked about once, ever.

use std::collections::HashMap;

use super::corrections::CorrectionStore;
use crate::core::sanitize::normalize_ws;
use crate::error::{ExportError, Result};

/// One way to read a multi-word name: leading words are the family name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameSplit {
    pub family: String,
    pub given: String,
}

impl NameSplit {
    /// "First Last" form.
    pub fn canonical(&self) -> String {
        join!(&self.given, " ", &self.family)
    }
}

/// Every split of `words` with 1..n-1 leading words as the family name.
pub fn splits(words: &[&str]) -> Vec<NameSplit> {
    (1..words.len())
        .map(|i| NameSplit { family: words[..i].join(" "), given: words[i..].join(" ") })
        .collect()
}

/// Picks among candidate splits for an ambiguous name. Blocks as long as it needs.
pub trait Disambiguate {
    /// `Ok(Some(i))` selects `options[i]`; `Ok(None)` leaves the name as scraped.
    fn choose(&mut self, raw: &str, options: &[NameSplit]) -> Result<Option<usize>>;
}

impl<F> Disambiguate for F
where
    F: FnMut(&str, &[NameSplit]) -> Result<Option<usize>>,
{
    fn choose(&mut self, raw: &str, options: &[NameSplit]) -> Result<Option<usize>> {
        self(raw, options)
    }
}

/// Never chooses; ambiguous names pass through unchanged and nothing is persisted.
pub struct Unattended;

impl Disambiguate for Unattended {
    fn choose(&mut self, _raw: &str, _options: &[NameSplit]) -> Result<Option<usize>> {
        Ok(None)
    }
}

pub struct NameResolver {
    store: CorrectionStore,
    cache: HashMap<String, String>,
    chooser: Box<dyn Disambiguate>,
}

impl NameResolver {
    pub fn new(store: CorrectionStore, chooser: Box<dyn Disambiguate>) -> Self {
        Self { store, cache: HashMap::new(), chooser }
    }

    /// Canonical "First Last" for a raw "Last First" name.
    /// Errors only when the chooser fails or answers out of range.
    pub fn resolve(&mut self, raw: &str) -> Result<String> {
        let name = normalize_ws(raw);

        if let Some(fixed) = self.store.lookup(&name) {
            return Ok(fixed);
        }
        if let Some(hit) = self.cache.get(&name) {
            return Ok(hit.clone());
        }

        let words: Vec<&str> = name.split(' ').filter(|w| !w.is_empty()).collect();
        let resolved = match words.as_slice() {
            [] | [_] => name.clone(),
            [last, first] => join!(*first, " ", *last),
            _ => return self.disambiguate(&name, &words),
        };
        self.cache.insert(name, resolved.clone());
        Ok(resolved)
    }

    fn disambiguate(&mut self, name: &str, words: &[&str]) -> Result<String> {
        let options = splits(words);
        let resolved = match self.chooser.choose(name, &options)? {
            Some(i) => {
                let pick = options.get(i).ok_or_else(|| {
                    ExportError::Prompt(format!("choice {} out of range for '{name}'", i + 1))
                })?;
                let resolved = pick.canonical();
                if let Err(e) = self.store.record(name, &resolved) {
                    loge!("could not persist name correction '{name}' → '{resolved}': {e}");
                }
                logf!("name '{name}' resolved to '{resolved}'");
                resolved
            }
            None => {
                logd!("name '{name}' left unresolved");
                s!(name)
            }
        };
        self.cache.insert(s!(name), resolved.clone());
        Ok(resolved)
    }

    pub fn store_mut(&mut self) -> &mut CorrectionStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting_chooser(pick: usize, calls: Rc<Cell<usize>>) -> Box<dyn Disambiguate> {
        Box::new(move |_: &str, _: &[NameSplit]| -> Result<Option<usize>> {
            calls.set(calls.get() + 1);
            Ok(Some(pick))
        })
    }

    #[test]
    fn two_words_swap_and_one_word_stays() {
        let mut r = NameResolver::new(CorrectionStore::in_memory(), Box::new(Unattended));
        assert_eq!(r.resolve("DOE Jane").unwrap(), "Jane DOE");
        assert_eq!(r.resolve("  Smith \n  Ann ").unwrap(), "Ann Smith");
        assert_eq!(r.resolve("Cher").unwrap(), "Cher");
        assert_eq!(r.resolve("").unwrap(), "");
    }

    #[test]
    fn splits_cover_every_boundary() {
        let s = splits(&["VAN", "DER", "BERG", "Anna"]);
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].canonical(), "DER BERG Anna VAN");
        assert_eq!(s[2], NameSplit { family: s!("VAN DER BERG"), given: s!("Anna") });
    }

    #[test]
    fn three_words_ask_once_per_run() {
        let calls = Rc::new(Cell::new(0));
        let mut r = NameResolver::new(CorrectionStore::in_memory(), counting_chooser(1, calls.clone()));
        assert_eq!(r.resolve("DE LA Rosa").unwrap(), "Rosa DE LA");
        assert_eq!(r.resolve("DE  LA Rosa").unwrap(), "Rosa DE LA");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn choice_is_persisted_for_later_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("athletes.csv");

        let calls = Rc::new(Cell::new(0));
        let mut first = NameResolver::new(CorrectionStore::open(&path), counting_chooser(0, calls.clone()));
        assert_eq!(first.resolve("SMITH Mary Kate").unwrap(), "Mary Kate SMITH");

        let mut second = NameResolver::new(CorrectionStore::open(&path), counting_chooser(1, calls.clone()));
        assert_eq!(second.resolve("SMITH Mary Kate").unwrap(), "Mary Kate SMITH");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn store_beats_automatic_policy() {
        let mut store = CorrectionStore::in_memory();
        store.record("Li Na", "Li Na").unwrap();
        let mut r = NameResolver::new(store, Box::new(Unattended));
        assert_eq!(r.resolve("Li Na").unwrap(), "Li Na");
    }

    #[test]
    fn unattended_leaves_long_names_alone() {
        let mut r = NameResolver::new(CorrectionStore::in_memory(), Box::new(Unattended));
        assert_eq!(r.resolve("A B C").unwrap(), "A B C");
        assert!(r.store_mut().is_empty());
    }

    #[test]
    fn out_of_range_choice_is_an_error() {
        let mut r = NameResolver::new(
            CorrectionStore::in_memory(),
            Box::new(|_: &str, _: &[NameSplit]| -> Result<Option<usize>> { Ok(Some(7)) }),
        );
        assert!(r.resolve("A B C").is_err());
    }
}
