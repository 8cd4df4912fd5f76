// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;

use ksis_export::normalize::{ClubNormalizer, CorrectionStore, NameResolver, RowExtractor, Unattended};
use ksis_export::specs::{competition::competition_url, results::results_url};

/// Offline site: URL → page body. Unknown URLs fail like a dead connection.
#[derive(Default)]
pub struct Site {
    pages: HashMap<String, String>,
}

impl Site {
    pub fn competition(mut self, id: &str, title: &str, h4: &str, sessions: &[(&str, &str)]) -> Self {
        let options: String = sessions
            .iter()
            .map(|(token, label)| format!(r#"<option value="{token}">{label}</option>"#))
            .collect();
        let body = format!(
            r#"<html><body><h3>{title}</h3><h4>{h4}</h4>
               <select id="id_sut">{options}</select></body></html>"#
        );
        self.pages.insert(competition_url(id), body);
        self
    }

    pub fn raw(mut self, url: String, body: &str) -> Self {
        self.pages.insert(url, body.to_string());
        self
    }

    pub fn results(self, id: &str, token: &str, headers: &[&str], rows: &[&[&str]]) -> Self {
        let th: String = headers.iter().map(|h| format!("<th>{h}</th>")).collect();
        let trs: String = rows
            .iter()
            .map(|cells| {
                let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
                format!("<tr>{tds}</tr>")
            })
            .collect();
        let body = format!(r#"<table id="myTablePrihlasky"><tr>{th}</tr>{trs}</table>"#);
        self.raw(results_url(id, token), &body)
    }

    pub fn fetcher(self) -> impl Fn(&str) -> Option<String> {
        move |url: &str| self.pages.get(url).cloned()
    }
}

pub fn unattended_rows() -> RowExtractor {
    RowExtractor::new(
        NameResolver::new(CorrectionStore::in_memory(), Box::new(Unattended)),
        ClubNormalizer::new(CorrectionStore::in_memory()),
    )
}
