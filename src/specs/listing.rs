// src/specs/listing.rs
//! Competition menu (`menu.php`): every link carrying `id_prop=<digits>`,
//! with a `span.badge` reading "LIVE" next to ongoing competitions.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::LISTING_PATH;
use crate::config::options::ListFilter;
use crate::core::html::{sel, strip_tags};
use crate::core::net::page_url;

static LINKS: LazyLock<Selector> = LazyLock::new(|| sel("a[href]"));
static BADGE: LazyLock<Selector> = LazyLock::new(|| sel("span.badge"));
static PROP_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"id_prop=(\d+)").expect("static regex"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitionEntry {
    pub id: String,
    pub name: String,
    pub is_live: bool,
}

pub fn listing_url() -> String {
    page_url(LISTING_PATH)
}

/// All competitions in page order; first occurrence of an id wins.
pub fn parse(doc: &str) -> Vec<CompetitionEntry> {
    let html = Html::parse_document(doc);
    let mut out: Vec<CompetitionEntry> = Vec::new();

    for link in html.select(&LINKS) {
        let Some(href) = link.value().attr("href") else { continue };
        let Some(caps) = PROP_ID.captures(href) else { continue };
        let id = &caps[1];

        let name = strip_tags(link.inner_html());
        if name.is_empty() || out.iter().any(|c| c.id == id) {
            continue;
        }
        out.push(CompetitionEntry { id: s!(id), name, is_live: has_live_badge(link) });
    }
    out
}

fn has_live_badge(link: ElementRef<'_>) -> bool {
    link.parent()
        .and_then(ElementRef::wrap)
        .map(|parent| {
            parent
                .select(&BADGE)
                .any(|b| strip_tags(b.inner_html()).to_lowercase().contains("live"))
        })
        .unwrap_or(false)
}

pub fn filter(entries: Vec<CompetitionEntry>, how: &ListFilter) -> Vec<CompetitionEntry> {
    match how {
        ListFilter::All => entries,
        ListFilter::LiveOnly => entries.into_iter().filter(|c| c.is_live).collect(),
        ListFilter::Keyword(kw) => {
            let kw = kw.to_lowercase();
            entries
                .into_iter()
                .filter(|c| c.name.to_lowercase().contains(&kw))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = r#"
        <ul>
          <li><a href="resultx.php?id_prop=8819">Ontario Cup 1</a> <span class="badge bg-danger">LIVE</span></li>
          <li><a href="resultx.php?id_prop=8820">Western Canadians</a></li>
          <li><a href="resultx.php?id_prop=8819">Ontario Cup 1 (dup)</a></li>
          <li><a href="resultx.php?id_prop=8821"> </a></li>
          <li><a href="about.php">About</a></li>
        </ul>
    "#;

    #[test]
    fn parses_unique_competitions_with_live_flag() {
        let list = parse(MENU);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], CompetitionEntry { id: s!("8819"), name: s!("Ontario Cup 1"), is_live: true });
        assert!(!list[1].is_live);
    }

    #[test]
    fn filters() {
        let list = parse(MENU);
        assert_eq!(filter(list.clone(), &ListFilter::All).len(), 2);
        let live = filter(list.clone(), &ListFilter::LiveOnly);
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, "8819");
        let found = filter(list, &ListFilter::Keyword(s!("western")));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "8820");
    }
}
