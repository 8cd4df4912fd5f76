// src/specs/competition.rs
//! Competition page (`resultx.php?id_prop=<id>`): title, date and the session
//! picker (`<select id="id_sut">`).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{UNKNOWN, UNKNOWN_COMPETITION};
use crate::core::html::{sel, strip_tags};
use crate::core::net::page_url;

static H3: LazyLock<Selector> = LazyLock::new(|| sel("h3"));
static H4: LazyLock<Selector> = LazyLock::new(|| sel("h4"));
static SESSION_SELECT: LazyLock<Selector> = LazyLock::new(|| sel("select#id_sut"));
static OPTION: LazyLock<Selector> = LazyLock::new(|| sel("option"));

static DMY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\.(\d{1,2})\.(\d{4})").expect("static regex"));
static YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2})").expect("static regex"));

/// One entry of the session picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRef {
    /// Opaque `id_sut` value passed back to the results endpoint.
    pub token: String,
    /// Display label; becomes the `Session` field.
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitionPage {
    pub name: String,
    /// ISO `YYYY-MM-DD`, or `Unknown`.
    pub date: String,
    /// `None` when the page has no session picker at all.
    pub sessions: Option<Vec<SessionRef>>,
    /// The page mentions "live" or "in progress" somewhere.
    pub looks_live: bool,
}

impl CompetitionPage {
    /// A real `<h3>` title was found (vs. the placeholder).
    pub fn is_titled(&self) -> bool {
        self.name != UNKNOWN_COMPETITION
    }
}

pub fn competition_url(id: &str) -> String {
    page_url(&format!("resultx.php?id_prop={id}"))
}

pub fn parse(doc: &str) -> CompetitionPage {
    let html = Html::parse_document(doc);

    let name = first_text(&html, &H3)
        .map(|t| t.replace(['/', '\\'], "-"))
        .unwrap_or_else(|| s!(UNKNOWN_COMPETITION));

    let h4 = first_text(&html, &H4).unwrap_or_default();
    let date = parse_date(&h4);
    logd!("competition '{name}', h4 '{h4}' → date {date}");

    let sessions = html
        .select(&SESSION_SELECT)
        .next()
        .map(read_options);

    let lower = doc.to_lowercase();
    let looks_live = lower.contains("in progress") || lower.contains("live");

    CompetitionPage { name, date, sessions, looks_live }
}

fn first_text(html: &Html, selector: &Selector) -> Option<String> {
    html.select(selector)
        .next()
        .map(|el| strip_tags(el.inner_html()))
        .filter(|t| !t.is_empty())
}

fn read_options(select: ElementRef<'_>) -> Vec<SessionRef> {
    let mut out = Vec::new();
    for option in select.select(&OPTION) {
        let label = strip_tags(option.inner_html());
        match option.value().attr("value") {
            Some(token) => out.push(SessionRef { token: s!(token.trim()), label }),
            None => logd!("session option '{label}' has no value; skipped"),
        }
    }
    out
}

/// First `D.M.YYYY` in the text as `YYYY-MM-DD`; else a verbatim `YYYY-M-D`
/// match; else `Unknown`.
pub fn parse_date(text: &str) -> String {
    if let Some(c) = DMY.captures(text) {
        let day = c[1].parse::<u32>().ok();
        let month = c[2].parse::<u32>().ok();
        let year = c[3].parse::<i32>().ok();
        if let (Some(d), Some(m), Some(y)) = (day, month, year) {
            if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                return date.format("%Y-%m-%d").to_string();
            }
        }
        logd!("'{}' is not a calendar date", &c[0]);
    }
    if let Some(m) = YMD.find(text) {
        return s!(m.as_str());
    }
    s!(UNKNOWN)
}
