// src/scrape/scrape.rs
//! Walk competitions → sessions → rows, one request at a time.
//!
//! Nothing here is fatal: a competition page that cannot be fetched, a session
//! without results or an unreadable row is counted and reported, and the walk
//! moves on to the next unit.

use crate::{
    config::consts::{UNKNOWN, UNKNOWN_COMPETITION},
    config::options::ListFilter,
    core::Fetch,
    data::{Record, BASE_FIELDS, COMPETITION, DATE, SESSION},
    error::{ExportError, Result},
    normalize::{RowExtractor, Schema},
    progress::{Pending, Progress},
    specs::{
        competition::{self, CompetitionPage, SessionRef},
        listing::{self, CompetitionEntry},
        results,
    },
};

/// Session outcome counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub completed: usize,
    pub in_progress: usize,
    pub failed: usize,
}

impl Tally {
    pub fn sessions(&self) -> usize {
        self.completed + self.in_progress + self.failed
    }

    fn add(&mut self, other: Tally) {
        self.completed += other.completed;
        self.in_progress += other.in_progress;
        self.failed += other.failed;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompetitionStatus {
    /// Sessions were walked (each with its own outcome).
    Collected,
    /// The page had no session picker, or an empty one.
    NoSessions { looks_live: bool, titled: bool },
    /// The competition page itself could not be fetched.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompetitionSummary {
    pub id: String,
    pub name: String,
    pub date: String,
    pub status: CompetitionStatus,
    pub tally: Tally,
}

/// Everything one export call collected.
#[derive(Clone, Debug, Default)]
pub struct Harvest {
    pub records: Vec<Record>,
    pub schema: Schema,
    pub tally: Tally,
    pub competitions: Vec<CompetitionSummary>,
}

impl Harvest {
    /// Empty harvest whose schema already holds the always-present fields.
    pub fn new(merged: bool) -> Self {
        let mut schema = Schema::with_fields(BASE_FIELDS.iter().copied());
        if merged {
            schema.absorb([COMPETITION]);
        }
        Self { schema, ..Default::default() }
    }

    /// Plain union: records appended, schemas and counts combined.
    pub fn merge(&mut self, other: Harvest) {
        self.records.extend(other.records);
        self.schema.merge(&other.schema);
        self.tally.add(other.tally);
        self.competitions.extend(other.competitions);
    }

    pub fn failed_competitions(&self) -> usize {
        self.competitions
            .iter()
            .filter(|c| c.status != CompetitionStatus::Collected)
            .count()
    }
}

pub fn collect_competition(
    fetch: &dyn Fetch,
    rows: &mut RowExtractor,
    id: &str,
    progress: Option<&mut dyn Progress>,
) -> Harvest {
    collect_competitions(fetch, rows, &[s!(id)], progress)
}

/// Collect every competition in `ids` into one harvest. More than one id
/// tags each record with its `Competition`.
pub fn collect_competitions(
    fetch: &dyn Fetch,
    rows: &mut RowExtractor,
    ids: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Harvest {
    let merged = ids.len() > 1;
    let mut harvest = Harvest::new(merged);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }
    for id in ids {
        let one = collect_one(fetch, rows, id, merged, progress.as_deref_mut());
        harvest.merge(one);
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    logf!(
        "collected {} records from {} competition(s): {:?}",
        harvest.records.len(), ids.len(), harvest.tally
    );
    harvest
}

fn collect_one(
    fetch: &dyn Fetch,
    rows: &mut RowExtractor,
    id: &str,
    merged: bool,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Harvest {
    let mut harvest = Harvest::new(merged);
    let mut summary = CompetitionSummary {
        id: s!(id),
        name: s!(UNKNOWN_COMPETITION),
        date: s!(UNKNOWN),
        status: CompetitionStatus::Failed,
        tally: Tally::default(),
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching competition data (prop_id: {id})..."));
    }
    let url = competition::competition_url(id);
    let Some(doc) = fetch.fetch(&url) else {
        loge!("competition {id}: no content from {url}");
        if let Some(p) = progress.as_deref_mut() {
            p.item_failed(id, "could not fetch competition page");
        }
        harvest.competitions.push(summary);
        return harvest;
    };

    let page = competition::parse(&doc);
    summary.name = page.name.clone();
    summary.date = page.date.clone();

    let sessions = match &page.sessions {
        Some(list) if !list.is_empty() => list.clone(),
        _ => {
            logw!("competition {id}: no session list (live={})", page.looks_live);
            summary.status = CompetitionStatus::NoSessions {
                looks_live: page.looks_live,
                titled: page.is_titled(),
            };
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(id, "no sessions listed");
            }
            harvest.competitions.push(summary);
            return harvest;
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} – {} session(s)", page.name, sessions.len()));
    }
    for session in &sessions {
        collect_session(&mut harvest, fetch, rows, id, &page, session, merged, progress.as_deref_mut());
    }

    summary.status = CompetitionStatus::Collected;
    summary.tally = harvest.tally;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(id, &page.name);
    }
    harvest.competitions.push(summary);
    harvest
}

#[allow(clippy::too_many_arguments)]
fn collect_session(
    harvest: &mut Harvest,
    fetch: &dyn Fetch,
    rows: &mut RowExtractor,
    id: &str,
    page: &CompetitionPage,
    session: &SessionRef,
    merged: bool,
    mut progress: Option<&mut (dyn Progress + '_)>,
) {
    let label = session.label.as_str();
    let Some(doc) = fetch.fetch(&results::results_url(id, &session.token)) else {
        harvest.tally.failed += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.session_failed(label);
        }
        return;
    };

    let Some(table) = results::parse(&doc) else {
        logd!("session '{label}': no results table");
        harvest.tally.in_progress += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.session_pending(label, Pending::NoTable);
        }
        return;
    };

    harvest.schema.absorb_headers(&table.headers);

    let mut count = 0usize;
    for cells in &table.rows {
        let Some(mut rec) = rows.extract(&table.headers, cells) else { continue };
        rec.set(SESSION, label);
        rec.set(DATE, page.date.as_str());
        if merged {
            rec.set(COMPETITION, page.name.as_str());
        }
        harvest.schema.absorb(rec.fields());
        harvest.records.push(rec);
        count += 1;
    }

    if count == 0 {
        harvest.tally.in_progress += 1;
        let lower = label.to_lowercase();
        let live = lower.contains("live") || lower.contains("in progress");
        if let Some(p) = progress.as_deref_mut() {
            p.session_pending(label, Pending::NoRows { live });
        }
    } else {
        harvest.tally.completed += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.session_done(label, count);
        }
    }
}

/// Competitions from the site menu, filtered.
pub fn list_competitions(fetch: &dyn Fetch, how: &ListFilter) -> Result<Vec<CompetitionEntry>> {
    let url = listing::listing_url();
    let doc = fetch.fetch(&url).ok_or_else(|| ExportError::Fetch(url.clone()))?;
    let all = listing::parse(&doc);
    logd!("listing: {} competitions before filter {how:?}", all.len());
    Ok(listing::filter(all, how))
}
