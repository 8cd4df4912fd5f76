// src/scrape/mod.rs
mod scrape;

pub use scrape::{collect_competition, collect_competitions, list_competitions};
pub use scrape::{CompetitionStatus, CompetitionSummary, Harvest, Tally};
