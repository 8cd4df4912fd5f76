// src/normalize/mod.rs
//! Turning one scraped results row into a clean [`Record`](crate::data::Record).
//!
//! - `corrections` – persisted original → corrected lookups (athletes, clubs).
//! - `names` – "Last First" → "First Last", with a pluggable chooser for 3+ words.
//! - `clubs` – correction lookup plus legal/provincial suffix stripping.
//! - `columns` – which cell holds the athlete and which the birth year.
//! - `schema` – header rename/drop policy and the run-wide field superset.
//! - `rows` – ties the above together per `<tr>`.

pub mod clubs;
pub mod columns;
pub mod corrections;
pub mod names;
pub mod rows;
pub mod schema;

pub use clubs::ClubNormalizer;
pub use corrections::CorrectionStore;
pub use names::{Disambiguate, NameResolver, NameSplit, Unattended};
pub use rows::RowExtractor;
pub use schema::Schema;
