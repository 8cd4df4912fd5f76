//! # Scraping “specs” module
//!
//! Page-specific readers for the KSIS site. Each spec knows where the ground
//! truth lives in one page's HTML and turns it into a small plain struct.
//!
//! ## What lives here
//! - **Pure HTML parsing** of the competition listing (`menu.php`), a competition
//!   page (`resultx.php`) and a session results fragment
//!   (`load_result_total_ksismg_art.php`).
//! - **URL building** for those pages.
//!
//! ## What does **not** live here
//! - **Fetching** – callers pass page text in; `core::net` does the I/O.
//! - **Normalization** – names, clubs and headers are cleaned up in `normalize`.
//! - **Outcome bookkeeping** – `scrape` decides what a missing table means.
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_* → Fetch::fetch(url) → specs::<page>::parse(&text)
//!                                        ↘ normalize::RowExtractor per row
//! ```
//!
//! ## Testing notes
//! Every spec is testable offline against inline fixtures.
pub mod competition;
pub mod listing;
pub mod results;
