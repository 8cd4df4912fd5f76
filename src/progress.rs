// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape/export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of competitions to collect.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A session produced `rows` records.
    fn session_done(&mut self, _label: &str, _rows: usize) {}

    /// A session has nothing to show yet.
    fn session_pending(&mut self, _label: &str, _why: Pending) {}

    /// A session's results could not be fetched.
    fn session_failed(&mut self, _label: &str) {}

    /// Called when one competition has been fully walked.
    fn item_done(&mut self, _id: &str, _name: &str) {}

    /// Called when a competition could not be walked at all.
    fn item_failed(&mut self, _id: &str, _why: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Why a session counts as in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    NoTable,
    /// Table present but no athlete rows; `live` if the label says so.
    NoRows { live: bool },
}
