// src/progress.rs
use chrono::NaiveDate;

/// Lightweight progress reporting used by week fetches.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of weeks, when known up front.
    fn begin(&mut self, _total: Option<usize>) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One week fetched and parsed.
    fn week_done(&mut self, _monday: NaiveDate, _events: usize) {}

    /// One week could not be fetched.
    fn week_failed(&mut self, _monday: NaiveDate, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
