// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Tuning knobs for a [`WeekFetcher`](crate::scrape::WeekFetcher).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Open-ended scans stop once more than this many weeks in a row came back empty.
    pub max_empty_weeks: usize,
    /// Cap on concurrent week requests in a range fetch. `None` issues every week at once.
    pub workers: Option<usize>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_empty_weeks: DEFAULT_MAX_EMPTY_WEEKS,
            workers: None,
        }
    }
}

impl FetchOptions {
    /// Threads to spawn for `weeks` requests. Never zero.
    pub fn worker_count(&self, weeks: usize) -> usize {
        match self.workers {
            Some(cap) => cap.min(weeks).max(1),
            None => weeks.max(1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}
