// src/scrape.rs
use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        mpsc,
    },
    thread,
};

use chrono::{Datelike, Days, NaiveDate};
use log::{debug, error, info};

use crate::{
    config::options::{FetchOptions, HttpOptions},
    core::net::{HttpTransport, Transport},
    error::Result,
    event::Event,
    progress::Progress,
    specs::week::parse_week,
};

/// Which weeks to fetch. Dates may fall anywhere in their week.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeekSelector {
    One(NaiveDate),
    /// Both ends inclusive.
    Range(NaiveDate, NaiveDate),
    /// From this week on until the empty-week threshold trips.
    All(NaiveDate),
}

/// The Monday that keys `date`'s week.
/// Weeks are displayed Sunday-first, so a Sunday belongs to the *following* Monday.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    match date.weekday().num_days_from_sunday() {
        0 => date.checked_add_days(Days::new(1)).unwrap_or(date),
        n => date.checked_sub_days(Days::new(u64::from(n) - 1)).unwrap_or(date),
    }
}

/// Request URL for the week starting `monday`. Month is 1-based.
pub fn week_url(base: &str, monday: NaiveDate) -> String {
    format!("{base}&day={}&month={}&year={}", monday.day(), monday.month(), monday.year())
}

/// Mondays from `start`'s week through `end`'s week, 7 days apart.
/// Always contains at least `start`'s Monday.
pub fn mondays_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let end = monday_of(end);
    let mut cur = monday_of(start);
    let mut out = vec![cur];
    while let Some(next) = cur.checked_add_days(Days::new(7)) {
        if next > end {
            break;
        }
        out.push(next);
        cur = next;
    }
    out
}

/// Fetches week pages through a [`Transport`] and turns them into events.
pub struct WeekFetcher<T: Transport> {
    transport: T,
    base_url: String,
    opts: FetchOptions,
}

impl WeekFetcher<HttpTransport> {
    /// Fetcher over plain HTTP(S) against `base_url`.
    pub fn http(base_url: impl Into<String>, http: &HttpOptions) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(http)?, base_url))
    }
}

impl<T: Transport> WeekFetcher<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into(), opts: FetchOptions::default() }
    }

    pub fn with_options(mut self, opts: FetchOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }

    pub fn fetch(
        &self,
        sel: WeekSelector,
        progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<Event>> {
        match sel {
            WeekSelector::One(date) => self.fetch_week(date),
            WeekSelector::Range(start, end) => self.fetch_range(start, end, progress),
            WeekSelector::All(start) => Ok(self.fetch_all(start, progress)),
        }
    }

    /// Events of the week containing `date`.
    pub fn fetch_week(&self, date: NaiveDate) -> Result<Vec<Event>> {
        self.fetch_monday(monday_of(date))
    }

    fn fetch_monday(&self, monday: NaiveDate) -> Result<Vec<Event>> {
        let url = week_url(&self.base_url, monday);
        debug!("GET {url}");
        let body = self.transport.get(&url)?;
        Ok(parse_week(&body, monday))
    }

    /// Events of every week from `start`'s through `end`'s, in week order.
    ///
    /// All weeks are requested concurrently (capped by `FetchOptions::workers`).
    /// Any failed week fails the whole range; no partial result is returned.
    pub fn fetch_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<Event>> {
        let weeks = mondays_between(start, end);
        let workers = self.opts.worker_count(weeks.len());
        if let Some(p) = progress.as_deref_mut() {
            p.begin(Some(weeks.len()));
        }

        let next = AtomicUsize::new(0);
        let abort = AtomicBool::new(false);
        let (tx, rx) = mpsc::channel::<(usize, Result<Vec<Event>>)>();

        let mut slots: Vec<Option<Vec<Event>>> = vec![None; weeks.len()];
        let mut failure = None;

        thread::scope(|s| {
            for _ in 0..workers {
                let tx = tx.clone();
                let (weeks, next, abort) = (&weeks, &next, &abort);
                s.spawn(move || {
                    while !abort.load(Ordering::Relaxed) {
                        let i = next.fetch_add(1, Ordering::Relaxed);
                        let Some(&monday) = weeks.get(i) else { break };
                        let res = self.fetch_monday(monday);
                        if res.is_err() {
                            abort.store(true, Ordering::Relaxed);
                        }
                        if tx.send((i, res)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(tx); // this thread is the sole receiver now

            for (i, res) in rx {
                let monday = weeks[i];
                match res {
                    Ok(events) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.week_done(monday, events.len());
                        }
                        slots[i] = Some(events);
                    }
                    Err(e) => {
                        error!("Week {monday}: {e}");
                        if let Some(p) = progress.as_deref_mut() {
                            p.week_failed(monday, &e.to_string());
                        }
                        failure.get_or_insert(e);
                    }
                }
            }
        });

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        if let Some(e) = failure {
            return Err(e);
        }

        Ok(slots.into_iter().flatten().flatten().collect())
    }

    /// Events from `start`'s week onward, one week at a time, until more than
    /// `max_empty_weeks` weeks in a row came back empty.
    ///
    /// A transport failure ends the scan early. Whatever was collected up to
    /// that point is returned; this never fails.
    pub fn fetch_all(
        &self,
        start: NaiveDate,
        mut progress: Option<&mut dyn Progress>,
    ) -> Vec<Event> {
        let first = monday_of(start);
        let mut monday = first;
        let mut weeks: Vec<Vec<Event>> = Vec::new();
        let mut empty_run = 0usize;

        if let Some(p) = progress.as_deref_mut() {
            p.begin(None);
        }

        while empty_run <= self.opts.max_empty_weeks {
            match self.fetch_monday(monday) {
                Ok(events) => {
                    empty_run = if events.is_empty() { empty_run + 1 } else { 0 };
                    if let Some(p) = progress.as_deref_mut() {
                        p.week_done(monday, events.len());
                    }
                    weeks.push(events);
                }
                Err(e) => {
                    error!("Week {monday}: {e}; stopping scan");
                    if let Some(p) = progress.as_deref_mut() {
                        p.week_failed(monday, &e.to_string());
                    }
                    break;
                }
            }
            match monday.checked_add_days(Days::new(7)) {
                Some(next) => monday = next,
                None => break,
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        info!("Scan from {first}: {} weeks fetched, {empty_run} trailing empty", weeks.len());
        weeks.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn monday_of_uses_sunday_start_weeks() {
        // 2024-01-01 is a Monday
        assert_eq!(monday_of(d(2024, 1, 1)), d(2024, 1, 1));
        assert_eq!(monday_of(d(2024, 1, 3)), d(2024, 1, 1));
        assert_eq!(monday_of(d(2024, 1, 6)), d(2024, 1, 1));
        // Sunday moves forward
        assert_eq!(monday_of(d(2024, 1, 7)), d(2024, 1, 8));
        assert_eq!(monday_of(d(2023, 12, 31)), d(2024, 1, 1));
    }

    #[test]
    fn week_url_appends_unpadded_date() {
        assert_eq!(
            week_url("https://rapla.example/rapla?page=calendar&user=a&file=b", d(2024, 3, 4)),
            "https://rapla.example/rapla?page=calendar&user=a&file=b&day=4&month=3&year=2024"
        );
    }

    #[test]
    fn mondays_between_is_inclusive_and_never_empty() {
        assert_eq!(mondays_between(d(2024, 1, 3), d(2024, 1, 17)), vec![d(2024, 1, 1), d(2024, 1, 8), d(2024, 1, 15)]);
        assert_eq!(mondays_between(d(2024, 1, 2), d(2024, 1, 5)), vec![d(2024, 1, 1)]);
        assert_eq!(mondays_between(d(2024, 2, 1), d(2024, 1, 1)), vec![d(2024, 1, 29)]);
    }
}
