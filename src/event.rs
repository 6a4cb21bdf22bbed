// src/event.rs
//
// One scheduled occurrence as read off a week grid.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::Regex;

use crate::config::consts::{DAY_END, DAY_START, NOT_AVAILABLE};
use crate::error::{Error, Result};

/// Closed wall-clock interval; `start <= end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeSpan {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeSpan {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if end < start {
            return Err(Error::InvertedSpan);
        }
        Ok(Self { start, end })
    }

    /// The 08:00–20:00 block used when a cell carries no usable times.
    pub fn all_day(date: NaiveDate) -> Self {
        Self {
            start: date.and_time(hm(DAY_START)),
            end: date.and_time(hm(DAY_END)),
        }
    }

    pub fn start(&self) -> NaiveDateTime { self.start }
    pub fn end(&self) -> NaiveDateTime { self.end }
    pub fn date(&self) -> NaiveDate { self.start.date() }
    pub fn duration(&self) -> TimeDelta { self.end - self.start }
}

pub(crate) fn hm((h, m): (u32, u32)) -> NaiveTime {
    // Only called with the compile-time constants above
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub span: TimeSpan,
    /// Rooms, course codes and the like, in source order.
    pub resources: Vec<String>,
    pub persons: Option<String>,
    pub title: Option<String>,
    pub kind: Option<String>,
}

impl Event {
    pub fn new(span: TimeSpan) -> Self {
        Self { span, resources: Vec::new(), persons: None, title: None, kind: None }
    }

    pub fn start(&self) -> NaiveDateTime { self.span.start }
    pub fn end(&self) -> NaiveDateTime { self.span.end }

    /// Replace the start. Rejected if it would land after the current end.
    pub fn set_start(&mut self, start: NaiveDateTime) -> Result<()> {
        self.span = TimeSpan::new(start, self.span.end)?;
        Ok(())
    }

    /// Replace the end. Rejected if it would land before the current start.
    pub fn set_end(&mut self, end: NaiveDateTime) -> Result<()> {
        self.span = TimeSpan::new(self.span.start, end)?;
        Ok(())
    }

    pub fn title_or_na(&self) -> &str { self.title.as_deref().unwrap_or(NOT_AVAILABLE) }
    pub fn persons_or_na(&self) -> &str { self.persons.as_deref().unwrap_or(NOT_AVAILABLE) }
    pub fn kind_or_na(&self) -> &str { self.kind.as_deref().unwrap_or(NOT_AVAILABLE) }

    /// Resources that look like course codes under `pattern`.
    pub fn courses(&self, pattern: &Regex) -> Vec<&str> {
        self.matching_resources(pattern)
    }

    /// Resources that look like rooms under `pattern`.
    pub fn rooms(&self, pattern: &Regex) -> Vec<&str> {
        self.matching_resources(pattern)
    }

    fn matching_resources(&self, pattern: &Regex) -> Vec<&str> {
        self.resources
            .iter()
            .map(String::as_str)
            .filter(|r| pattern.is_match(r))
            .collect()
    }

    /// Starts today or later, relative to `today`.
    pub fn is_current_at(&self, today: NaiveDate) -> bool {
        self.span.start >= today.and_time(NaiveTime::MIN)
    }

    pub fn is_current(&self) -> bool {
        self.is_current_at(Local::now().date_naive())
    }

    /// Substring match on the event type. False when no type was found.
    pub fn is_type(&self, kind: &str) -> bool {
        self.kind.as_deref().is_some_and(|k| k.contains(kind))
    }
}
