// src/specs/times.rs
use chrono::{NaiveDate, NaiveTime};
use scraper::ElementRef;

use crate::config::consts::{DAY_END, DEFAULT_TIME_TEXT};
use crate::core::html::first_text;
use crate::core::sanitize::strip_ws;
use crate::error::{Error, Result};
use crate::event::{TimeSpan, hm};

/// Read the event's times from the anchor's leading text node.
pub fn parse_times(anchor: ElementRef<'_>, date: NaiveDate) -> Result<TimeSpan> {
    parse_time_text(first_text(anchor), date)
}

/// Time rules for one cell, anchored to `date`:
/// - no text, blank text or exactly `08:00-20:00` → 08:00–20:00
/// - `HH:MM-HH:MM` → as written
/// - `HH:MM-` or an unreadable end → end at 20:00
/// - an end before the start is pulled up to the start
/// - an unreadable start → `MalformedTimeText`
pub fn parse_time_text(text: Option<&str>, date: NaiveDate) -> Result<TimeSpan> {
    let compact = text.map(strip_ws).unwrap_or_default();
    if compact.is_empty() || compact == DEFAULT_TIME_TEXT {
        return Ok(TimeSpan::all_day(date));
    }

    let mut parts = compact.split('-');
    let start = parts
        .next()
        .and_then(parse_hm)
        .ok_or_else(|| Error::MalformedTimeText(compact.clone()))?;
    let end = parts
        .next()
        .and_then(parse_hm)
        .unwrap_or_else(|| hm(DAY_END))
        .max(start);

    TimeSpan::new(date.and_time(start), date.and_time(end))
}

fn parse_hm(s: &str) -> Option<NaiveTime> {
    let (h, m) = s.split_once(':')?;
    NaiveTime::from_hms_opt(h.parse().ok()?, m.parse().ok()?, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn hms(span: &TimeSpan) -> (String, String) {
        (span.start().format("%H:%M").to_string(), span.end().format("%H:%M").to_string())
    }

    #[test]
    fn full_range_is_taken_verbatim() {
        for (text, start, end) in [
            ("10:15-11:45", "10:15", "11:45"),
            (" 08:00 -09:30", "08:00", "09:30"),
            ("7:05-9:5", "07:05", "09:05"),
            ("13:00-\u{a0}17:15", "13:00", "17:15"),
        ] {
            let span = parse_time_text(Some(text), monday()).unwrap();
            assert_eq!(hms(&span), (s!(start), s!(end)), "{text}");
            assert_eq!(span.date(), monday());
        }
    }

    #[test]
    fn missing_or_default_text_is_all_day() {
        let all_day = TimeSpan::all_day(monday());
        assert_eq!(parse_time_text(None, monday()).unwrap(), all_day);
        assert_eq!(parse_time_text(Some("08:00-20:00"), monday()).unwrap(), all_day);
        assert_eq!(parse_time_text(Some(" 08:00 - 20:00 "), monday()).unwrap(), all_day);
        assert_eq!(parse_time_text(Some("  \n "), monday()).unwrap(), all_day);
    }

    #[test]
    fn open_or_broken_end_falls_back_to_eight_pm() {
        for text in ["09:00-", "09:00", "09:00-xx", "09:00-25:00", "09:00-11"] {
            let span = parse_time_text(Some(text), monday()).unwrap();
            assert_eq!(hms(&span), (s!("09:00"), s!("20:00")), "{text}");
        }
    }

    #[test]
    fn end_before_start_is_clamped() {
        let span = parse_time_text(Some("21:00-"), monday()).unwrap();
        assert_eq!(hms(&span), (s!("21:00"), s!("21:00")));
        let span = parse_time_text(Some("18:00-09:00"), monday()).unwrap();
        assert_eq!(hms(&span), (s!("18:00"), s!("18:00")));
    }

    #[test]
    fn unreadable_start_is_an_error() {
        for text in ["ab:cd-10:00", "-10:00", "Ganztägig"] {
            let err = parse_time_text(Some(text), monday()).unwrap_err();
            assert!(matches!(err, Error::MalformedTimeText(_)), "{text}");
        }
    }
}
