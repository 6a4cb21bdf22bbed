// src/specs/tooltip.rs
use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{ElementRef, Selector};

use crate::config::consts::*;
use crate::core::html::first_text;
use crate::error::Result;
use crate::event::Event;

use super::times::parse_times;

static LABELS: LazyLock<Selector> = LazyLock::new(|| css(TOOLTIP_LABELS));
static VALUES: LazyLock<Selector> = LazyLock::new(|| css(TOOLTIP_VALUES));
static KIND: LazyLock<Selector> = LazyLock::new(|| css(TOOLTIP_TYPE));

pub(crate) fn css(s: &str) -> Selector {
    Selector::parse(s).unwrap_or_else(|e| panic!("bad built-in selector {s:?}: {e}"))
}

/// Build one event from a grid anchor, dated `date`.
///
/// Labels and values are paired by position: the n-th `td.label` goes with the
/// n-th `td.value`. Unknown labels are skipped; a label without a value is
/// treated as absent.
pub fn parse_event(anchor: ElementRef<'_>, date: NaiveDate) -> Result<Event> {
    let mut ev = Event::new(parse_times(anchor, date)?);

    let values: Vec<ElementRef<'_>> = anchor.select(&VALUES).collect();
    for (i, label) in anchor.select(&LABELS).enumerate() {
        let Some(value) = values.get(i).copied().and_then(first_text) else {
            continue;
        };
        match first_text(label).map(str::trim) {
            Some(LABEL_TITLE) => ev.title = Some(s!(value)),
            Some(LABEL_PERSONS) => ev.persons = Some(s!(value)),
            Some(LABEL_RESOURCES) => {
                ev.resources = value.split(RESOURCE_SEP).map(String::from).collect();
            }
            _ => {}
        }
    }

    ev.kind = anchor.select(&KIND).next().and_then(first_text).map(String::from);
    Ok(ev)
}
