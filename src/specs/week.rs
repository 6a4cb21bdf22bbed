// src/specs/week.rs
use std::sync::LazyLock;
use std::time::Instant;

use chrono::{Days, NaiveDate};
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{DAY_SEPARATORS, WEEK_BLOCK, WEEK_ROWS};
use crate::core::html::{child_elements, has_class};
use crate::event::Event;

use super::tooltip::{css, parse_event};

static ROWS: LazyLock<Selector> = LazyLock::new(|| css(WEEK_ROWS));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| css("a"));

/// The cells of a week grid that matter for dating events, in document order.
#[derive(Clone, Copy, Debug)]
pub enum GridCell<'a> {
    /// A new time-slot row begins; the day goes back to Monday.
    RowStart,
    /// Boundary between two days.
    DaySeparator,
    /// The anchor of an event-bearing cell.
    Block(ElementRef<'a>),
}

/// Flatten the week table into grid cells. No table, no cells.
pub fn grid_cells(doc: &Html) -> Vec<GridCell<'_>> {
    let mut out = Vec::new();
    for row in doc.select(&ROWS) {
        out.push(GridCell::RowStart);
        for cell in child_elements(row) {
            if has_class(cell, WEEK_BLOCK) {
                // Blocks without an anchor carry nothing to read
                if let Some(anchor) = cell.select(&ANCHOR).next() {
                    out.push(GridCell::Block(anchor));
                }
            } else if DAY_SEPARATORS.iter().any(|c| has_class(cell, c)) {
                out.push(GridCell::DaySeparator);
            }
        }
    }
    out
}

/// Running day position while walking the flattened grid.
#[derive(Clone, Copy, Debug)]
pub struct DayCursor {
    monday: NaiveDate,
    offset: u64,
}

impl DayCursor {
    pub fn new(monday: NaiveDate) -> Self {
        Self { monday, offset: 0 }
    }

    pub fn day(&self) -> Option<NaiveDate> {
        self.monday.checked_add_days(Days::new(self.offset))
    }

    /// Advance over one cell; yields the dated anchor for event cells.
    pub fn step<'a>(&mut self, cell: GridCell<'a>) -> Option<(NaiveDate, ElementRef<'a>)> {
        match cell {
            GridCell::RowStart => {
                self.offset = 0;
                None
            }
            GridCell::DaySeparator => {
                self.offset += 1;
                None
            }
            GridCell::Block(anchor) => self.day().map(|d| (d, anchor)),
        }
    }
}

/// Pair every event anchor with its calendar day.
pub fn dated_anchors<'a, I>(cells: I, monday: NaiveDate) -> Vec<(NaiveDate, ElementRef<'a>)>
where
    I: IntoIterator<Item = GridCell<'a>>,
{
    let mut cursor = DayCursor::new(monday);
    cells.into_iter().filter_map(|c| cursor.step(c)).collect()
}

/// Parse one week page into events. `monday` dates the first grid column.
pub fn parse_week(html: &str, monday: NaiveDate) -> Vec<Event> {
    let t = Instant::now();
    let doc = Html::parse_document(html);

    let mut events = Vec::new();
    for (date, anchor) in dated_anchors(grid_cells(&doc), monday) {
        match parse_event(anchor, date) {
            Ok(ev) => events.push(ev),
            Err(e) => warn!("Week {monday}: dropping event on {date}: {e}"),
        }
    }

    debug!("Week {monday}: parsed {} events in {:?}", events.len(), t.elapsed());
    events
}
