// src/csv.rs
use std::io::{self, Write};

use crate::event::Event;

pub const HEADERS: [&str; 7] = ["Date", "Start", "End", "Title", "Persons", "Resources", "Type"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Event shaping ---------------- */

/// One export row per event. Absent text fields come out as "N/A".
pub fn event_row(ev: &Event) -> Vec<String> {
    vec![
        ev.span.date().format("%Y-%m-%d").to_string(),
        ev.start().format("%H:%M").to_string(),
        ev.end().format("%H:%M").to_string(),
        s!(ev.title_or_na()),
        s!(ev.persons_or_na()),
        ev.resources.join(","),
        s!(ev.kind_or_na()),
    ]
}

/// Write all events, optionally preceded by a header line.
pub fn write_events<W: Write>(mut w: W, events: &[Event], include_headers: bool, sep: char) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &HEADERS, sep)?;
    }
    for ev in events {
        write_row(&mut w, &event_row(ev), sep)?;
    }
    w.flush()
}

/// Full export as a string (Copy/Export).
pub fn to_export_string(events: &[Event], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_events(&mut buf, events, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["Room 1,Room 2", "x"], Delim::Tsv.sep()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Room 1,Room 2\tx\n");
    }
}
