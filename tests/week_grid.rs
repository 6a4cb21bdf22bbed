// tests/week_grid.rs
use chrono::{NaiveDate, NaiveDateTime};
use rapla_scrape::parse_week;

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

#[test]
fn single_block_example() {
    let html = r##"
        <table class="week_table"><tbody><tr>
          <td class="week_block"><a href="#">10:15-11:45<span class="tooltip">
            <table class="infotable">
              <tr><td class="label">Titel:</td><td class="value">Algebra</td></tr>
              <tr><td class="label">Personen:</td><td class="value">Prof. X</td></tr>
              <tr><td class="label">Ressourcen:</td><td class="value">Room 1,Room 2</td></tr>
            </table></span></a></td>
        </tr></tbody></table>
    "##;

    let events = parse_week(html, monday());
    assert_eq!(events.len(), 1);
    let ev = &events[0];
    assert_eq!(ev.start(), at("2024-01-01 10:15"));
    assert_eq!(ev.end(), at("2024-01-01 11:45"));
    assert_eq!(ev.title.as_deref(), Some("Algebra"));
    assert_eq!(ev.persons.as_deref(), Some("Prof. X"));
    assert_eq!(ev.resources, vec!["Room 1", "Room 2"]);
    assert_eq!(ev.kind_or_na(), "N/A");
}

#[test]
fn captured_week_page() {
    let html = include_str!("fixtures/week.html");
    let events = parse_week(html, monday());

    let summary: Vec<(NaiveDateTime, NaiveDateTime, &str, &str)> = events
        .iter()
        .map(|e| (e.start(), e.end(), e.title_or_na(), e.kind_or_na()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (at("2024-01-01 08:15"), at("2024-01-01 09:45"), "Analysis I", "Vorlesung"),
            (at("2024-01-03 08:00"), at("2024-01-03 20:00"), "Hochschule geschlossen", "Feiertag"),
            (at("2024-01-02 10:15"), at("2024-01-02 11:45"), "Algebra", "Klausur"),
            (at("2024-01-01 13:00"), at("2024-01-01 20:00"), "Offene Sprechstunde", "Sprechstunde"),
        ]
    );

    assert_eq!(events[0].persons.as_deref(), Some("Meyer, Anna"));
    assert_eq!(events[0].resources, vec!["TINF23A", "Raum 101"]);
    assert_eq!(events[2].persons.as_deref(), Some("Prof. X"));
    assert_eq!(events[3].persons, None);
    assert!(events[3].resources.is_empty());
}

#[test]
fn header_row_cells_do_not_shift_days() {
    // A row without separators keeps every block on Monday
    let html = r#"<table class="week_table"><tr><td class="week_header">Mo</td>
        <td class="week_block"><a>09:00-10:00</a></td><td class="week_block"><a>11:00-12:00</a></td></tr></table>"#;
    let events = parse_week(html, monday());
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.span.date() == monday()));
}
