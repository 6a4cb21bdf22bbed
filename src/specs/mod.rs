// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific reading rules** for the Rapla week view.
//! It encodes *where the ground truth lives in the HTML* and *how to extract it
//! without falling over* when a cell is missing pieces.
//!
//! ## What lives here
//! - **Pure HTML parsing** of one week page (`week`), no network and no clock.
//! - **Time text rules** (`times`): `HH:MM-HH:MM`, the 08:00–20:00 fallback and the
//!   open-ended `HH:MM-` form.
//! - **Tooltip reading** (`tooltip`): the label/value table and the bold type line.
//!
//! ## What does **not** live here
//! - **Fetching, date stepping and stop rules** – that’s `scrape`.
//! - **Export formatting** – `csv` decides how an `Event` becomes a row.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::WeekFetcher::fetch_* → Transport::get(url)
//!                                   ↘  specs::week::parse_week(html, monday)
//!                                        ↘ tooltip::parse_event → times::parse_times
//! ```
//!
//! ## Conventions & invariants
//! - The grid has no per-cell dates. The day comes from **counting separator cells**
//!   left to right, starting over at Monday on every row.
//! - A broken single event never fails the week. Missing fields become `None`,
//!   a start time that can't be read drops that one event with a warning.
//! - No grid table at all is an empty week, not an error.
//!
//! ## Testing notes
//! - Everything here is testable **offline** against small HTML fixtures.
pub mod times;
pub mod tooltip;
pub mod week;
