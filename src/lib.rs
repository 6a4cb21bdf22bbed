// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod event;
pub mod logging;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use event::{Event, TimeSpan};
pub use scrape::{WeekFetcher, WeekSelector, monday_of, week_url};
pub use specs::week::parse_week;
