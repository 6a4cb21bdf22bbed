// src/cli.rs
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::Duration,
};

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use log::LevelFilter;

use crate::{
    config::consts::{DEFAULT_LOG_FILE, DEFAULT_MAX_EMPTY_WEEKS, HTTP_TIMEOUT_SECS},
    config::options::{FetchOptions, HttpOptions},
    csv::{Delim, write_events},
    logging,
    progress::Progress,
    scrape::{WeekFetcher, WeekSelector},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for Delim {
    fn from(f: Format) -> Self {
        match f { Format::Csv => Delim::Csv, Format::Tsv => Delim::Tsv }
    }
}

/// Scrape events from a Rapla week view into CSV/TSV.
#[derive(Debug, Parser)]
#[command(name = "rapla_scrape", version)]
pub struct Args {
    /// Calendar URL without the date part (day/month/year get appended)
    #[arg(long, env = "RAPLA_URL")]
    pub url: String,

    /// Fetch only the week containing this date (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["from", "to", "all"])]
    pub week: Option<NaiveDate>,

    /// First week of a range or scan (defaults to today)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last week of a range, inclusive
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Keep going week by week until the schedule runs dry
    #[arg(long, conflicts_with = "to")]
    pub all: bool,

    /// With --all: stop after more than this many empty weeks in a row
    #[arg(long, default_value_t = DEFAULT_MAX_EMPTY_WEEKS)]
    pub max_empty: usize,

    /// Cap on parallel requests for a range
    #[arg(long)]
    pub workers: Option<usize>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Emit a header line
    #[arg(long)]
    pub headers: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn selector(&self, today: NaiveDate) -> WeekSelector {
        let from = self.from.unwrap_or(today);
        match (self.week, self.to, self.all) {
            (Some(week), _, _) => WeekSelector::One(week),
            (None, _, true) => WeekSelector::All(from),
            (None, Some(to), false) => WeekSelector::Range(from, to),
            (None, None, false) => WeekSelector::One(from),
        }
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions { max_empty_weeks: self.max_empty, workers: self.workers }
    }
}

/// Progress lines on stderr.
struct CliProgress {
    total: Option<usize>,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: Option<usize>) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn week_done(&mut self, monday: NaiveDate, events: usize) {
        self.done += 1;
        match self.total {
            Some(t) => eprintln!("[{}/{t}] week {monday}: {events} events", self.done),
            None => eprintln!("[{}] week {monday}: {events} events", self.done),
        }
    }
    fn week_failed(&mut self, monday: NaiveDate, err: &str) {
        eprintln!("week {monday} failed: {err}");
    }
}

pub fn run(args: Args) -> Result<()> {
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    logging::init(&args.log, level)
        .wrap_err_with(|| format!("initializing log at {}", args.log.display()))?;

    let http = HttpOptions { timeout: Duration::from_secs(args.timeout), ..HttpOptions::default() };
    let fetcher = WeekFetcher::http(args.url.as_str(), &http)?.with_options(args.fetch_options());

    let sel = args.selector(Local::now().date_naive());
    let mut progress = CliProgress { total: None, done: 0 };
    let events = fetcher.fetch(sel, Some(&mut progress)).wrap_err("fetching weeks")?;
    progress.log(&format!("{} events", events.len()));

    let sep = Delim::from(args.format).sep();
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = File::create(path).wrap_err_with(|| format!("creating {}", path.display()))?;
            write_events(BufWriter::new(file), &events, args.headers, sep)?;
            progress.log(&format!("Wrote {}", path.display()));
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_events(&mut out, &events, args.headers, sep)?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["rapla_scrape", "--url", "http://r/rapla?key=1"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn selector_follows_flags() {
        let today = d("2024-05-15");
        assert_eq!(parse(&[]).selector(today), WeekSelector::One(today));
        assert_eq!(parse(&["--week", "2024-01-03"]).selector(today), WeekSelector::One(d("2024-01-03")));
        assert_eq!(
            parse(&["--from", "2024-01-01", "--to", "2024-02-01"]).selector(today),
            WeekSelector::Range(d("2024-01-01"), d("2024-02-01"))
        );
        assert_eq!(parse(&["--all"]).selector(today), WeekSelector::All(today));
        assert_eq!(parse(&["--all", "--from", "2024-01-01"]).selector(today), WeekSelector::All(d("2024-01-01")));
    }

    #[test]
    fn conflicting_modes_are_rejected() {
        let argv = ["rapla_scrape", "--url", "u", "--week", "2024-01-01", "--all"];
        assert!(Args::try_parse_from(argv).is_err());
        let argv = ["rapla_scrape", "--url", "u", "--to", "2024-01-01"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn fetch_options_carry_threshold_and_workers() {
        let args = parse(&["--all", "--max-empty", "3", "--workers", "2"]);
        assert_eq!(args.fetch_options(), FetchOptions { max_empty_weeks: 3, workers: Some(2) });
    }
}
