// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("rapla_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Week grid markup
pub const WEEK_ROWS: &str = "table.week_table > tbody > tr";
pub const WEEK_BLOCK: &str = "week_block";
pub const DAY_SEPARATORS: [&str; 2] = ["week_separatorcell", "week_separatorcell_black"];

// Tooltip markup
pub const TOOLTIP_LABELS: &str = "span.tooltip table.infotable tr td.label";
pub const TOOLTIP_VALUES: &str = "span.tooltip table.infotable tr td.value";
pub const TOOLTIP_TYPE: &str = "span.tooltip strong";
pub const LABEL_TITLE: &str = "Titel:";
pub const LABEL_PERSONS: &str = "Personen:";
pub const LABEL_RESOURCES: &str = "Ressourcen:";
pub const RESOURCE_SEP: char = ',';

// Times
pub const DAY_START: (u32, u32) = (8, 0);
pub const DAY_END: (u32, u32) = (20, 0);
pub const DEFAULT_TIME_TEXT: &str = "08:00-20:00";

// Placeholder for absent text fields at output boundaries
pub const NOT_AVAILABLE: &str = "N/A";

// Scan
pub const DEFAULT_MAX_EMPTY_WEEKS: usize = 15;

// Local files
pub const DEFAULT_LOG_FILE: &str = "rapla_scrape.log";
