// src/config/consts.rs

// Site
pub const BASE_URL: &str = "https://quotes.toscrape.com";
pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

// Tag listings are not discovered from the site; this list is fixed.
pub const TAGS: [&str; 12] = [
    "love", "inspirational", "life", "humor", "books", "reading",
    "friendship", "truth", "simile", "deep-thoughts", "abilities", "change",
];

// Output layout
pub const DEFAULT_OUT_DIR: &str = "outputs";
pub const TAGS_SUBDIR: &str = "tags";
pub const SCREENSHOTS_SUBDIR: &str = "screenshots";
pub const QUOTES_FILE: &str = "all_quotes.csv";
pub const AUTHORS_FILE: &str = "authors.csv";
pub const REPORT_FILE: &str = "report.txt";
pub const MAIN_SHOT_STEM: &str = "main";
pub const CSV_SEP: u8 = b',';

// Fixed pacing (ms)
pub const LOGIN_PAUSE_MS: u64 = 2_000;
pub const AUTHOR_PAUSE_MS: u64 = 1_500;
pub const BACK_PAUSE_MS: u64 = 1_500;
pub const NEXT_PAUSE_MS: u64 = 2_000;
pub const TAG_START_PAUSE_MS: u64 = 2_000;

// Ready pacing
pub const READY_TIMEOUT_MS: u64 = 10_000;
pub const READY_POLL_MS: u64 = 100;

// Report
pub const TOP_AUTHORS: usize = 5;
