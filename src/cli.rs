// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::browser::chrome::ChromeNavigator;
use crate::config::consts::{BASE_URL, DEFAULT_OUT_DIR, DEFAULT_PASSWORD, DEFAULT_USERNAME};
use crate::config::options::{Credentials, Options, Pacing};
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Debug, Parser)]
#[command(name = "quotes_scrape", version, about = "Scrape quotes.toscrape.com into CSV files")]
pub struct Args {
    /// Run the browser without a window
    #[arg(long)]
    pub headless: bool,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "QUOTES_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    #[arg(long, env = "QUOTES_PASSWORD", default_value = DEFAULT_PASSWORD, hide_env_values = true)]
    pub password: String,

    /// How to wait after clicks and navigations
    #[arg(long, value_enum, default_value_t = PacingArg::Fixed)]
    pub pacing: PacingArg,

    /// Chrome/Chromium binary (auto-detected when omitted)
    #[arg(long)]
    pub chrome: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PacingArg {
    /// Fixed sleeps per step
    Fixed,
    /// Wait for the page to be ready, bounded by a timeout
    Ready,
}

impl From<Args> for Options {
    fn from(a: Args) -> Self {
        Options {
            headless: a.headless,
            out_dir: a.out,
            base_url: a.base_url,
            credentials: Credentials { username: a.username, password: a.password },
            pacing: match a.pacing {
                PacingArg::Fixed => Pacing::Fixed,
                PacingArg::Ready => Pacing::Ready,
            },
            chrome: a.chrome,
        }
    }
}

/// Prints progress lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, label: &str, path: &Path) {
        self.done += 1;
        println!("[{}/{}] {label} -> {}", self.done, self.total, path.display());
    }
}

/// Parse args, launch a browser, crawl, close the browser.
pub fn run() -> Result<RunSummary> {
    let opts: Options = Args::parse().into();
    run_with(&opts)
}

pub fn run_with(opts: &Options) -> Result<RunSummary> {
    let mut nav = ChromeNavigator::launch(opts.headless, opts.chrome.as_deref())?;
    let mut progress = ConsoleProgress::default();
    let result = runner::run(&mut nav, opts, Some(&mut progress as &mut dyn Progress));
    if let Err(e) = nav.close() {
        logw!("Browser did not close cleanly: {e}");
    }
    result
}
