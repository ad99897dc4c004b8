// src/runner.rs
use std::path::PathBuf;

use chrono::Local;

use crate::{
    browser::Navigator,
    config::{consts::TAGS, options::Options},
    data::{MainCrawl, TagCrawl},
    error::Result,
    file::{write_authors, write_quotes, OutputLayout},
    progress::Progress,
    report::{write_report, Report},
    scrape,
};

/// Summary of what was produced.
pub struct RunSummary {
    pub main: MainCrawl,
    pub tags: Vec<TagCrawl>,
    pub report: Report,
    pub files_written: Vec<PathBuf>,
    pub out: OutputLayout,
}

/// One full run: login, main listing, authors, tags, report.
///
/// Files land in the order a partial run would leave them: main CSVs once the main
/// listing is done, each tag CSV once that tag is done, the report last.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    nav: &mut dyn Navigator,
    opts: &Options,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let out = OutputLayout::new(&opts.out_dir);
    out.prepare()?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(1 + TAGS.len());
    }

    scrape::login(nav, opts)?;

    let main = scrape::crawl_main(nav, opts, &out, reborrow(&mut progress))?;
    let mut written = vec![
        write_quotes(&out.quotes(), &main.quotes)?,
        write_authors(&out.authors(), main.author_records())?,
    ];
    if let Some(p) = progress.as_deref_mut() {
        p.item_done("main", &written[0]);
    }

    let (tags, tag_files) = scrape::crawl_tags(nav, opts, &out, &TAGS, reborrow(&mut progress))?;
    written.extend(tag_files);

    let report = Report::from_crawls(&main, &tags);
    written.push(write_report(&out.report(), &report, &Local::now())?);
    logf!(
        "Report: {} quotes, {} authors -> {}",
        report.total,
        report.unique_authors(),
        out.report().display()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { main, tags, report, files_written: written, out })
}

/// Reborrow for a single call so `progress` stays usable afterwards.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}
