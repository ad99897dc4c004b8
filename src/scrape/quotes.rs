// src/scrape/quotes.rs
use crate::browser::{Navigator, Target};
use crate::config::consts::MAIN_SHOT_STEM;
use crate::config::options::{Options, Step};
use crate::core::sanitize::field;
use crate::data::{AuthorRecord, MainCrawl};
use crate::error::Result;
use crate::file::OutputLayout;
use crate::progress::Progress;
use crate::specs::{author, listing};

use super::paginate::{paginate, read_item};

/// Crawl the main listing from the page currently loaded (the post-login landing
/// page).
///
/// A card is kept when its text and author are non-empty and its text has not been
/// kept before. The first kept card of each author with an "(about)" link triggers
/// one visit to the author's page; later cards by that author never do.
pub fn crawl_main(
    nav: &mut dyn Navigator,
    opts: &Options,
    out: &OutputLayout,
    mut progress: Option<&mut dyn Progress>,
) -> Result<MainCrawl> {
    let mut crawl = MainCrawl::new();

    let pages = paginate(nav, opts, out, MAIN_SHOT_STEM, |nav, page, count| {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Main page {page}: {count} quotes"));
        }
        for i in 0..count {
            let item = read_item(nav, i, true)?;
            if !item.is_complete() {
                continue;
            }
            if !crawl.accept_quote(&item.quote, &item.author) {
                logd!("Duplicate quote skipped: {}", preview(&item.quote));
                continue;
            }
            logf!("✔ Quote: {}... | Author: {}", preview(&item.quote), item.author);

            if item.link.is_empty() || crawl.author_seen(&item.author) {
                continue;
            }
            crawl.mark_author(&item.author);
            let record = visit_author(nav, opts, &item.link)?;
            crawl.add_author(&item.author, record);
        }
        Ok(())
    })?;

    crawl.pages = pages;
    logf!(
        "Main listing done: {} pages, {} quotes, {} authors",
        crawl.pages,
        crawl.quotes.len(),
        crawl.authors.len()
    );
    Ok(crawl)
}

/// Open an author's detail page, read the biography, and go back to the listing.
pub fn visit_author(nav: &mut dyn Navigator, opts: &Options, href: &str) -> Result<AuthorRecord> {
    let url = listing::resolve(opts.base(), href)?;
    logf!("Visiting author page {url}");
    nav.navigate(&url)?;
    nav.settle(&opts.wait_for(Step::AuthorPage))?;

    let record = AuthorRecord {
        name: read_field(nav, author::NAME)?,
        born_date: read_field(nav, author::BORN_DATE)?,
        born_location: read_field(nav, author::BORN_LOCATION)?,
        description: read_field(nav, author::DESCRIPTION)?,
    };

    nav.back()?;
    nav.settle(&opts.wait_leaving(Step::Back, &url))?;
    Ok(record)
}

fn read_field(nav: &mut dyn Navigator, selector: &str) -> Result<String> {
    let v = nav.text(&Target::first(selector))?;
    if v.is_none() {
        logd!("Author page: no match for '{selector}'");
    }
    Ok(field(v))
}

/// First 60 characters, for log lines.
fn preview(s: &str) -> &str {
    match s.char_indices().nth(60) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
