// src/scrape/tags.rs
use std::path::PathBuf;

use crate::browser::Navigator;
use crate::config::options::{Options, Step};
use crate::data::{QuoteRecord, TagCrawl};
use crate::error::Result;
use crate::file::{write_quotes, OutputLayout};
use crate::progress::Progress;
use crate::specs::listing;

use super::paginate::{paginate, read_item};

/// Crawl one tag listing to exhaustion. Quotes are kept as-is: no seen-set.
pub fn crawl_tag(
    nav: &mut dyn Navigator,
    opts: &Options,
    out: &OutputLayout,
    tag: &str,
) -> Result<TagCrawl> {
    let url = listing::tag_url(opts.base(), tag)?;
    logf!("Scraping tag '{tag}' from {url}");
    nav.navigate(&url)?;
    nav.settle(&opts.wait_for(Step::TagStart))?;

    let mut crawl = TagCrawl::new(tag);
    let pages = paginate(nav, opts, out, tag, |nav, _page, count| {
        for i in 0..count {
            let item = read_item(nav, i, false)?;
            if item.is_complete() {
                crawl.quotes.push(QuoteRecord::new(item.quote, item.author));
            }
        }
        Ok(())
    })?;
    crawl.pages = pages;
    Ok(crawl)
}

/// Crawl every tag in order, writing `tags/<tag>.csv` as soon as each tag is done.
/// Every tag gets a file, header-only when it had no quotes.
pub fn crawl_tags(
    nav: &mut dyn Navigator,
    opts: &Options,
    out: &OutputLayout,
    tags: &[&str],
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Vec<TagCrawl>, Vec<PathBuf>)> {
    let mut crawls = Vec::with_capacity(tags.len());
    let mut written = Vec::with_capacity(tags.len());

    for tag in tags {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Tag: {tag}"));
        }
        let crawl = crawl_tag(nav, opts, out, tag)?;
        let path = write_quotes(&out.tag(tag), &crawl.quotes)?;
        logf!("Tag '{tag}': {} quotes over {} pages -> {}", crawl.quotes.len(), crawl.pages, path.display());
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(tag, &path);
        }
        crawls.push(crawl);
        written.push(path);
    }
    Ok((crawls, written))
}
