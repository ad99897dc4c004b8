// src/scrape/paginate.rs
use crate::browser::{Navigator, Target};
use crate::config::options::{Options, Step};
use crate::core::sanitize::field;
use crate::error::Result;
use crate::file::OutputLayout;
use crate::specs::listing::{AUTHOR, AUTHOR_LINK, HREF, ITEM, NEXT, TEXT};

/// One quote card as read off the page. Missing parts are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub quote: String,
    pub author: String,
    pub link: String,
}

impl Item {
    /// Cards without both a text and a byline are skipped everywhere.
    pub fn is_complete(&self) -> bool {
        !self.quote.is_empty() && !self.author.is_empty()
    }
}

/// Read the `index`-th card. The author link is only queried when `with_link`.
pub fn read_item(nav: &mut dyn Navigator, index: usize, with_link: bool) -> Result<Item> {
    let quote = field(nav.text(&Target::within(ITEM, index, TEXT))?);
    let author = field(nav.text(&Target::within(ITEM, index, AUTHOR))?);
    let link = if with_link {
        field(nav.attr(&Target::within(ITEM, index, AUTHOR_LINK), HREF)?)
    } else {
        s!()
    };
    if quote.is_empty() || author.is_empty() {
        logd!("Card {index}: missing text or author (text={:?}, author={:?})", quote, author);
    }
    Ok(Item { quote, author, link })
}

/// Walk a paginated listing starting from the page currently loaded.
///
/// For each page: `on_page(nav, page, item_count)`, then a full-page screenshot to
/// `<stem>_page<N>.png`, then follow `li.next a` if present. Returns the number of
/// pages visited; the loop runs exactly once per page that exists.
pub fn paginate<F>(
    nav: &mut dyn Navigator,
    opts: &Options,
    out: &OutputLayout,
    stem: &str,
    mut on_page: F,
) -> Result<usize>
where
    F: FnMut(&mut dyn Navigator, usize, usize) -> Result<()>,
{
    let mut page = 1usize;
    loop {
        let count = nav.count(ITEM)?;
        logf!("--- Scraping {stem} page {page} ({count} quotes) ---");
        on_page(nav, page, count)?;

        nav.screenshot(&out.screenshot(stem, page))?;

        if !nav.present(NEXT)? {
            break;
        }
        let from = nav.url()?;
        nav.click(NEXT)?;
        nav.settle(&opts.wait_leaving(Step::NextPage, &from))?;
        page += 1;
    }
    Ok(page)
}
