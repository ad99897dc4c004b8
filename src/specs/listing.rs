// src/specs/listing.rs
use url::Url;

use crate::error::Result;

/// One quote card.
pub const ITEM: &str = ".quote";
/// Inside a card
pub const TEXT: &str = ".text";
pub const AUTHOR: &str = "small";
/// First link in a card is the "(about)" author link.
pub const AUTHOR_LINK: &str = "a";
pub const HREF: &str = "href";

pub const NEXT: &str = "li.next a";
pub const FOOTER: &str = "footer";

/// `<base>/tag/<tag>/page/1/`, tag percent-encoded as a path segment.
pub fn tag_url(base: &str, tag: &str) -> Result<String> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(["tag", tag, "page", "1", ""]);
    Ok(url.into())
}

/// Resolve an href scraped from a listing against `base`.
///
/// A root-relative href (`/author/X`) is appended to `base` as is, so a base with
/// a path prefix keeps it, the same way [`tag_url`] and the login URL do.
pub fn resolve(base: &str, href: &str) -> Result<String> {
    let base = base.trim_end_matches('/');
    if href.starts_with('/') && !href.starts_with("//") {
        let url = join!(base, href);
        Url::parse(&url)?;
        return Ok(url);
    }
    Ok(Url::parse(&join!(base, "/"))?.join(href)?.into())
}
