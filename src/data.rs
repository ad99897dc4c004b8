// src/data.rs
use std::collections::HashSet;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuoteRecord {
    #[serde(rename = "Quote")]
    pub quote: String,
    #[serde(rename = "Author")]
    pub author: String,
}

impl QuoteRecord {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self { quote: quote.into(), author: author.into() }
    }
}

/// Biography scraped from an author's detail page. `name` is the detail page's
/// own title, which can differ from the byline on the listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthorRecord {
    #[serde(rename = "Author")]
    pub name: String,
    #[serde(rename = "Birth Date")]
    pub born_date: String,
    #[serde(rename = "Location")]
    pub born_location: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// Everything the main listing crawl accumulates.
///
/// Both seen-sets are exact-match and scoped to this crawl only.
#[derive(Debug, Default)]
pub struct MainCrawl {
    pub quotes: Vec<QuoteRecord>,
    /// (listing byline, biography) in first-visit order
    pub authors: Vec<(String, AuthorRecord)>,
    pub pages: usize,
    seen_quotes: HashSet<String>,
    seen_authors: HashSet<String>,
}

impl MainCrawl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a quote unless its exact text was already recorded.
    /// Returns `true` if it was new.
    pub fn accept_quote(&mut self, quote: &str, author: &str) -> bool {
        if !self.seen_quotes.insert(s!(quote)) {
            return false;
        }
        self.quotes.push(QuoteRecord::new(quote, author));
        true
    }

    pub fn author_seen(&self, author: &str) -> bool {
        self.seen_authors.contains(author)
    }

    /// Mark `author` as visited. Returns `false` if it already was.
    pub fn mark_author(&mut self, author: &str) -> bool {
        self.seen_authors.insert(s!(author))
    }

    pub fn add_author(&mut self, byline: &str, record: AuthorRecord) {
        self.authors.push((s!(byline), record));
    }

    pub fn author_records(&self) -> impl Iterator<Item = &AuthorRecord> {
        self.authors.iter().map(|(_, r)| r)
    }
}

/// One tag listing, not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCrawl {
    pub tag: String,
    pub quotes: Vec<QuoteRecord>,
    pub pages: usize,
}

impl TagCrawl {
    pub fn new(tag: &str) -> Self {
        Self { tag: s!(tag), quotes: Vec::new(), pages: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_quote_text_is_rejected() {
        let mut crawl = MainCrawl::new();
        assert!(crawl.accept_quote("A quote", "Einstein"));
        assert!(!crawl.accept_quote("A quote", "Someone Else"));
        assert!(crawl.accept_quote("a quote", "Einstein"));
        assert_eq!(crawl.quotes.len(), 2);
        assert_eq!(crawl.quotes[0].author, "Einstein");
    }

    #[test]
    fn authors_are_marked_once() {
        let mut crawl = MainCrawl::new();
        assert!(!crawl.author_seen("Einstein"));
        assert!(crawl.mark_author("Einstein"));
        assert!(crawl.author_seen("Einstein"));
        assert!(!crawl.mark_author("Einstein"));
    }
}
