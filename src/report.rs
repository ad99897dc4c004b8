// src/report.rs
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::consts::TOP_AUTHORS;
use crate::data::{MainCrawl, QuoteRecord, TagCrawl};
use crate::error::Result;

/// Per-author quote counts over every record of a run.
///
/// Records are *not* deduplicated across listings: a quote that shows up on the
/// main listing and on two tag listings counts three times.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub total: usize,
    /// first-seen order
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Report {
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a QuoteRecord>) -> Self {
        let mut report = Self::default();
        for r in records {
            report.add(&r.author);
        }
        report
    }

    /// Main listing first, then tags in crawl order.
    pub fn from_crawls(main: &MainCrawl, tags: &[TagCrawl]) -> Self {
        Self::tally(main.quotes.iter().chain(tags.iter().flat_map(|t| t.quotes.iter())))
    }

    fn add(&mut self, author: &str) {
        self.total += 1;
        match self.index.get(author) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(s!(author), self.counts.len());
                self.counts.push((s!(author), 1));
            }
        }
    }

    pub fn unique_authors(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, author: &str) -> usize {
        self.index.get(author).map(|&i| self.counts[i].1).unwrap_or(0)
    }

    /// Highest counts first; equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.counts.iter().map(|(a, c)| (a.as_str(), *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1)); // stable
        ranked.truncate(n);
        ranked
    }

    pub fn render(&self, scraped_at: &DateTime<Local>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Scraped on: {}", scraped_at.format("%Y-%m-%d %H:%M:%S%.6f"));
        let _ = writeln!(out, "Total Quotes: {}", self.total);
        let _ = writeln!(out, "Unique Authors: {}", self.unique_authors());
        let _ = writeln!(out);
        let _ = writeln!(out, "Top {TOP_AUTHORS} Authors:");
        for (author, count) in self.top(TOP_AUTHORS) {
            let _ = writeln!(out, "{author}: {count} quotes");
        }
        out
    }
}

pub fn write_report(path: &Path, report: &Report, scraped_at: &DateTime<Local>) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            crate::file::ensure_directory(parent)?;
        }
    }
    fs::write(path, report.render(scraped_at))?;
    Ok(path.to_path_buf())
}
