// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::config::consts::*;
use crate::core::sanitize::file_stem;
use crate::data::{AuthorRecord, QuoteRecord};
use crate::error::{Error, Result};

pub const QUOTE_HEADERS: [&str; 2] = ["Quote", "Author"];
pub const AUTHOR_HEADERS: [&str; 4] = ["Author", "Birth Date", "Location", "Description"];

/// Where every output of a run goes, relative to one root directory.
#[derive(Clone, Debug)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root, `tags/` and `screenshots/`.
    pub fn prepare(&self) -> Result<()> {
        ensure_directory(&self.root)?;
        ensure_directory(&self.tags_dir())?;
        ensure_directory(&self.screenshots_dir())?;
        Ok(())
    }

    pub fn quotes(&self) -> PathBuf {
        path!(&self.root, QUOTES_FILE)
    }

    pub fn authors(&self) -> PathBuf {
        path!(&self.root, AUTHORS_FILE)
    }

    pub fn report(&self) -> PathBuf {
        path!(&self.root, REPORT_FILE)
    }

    pub fn tags_dir(&self) -> PathBuf {
        path!(&self.root, TAGS_SUBDIR)
    }

    pub fn tag(&self, tag: &str) -> PathBuf {
        path!(self.tags_dir(), join!(file_stem(tag, "tag"), ".csv"))
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        path!(&self.root, SCREENSHOTS_SUBDIR)
    }

    /// `<stem>_page<N>.png`
    pub fn screenshot(&self, stem: &str, page: usize) -> PathBuf {
        let name = format!("{}_page{page}.png", file_stem(stem, "page"));
        path!(self.screenshots_dir(), name)
    }
}

/// Create/truncate `path`, write the header row, then every record.
/// A header-only file is written when `rows` is empty.
pub fn write_table<T, I>(path: &Path, headers: &[&str], rows: I) -> Result<PathBuf>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = csv::WriterBuilder::new()
        .delimiter(CSV_SEP)
        .terminator(csv::Terminator::CRLF)
        .has_headers(false)
        .from_path(path)?;
    out.write_record(headers)?;
    for row in rows {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(path.to_path_buf())
}

pub fn write_quotes(path: &Path, quotes: &[QuoteRecord]) -> Result<PathBuf> {
    write_table(path, &QUOTE_HEADERS, quotes)
}

pub fn write_authors<'a>(
    path: &Path,
    authors: impl IntoIterator<Item = &'a AuthorRecord>,
) -> Result<PathBuf> {
    write_table(path, &AUTHOR_HEADERS, authors)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
