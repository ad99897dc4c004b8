// src/browser/mod.rs
//! # Browser capability
//!
//! The crawl never talks to a browser directly. It drives a [`Navigator`], a small
//! synchronous set of page operations: go somewhere, ask how many elements match,
//! read text or an attribute, type, click, go back, wait, take a screenshot.
//! `click` and `back` do not wait for the page they lead to; a `settle` does.
//!
//! - [`chrome::ChromeNavigator`] implements it over a real Chromium session.
//! - Tests implement it over an in-memory page model.
//!
//! Reads are *tolerant*: a selector with no match is `Ok(None)`, not an error.
//! Only failures of the automation layer itself (dead browser, bad navigation,
//! unwritable screenshot) surface as `Err`.
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

pub mod chrome;

/// Where to look on the current page.
///
/// `Target::first("h3")` is `document.querySelector("h3")`;
/// `Target::within(".quote", 2, ".text")` is the first `.text` inside the third `.quote`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target<'a> {
    pub scope: Option<(&'a str, usize)>,
    pub selector: &'a str,
}

impl<'a> Target<'a> {
    pub fn first(selector: &'a str) -> Self {
        Self { scope: None, selector }
    }

    pub fn within(item: &'a str, index: usize, selector: &'a str) -> Self {
        Self { scope: Some((item, index)), selector }
    }
}

/// Wait contract after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Wait {
    /// Sleep unconditionally.
    Sleep(Duration),
    /// Wait until the page is no longer `leaving` (when set), let the navigation
    /// finish, then poll until `selector` matches. `timeout` bounds the whole wait.
    /// Hitting it is not an error; the crawl continues on whatever loaded.
    Ready { selector: String, leaving: Option<String>, timeout: Duration },
}

pub trait Navigator {
    /// Load `url` in the current tab.
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Address of the page currently shown.
    fn url(&mut self) -> Result<String>;

    /// Number of elements matching `selector` on the current page.
    fn count(&mut self, selector: &str) -> Result<usize>;

    /// Rendered text of the target, if it exists.
    fn text(&mut self, target: &Target<'_>) -> Result<Option<String>>;

    /// Attribute value of the target, if both exist.
    fn attr(&mut self, target: &Target<'_>, name: &str) -> Result<Option<String>>;

    /// Type `value` into the first element matching `selector`.
    fn fill(&mut self, selector: &str, value: &str) -> Result<()>;

    /// Click the first element matching `selector`. A click that navigates may
    /// return before the new page is shown.
    fn click(&mut self, selector: &str) -> Result<()>;

    /// History back. May return before the previous page is shown.
    fn back(&mut self) -> Result<()>;

    fn settle(&mut self, wait: &Wait) -> Result<()>;

    /// Save a full-page PNG to `path`.
    fn screenshot(&mut self, path: &Path) -> Result<()>;

    fn present(&mut self, selector: &str) -> Result<bool> {
        Ok(self.count(selector)? > 0)
    }
}
