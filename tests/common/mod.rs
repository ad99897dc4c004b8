// tests/common/mod.rs
//
// In-memory stand-in for the quotes site. Pages are modelled as the handful of
// elements the crawl selects; the Navigator impl answers selector queries from them.
//
#![allow(dead_code)]
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use quotes_scrape::browser::{Navigator, Target, Wait};
use quotes_scrape::config::options::Options;
use quotes_scrape::error::Result;
use quotes_scrape::specs::{author, listing, login};

pub const BASE: &str = "http://quotes.test";

#[derive(Clone, Debug)]
pub struct Card {
    pub text: String,
    pub author: String,
    pub href: Option<String>,
}

pub fn card(text: &str, author: &str, href: Option<&str>) -> Card {
    Card { text: text.into(), author: author.into(), href: href.map(Into::into) }
}

#[derive(Clone, Debug)]
pub enum FakePage {
    Listing { cards: Vec<Card>, next: Option<String> },
    Author { fields: HashMap<&'static str, String> },
    Login,
}

/// A click or back that has not reached the page yet.
#[derive(Clone, Debug)]
enum Pending {
    Go(String),
    Back,
}

pub struct FakeSite {
    pages: HashMap<String, FakePage>,
    current: Option<String>,
    history: Vec<String>,
    landing: String,
    lazy: bool,
    pending: Option<Pending>,
    pub visits: Vec<String>,
    pub fills: Vec<(String, String)>,
    pub waits: Vec<Wait>,
    pub shots: Vec<PathBuf>,
}

fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

impl FakeSite {
    pub fn new() -> Self {
        let mut pages = HashMap::new();
        pages.insert(url("/login"), FakePage::Login);
        Self {
            pages,
            current: None,
            history: Vec::new(),
            landing: url("/"),
            lazy: false,
            pending: None,
            visits: Vec::new(),
            fills: Vec::new(),
            waits: Vec::new(),
            shots: Vec::new(),
        }
    }

    /// Listing page at `path`; `next` is the href of the "Next" link, if any.
    pub fn listing(mut self, path: &str, cards: Vec<Card>, next: Option<&str>) -> Self {
        self.pages.insert(
            url(path),
            FakePage::Listing { cards, next: next.map(Into::into) },
        );
        self
    }

    /// Author page with all four fields; pass "" to leave a field out of the markup.
    pub fn author(mut self, path: &str, name: &str, born: &str, location: &str, desc: &str) -> Self {
        let mut fields = HashMap::new();
        for (sel, v) in [
            (author::NAME, name),
            (author::BORN_DATE, born),
            (author::BORN_LOCATION, location),
            (author::DESCRIPTION, desc),
        ] {
            if !v.is_empty() {
                fields.insert(sel, v.to_string());
            }
        }
        self.pages.insert(url(path), FakePage::Author { fields });
        self
    }

    /// Clicks and history moves only land during a later `settle`, like a real
    /// browser: a `Sleep` always lets them land; a `Ready` wait does once it has
    /// seen the old page go or its selector is still missing.
    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    pub fn visits_to(&self, path: &str) -> usize {
        let u = url(path);
        self.visits.iter().filter(|v| **v == u).count()
    }

    fn page(&self) -> Option<&FakePage> {
        self.current.as_ref().and_then(|u| self.pages.get(u))
    }

    fn card(&self, target: &Target<'_>) -> Option<&Card> {
        let (item, index) = target.scope?;
        if item != listing::ITEM {
            return None;
        }
        match self.page()? {
            FakePage::Listing { cards, .. } => cards.get(index),
            _ => None,
        }
    }

    fn go(&mut self, to: Pending) -> Result<()> {
        if self.lazy {
            self.pending = Some(to);
            return Ok(());
        }
        self.land(to)
    }

    fn land(&mut self, to: Pending) -> Result<()> {
        match to {
            Pending::Go(u) => self.navigate(&u),
            Pending::Back => {
                self.current = self.history.pop();
                Ok(())
            }
        }
    }

    fn next_href(&self) -> Option<String> {
        match self.page()? {
            FakePage::Listing { next, .. } => next.clone(),
            _ => None,
        }
    }
}

impl Navigator for FakeSite {
    fn navigate(&mut self, to: &str) -> Result<()> {
        if let Some(cur) = self.current.take() {
            self.history.push(cur);
        }
        self.visits.push(to.to_string());
        self.current = Some(to.to_string());
        Ok(())
    }

    fn url(&mut self) -> Result<String> {
        Ok(self.current.clone().unwrap_or_default())
    }

    fn count(&mut self, selector: &str) -> Result<usize> {
        let n = match (self.page(), selector) {
            (Some(_), listing::FOOTER) => 1,
            (Some(FakePage::Listing { cards, .. }), listing::ITEM) => cards.len(),
            (Some(FakePage::Listing { next, .. }), listing::NEXT) => next.is_some() as usize,
            (Some(FakePage::Author { .. }), author::DETAILS) => 1,
            (Some(FakePage::Login), login::USERNAME | login::PASSWORD | login::SUBMIT) => 1,
            _ => 0,
        };
        Ok(n)
    }

    fn text(&mut self, target: &Target<'_>) -> Result<Option<String>> {
        if target.scope.is_some() {
            let Some(c) = self.card(target) else { return Ok(None) };
            return Ok(match target.selector {
                listing::TEXT => Some(c.text.clone()),
                listing::AUTHOR => Some(c.author.clone()),
                listing::AUTHOR_LINK => c.href.as_ref().map(|_| "(about)".to_string()),
                _ => None,
            });
        }
        Ok(match self.page() {
            Some(FakePage::Author { fields }) => fields.get(target.selector).cloned(),
            _ => None,
        })
    }

    fn attr(&mut self, target: &Target<'_>, name: &str) -> Result<Option<String>> {
        if name != listing::HREF {
            return Ok(None);
        }
        if target.scope.is_none() && target.selector == listing::NEXT {
            return Ok(self.next_href());
        }
        Ok(match self.card(target) {
            Some(c) if target.selector == listing::AUTHOR_LINK => c.href.clone(),
            _ => None,
        })
    }

    fn fill(&mut self, selector: &str, value: &str) -> Result<()> {
        self.fills.push((selector.to_string(), value.to_string()));
        Ok(())
    }

    fn click(&mut self, selector: &str) -> Result<()> {
        match selector {
            listing::NEXT => {
                let href = self.next_href().expect("clicked a missing next link");
                self.go(Pending::Go(url(&href)))
            }
            login::SUBMIT => {
                let landing = self.landing.clone();
                self.go(Pending::Go(landing))
            }
            other => panic!("unexpected click on {other}"),
        }
    }

    fn back(&mut self) -> Result<()> {
        self.go(Pending::Back)
    }

    fn settle(&mut self, wait: &Wait) -> Result<()> {
        self.waits.push(wait.clone());
        let Some(to) = self.pending.clone() else { return Ok(()) };
        let lands = match wait {
            Wait::Sleep(_) => true,
            Wait::Ready { leaving: Some(from), .. } if self.current.as_deref() == Some(from.as_str()) => true,
            Wait::Ready { selector, .. } => self.count(selector)? == 0,
        };
        if lands {
            self.pending = None;
            self.land(to)?;
        }
        Ok(())
    }

    fn screenshot(&mut self, path: &Path) -> Result<()> {
        fs::write(path, b"\x89PNG\r\n\x1a\n")?;
        self.shots.push(path.to_path_buf());
        Ok(())
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("quotes_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn options(out: &Path) -> Options {
    Options {
        base_url: BASE.to_string(),
        out_dir: out.to_path_buf(),
        ..Options::default()
    }
}
