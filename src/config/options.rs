// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::browser::Wait;
use crate::specs;

/// How the crawl waits for the browser after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Sleep a fixed time per step.
    #[default]
    Fixed,
    /// Wait for navigation, then for a step-specific selector (bounded).
    Ready,
}

/// Points in the crawl that are followed by a wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Login,
    AuthorPage,
    Back,
    NextPage,
    TagStart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: s!(DEFAULT_USERNAME),
            password: s!(DEFAULT_PASSWORD),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub headless: bool,
    pub out_dir: PathBuf,
    pub base_url: String,
    pub credentials: Credentials,
    pub pacing: Pacing,
    pub chrome: Option<PathBuf>, // browser binary; None = auto-detect
}

impl Default for Options {
    fn default() -> Self {
        Self {
            headless: false,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            base_url: s!(BASE_URL),
            credentials: Credentials::default(),
            pacing: Pacing::Fixed,
            chrome: None,
        }
    }
}

impl Options {
    /// Wait after `step` when the page it leads to was loaded by `navigate`.
    pub fn wait_for(&self, step: Step) -> Wait {
        self.wait(step, None)
    }

    /// Wait after a click or history move away from `from`.
    pub fn wait_leaving(&self, step: Step, from: &str) -> Wait {
        self.wait(step, Some(from))
    }

    fn wait(&self, step: Step, leaving: Option<&str>) -> Wait {
        match self.pacing {
            Pacing::Fixed => {
                let ms = match step {
                    Step::Login => LOGIN_PAUSE_MS,
                    Step::AuthorPage => AUTHOR_PAUSE_MS,
                    Step::Back => BACK_PAUSE_MS,
                    Step::NextPage => NEXT_PAUSE_MS,
                    Step::TagStart => TAG_START_PAUSE_MS,
                };
                Wait::Sleep(Duration::from_millis(ms))
            }
            Pacing::Ready => {
                // After a click or back the selector must be absent from the page being left.
                // Tag pages are loaded by `navigate`, so any element will do.
                let selector = match step {
                    Step::AuthorPage => specs::author::DETAILS,
                    Step::Login | Step::Back | Step::NextPage => specs::listing::ITEM,
                    Step::TagStart => specs::listing::FOOTER,
                };
                Wait::Ready {
                    selector: s!(selector),
                    leaving: leaving.map(String::from),
                    timeout: Duration::from_millis(READY_TIMEOUT_MS),
                }
            }
        }
    }

    /// `base_url` with any trailing slash removed.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
