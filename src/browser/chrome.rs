// src/browser/chrome.rs
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use super::{Navigator, Target, Wait};
use crate::config::consts::READY_POLL_MS;
use crate::error::{Error, Result};

/// Chromium session over CDP.
///
/// chromiumoxide is async; this adapter owns a small tokio runtime and blocks on
/// every call so the crawl can stay plain sequential code.
pub struct ChromeNavigator {
    rt: Runtime,
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl ChromeNavigator {
    pub fn launch(headless: bool, chrome: Option<&Path>) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        let mut builder = BrowserConfig::builder().window_size(1280, 1024);
        if !headless {
            builder = builder.with_head();
        }
        if let Some(path) = chrome {
            builder = builder.chrome_executable(PathBuf::from(path));
        }
        let config = builder.build().map_err(Error::Launch)?;

        let (browser, page, handler) = rt.block_on(async {
            let (browser, mut handler) = Browser::launch(config).await?;
            // CDP events must be pumped for any request to complete
            let handler = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if event.is_err() {
                        break;
                    }
                }
            });
            let page = browser.new_page("about:blank").await?;
            Ok::<_, Error>((browser, page, handler))
        })?;

        logf!("Browser launched (headless: {headless})");
        Ok(Self { rt, browser, page, handler })
    }

    /// Close the browser and wait for the process to exit.
    pub fn close(self) -> Result<()> {
        let Self { rt, mut browser, handler, .. } = self;
        rt.block_on(async {
            browser.close().await?;
            let _ = browser.wait().await;
            Ok::<_, Error>(())
        })?;
        handler.abort();
        Ok(())
    }

    /// Evaluate an expression that yields a string or null. The value is wrapped in
    /// `JSON.stringify` so `null`/`undefined` decode cleanly to `None`.
    fn eval_opt_string(&self, expr: &str) -> Result<Option<String>> {
        let script = format!("JSON.stringify(({expr}) ?? null)");
        let page = &self.page;
        let raw: String = self.rt.block_on(async { page.evaluate(script).await })?.into_value()?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn wait_ready(&self, selector: &str, leaving: Option<&str>, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        let poll = Duration::from_millis(READY_POLL_MS);

        if let Some(from) = leaving {
            while self.current_url()? == from {
                if Instant::now() >= deadline {
                    logw!("Timed out after {timeout:?} waiting to leave {from}");
                    return Ok(());
                }
                std::thread::sleep(poll);
            }
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        let page = &self.page;
        let nav = self
            .rt
            .block_on(async { tokio::time::timeout(remaining, page.wait_for_navigation()).await });
        match nav {
            Ok(r) => {
                r?;
            }
            Err(_) => logw!("Navigation did not settle within {timeout:?}"),
        }
        while Instant::now() < deadline {
            if self.count_matching(selector)? > 0 {
                return Ok(());
            }
            std::thread::sleep(poll);
        }
        logw!("Timed out after {timeout:?} waiting for '{selector}'");
        Ok(())
    }

    fn current_url(&self) -> Result<String> {
        Ok(self.eval_opt_string("location.href")?.unwrap_or_default())
    }

    fn count_matching(&self, selector: &str) -> Result<usize> {
        let script = format!("document.querySelectorAll({}).length", js_str(selector));
        let page = &self.page;
        let n: u64 = self.rt.block_on(async { page.evaluate(script).await })?.into_value()?;
        Ok(n as usize)
    }
}

impl Navigator for ChromeNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        logd!("goto {url}");
        let page = &self.page;
        self.rt.block_on(async { page.goto(url).await.map(|_| ()) })?;
        Ok(())
    }

    fn url(&mut self) -> Result<String> {
        self.current_url()
    }

    fn count(&mut self, selector: &str) -> Result<usize> {
        self.count_matching(selector)
    }

    fn text(&mut self, target: &Target<'_>) -> Result<Option<String>> {
        self.eval_opt_string(&format!("{}?.innerText", element_expr(target)))
    }

    fn attr(&mut self, target: &Target<'_>, name: &str) -> Result<Option<String>> {
        self.eval_opt_string(&format!("{}?.getAttribute({})", element_expr(target), js_str(name)))
    }

    fn fill(&mut self, selector: &str, value: &str) -> Result<()> {
        let page = &self.page;
        self.rt.block_on(async {
            page.find_element(selector).await?.click().await?.type_str(value).await?;
            Ok::<_, Error>(())
        })
    }

    fn click(&mut self, selector: &str) -> Result<()> {
        let page = &self.page;
        self.rt.block_on(async {
            page.find_element(selector).await?.click().await?;
            Ok::<_, Error>(())
        })
    }

    fn back(&mut self) -> Result<()> {
        let page = &self.page;
        self.rt.block_on(async { page.evaluate("window.history.back()").await })?;
        Ok(())
    }

    fn settle(&mut self, wait: &Wait) -> Result<()> {
        match wait {
            Wait::Sleep(d) => {
                std::thread::sleep(*d);
                Ok(())
            }
            Wait::Ready { selector, leaving, timeout } => {
                self.wait_ready(selector, leaving.as_deref(), *timeout)
            }
        }
    }

    fn screenshot(&mut self, path: &Path) -> Result<()> {
        let page = &self.page;
        let params = ScreenshotParams::builder().full_page(true).build();
        self.rt.block_on(async { page.save_screenshot(params, path).await })?;
        logd!("screenshot {}", path.display());
        Ok(())
    }
}

/// JS expression for the element a target points at (may evaluate to null).
fn element_expr(target: &Target<'_>) -> String {
    match target.scope {
        None => format!("document.querySelector({})", js_str(target.selector)),
        Some((item, index)) => format!(
            "document.querySelectorAll({})[{index}]?.querySelector({})",
            js_str(item),
            js_str(target.selector)
        ),
    }
}

/// Quote a Rust string as a JS string literal.
fn js_str(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}
