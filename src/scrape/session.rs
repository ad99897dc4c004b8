// src/scrape/session.rs
use crate::browser::Navigator;
use crate::config::options::{Options, Step};
use crate::error::Result;
use crate::specs::login::{PASSWORD, SUBMIT, USERNAME};

/// Fill and submit the login form. Success is not checked: with bad credentials
/// the crawl simply continues on whatever page the site shows.
pub fn login(nav: &mut dyn Navigator, opts: &Options) -> Result<()> {
    let url = join!(opts.base(), crate::config::consts::LOGIN_PATH);
    logf!("Logging in as '{}' at {url}", opts.credentials.username);
    nav.navigate(&url)?;
    nav.fill(USERNAME, &opts.credentials.username)?;
    nav.fill(PASSWORD, &opts.credentials.password)?;
    nav.click(SUBMIT)?;
    nav.settle(&opts.wait_leaving(Step::Login, &url))
}
