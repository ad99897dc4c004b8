// src/scrape/mod.rs
mod paginate;
mod quotes;
mod session;
mod tags;

pub use paginate::{paginate, read_item, Item};
pub use quotes::{crawl_main, visit_author};
pub use session::login;
pub use tags::{crawl_tag, crawl_tags};
