// src/specs/author.rs

/// Container present once the detail page has rendered.
pub const DETAILS: &str = ".author-details";

pub const NAME: &str = "h3.author-title";
pub const BORN_DATE: &str = ".author-born-date";
pub const BORN_LOCATION: &str = ".author-born-location";
pub const DESCRIPTION: &str = ".author-description";
