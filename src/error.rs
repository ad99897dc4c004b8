// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("browser: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
    #[error("browser launch: {0}")]
    Launch(String),
    #[error("script result: {0}")]
    Script(#[from] serde_json::Error),
    #[error("bad url: {0}")]
    Url(#[from] url::ParseError),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),
}
