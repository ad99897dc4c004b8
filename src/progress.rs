// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for a crawl run.
/// The CLI implements this to surface status lines; tests pass `None` or a recorder.
pub trait Progress {
    /// Called at the start with the number of listings to crawl (main + tags).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one listing completes and its file is on disk.
    fn item_done(&mut self, _label: &str, _path: &Path) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
