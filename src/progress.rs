// src/progress.rs
use std::path::Path;

use crate::error::WriteError;

/// Progress sink for a snapshot run. The CLI prints lines; tests collect.
/// Every method has a no-op default.
pub trait Progress {
    /// Entering a stage ("resolve", "fetch", "extract").
    fn stage(&mut self, _name: &str, _detail: &str) {}

    /// One artifact written.
    fn item_done(&mut self, _index: usize, _name: &str, _path: &Path) {}

    /// One artifact failed and the run keeps going.
    fn item_failed(&mut self, _err: &WriteError) {}

    /// Called when a run completes with the number of artifacts written.
    /// Not called when the run returns an error; the error is the report.
    fn finish(&mut self, _written: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
