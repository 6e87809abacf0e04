//! UI/Progress presentation layer
//!
//! This module handles:
//! - Per-article success and failure messages
//! - Batch progress bars using indicatif
//! - Silent reporting for tests and embedding
//!
//! All merge reporting goes through the Reporter trait, allowing different
//! implementations based on command-line flags (e.g., --quiet, --verbose).

mod terminal;

pub use terminal::ConsoleReporter;

use std::path::PathBuf;

use crate::error::MergeError;

/// Outcome of one successful merge, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub slug: String,
    pub output_path: PathBuf,
    pub title: Option<String>,
    pub topics: Vec<String>,
    pub ignored_fields: Vec<String>,
}

/// Success count of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub attempted: usize,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }
}

/// Reporter trait for merge runs
///
/// The merger never prints directly; every user-visible event is routed
/// here so that batch progress bars and plain output do not interleave.
pub trait Reporter {
    /// A batch over `total` articles is about to start
    fn batch_started(&mut self, total: usize);

    /// Article `current` of `total` is about to be merged
    fn item_started(&mut self, slug: &str, current: usize, total: usize);

    /// Resolved input paths and other detail lines
    fn detail(&mut self, message: &str);

    /// Non-fatal problem with an article that was still merged
    fn warning(&mut self, message: &str);

    /// An article was written
    fn item_merged(&mut self, report: &MergeReport);

    /// An article was skipped
    fn item_failed(&mut self, slug: &str, error: &MergeError);

    /// The batch finished
    fn batch_finished(&mut self, summary: &BatchSummary);
}

/// Silent reporter
///
/// No-op implementation for driving the merger without output.
#[cfg(test)]
#[derive(Default)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn batch_started(&mut self, _total: usize) {}

    fn item_started(&mut self, _slug: &str, _current: usize, _total: usize) {}

    fn detail(&mut self, _message: &str) {}

    fn warning(&mut self, _message: &str) {}

    fn item_merged(&mut self, _report: &MergeReport) {}

    fn item_failed(&mut self, _slug: &str, _error: &MergeError) {}

    fn batch_finished(&mut self, _summary: &BatchSummary) {}
}
