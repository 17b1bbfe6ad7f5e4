//! Per-file fix runner.
//!
//! Reads each file, hands its text to a [`Fix`], and writes the result back
//! only when it changed. Failures are recorded per file and never stop the
//! run.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::error::{FixError, Result};

/// What a fix wants to do with one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// New file content; may equal the input.
    Rewrite(String),
    /// Leave the file alone, with a reason.
    Skip(String),
}

impl Edit {
    /// Skip with a reason.
    pub fn skip(reason: impl Into<String>) -> Self {
        Self::Skip(reason.into())
    }
}

/// A text transform over a single article.
pub trait Fix {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Transform the content of the file at `path`.
    fn apply(&self, path: &Path, content: &str) -> Edit;
}

/// Result of running a fix over one file.
#[derive(Debug)]
pub enum Outcome {
    /// Content changed and was written (or would be, in a dry run).
    Updated,
    /// The fix produced identical content.
    Unchanged,
    /// The fix declined the file.
    Skipped(String),
    /// Reading or writing failed.
    Failed(FixError),
}

/// Per-run tally of outcomes.
#[derive(Debug, Default)]
pub struct Report {
    /// Files whose content changed.
    pub updated: Vec<PathBuf>,
    /// Files left as they were.
    pub unchanged: Vec<PathBuf>,
    /// Files the fix declined, with the reason.
    pub skipped: Vec<(PathBuf, String)>,
    /// Files that could not be read or written, with the error.
    pub failed: Vec<(PathBuf, String)>,
}

impl Report {
    /// Add one file's outcome.
    pub fn record(&mut self, path: &Path, outcome: Outcome) {
        let path = path.to_path_buf();
        match outcome {
            Outcome::Updated => self.updated.push(path),
            Outcome::Unchanged => self.unchanged.push(path),
            Outcome::Skipped(reason) => self.skipped.push((path, reason)),
            Outcome::Failed(err) => self.failed.push((path, err.to_string())),
        }
    }

    /// Number of files visited.
    pub fn total(&self) -> usize {
        self.updated.len() + self.unchanged.len() + self.skipped.len() + self.failed.len()
    }
}

/// Applies a fix to files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner {
    dry_run: bool,
}

impl Runner {
    /// Create a runner that writes changes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report changes without writing them.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run `fix` over every path, in order.
    pub fn run(&self, fix: &dyn Fix, paths: &[PathBuf]) -> Report {
        let mut report = Report::default();
        for path in paths {
            let outcome = self.fix_file(fix, path);
            match &outcome {
                Outcome::Updated => info!(fix = fix.name(), path = %path.display(), "updated"),
                Outcome::Unchanged => debug!(fix = fix.name(), path = %path.display(), "no change"),
                Outcome::Skipped(reason) => {
                    debug!(fix = fix.name(), path = %path.display(), reason, "skipped");
                }
                Outcome::Failed(err) => {
                    warn!(fix = fix.name(), path = %path.display(), error = %err, "failed");
                }
            }
            report.record(path, outcome);
        }
        report
    }

    /// Run `fix` over a single file.
    pub fn fix_file(&self, fix: &dyn Fix, path: &Path) -> Outcome {
        match self.try_fix_file(fix, path) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failed(err),
        }
    }

    fn try_fix_file(&self, fix: &dyn Fix, path: &Path) -> Result<Outcome> {
        let content = fs::read_to_string(path).map_err(|e| FixError::read(path, e))?;

        match fix.apply(path, &content) {
            Edit::Skip(reason) => Ok(Outcome::Skipped(reason)),
            Edit::Rewrite(updated) if updated == content => Ok(Outcome::Unchanged),
            Edit::Rewrite(updated) => {
                if !self.dry_run {
                    fs::write(path, updated).map_err(|e| FixError::write(path, e))?;
                }
                Ok(Outcome::Updated)
            }
        }
    }
}
