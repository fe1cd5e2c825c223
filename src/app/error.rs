use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Per-entry failure during discovery. None of these abort the run: each is
/// reported to the [`DiagnosticSink`] and the offending entry is skipped.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Error reading file {}: {source}", path.display())]
    Resolve { path: PathBuf, source: io::Error },

    #[error("Error reading file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Error reading file {}: path is outside the working directory", path.display())]
    OutsideWorkingDir { path: PathBuf },

    #[error("Error walking directory: {0}")]
    Walk(#[from] ignore::Error),
}

/// Receiver for per-entry diagnostics, kept separate from the stdout report.
/// Injected so tests can assert on emitted diagnostics directly.
pub trait DiagnosticSink {
    fn report(&mut self, error: &ScanError);
}

/// Production sink: forwards diagnostics to the logger (stderr).
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, error: &ScanError) {
        log::error!("{error}");
    }
}

#[cfg(test)]
pub struct CollectSink(pub Vec<String>);

#[cfg(test)]
impl DiagnosticSink for CollectSink {
    fn report(&mut self, error: &ScanError) {
        self.0.push(error.to_string());
    }
}
