use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::app::error::{DiagnosticSink, ScanError};
use crate::app::models::{Config, MatchedFile};

/// Resolves user-supplied path strings and relativizes them for display.
///
/// The working directory is captured once at startup and injected here, so
/// every relative path in the report shares the same base.
pub struct PathResolver {
    cwd: PathBuf,
}

impl PathResolver {
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    fn resolve(&self, raw: &str) -> Result<PathBuf, ScanError> {
        fs::canonicalize(raw).map_err(|source| ScanError::Resolve {
            path: PathBuf::from(raw),
            source,
        })
    }

    fn relativize(&self, absolute: &Path) -> Result<PathBuf, ScanError> {
        absolute
            .strip_prefix(&self.cwd)
            .map(Path::to_path_buf)
            .map_err(|_| ScanError::OutsideWorkingDir {
                path: absolute.to_path_buf(),
            })
    }
}

pub struct Scanner {
    resolver: PathResolver,
    config: Config,
}

impl Scanner {
    pub fn new(cwd: PathBuf, config: Config) -> Self {
        Self {
            resolver: PathResolver::new(cwd),
            config,
        }
    }

    /// Runs the directory phase then the individual-files phase, in the
    /// order the arguments were given. Every per-entry failure is reported
    /// to the sink and skipped; discovery itself never fails.
    pub fn discover(&self, sink: &mut dyn DiagnosticSink) -> Vec<MatchedFile> {
        let mut found = Vec::new();

        for directory in &self.config.directories {
            match self.resolver.resolve(directory) {
                Ok(root) => self.scan_directory(&root, &mut found, sink),
                Err(err) => sink.report(&err),
            }
        }

        // Explicitly listed files bypass both the extension filter and
        // directory pruning.
        for file in &self.config.files {
            let result = self
                .resolver
                .resolve(file)
                .and_then(|path| self.append_file(&path, &mut found));
            if let Err(err) = result {
                sink.report(&err);
            }
        }

        found
    }

    fn scan_directory(
        &self,
        root: &Path,
        found: &mut Vec<MatchedFile>,
        sink: &mut dyn DiagnosticSink,
    ) {
        let ignore_dirs = self.config.ignore_dirs.clone();
        let walker = WalkBuilder::new(root)
            // No gitignore or hidden-file semantics; the only pruning is
            // the ignore-dirs name set.
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                // The walk root itself is never pruned, even if its name
                // is in the ignore set.
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && ignore_dirs.contains(entry.file_name()))
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    sink.report(&ScanError::Walk(err));
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if !self.matches_extension(entry.file_name()) {
                continue;
            }
            if let Err(err) = self.append_file(entry.path(), found) {
                sink.report(&err);
            }
        }
    }

    /// An empty extension set matches everything. Otherwise the file name's
    /// suffix from the last `.` onward (inclusive, case-sensitive) must be
    /// in the set; a name with no dot has no suffix and never matches.
    fn matches_extension(&self, file_name: &OsStr) -> bool {
        if self.config.extensions.is_empty() {
            return true;
        }
        let Some(name) = file_name.to_str() else {
            return false;
        };
        match name.rfind('.') {
            Some(idx) => self.config.extensions.contains(&name[idx..]),
            None => false,
        }
    }

    fn append_file(&self, path: &Path, found: &mut Vec<MatchedFile>) -> Result<(), ScanError> {
        // Invalid UTF-8 surfaces as an io::Error here, so decode failures
        // take the same skip-and-report path as open failures.
        let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let relative_path = self.resolver.relativize(path)?;
        found.push(MatchedFile {
            relative_path,
            content,
        });
        Ok(())
    }
}
