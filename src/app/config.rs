use std::ffi::OsString;

use crate::app::cli::Cli;
use crate::app::models::Config;

/// Normalizes parsed CLI arguments into the runtime configuration.
///
/// The ignore-dir and extension lists become sets here; matching semantics
/// never depend on their order or on duplicates. Report ordering depends
/// only on the `directories` and `files` lists, which stay as given.
pub fn resolve_config(cli: Cli) -> Config {
    Config {
        directories: cli.directories,
        files: cli.files,
        ignore_dirs: cli.ignore_dirs.into_iter().map(OsString::from).collect(),
        extensions: cli.extensions.into_iter().collect(),
    }
}
