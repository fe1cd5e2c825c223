use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dump a directory tree and file contents as LLM-ready context",
    after_help = "Examples:\n  \
        ctxcat -d src -e .rs\n  \
        ctxcat -d frontend -e .ts .tsx\n  \
        ctxcat -f Cargo.toml Dockerfile"
)]
pub struct Cli {
    /// Directories to scan recursively
    #[arg(short, long, num_args = 1.., default_values_t = vec!["./".to_string()])]
    pub directories: Vec<String>,

    /// Individual files to include verbatim
    #[arg(short, long, num_args = 1..)]
    pub files: Vec<String>,

    /// Directory names pruned from traversal
    #[arg(
        short,
        long,
        num_args = 0..,
        default_values_t = [".git", ".venv", "venv", "node_modules"].map(String::from)
    )]
    pub ignore_dirs: Vec<String>,

    /// File suffixes to match (including the dot); pass none to match everything
    #[arg(short, long, num_args = 0.., default_values_t = [".ts", ".tsx"].map(String::from))]
    pub extensions: Vec<String>,
}
