use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;
use std::path::PathBuf;

/// Final runtime configuration derived from CLI arguments.
///
/// `directories` and `files` keep their input order (it drives report
/// ordering); `ignore_dirs` and `extensions` are sets, so duplicates and
/// order collapse without affecting matching.
#[derive(Debug, Clone)]
pub struct Config {
    pub directories: Vec<String>,
    pub files: Vec<String>,
    pub ignore_dirs: HashSet<OsString>,
    pub extensions: HashSet<String>,
}

/// A file selected during discovery, with its full text content.
///
/// `relative_path` is the file's canonical path expressed relative to the
/// working directory captured at startup, and is its display identity
/// throughout the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    pub relative_path: PathBuf,
    pub content: String,
}

/// Nested directory structure built from matched relative paths, used only
/// to drive tree rendering.
#[derive(Debug, PartialEq, Eq)]
pub enum TreeNode {
    Leaf,
    Dir(BTreeMap<String, TreeNode>),
}

impl TreeNode {
    pub fn new_dir() -> Self {
        TreeNode::Dir(BTreeMap::new())
    }

    /// Inserts one path, given as its segment chain. When a name collides
    /// between a file and a directory, the directory wins: a leaf never
    /// replaces an existing directory, and threading a longer path through
    /// an existing leaf converts it into a directory.
    pub fn insert(&mut self, segments: &[String]) {
        let (first, rest) = match segments.split_first() {
            Some(split) => split,
            None => return,
        };

        if matches!(self, TreeNode::Leaf) {
            *self = TreeNode::new_dir();
        }
        let TreeNode::Dir(children) = self else {
            unreachable!()
        };

        if rest.is_empty() {
            children.entry(first.clone()).or_insert(TreeNode::Leaf);
        } else {
            children
                .entry(first.clone())
                .or_insert_with(TreeNode::new_dir)
                .insert(rest);
        }
    }
}
