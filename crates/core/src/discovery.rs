//! File discovery: deterministic traversal of a source tree.
//!
//! Walks the directory tree rooted at a validated directory, pruning dot
//! directories and configured exclusions (`node_modules` by default), and
//! returns root-relative forward-slash paths for every file whose extension
//! or basename is allow-listed. Entries are sorted before descent so the
//! result order is reproducible across runs and platforms.

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::warn;

use crate::config::ScanConfig;
use crate::error::GraphError;

/// Discover source files under `root`.
///
/// # Arguments
/// * `root` - Root directory to scan
/// * `config` - Inclusion/exclusion rules
///
/// # Returns
/// Root-relative paths with `/` separators, in sorted depth-first order.
///
/// # Errors
/// Returns [`GraphError::PathNotFound`] if `root` does not exist and
/// [`GraphError::NotADirectory`] if it exists but is not a directory.
/// Unreadable subtrees are logged and skipped, not propagated.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<Vec<String>, GraphError> {
    let meta = fs::metadata(root).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => GraphError::PathNotFound(root.to_path_buf()),
        _ => GraphError::Io(err),
    })?;
    if !meta.is_dir() {
        return Err(GraphError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();

    // The exclusion rules live in the walker so excluded directories are
    // pruned instead of visited and filtered afterwards. The root entry
    // (depth 0) is always kept: scanning ".hidden-project" directly is fine.
    let filter_config = config.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| filter_config.descends_into(name))
        })
        .build();

    for result in walker {
        match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let Some(name) = entry.file_name().to_str() else {
                    continue;
                };
                if !config.includes_file(name) {
                    continue;
                }
                if let Ok(rel) = entry.path().strip_prefix(root) {
                    files.push(to_slash(rel));
                }
            }
            Err(err) => {
                // Partial-failure tolerance: an unreadable subtree costs
                // its own entries, never the whole scan.
                warn!("skipping unreadable entry: {err}");
            }
        }
    }

    Ok(files)
}

/// Render a relative path with `/` separators regardless of host OS.
pub(crate) fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
