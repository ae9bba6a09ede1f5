//! Resolution of relative import specifiers to concrete files.
//!
//! Mirrors the lookup a JavaScript toolchain performs for relative imports:
//! the path as written, then each known source extension appended, then the
//! path as a directory with an `index.*` file. Bare package specifiers never
//! reach this module.

use std::path::Path;

use crate::config::ScanConfig;

/// Resolve a relative specifier against the importing file's location.
///
/// # Arguments
/// * `specifier` - Raw specifier as written in the source (`./utils`, `../a/b.js`)
/// * `from_file` - Root-relative slash path of the importing file
/// * `root` - Absolute scan root
/// * `config` - Supplies the extension probe order
///
/// # Returns
/// The normalized root-relative slash path of the first candidate that is a
/// regular file, or `None` when nothing matches. Unresolved specifiers are
/// not errors; they simply produce no edge.
pub fn resolve(
    specifier: &str,
    from_file: &str,
    root: &Path,
    config: &ScanConfig,
) -> Option<String> {
    let from_dir = match from_file.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };
    let joined = if from_dir.is_empty() {
        specifier.to_string()
    } else {
        format!("{from_dir}/{specifier}")
    };

    // Normalization happens before probing so that every route to a target
    // yields one canonical id, which the edge dedup relies on.
    let base = normalize(&joined)?;

    let mut candidates = Vec::with_capacity(1 + 2 * config.source_extensions.len());
    candidates.push(base.clone());
    for ext in &config.source_extensions {
        candidates.push(format!("{base}{ext}"));
    }
    for ext in &config.source_extensions {
        if base.is_empty() {
            candidates.push(format!("index{ext}"));
        } else {
            candidates.push(format!("{base}/index{ext}"));
        }
    }

    candidates
        .into_iter()
        .filter(|c| !c.is_empty())
        .find(|c| root.join(c).is_file())
}

/// Lexically normalize a root-relative slash path: drop `.` and empty
/// segments, fold `..` into its parent. Returns `None` when the path would
/// climb above the root, which the resolver treats as unresolved.
fn normalize(path: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }
    Some(parts.join("/"))
}
