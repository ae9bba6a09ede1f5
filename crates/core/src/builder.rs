//! Graph construction: orchestrates discovery, extraction, and resolution.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::discovery;
use crate::error::GraphError;
use crate::extract;
use crate::graph::{DependencyGraph, FileNode};

/// Build the dependency graph for a source tree.
///
/// Scans `target` once, creates one node per discovered file, extracts each
/// file's resolved local imports, and records deduplicated directed edges.
/// The result is a pure value: building twice against an unchanged tree
/// yields equal node and edge sets, and concurrent builds share no state.
///
/// # Errors
/// Returns [`GraphError::PathNotFound`] or [`GraphError::NotADirectory`]
/// when the root is invalid. All other failures degrade to fewer
/// nodes/edges and are logged where they occur.
pub fn build_dependency_graph(
    target: &Path,
    config: &ScanConfig,
) -> Result<DependencyGraph, GraphError> {
    let root = absolutize(target)?;
    info!("building dependency graph for {}", root.display());

    let files = discovery::scan(&root, config)?;

    let mut graph = DependencyGraph::new();
    for file in &files {
        graph.add_file(FileNode::from_rel_path(file));
    }

    for file in &files {
        let imports = extract::extract_imports(file, &root, config);
        for target_id in imports {
            if graph.add_dependency(file, &target_id) {
                debug!("edge {file} -> {target_id}");
            }
        }
    }

    info!(
        "found {} files and {} dependencies",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Resolve `target` against the current directory without touching the
/// filesystem; existence is checked by the scanner so the error taxonomy
/// stays in one place.
fn absolutize(target: &Path) -> Result<PathBuf, GraphError> {
    if target.is_absolute() {
        Ok(target.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(target))
    }
}
