//! DepViz Core Library
//!
//! This library provides the core functionality for extracting a static
//! dependency graph from a JavaScript/TypeScript source tree: file
//! discovery, import extraction, import resolution, and graph assembly.

pub mod builder;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod graph;
pub mod resolve;

// Re-export commonly used types
pub use builder::build_dependency_graph;
pub use config::ScanConfig;
pub use error::GraphError;
pub use graph::{DependencyEdge, DependencyGraph, FileNode, GraphData, GraphStats};
