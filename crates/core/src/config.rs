//! Scan configuration: which files count as source files and which
//! directories are skipped during traversal.

/// Configuration shared by the scanner, extractor, and resolver.
///
/// One `ScanConfig` is built up front and passed by reference through the
/// whole build; there is no process-global configuration state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// File extensions (with leading dot) treated as source files.
    ///
    /// The order matters for the resolver: extension candidates are probed
    /// in this order.
    pub source_extensions: Vec<String>,

    /// Exact basenames included even though they carry no extension.
    pub extensionless_files: Vec<String>,

    /// Directory names never descended into. Directories whose name starts
    /// with `.` are always skipped, independent of this list.
    pub excluded_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_extensions: [".js", ".jsx", ".ts", ".tsx", ".mjs"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extensionless_files: ["README", "LICENSE", "Dockerfile", "Makefile", "Gemfile"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_dirs: vec!["node_modules".to_string()],
        }
    }
}

impl ScanConfig {
    /// Whether a file with the given basename should be included in a scan.
    pub fn includes_file(&self, basename: &str) -> bool {
        let ext = extension_of(basename);
        if !ext.is_empty() {
            if self.source_extensions.iter().any(|e| e == ext) {
                return true;
            }
        }
        self.extensionless_files.iter().any(|f| f == basename)
    }

    /// Whether a directory with the given name should be descended into.
    pub fn descends_into(&self, dirname: &str) -> bool {
        !dirname.starts_with('.') && !self.excluded_dirs.iter().any(|d| d == dirname)
    }
}

/// Extension of a basename including the leading dot, or `""`.
///
/// A leading dot is not an extension separator (`.babelrc` has no
/// extension, `.babelrc.js` has `.js`), matching Node's `path.extname`.
pub(crate) fn extension_of(basename: &str) -> &str {
    match basename.rfind('.') {
        Some(idx) if idx > 0 => &basename[idx..],
        _ => "",
    }
}
