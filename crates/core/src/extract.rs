//! Import extraction via pattern matching over raw source text.
//!
//! This is deliberately not a parser. The four patterns below cover the
//! well-formed import forms the graph cares about and are applied to the
//! file content as-is, matching the behavior the rest of the pipeline is
//! calibrated against. Known limitations of the approach: commented-out
//! imports still match (false positive), and template-literal or
//! concatenated specifiers never match (false negative).

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::resolve;

/// The fixed set of recognized import forms, applied in order:
/// `import … from`, dynamic `import(…)`, `require(…)`, `export … from`.
static IMPORT_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r#"import\s+(?:\{[^}]+\}|\*\s+as\s+\w+|\w+)\s+from\s+['"]([^'"]+)['"]"#)
            .expect("static import pattern"),
        Regex::new(r#"import\s*\(['"]([^'"]+)['"]\)"#).expect("dynamic import pattern"),
        Regex::new(r#"require\s*\(['"]([^'"]+)['"]\)"#).expect("require pattern"),
        Regex::new(r#"export\s+(?:\{[^}]+\}|\*)\s+from\s+['"]([^'"]+)['"]"#)
            .expect("re-export pattern"),
    ]
});

/// Extract every raw specifier matched by the fixed patterns, in match
/// order, duplicates and bare package names included.
pub fn extract_specifiers(content: &str) -> Vec<String> {
    let mut specifiers = Vec::new();
    for pattern in IMPORT_PATTERNS.iter() {
        for captures in pattern.captures_iter(content) {
            specifiers.push(captures[1].to_string());
        }
    }
    specifiers
}

/// Extract the set of resolved local dependencies of one file.
///
/// Reads the file as UTF-8, runs the pattern pass, and resolves every
/// relative specifier. Bare specifiers (package imports) and specifiers
/// that match no file on disk are dropped. A file importing one target
/// through several syntactic forms contributes that target once.
///
/// An unreadable or non-UTF-8 file logs a warning and yields an empty set;
/// one bad file must not abort graph construction.
pub fn extract_imports(rel_path: &str, root: &Path, config: &ScanConfig) -> BTreeSet<String> {
    let content = match fs::read_to_string(root.join(rel_path)) {
        Ok(content) => content,
        Err(err) => {
            warn!("skipping unreadable file {rel_path}: {err}");
            return BTreeSet::new();
        }
    };

    let mut imports = BTreeSet::new();
    for specifier in extract_specifiers(&content) {
        if !specifier.starts_with('.') {
            continue;
        }
        match resolve::resolve(&specifier, rel_path, root, config) {
            Some(target) => {
                imports.insert(target);
            }
            None => {
                debug!("unresolved import {specifier:?} in {rel_path}");
            }
        }
    }
    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_specifiers_import_forms() {
        let content = r#"
            import React from 'react';
            import { useState, useEffect } from "react";
            import * as path from './path-utils';
        "#;
        let specs = extract_specifiers(content);
        assert_eq!(specs, vec!["react", "react", "./path-utils"]);
    }

    #[test]
    fn test_specifiers_dynamic_and_require() {
        let content = r#"
            const mod = await import('./lazy');
            const fs = require("fs");
            const helper = require('./helper');
        "#;
        let specs = extract_specifiers(content);
        assert!(specs.contains(&"./lazy".to_string()));
        assert!(specs.contains(&"fs".to_string()));
        assert!(specs.contains(&"./helper".to_string()));
    }

    #[test]
    fn test_specifiers_reexports() {
        let content = r#"
            export { api } from './api';
            export * from "./types";
        "#;
        let specs = extract_specifiers(content);
        assert_eq!(specs, vec!["./api", "./types"]);
    }

    #[test]
    fn test_specifiers_ignore_plain_statements() {
        let content = r#"
            const x = "./not-an-import";
            // no import here
        "#;
        assert!(extract_specifiers(content).is_empty());
    }

    #[test]
    fn test_specifiers_match_inside_comments() {
        // Pattern matching over raw text, not parsing: commented-out
        // imports are a documented false positive.
        let content = r#"// import old from './old';"#;
        assert_eq!(extract_specifiers(content), vec!["./old"]);
    }

    #[test]
    fn test_extract_imports_resolves_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        File::create(root.join("helper.js")).unwrap();
        fs::write(
            root.join("index.js"),
            "import helper from './helper';\nconst again = require('./helper.js');\n",
        )
        .unwrap();

        let imports = extract_imports("index.js", root, &ScanConfig::default());
        assert_eq!(
            imports.into_iter().collect::<Vec<_>>(),
            vec!["helper.js".to_string()]
        );
    }

    #[test]
    fn test_extract_imports_skips_bare_and_unresolved() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(
            root.join("index.js"),
            "import React from 'react';\nimport ghost from './ghost';\n",
        )
        .unwrap();

        let imports = extract_imports("index.js", root, &ScanConfig::default());
        assert!(imports.is_empty());
    }

    #[test]
    fn test_extract_imports_unreadable_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let imports = extract_imports("missing.js", temp_dir.path(), &ScanConfig::default());
        assert!(imports.is_empty());
    }

    #[test]
    fn test_extract_imports_non_utf8_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("binary.js"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let imports = extract_imports("binary.js", root, &ScanConfig::default());
        assert!(imports.is_empty());
    }
}
