use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use tracing::warn;
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Patterns without `*` or `?` are literal directory paths, so `app/[locale]`
/// does not need escaping.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for source files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matched files, sorted and deduplicated.
    pub files: Vec<String>,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
}

/// Ignore rules resolved against a base directory.
struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, ignore_patterns: &[String], ignore_test_files: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if !is_glob_pattern(p) {
                literal_paths.push(base_dir.join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn!(pattern = %p, error = %e, "invalid ignore pattern"),
            }
        }

        if ignore_test_files {
            patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self {
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: `base_dir` itself when `includes` is empty, otherwise each
/// literal include path that exists plus every directory a glob include expands to.
fn resolve_include_dirs(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut dirs = Vec::new();
    for inc in includes {
        let full = base_dir.join(inc);
        if !is_glob_pattern(inc) {
            if full.exists() {
                dirs.push(full);
            } else {
                warn!(path = %full.display(), "include path does not exist");
            }
            continue;
        }
        match glob(&full.to_string_lossy()) {
            Ok(entries) => dirs.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) => warn!(pattern = %inc, error = %e, "invalid include pattern"),
        }
    }
    dirs
}

/// Discover JS/TS source files under `base_dir`.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
) -> ScanResult {
    let ignores = IgnoreSet::new(base_dir, ignore_patterns, ignore_test_files);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for dir in resolve_include_dirs(base_dir, includes) {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            if ignores.is_ignored(path) {
                continue;
            }
            if path.is_file() && is_scannable_file(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

pub fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
