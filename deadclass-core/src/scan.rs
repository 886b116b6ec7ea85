//! Parallel, deterministic web-asset discovery with directory pruning.
//!
//! Performance optimizations:
//! - Early directory pruning via `WalkDir::filter_entry` (O(1) subtree skip)
//! - Parallel file processing via Rayon's `par_bridge`
//! - Minimal work in parallel threads (only extension check)

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories to exclude by default (standard web project conventions).
const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "target"];

/// Extensions treated as HTML documents.
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// Checks if a directory entry should be pruned (excluded from traversal).
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Gathers files matching `extensions` recursively from the root path.
///
/// Skips `node_modules/`, `.git/`, `dist/`, `build/`, and `target/`
/// subtrees before iteration, then parallelizes the extension check.
/// Results are sorted so output is deterministic.
pub fn gather_asset_files(root: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let excludes: HashSet<&str> = EXCLUDED_DIRS.iter().copied().collect();

    let mut files = WalkDir::new(root)
        .into_iter()
        // filter_entry prunes entire subtrees before iteration
        .filter_entry(|e| !is_excluded_dir(e, &excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && has_extension(path, extensions) {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e.into())),
        })
        .collect::<Result<Vec<_>>>()
        .context(format!("Failed to gather files from {}", root.display()))?;

    files.sort();
    Ok(files)
}

/// Gathers all `.html` / `.htm` files under the root path.
pub fn gather_html_files(root: &Path) -> Result<Vec<PathBuf>> {
    gather_asset_files(root, HTML_EXTENSIONS)
}

/// Gathers all `.css` files under the root path.
pub fn gather_css_files(root: &Path) -> Result<Vec<PathBuf>> {
    gather_asset_files(root, &["css"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup_site(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("deadclass_scan_{}_{}", tag, std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(dir.join("pages")).unwrap();
        fs::create_dir_all(dir.join("node_modules/pkg")).unwrap();

        fs::write(dir.join("index.html"), "<p></p>").unwrap();
        fs::write(dir.join("pages/about.HTM"), "<p></p>").unwrap();
        fs::write(dir.join("style.css"), ".a{}").unwrap();
        fs::write(dir.join("node_modules/pkg/vendor.html"), "<p></p>").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();
        dir
    }

    #[test]
    fn test_gather_html_files() {
        let dir = setup_site("html");
        let files = gather_html_files(&dir).unwrap();

        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(OsStr::to_str))
            .collect();

        assert!(names.contains(&"index.html"));
        assert!(names.contains(&"about.HTM"), "extension match is case-insensitive");
        assert!(!names.contains(&"vendor.html"), "node_modules is pruned");
        assert!(!names.contains(&"style.css"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_gather_css_files() {
        let dir = setup_site("css");
        let files = gather_css_files(&dir).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("style.css"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_output_sorted() {
        let dir = setup_site("sorted");
        let files = gather_html_files(&dir).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);

        fs::remove_dir_all(&dir).ok();
    }
}
