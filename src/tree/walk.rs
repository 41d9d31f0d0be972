//! Filesystem enumeration for snapshot building.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// One filesystem entry observed during traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Absolute path.
    pub path: PathBuf,
    /// Root-relative path with `/` separators, the form ignore rules see.
    pub rel_path: String,
    /// Whether this entry is a directory (symlinks are never followed).
    pub is_dir: bool,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
}

/// Enumerate every entry under `root` up to `max_depth`, root excluded.
///
/// Nothing is filtered here: a later negation can re-include a path inside
/// an excluded directory, so pruning excluded directories would change
/// results. Sibling order is deterministic (directories first, then
/// case-insensitive name). Unreadable entries are logged and skipped.
pub fn enumerate(root: &Path, max_depth: Option<usize>) -> Vec<Candidate> {
    let mut walker = WalkDir::new(root).sort_by(sort_cmp);
    if let Some(max) = max_depth {
        walker = walker.max_depth(max);
    }

    let mut candidates = Vec::new();
    for item in walker {
        match item {
            Ok(entry) => {
                let depth = entry.depth();
                if depth == 0 {
                    continue;
                }
                let is_dir = entry.file_type().is_dir();
                let path = entry.into_path();
                let rel_path = relative_posix(root, &path);
                candidates.push(Candidate {
                    path,
                    rel_path,
                    is_dir,
                    depth,
                });
            }
            Err(e) => {
                tracing::warn!(path = ?e.path(), error = %e, "skipping unreadable entry");
            }
        }
    }
    candidates
}

/// Sort key shared by the walker and the renderer: directories first, then
/// case-insensitive name, raw name as tiebreak.
pub(crate) fn sibling_sort_key(name: &str, is_dir: bool) -> (bool, String, String) {
    (!is_dir, name.to_lowercase(), name.to_string())
}

fn sort_cmp(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_key = sibling_sort_key(&a.file_name().to_string_lossy(), a.file_type().is_dir());
    let b_key = sibling_sort_key(&b.file_name().to_string_lossy(), b.file_type().is_dir());
    a_key.cmp(&b_key)
}

/// Root-relative path with `/` separators regardless of platform.
fn relative_posix(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
