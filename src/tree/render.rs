//! Text rendering of the included tree.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::walk::sibling_sort_key;

const TEE: &str = "├── ";
const ELBOW: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Render `root` and the included paths beneath it as connector-drawn text.
///
/// Directories are re-listed from the filesystem and filtered against
/// `included`, so only paths that survived rule evaluation (plus their
/// reconciled ancestors) appear. The returned string has no trailing
/// newline.
pub fn render_tree(root: &Path, included: &HashSet<PathBuf>, max_depth: Option<usize>) -> String {
    let label = root
        .file_name()
        .unwrap_or_else(|| root.as_os_str())
        .to_string_lossy()
        .into_owned();
    let mut lines = vec![label];
    lines.extend(subtree_lines(root, "", 0, max_depth, included));
    lines.join("\n")
}

/// Lines for the children of `dir`, each carrying its connector and
/// `prefix`. `depth` is the depth of `dir` itself; recursion stops once it
/// reaches the bound.
fn subtree_lines(
    dir: &Path,
    prefix: &str,
    depth: usize,
    max_depth: Option<usize>,
    included: &HashSet<PathBuf>,
) -> Vec<String> {
    if let Some(max) = max_depth {
        if depth >= max {
            return Vec::new();
        }
    }

    let children = list_children(dir, included);
    let mut lines = Vec::new();
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let connector = if is_last { ELBOW } else { TEE };
        lines.push(format!("{prefix}{connector}{}", child.name));
        if child.is_dir {
            let extension = if is_last { BLANK } else { PIPE };
            let child_prefix = format!("{prefix}{extension}");
            lines.extend(subtree_lines(
                &child.path,
                &child_prefix,
                depth + 1,
                max_depth,
                included,
            ));
        }
    }
    lines
}

struct Child {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Included children of `dir`, in rendering order. Read failures are logged
/// and yield an empty listing.
fn list_children(dir: &Path, included: &HashSet<PathBuf>) -> Vec<Child> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "cannot list directory");
            return Vec::new();
        }
    };

    let mut children = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if !included.contains(&path) {
            continue;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        children.push(Child {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_dir,
        });
    }
    children.sort_by(|a, b| {
        sibling_sort_key(&a.name, a.is_dir).cmp(&sibling_sort_key(&b.name, b.is_dir))
    });
    children
}
