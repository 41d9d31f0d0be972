//! Snapshot pipeline: rule assembly, enumeration, resolution, rendering.

mod render;
mod walk;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::ignore::{compile_rules, is_ignored, Rule};

pub use render::render_tree;
pub use walk::{enumerate, Candidate};

/// Configuration for building a snapshot.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Maximum traversal depth (`None` for unlimited).
    pub max_depth: Option<usize>,
    /// Extra patterns evaluated after the `.gitignore` rules.
    pub ignore: Vec<String>,
    /// Whether to load `.gitignore` from the root.
    pub use_gitignore: bool,
    /// Whether to append the implicit `.git/` rule after everything else.
    pub exclude_git: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            ignore: Vec::new(),
            use_gitignore: true,
            exclude_git: true,
        }
    }
}

/// Build the rendered snapshot of `root` under `config`.
///
/// Steps: resolve the root, assemble and compile the rule list, enumerate
/// the filesystem, evaluate every candidate, reconcile ancestors of the
/// survivors, render. The root itself is always included.
///
/// Every candidate is tested against every rule, so a full pass costs
/// O(paths x rules). Fine for project trees, worth knowing for huge ones.
pub fn build_tree(root: &Path, config: &TreeConfig) -> Result<String, Error> {
    let root = resolve_root(root)?;
    let rules = assemble_rules(&root, config)?;
    tracing::debug!(rules = rules.len(), root = %root.display(), "building snapshot");

    let candidates = enumerate(&root, config.max_depth);

    let mut included: HashSet<PathBuf> = HashSet::new();
    included.insert(root.clone());
    for candidate in candidates {
        if !is_ignored(&rules, &candidate.rel_path, candidate.is_dir) {
            included.insert(candidate.path);
        }
    }
    reconcile_ancestors(&root, &mut included);

    Ok(render_tree(&root, &included, config.max_depth))
}

fn resolve_root(root: &Path) -> Result<PathBuf, Error> {
    if !root.exists() {
        return Err(Error::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    root.canonicalize().map_err(|source| Error::Io {
        path: root.to_path_buf(),
        source,
    })
}

/// Rule list in evaluation order: `.gitignore` lines, then caller extras,
/// then the implicit `.git/` rule, which therefore wins against earlier
/// negations.
fn assemble_rules(root: &Path, config: &TreeConfig) -> Result<Vec<Rule>, Error> {
    let mut patterns: Vec<String> = Vec::new();
    if config.use_gitignore {
        patterns.extend(load_gitignore(root)?);
    }
    patterns.extend(config.ignore.iter().cloned());
    if config.exclude_git {
        patterns.push(".git/".to_string());
    }
    compile_rules(patterns)
}

/// Lines of `<root>/.gitignore`, trimmed, with blanks and `#` comments
/// dropped. A missing file reads as empty.
fn load_gitignore(root: &Path) -> Result<Vec<String>, Error> {
    let path = root.join(".gitignore");
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(Error::Io { path, source }),
    };
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "loaded ignore file");
    Ok(lines)
}

/// Insert every ancestor of each included path, so a surviving descendant
/// always has a connected branch up to the root.
fn reconcile_ancestors(root: &Path, included: &mut HashSet<PathBuf>) {
    let survivors: Vec<PathBuf> = included.iter().cloned().collect();
    for path in survivors {
        let mut cur = path.as_path();
        while cur != root {
            match cur.parent() {
                Some(parent) => {
                    included.insert(parent.to_path_buf());
                    cur = parent;
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_is_an_error() {
        let err = build_tree(Path::new("/no/such/dir"), &TreeConfig::default()).unwrap_err();
        assert!(matches!(err, Error::RootNotFound { .. }));
    }

    #[test]
    fn test_reconcile_adds_every_ancestor() {
        let root = PathBuf::from("/r");
        let mut included: HashSet<PathBuf> = HashSet::new();
        included.insert(root.clone());
        included.insert(PathBuf::from("/r/a/b/c.txt"));

        reconcile_ancestors(&root, &mut included);

        assert!(included.contains(Path::new("/r/a")));
        assert!(included.contains(Path::new("/r/a/b")));
        assert_eq!(included.len(), 4);
    }

    #[test]
    fn test_load_gitignore_trims_and_filters() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(".gitignore"),
            "# toolchain output\n\n  *.log  \nbuild/\n",
        )
        .unwrap();

        let lines = load_gitignore(tmp.path()).unwrap();
        assert_eq!(lines, vec!["*.log", "build/"]);
    }

    #[test]
    fn test_load_gitignore_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(load_gitignore(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_git_directory_is_excluded_by_default() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".git/config"), "").unwrap();
        fs::write(tmp.path().join("main.rs"), "").unwrap();

        let out = build_tree(tmp.path(), &TreeConfig::default()).unwrap();
        assert!(!out.contains(".git"));
        assert!(out.contains("main.rs"));
    }

    #[test]
    fn test_exclude_git_can_be_disabled() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();

        let config = TreeConfig {
            exclude_git: false,
            ..TreeConfig::default()
        };
        let out = build_tree(tmp.path(), &config).unwrap();
        assert!(out.contains(".git"));
    }
}
