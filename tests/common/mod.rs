use snaptree::{build_tree, TreeConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Write `<root>/.gitignore` with the given contents.
pub fn write_gitignore(root: &Path, contents: &str) {
    fs::write(root.join(".gitignore"), contents).unwrap();
}

/// Build a snapshot with the default configuration.
pub fn snapshot(root: &Path) -> String {
    build_tree(root, &TreeConfig::default()).unwrap()
}

/// Build a snapshot with extra ignore patterns appended after `.gitignore`.
pub fn snapshot_with_ignore(root: &Path, patterns: &[&str]) -> String {
    let config = TreeConfig {
        ignore: patterns.iter().map(|s| s.to_string()).collect(),
        ..TreeConfig::default()
    };
    build_tree(root, &config).unwrap()
}

/// Node names in a rendered snapshot, in output order, connector prefixes
/// stripped. The root label line is not part of the result.
pub fn rendered_names(out: &str) -> Vec<String> {
    out.lines()
        .skip(1)
        .map(|line| match line.rfind("── ") {
            Some(idx) => line[idx + "── ".len()..].to_string(),
            None => line.to_string(),
        })
        .collect()
}

/// Whether a rendered snapshot contains a node with exactly this name.
pub fn contains_entry(out: &str, name: &str) -> bool {
    rendered_names(out).iter().any(|n| n == name)
}
