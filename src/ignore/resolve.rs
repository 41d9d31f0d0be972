//! Last-match-wins evaluation of a path against the rule list.

use super::{Rule, RuleKind};

const TRACE_TARGET: &str = "snaptree::ignore";

/// Decide whether `rel_path` (root-relative, POSIX separators) is ignored.
///
/// All rules are scanned in order and each match overwrites the verdict, so
/// the last matching rule wins. Paths no rule matches are included.
/// Directory-only rules (trailing `/`) have their own matching:
///
/// - non-negated: excludes the named directory and everything beneath it,
///   by literal prefix comparison against the relative path;
/// - negated: re-includes the directory node itself only, and only when the
///   candidate is a directory. Descendants need their own negations.
pub fn is_ignored(rules: &[Rule], rel_path: &str, is_dir: bool) -> bool {
    let mut ignored = false;
    for rule in rules {
        match rule.kind() {
            RuleKind::Directory { prefix } => {
                if rule.is_negated() {
                    if is_dir && rel_path == prefix {
                        ignored = false;
                        trace_hit(rule, rel_path, "unignore-dir");
                    }
                } else if covers_dir(rel_path, prefix) {
                    ignored = true;
                    trace_hit(rule, rel_path, "exclude-dir");
                }
            }
            RuleKind::Glob { matcher } => {
                if matcher.is_match(rel_path) {
                    ignored = !rule.is_negated();
                    trace_hit(rule, rel_path, if ignored { "exclude" } else { "unignore" });
                }
            }
        }
    }
    tracing::debug!(
        target: TRACE_TARGET,
        path = %rel_path,
        is_dir,
        ignored,
        "verdict"
    );
    ignored
}

/// `rel_path` equals `prefix` or lies beneath it.
fn covers_dir(rel_path: &str, prefix: &str) -> bool {
    match rel_path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn trace_hit(rule: &Rule, rel_path: &str, effect: &str) {
    tracing::trace!(
        target: TRACE_TARGET,
        pattern = %rule.pattern(),
        path = %rel_path,
        effect,
        "rule match"
    );
}
