//! Ordered gitignore-style ignore rules.
//!
//! Rules keep the order they were written in; a path's verdict is decided by
//! the last rule that matches it (see [`is_ignored`]).

mod matcher;
mod resolve;

pub use resolve::is_ignored;

use crate::error::Error;

/// How a rule matches candidate paths.
#[derive(Debug, Clone)]
pub(crate) enum RuleKind {
    /// Trailing-slash pattern: compared literally against the relative path,
    /// never routed through the glob matcher.
    Directory { prefix: String },
    /// Everything else: delegated to the compiled glob set.
    Glob { matcher: globset::GlobSet },
}

/// A single ignore rule, retaining its source text.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    negated: bool,
    kind: RuleKind,
}

impl Rule {
    /// The pattern exactly as written, including any leading `!`.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether this rule re-includes rather than excludes.
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub(crate) fn kind(&self) -> &RuleKind {
        &self.kind
    }
}

/// Compile raw pattern lines into ordered rules.
///
/// Cores that are empty, whitespace-only, or comments after stripping a
/// leading `!` are dropped silently; everything else is kept in the order
/// given, without deduplication. A core ending in `/` becomes a
/// directory-only rule. Compilation stops at the first malformed pattern.
pub fn compile_rules<I, S>(patterns: I) -> Result<Vec<Rule>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rules = Vec::new();
    for raw in patterns {
        let raw = raw.as_ref();
        let (negated, core) = match raw.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if core.trim().is_empty() || core.starts_with('#') {
            continue;
        }

        let compile_core = |text: &str| {
            matcher::compile(text).map_err(|source| Error::Pattern {
                pattern: raw.to_string(),
                source,
            })
        };

        let kind = if core.ends_with('/') {
            let prefix = core.trim_end_matches('/');
            if !prefix.is_empty() {
                // Compiled only to reject malformed cores; directory rules
                // match by literal comparison.
                compile_core(prefix)?;
            }
            RuleKind::Directory {
                prefix: prefix.to_string(),
            }
        } else {
            RuleKind::Glob {
                matcher: compile_core(core)?,
            }
        };

        rules.push(Rule {
            pattern: raw.to_string(),
            negated,
            kind,
        });
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_source_text_preserved() {
        let rules = compile_rules(["*.log", "!keep.log"]).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].pattern(), "*.log");
        assert!(!rules[0].is_negated());
        assert_eq!(rules[1].pattern(), "!keep.log");
        assert!(rules[1].is_negated());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let rules = compile_rules(["tmp", "tmp"]).unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_blank_and_comment_cores_are_dropped() {
        let rules = compile_rules(["", "   ", "# note", "!"]).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_trailing_slash_becomes_directory_rule() {
        let rules = compile_rules(["build/"]).unwrap();
        match rules[0].kind() {
            RuleKind::Directory { prefix } => assert_eq!(prefix, "build"),
            RuleKind::Glob { .. } => panic!("expected a directory rule"),
        }
    }

    #[test]
    fn test_repeated_trailing_slashes_are_stripped() {
        let rules = compile_rules(["logs//"]).unwrap();
        match rules[0].kind() {
            RuleKind::Directory { prefix } => assert_eq!(prefix, "logs"),
            RuleKind::Glob { .. } => panic!("expected a directory rule"),
        }
    }

    #[test]
    fn test_malformed_pattern_is_fatal() {
        let err = compile_rules(["fo[o"]).unwrap_err();
        assert_eq!(err.pattern(), Some("fo[o"));
    }

    #[test]
    fn test_malformed_directory_pattern_is_fatal() {
        let err = compile_rules(["fo[o/"]).unwrap_err();
        assert_eq!(err.pattern(), Some("fo[o/"));
    }
}
