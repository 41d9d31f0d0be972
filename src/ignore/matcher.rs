//! Translation of gitignore pattern cores into glob matchers.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Compile one pattern core (negation and trailing-slash markers already
/// stripped) into a matcher over root-relative POSIX paths.
///
/// Gitignore scoping is layered on top of the glob translation: a core with
/// a leading or embedded `/` is anchored at the root, anything else matches
/// at any depth. A second `<core>/**` variant makes a matched directory
/// cover everything beneath it.
pub(crate) fn compile(core: &str) -> Result<GlobSet, globset::Error> {
    let (anchored, base) = match core.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (core.contains('/'), core),
    };

    let variants = if anchored {
        [base.to_string(), format!("{base}/**")]
    } else {
        [format!("**/{base}"), format!("**/{base}/**")]
    };

    let mut builder = GlobSetBuilder::new();
    for variant in &variants {
        // `*`, `?` and character classes stop at separators; only `**`
        // spans directories.
        let glob = GlobBuilder::new(variant).literal_separator(true).build()?;
        builder.add(glob);
    }
    builder.build()
}
