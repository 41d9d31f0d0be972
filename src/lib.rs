#![forbid(unsafe_code)]
//! Snaptree — directory tree snapshots honoring gitignore-style ignore rules.

pub mod cli;
pub mod error;
pub mod ignore;
pub mod tree;

pub use error::Error;
pub use tree::{build_tree, TreeConfig};
