//! Error types for snapshot building.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a tree snapshot.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested root path does not exist.
    #[error("root path does not exist: {}", path.display())]
    RootNotFound {
        /// Path as given by the caller.
        path: PathBuf,
    },
    /// An ignore pattern could not be compiled into a matcher.
    #[error("failed to compile ignore pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern, exactly as written.
        pattern: String,
        #[source]
        source: globset::Error,
    },
    /// Reading from the filesystem failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path the operation was attempted on.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns the offending pattern for [`Error::Pattern`], if that is what
    /// this error is.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Error::Pattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}
