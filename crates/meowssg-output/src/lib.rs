//! Output writer: persist finalized documents and maintain the
//! build-wide artifacts (`sitemap.xml`, `robots.txt`, `_redirects`,
//! placeholder assets).

pub mod artifacts;
pub mod summary;
pub mod writer;

pub use summary::{BuildSummary, FailedRoute};
pub use writer::{FinalizeOutcome, OutputWriter};

use std::path::PathBuf;

/// Errors from writing build output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
