use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file {} was not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: cannot parse {token:?}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
        reason: String,
    },

    #[error("no recorded answer for {label} (looked for {})", .path.display())]
    MissingAnswerFile { label: String, path: PathBuf },

    #[error("answer file {} does not hold an integer: {content:?}", .path.display())]
    MalformedAnswer { path: PathBuf, content: String },

    #[error("{label}: expected {expected}, got {actual}")]
    AnswerMismatch {
        label: String,
        expected: i64,
        actual: i64,
    },

    #[error("computation failed: {0}")]
    Computation(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Map an I/O failure on `path`, keeping "not found" distinct.
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// True for failures of the recorded baseline itself: it is missing,
    /// unreadable as an integer, or disagrees with the computed answer.
    pub fn is_baseline_failure(&self) -> bool {
        matches!(
            self,
            Error::MissingAnswerFile { .. }
                | Error::MalformedAnswer { .. }
                | Error::AnswerMismatch { .. }
        )
    }
}
