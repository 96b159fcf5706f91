use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Per-item problems are never raised here, see [`crate::diagnostics`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("{context}: {}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no words found in {} - aborting", .0.display())]
    NoWords(PathBuf),

    #[error("unsupported output type: {0}")]
    OutputType(String),

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    pub fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { context, path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
