//! Error types for tsuml.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tsuml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run. Nothing here is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A source file could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk itself failed (missing root, unreadable directory).
    #[error("failed to walk source tree: {message}")]
    Walk { message: String },

    /// The directory the artifact should land in does not exist.
    #[error("output directory does not exist: {0}")]
    OutputDirMissing(PathBuf),

    /// The layout engine binary could not be started.
    #[error("layout engine `{binary}` is not available: {source}")]
    LayoutEngineUnavailable {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The layout engine ran but exited unsuccessfully.
    #[error("layout engine `{binary}` failed ({status}): {stderr}")]
    LayoutEngineFailed {
        binary: String,
        status: String,
        stderr: String,
    },

    /// Configuration file could not be parsed.
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A font file could not be loaded.
    #[error("failed to load font {path}: {message}")]
    Font { path: PathBuf, message: String },

    /// Image encoding or writing failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Walk {
            message: err.to_string(),
        }
    }
}

impl From<ignore::Error> for Error {
    fn from(err: ignore::Error) -> Self {
        Error::Walk {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::OutputDirMissing(PathBuf::from("/no/such/dir"));
        assert!(err.to_string().contains("/no/such/dir"));

        let err = Error::LayoutEngineFailed {
            binary: "dot".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "syntax error in line 3".to_string(),
        };
        assert!(err.to_string().contains("dot"));
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn test_io_error_names_file() {
        let err = Error::io(
            "src/app.ts",
            std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        let message = err.to_string();
        assert!(message.contains("src/app.ts"));
        assert!(message.contains("UTF-8"));
    }
}
