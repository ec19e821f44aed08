use std::path::PathBuf;

use thiserror::Error;

/// AccessError means the asset could not be read at all.
///
/// This is never evidence that the content is too long, so validators
/// return it as an error instead of a `false` verdict.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file '{}' is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },
}

impl AccessError {
    /// Classifies an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => AccessError::NotFound { path },
            std::io::ErrorKind::InvalidData => AccessError::Encoding { path },
            _ => AccessError::Io { path, source },
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            AccessError::NotFound { path }
            | AccessError::Io { path, .. }
            | AccessError::Encoding { path } => path,
        }
    }
}

/// Trimmed content is longer than the limit.
///
/// Only raised by `read_processed` under `OverflowPolicy::Error`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("File '{}' has reached the limit of {limit} characters", path.display())]
pub struct LimitExceeded {
    pub path: PathBuf,
    pub limit: usize,
    pub length: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum PlaylintError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    LimitExceeded(#[from] LimitExceeded),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_io_error_is_classified() {
        let err = AccessError::from_io("a/title", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, AccessError::NotFound { .. }));
        assert_eq!(err.path(), std::path::Path::new("a/title"));
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = AccessError::from_io(
            "a/title",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, AccessError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn limit_exceeded_message_names_file_and_limit() {
        let err = LimitExceeded {
            path: PathBuf::from("en-US/whatsnew"),
            limit: 1,
            length: 12,
        };
        assert_eq!(
            err.to_string(),
            "File 'en-US/whatsnew' has reached the limit of 1 characters"
        );
    }
}
