use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for the wasm embedder
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration in {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Invalid generated module: {message}")]
    InvalidModule { message: String },

    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error(
        "Generated module is stale: {} embeds {actual} bytes, input has {expected} bytes",
        path.display()
    )]
    Stale {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

impl EmbedError {
    /// Classify an IO error raised while touching `path`
    pub fn from_io<P: AsRef<Path>>(path: P, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid module error
    pub fn invalid_module<S: Into<String>>(message: S) -> Self {
        Self::InvalidModule {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            EmbedError::NotFound { .. } => "not_found",
            EmbedError::PermissionDenied { .. } => "permission",
            EmbedError::Io { .. } => "io",
            EmbedError::InvalidConfig { .. } => "config",
            EmbedError::InvalidModule { .. } => "module_format",
            EmbedError::Decode(_) => "decode",
            EmbedError::Stale { .. } => "stale",
        }
    }
}

/// Result type alias for the embedder
pub type Result<T> = std::result::Result<T, EmbedError>;
