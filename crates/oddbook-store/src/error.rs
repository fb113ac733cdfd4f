use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem failure (permissions, disk full, vanished directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested name is malformed or outside the retention window.
    /// Raised before the filesystem is touched.
    #[error("Access denied: {0}")]
    Denied(String),

    /// The name is valid and retained, but no such file exists.
    #[error("File not found: {0}")]
    NotFound(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
