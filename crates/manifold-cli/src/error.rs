//! Error types for manifold-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from manifold-core
    #[error(transparent)]
    Core(#[from] manifold_core::Error),

    /// Error from manifold-manifest
    #[error(transparent)]
    Manifest(#[from] manifold_manifest::Error),

    /// Error from manifold-ui
    #[error(transparent)]
    Ui(#[from] manifold_ui::Error),

    /// Error from manifold-fs
    #[error(transparent)]
    Fs(#[from] manifold_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
