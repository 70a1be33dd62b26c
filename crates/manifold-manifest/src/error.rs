//! Error types for manifold-manifest

use std::path::PathBuf;

/// Result type for manifold-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Package descriptor missing or malformed
    #[error("Failed to read package descriptor at {path}: {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// Target string could not be parsed
    #[error("Invalid target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },

    /// An operation needed package data before `update_package_data` ran
    #[error("Package data not loaded; call update_package_data first")]
    PackageDataNotLoaded,

    /// UI library resolution failed
    #[error(transparent)]
    Ui(#[from] manifold_ui::Error),

    /// Filesystem error from manifold-fs
    #[error(transparent)]
    Fs(#[from] manifold_fs::Error),
}

impl Error {
    pub(crate) fn config_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigRead {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_display() {
        let err = Error::config_read("/p/package.json", "expected an object");
        let display = err.to_string();
        assert!(display.contains("/p/package.json"));
        assert!(display.contains("expected an object"));
    }
}
