//! Error types for manifold-ui

use std::path::PathBuf;

/// Guidance shown whenever no scaffold can be resolved.
pub const UNSUPPORTED_LIBRARY_MESSAGE: &str = "No supported UI library found. \
     You can file an RFC for a new UI library here: https://github.com/user/manifold/issues";

/// Errors that can occur while resolving the UI library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No supported library is declared, or the declared version has no scaffold.
    #[error("{} ({detail})", UNSUPPORTED_LIBRARY_MESSAGE)]
    UnsupportedLibrary { detail: String },

    /// The dependency specifier does not carry a readable version.
    #[error("invalid version '{specifier}' for {library}: {reason}")]
    InvalidVersion {
        library: String,
        specifier: String,
        reason: String,
    },

    /// A local-path override points at a package without a usable version.
    #[error("local package at {path} does not declare a version")]
    LocalPackageVersion { path: PathBuf },

    /// Filesystem error while reading a local package descriptor.
    #[error(transparent)]
    Fs(#[from] manifold_fs::Error),
}

impl Error {
    pub(crate) fn unsupported(detail: impl Into<String>) -> Self {
        Self::UnsupportedLibrary {
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
