//! Error types for manifold-core

/// Result type for manifold-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a synthesis run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An external step (version file, icons) failed
    #[error("External step '{step}' failed: {message}")]
    ExternalStep { step: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Manifest error from manifold-manifest
    #[error(transparent)]
    Manifest(#[from] manifold_manifest::Error),

    /// Filesystem error from manifold-fs
    #[error(transparent)]
    Fs(#[from] manifold_fs::Error),
}

impl Error {
    pub fn external_step(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalStep {
            step: step.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_step_display() {
        let err = Error::external_step("generate-icons", "no source icon");
        assert_eq!(
            err.to_string(),
            "External step 'generate-icons' failed: no source icon"
        );
    }

    #[test]
    fn test_manifest_errors_are_transparent() {
        let inner = manifold_manifest::Error::PackageDataNotLoaded;
        let message = inner.to_string();
        let err: Error = inner.into();
        assert_eq!(err.to_string(), message);
    }
}
