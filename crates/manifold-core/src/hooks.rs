//! External steps run before the manifest factory is created.
//!
//! Version tracking and icon generation live outside manifest synthesis.
//! The orchestrator only sequences them through [`SynthesisHooks`].

use async_trait::async_trait;
use manifold_fs::{CommonPath, io};

use crate::error::Result;

/// Version recorded by [`DefaultHooks`].
pub const FRAMEWORK_VERSION: &str = env!("CARGO_PKG_VERSION");

#[async_trait]
pub trait SynthesisHooks: Send + Sync {
    /// Record the framework version that produced the working directory.
    async fn update_version_file(&self, common_path: &CommonPath) -> Result<()>;

    /// Produce the extension icons.
    async fn generate_icons(&self, common_path: &CommonPath) -> Result<()>;
}

/// Writes the version file; icons are left to the bundler.
#[derive(Debug, Clone)]
pub struct DefaultHooks {
    version: String,
}

impl Default for DefaultHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultHooks {
    pub fn new() -> Self {
        Self::with_version(FRAMEWORK_VERSION)
    }

    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

#[async_trait]
impl SynthesisHooks for DefaultHooks {
    async fn update_version_file(&self, common_path: &CommonPath) -> Result<()> {
        let path = common_path.version_path();
        if path.is_file() && io::read_text(&path)?.trim() == self.version {
            return Ok(());
        }
        io::write_text(&path, &self.version)?;
        tracing::debug!(path = %path, version = %self.version, "updated version file");
        Ok(())
    }

    async fn generate_icons(&self, _common_path: &CommonPath) -> Result<()> {
        tracing::debug!("icon generation is handled by the bundler");
        Ok(())
    }
}

/// Skips every external step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

#[async_trait]
impl SynthesisHooks for NoopHooks {
    async fn update_version_file(&self, _common_path: &CommonPath) -> Result<()> {
        Ok(())
    }

    async fn generate_icons(&self, _common_path: &CommonPath) -> Result<()> {
        Ok(())
    }
}
