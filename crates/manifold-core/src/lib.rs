//! Synthesis orchestration for Manifold
//!
//! This crate drives one end-to-end manifest synthesis run on top of the
//! lower layers:
//!
//! ```text
//!              manifold-cli
//!                   |
//!             manifold-core
//!                   |
//!           manifold-manifest
//!              /         \
//!     manifold-ui     manifold-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use manifold_core::{DefaultHooks, SynthesisOptions, TracingReporter, create_manifest};
//! use manifold_fs::CommonPath;
//! use manifold_manifest::TargetData;
//!
//! # async fn run() -> manifold_core::Result<()> {
//! let paths = CommonPath::new("/project", "/templates/static")?;
//! let report = create_manifest(
//!     paths,
//!     "firefox-mv2".parse::<TargetData>()?,
//!     &DefaultHooks::new(),
//!     &TracingReporter,
//!     SynthesisOptions::default(),
//! )
//! .await?;
//! println!("{:?}", report.discovery);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod hooks;
pub mod reporter;
pub mod synthesis;

pub use error::{Error, Result};
pub use hooks::{DefaultHooks, NoopHooks, SynthesisHooks};
pub use reporter::{NullReporter, Phase, RecordingReporter, Reporter, SynthesisEvent, TracingReporter};
pub use synthesis::{
    DiscoveryResult, NO_ENTRYPOINTS_WARNING, SynthesisOptions, SynthesisReport, create_manifest,
};
