//! Manifest synthesis for Manifold
//!
//! This crate holds the manifest data model and the factory that builds it:
//!
//! - [`CapabilitySet`]: which extension surfaces are enabled
//! - [`ManifestFactory`]: probes, toggles and writes one manifest
//! - [`ManifestSchema`]: pure MV2/MV3 rendering of the capability state
//! - [`Scaffolder`]: materializes UI pages from library templates
//! - [`PackageData`]: the project's `package.json`

pub mod capability;
pub mod content;
pub mod document;
pub mod env;
pub mod error;
pub mod factory;
pub mod package;
mod probe;
pub mod scaffold;
pub mod schema;
pub mod target;

pub use capability::{Capability, CapabilitySet, ContentScript, EntrypointKind, RunAt};
pub use document::ManifestDocument;
pub use error::{Error, Result};
pub use factory::ManifestFactory;
pub use package::{BaseFields, PackageData};
pub use scaffold::Scaffolder;
pub use schema::{ManifestSchema, Mv2Schema, Mv3Schema, schema_for};
pub use target::{Browser, ManifestVersion, TargetData};
