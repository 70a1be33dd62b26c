//! UI library resolution for Manifold.
//!
//! Maps a project's declared dependencies to the front-end library its
//! entrypoints are written against, and from there to the scaffold
//! template subtree used to mount those entrypoints.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use manifold_ui::UiLibraryResolver;
//!
//! let mut deps = BTreeMap::new();
//! deps.insert("react".to_string(), "^18.2.0".to_string());
//!
//! let resolver = UiLibraryResolver::new("/project", "/templates/static");
//! let library = resolver.resolve(&deps).unwrap();
//! assert_eq!(library.scaffold_path, "react18");
//! ```

pub mod error;
pub mod library;
pub mod protocol;
pub mod resolver;
pub mod version;

pub use error::{Error, Result};
pub use library::{SupportedLibrary, UiLibrary};
pub use protocol::{LocalPackageSource, ProtocolTable, VersionSource};
pub use resolver::UiLibraryResolver;
