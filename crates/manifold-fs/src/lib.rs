//! Filesystem abstraction for Manifold
//!
//! Provides normalized path handling, atomic I/O, JSON document storage
//! and the conventional path layout of a browser-extension project.

pub mod common_path;
pub mod constants;
pub mod error;
pub mod io;
pub mod json;
pub mod path;

pub use common_path::CommonPath;
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use json::JsonStore;
pub use path::NormalizedPath;
