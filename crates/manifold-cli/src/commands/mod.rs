//! Command implementations for manifold-cli

pub mod manifest;
pub mod ui;

pub use manifest::run_manifest;
pub use ui::run_ui;
