//! Shared test utilities for the Manifold workspace.
//!
//! This crate provides project fixtures so that crate test suites do not
//! each hand-roll their own. It is a dev-dependency only and never
//! published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for extension project trees

pub mod project;

pub use project::TestProject;
