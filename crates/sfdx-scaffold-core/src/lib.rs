//! Core library for sfdx-scaffold.
//!
//! Turns a template identifier and a handful of user options into a Salesforce DX
//! project tree on disk. The pipeline runs leaf-first:
//!
//! 1. [`name::validate`] checks the project name grammar.
//! 2. [`templates::resolve`] looks up the compiled-in template descriptor.
//! 3. [`plan::resolve`] merges options with template defaults into a [`plan::GenerationPlan`]
//!    without touching the filesystem.
//! 4. [`project::materialize`] writes the tree, rendering the JSON configs
//!    ([`config`]), the README and, on request, the manifest ([`manifest`]).
//!
//! [`project::generate`] runs steps 3 and 4 in one call.

pub mod config;
pub mod error;
pub mod manifest;
pub mod name;
pub mod plan;
pub mod project;
pub mod templates;
pub mod version;

pub use error::{Result, ScaffoldError};
pub use plan::{CreateOptions, GenerationPlan};
pub use project::{generate, materialize, GenerationReport};
