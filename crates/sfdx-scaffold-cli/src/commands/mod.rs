//! CLI command implementations for sfdx-scaffold.

pub mod create;
