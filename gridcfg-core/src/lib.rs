//! Core utilities and types for the gridcfg configuration generator.
//!
//! This crate provides the fundamental pieces shared by the emitter,
//! the configuration model and the language generators.

mod database;
mod output;
mod provenance;
mod utils;

pub use database::{Database, UnknownDatabase};
// Writing generated artifacts
pub use output::{Artifact, Overwrite, WriteResult};
// Provenance header
pub use provenance::{Provenance, TIMESTAMP_FORMAT, format_timestamp};
// String utilities
pub use utils::{capitalize, is_identifier, to_pascal_case, toml_value_to_string};
