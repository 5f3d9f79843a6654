//! Shared code generation utilities for gridcfg.
//!
//! This crate provides the language-agnostic pieces used by the XML and Java
//! generators (`gridcfg-xml`, `gridcfg-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - The [`Emitter`] line accumulator with blocks, deferred blank
//!   lines, reference registries and speculative rollback
//! - [`descriptors`] - Static tables describing configuration classes and their fields
//! - [`language`] - Generator trait and per-pass options

pub mod builder;
pub mod descriptors;
pub mod language;

pub use builder::{
    ConflictPolicy, DataSource, EmitError, Emitter, ImportSyntax, Indent, ReferenceRegistry,
};
pub use language::{ConfigCodegen, DEFAULT_CLASS_NAME, GenerateOptions, PreviewFile};
