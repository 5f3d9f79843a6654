//! Java code generator for gridcfg.
//!
//! Renders a [`ClusterConfig`](gridcfg_model::ClusterConfig) as a Java class
//! with a `createConfiguration()` factory method, plus one factory method per
//! data source referenced by a cache store.
//!
//! Classes are referenced by short name and imported. When two classes share
//! a short name the [`ConflictPolicy`](gridcfg_codegen::ConflictPolicy) in
//! [`GenerateOptions`](gridcfg_codegen::GenerateOptions) decides whether the
//! later one is written in full or the pass fails.

mod generator;
mod literal;

pub use generator::Generator;
pub use gridcfg_codegen::language::{ConfigCodegen, PreviewFile};
pub use literal::{escape_java, quote};
