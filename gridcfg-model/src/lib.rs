//! Cluster configuration model for gridcfg.
//!
//! A [`ClusterConfig`] is read from TOML or JSON, validated, and then handed
//! to a generator. Parse and validation failures are [`miette`] diagnostics
//! pointing into the source document.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod validate;

pub use config::{
    CacheConfig, ClusterConfig, Discovery, IgfsConfig, Properties, StoreConfig, Variant,
};
pub use error::{Error, Result, SourceContext};
