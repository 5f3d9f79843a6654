//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Grid name.
    pub cluster_name: String,
    /// Caches in generation order, file system companions included.
    pub caches: Vec<CacheSummary>,
    /// File system names.
    pub file_systems: Vec<String>,
    /// Data source beans as `id (database)`.
    pub data_sources: Vec<String>,
}

/// One cache of the generated configuration.
#[derive(Debug)]
pub struct CacheSummary {
    pub name: String,
    /// Store factory kind, if the cache has a store.
    pub store: Option<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Grid", &self.cluster_name);

        if !self.caches.is_empty() {
            out.newline();
            out.section(&format!("Caches ({})", self.caches.len()));
            for cache in &self.caches {
                match &cache.store {
                    Some(store) => out.list_item(&format!("{} [{}]", cache.name, store)),
                    None => out.list_item(&cache.name),
                }
            }
        }

        if !self.file_systems.is_empty() {
            out.newline();
            out.section("File systems");
            for name in &self.file_systems {
                out.list_item(name);
            }
        }

        if !self.data_sources.is_empty() {
            out.newline();
            out.section("Data sources");
            for data_source in &self.data_sources {
                out.list_item(data_source);
            }
        }
    }
}
