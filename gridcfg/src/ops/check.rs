//! Check operation - configuration summary.

use std::path::Path;

use gridcfg_model::ClusterConfig;

use crate::reports::{CacheSummary, CheckReport};

/// Summarize a configuration that parsed and validated.
pub fn check(config: &ClusterConfig, config_path: &Path) -> CheckReport {
    let caches = config
        .all_caches()
        .into_iter()
        .map(|cache| CacheSummary {
            store: cache.store.as_ref().map(|store| store.kind.clone()),
            name: cache.name,
        })
        .collect();

    let data_sources = config
        .caches
        .iter()
        .filter_map(|cache| cache.store.as_ref())
        .filter_map(|store| {
            let bean_id = store.data_source_bean()?;
            let database = store.database?;
            Some(format!("{bean_id} ({database})"))
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        cluster_name: config.name.clone(),
        caches,
        file_systems: config.igfs.iter().map(|igfs| igfs.name.clone()).collect(),
        data_sources,
    }
}
