//! Configuration types.

use std::collections::BTreeMap;

use gridcfg_core::Database;
use serde::Deserialize;

/// Option name to value, for sections rendered field by field.
///
/// Names are the bean property names of the target class (e.g. `maxSize`).
pub type Properties = BTreeMap<String, toml::Value>;

/// Root of a cluster configuration file.
///
/// ```toml
/// name = "orders"
/// peerClassLoadingEnabled = true
///
/// [discovery]
/// addresses = ["127.0.0.1:47500..47509"]
///
/// [[caches]]
/// name = "orders"
/// cacheMode = "PARTITIONED"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Grid name
    pub name: String,

    /// Static IP discovery
    #[serde(default)]
    pub discovery: Option<Discovery>,

    #[serde(default)]
    pub marshaller: Option<Variant>,

    #[serde(default)]
    pub transaction: Option<Properties>,

    /// REST connector
    #[serde(default)]
    pub connector: Option<Properties>,

    #[serde(default)]
    pub communication: Option<Properties>,

    #[serde(default)]
    pub swap_space: Option<Properties>,

    /// SSL context factory
    #[serde(default)]
    pub ssl: Option<Properties>,

    #[serde(default)]
    pub caches: Vec<CacheConfig>,

    /// File systems, each backed by a pair of companion caches
    #[serde(default)]
    pub igfs: Vec<IgfsConfig>,

    /// Top-level grid options
    #[serde(flatten)]
    pub properties: Properties,
}

impl ClusterConfig {
    /// User caches followed by the companion caches of every file system.
    pub fn all_caches(&self) -> Vec<CacheConfig> {
        let mut caches = self.caches.clone();
        for igfs in &self.igfs {
            caches.push(igfs.data_cache());
            caches.push(igfs.meta_cache());
        }
        caches
    }
}

/// Static IP finder addresses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Discovery {
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// A section whose class is picked by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variant {
    pub kind: String,
    #[serde(flatten)]
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    pub name: String,

    #[serde(default)]
    pub eviction_policy: Option<Variant>,

    /// Persistent store factory
    #[serde(default)]
    pub store: Option<StoreConfig>,

    #[serde(flatten)]
    pub properties: Properties,
}

impl CacheConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            eviction_policy: None,
            store: None,
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: impl Into<toml::Value>) -> Self {
        self.properties.insert(name.to_string(), value.into());
        self
    }
}

/// Cache store factory selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    /// Factory short class name, e.g. `CacheJdbcPojoStoreFactory`
    pub kind: String,

    /// Database behind the data source bean
    #[serde(default)]
    pub database: Option<Database>,

    #[serde(flatten)]
    pub properties: Properties,
}

impl StoreConfig {
    /// Id of the data source bean the store uses, if any.
    pub fn data_source_bean(&self) -> Option<&str> {
        self.properties
            .get("dataSourceBean")
            .and_then(toml::Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IgfsConfig {
    pub name: String,

    #[serde(default)]
    pub ipc_endpoint: Option<Properties>,

    #[serde(flatten)]
    pub properties: Properties,
}

impl IgfsConfig {
    pub fn data_cache_name(&self) -> String {
        format!("{}-data", self.name)
    }

    pub fn meta_cache_name(&self) -> String {
        format!("{}-meta", self.name)
    }

    /// Partitioned cache holding file blocks.
    pub fn data_cache(&self) -> CacheConfig {
        CacheConfig::new(self.data_cache_name())
            .with_property("cacheMode", "PARTITIONED")
            .with_property("atomicityMode", "TRANSACTIONAL")
            .with_property("writeSynchronizationMode", "FULL_SYNC")
            .with_property("backups", 0_i64)
    }

    /// Replicated cache holding file system metadata.
    pub fn meta_cache(&self) -> CacheConfig {
        CacheConfig::new(self.meta_cache_name())
            .with_property("cacheMode", "REPLICATED")
            .with_property("atomicityMode", "TRANSACTIONAL")
            .with_property("writeSynchronizationMode", "FULL_SYNC")
    }
}
