//! Descriptor tables for the grid configuration classes.

use super::{
    ClassDescriptor,
    DefaultValue::{Bool, Int, Str},
    FieldKind::{Bean, DataSourceRef, Enum, Float, List, Path, PropertiesAsList, Raw},
    FieldSpec,
};

const fn field(name: &'static str) -> FieldSpec {
    FieldSpec::plain(name)
}

// =========================================================================
// Top level
// =========================================================================

pub const IGNITE_CONFIGURATION: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.configuration.IgniteConfiguration",
    fields: &[
        field("gridName"),
        field("clientMode").with_default(Bool(false)),
        field("peerClassLoadingEnabled").with_default(Bool(false)),
        field("localHost"),
        FieldSpec::new("workDirectory", Path),
        field("networkTimeout").with_default(Int(5000)),
        field("networkSendRetryDelay").with_default(Int(1000)),
        field("networkSendRetryCount").with_default(Int(3)),
        field("metricsLogFrequency").with_default(Int(60000)),
        field("metricsUpdateFrequency").with_default(Int(2000)),
        field("publicThreadPoolSize"),
        field("systemThreadPoolSize"),
        field("failureDetectionTimeout").with_default(Int(10000)),
        FieldSpec::new("deploymentMode", Enum("org.apache.ignite.configuration.DeploymentMode")),
    ],
};

pub const TCP_DISCOVERY_SPI: &str = "org.apache.ignite.spi.discovery.tcp.TcpDiscoverySpi";

pub const TCP_DISCOVERY_VM_IP_FINDER: &str =
    "org.apache.ignite.spi.discovery.tcp.ipfinder.vm.TcpDiscoveryVmIpFinder";

// =========================================================================
// Caches
// =========================================================================

pub const CACHE_CONFIGURATION: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.configuration.CacheConfiguration",
    fields: &[
        field("name"),
        FieldSpec::new("cacheMode", Enum("org.apache.ignite.cache.CacheMode")),
        FieldSpec::new(
            "atomicityMode",
            Enum("org.apache.ignite.cache.CacheAtomicityMode"),
        ),
        FieldSpec::new(
            "writeSynchronizationMode",
            Enum("org.apache.ignite.cache.CacheWriteSynchronizationMode"),
        ),
        field("backups").with_default(Int(0)),
        field("readFromBackup").with_default(Bool(true)),
        field("copyOnRead").with_default(Bool(true)),
        field("invalidate").with_default(Bool(false)),
        field("startSize").with_default(Int(1_500_000)),
        field("maxConcurrentAsyncOperations").with_default(Int(500)),
        field("statisticsEnabled").with_default(Bool(false)),
        field("managementEnabled").with_default(Bool(false)),
        field("readThrough").with_default(Bool(false)),
        field("writeThrough").with_default(Bool(false)),
        field("writeBehindEnabled").with_default(Bool(false)),
        field("writeBehindBatchSize").with_default(Int(512)),
        field("writeBehindFlushSize").with_default(Int(10240)),
        field("writeBehindFlushFrequency").with_default(Int(5000)),
        field("sqlOnheapRowCacheSize").with_default(Int(10240)),
    ],
};

const EVICTION_FIELDS: &[FieldSpec] = &[
    field("batchSize"),
    field("maxMemorySize"),
    field("maxSize"),
];

/// Eviction policies by the kind name used in configurations.
pub const EVICTION_POLICIES: &[(&str, ClassDescriptor)] = &[
    (
        "LRU",
        ClassDescriptor {
            class_name: "org.apache.ignite.cache.eviction.lru.LruEvictionPolicy",
            fields: EVICTION_FIELDS,
        },
    ),
    (
        "RND",
        ClassDescriptor {
            class_name: "org.apache.ignite.cache.eviction.random.RandomEvictionPolicy",
            fields: &[field("maxSize")],
        },
    ),
    (
        "FIFO",
        ClassDescriptor {
            class_name: "org.apache.ignite.cache.eviction.fifo.FifoEvictionPolicy",
            fields: EVICTION_FIELDS,
        },
    ),
    (
        "SORTED",
        ClassDescriptor {
            class_name: "org.apache.ignite.cache.eviction.sorted.SortedEvictionPolicy",
            fields: EVICTION_FIELDS,
        },
    ),
];

/// Cache store factories by short class name.
pub const STORE_FACTORIES: &[(&str, ClassDescriptor)] = &[
    (
        "CacheJdbcPojoStoreFactory",
        ClassDescriptor {
            class_name: "org.apache.ignite.cache.store.jdbc.CacheJdbcPojoStoreFactory",
            fields: &[
                FieldSpec::new("dataSourceBean", DataSourceRef),
                FieldSpec::new("configuration", Bean),
            ],
        },
    ),
    (
        "CacheJdbcBlobStoreFactory",
        ClassDescriptor {
            class_name: "org.apache.ignite.cache.store.jdbc.CacheJdbcBlobStoreFactory",
            fields: &[
                field("user"),
                FieldSpec::new("dataSourceBean", DataSourceRef),
                field("initSchema"),
                field("createTableQuery"),
                field("loadQuery"),
                field("insertQuery"),
                field("updateQuery"),
                field("deleteQuery"),
            ],
        },
    ),
    (
        "CacheHibernateBlobStoreFactory",
        ClassDescriptor {
            class_name: "org.apache.ignite.cache.store.hibernate.CacheHibernateBlobStoreFactory",
            fields: &[FieldSpec::new("hibernateProperties", PropertiesAsList("props"))],
        },
    ),
];

/// Store factory that takes a JDBC dialect bean for its database.
pub const POJO_STORE_FACTORY: &str = "CacheJdbcPojoStoreFactory";

// =========================================================================
// Marshalling
// =========================================================================

/// Marshallers by short class name.
pub const MARSHALLERS: &[(&str, ClassDescriptor)] = &[
    (
        "OptimizedMarshaller",
        ClassDescriptor {
            class_name: "org.apache.ignite.marshaller.optimized.OptimizedMarshaller",
            fields: &[field("poolSize"), field("requireSerializable")],
        },
    ),
    (
        "JdkMarshaller",
        ClassDescriptor {
            class_name: "org.apache.ignite.marshaller.jdk.JdkMarshaller",
            fields: &[],
        },
    ),
];

// =========================================================================
// SPIs and nested configurations
// =========================================================================

pub const SWAP_SPACE_SPI: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.spi.swapspace.file.FileSwapSpaceSpi",
    fields: &[
        FieldSpec::new("baseDirectory", Path),
        field("readStripesNumber"),
        FieldSpec::new("maximumSparsity", Float),
        field("maxWriteQueueSize"),
        field("writeBufferSize"),
    ],
};

pub const TRANSACTION_CONFIGURATION: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.configuration.TransactionConfiguration",
    fields: &[
        FieldSpec::new(
            "defaultTxConcurrency",
            Enum("org.apache.ignite.transactions.TransactionConcurrency"),
        ),
        FieldSpec::new(
            "transactionIsolation",
            Enum("org.apache.ignite.transactions.TransactionIsolation"),
        )
        .with_setter("defaultTxIsolation"),
        field("defaultTxTimeout"),
        field("pessimisticTxLogLinger"),
        field("pessimisticTxLogSize"),
        field("txSerializableEnabled"),
        field("txManagerLookupClassName"),
    ],
};

pub const SSL_CONTEXT_FACTORY: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.ssl.SslContextFactory",
    fields: &[
        field("keyAlgorithm"),
        FieldSpec::new("keyStoreFilePath", Path),
        FieldSpec::new("keyStorePassword", Raw),
        field("keyStoreType"),
        field("protocol"),
        FieldSpec::new("trustStoreFilePath", Path),
        FieldSpec::new("trustStorePassword", Raw),
        field("trustStoreType"),
        FieldSpec::new("trustManagers", List),
    ],
};

pub const CONNECTOR_CONFIGURATION: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.configuration.ConnectorConfiguration",
    fields: &[
        field("jettyPath"),
        field("host"),
        field("port").with_default(Int(11211)),
        field("portRange").with_default(Int(100)),
        field("idleTimeout").with_default(Int(7000)),
        field("receiveBufferSize").with_default(Int(32768)),
        field("sendBufferSize").with_default(Int(32768)),
        field("sendQueueLimit").with_default(Int(0)),
        field("directBuffer").with_default(Bool(false)),
        field("noDelay").with_default(Bool(false)),
        field("selectorCount"),
        field("threadPoolSize"),
        FieldSpec::new("messageInterceptor", Bean),
        field("secretKey"),
        field("sslEnabled").with_default(Bool(false)),
    ],
};

pub const COMMUNICATION_SPI: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.spi.communication.tcp.TcpCommunicationSpi",
    fields: &[
        FieldSpec::new("listener", Bean),
        field("localAddress"),
        field("localPort").with_default(Int(47100)),
        field("localPortRange").with_default(Int(100)),
        field("sharedMemoryPort").with_default(Int(48100)),
        field("directBuffer").with_default(Bool(false)),
        field("directSendBuffer").with_default(Bool(false)),
        field("idleConnectionTimeout").with_default(Int(30000)),
        field("connectTimeout").with_default(Int(5000)),
        field("maxConnectTimeout").with_default(Int(600000)),
        field("reconnectCount").with_default(Int(10)),
        field("socketSendBuffer").with_default(Int(32768)),
        field("socketReceiveBuffer").with_default(Int(32768)),
        field("messageQueueLimit").with_default(Int(1024)),
        field("slowClientQueueLimit"),
        field("tcpNoDelay").with_default(Bool(true)),
        field("ackSendThreshold").with_default(Int(16)),
        field("unacknowledgedMessagesBufferSize").with_default(Int(0)),
        field("socketWriteTimeout").with_default(Int(2000)),
        field("selectorsCount"),
        FieldSpec::new("addressResolver", Bean),
    ],
};

// =========================================================================
// IGFS
// =========================================================================

pub const IGFS_CONFIGURATION: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.configuration.FileSystemConfiguration",
    fields: &[
        field("name"),
        field("dataCacheName"),
        field("metaCacheName"),
        field("blockSize").with_default(Int(65536)),
        field("streamBufferSize").with_default(Int(65536)),
        field("perNodeBatchSize").with_default(Int(100)),
        field("perNodeParallelBatchCount").with_default(Int(8)),
        FieldSpec::new("defaultMode", Enum("org.apache.ignite.igfs.IgfsMode")),
        field("fragmentizerEnabled").with_default(Bool(true)),
    ],
};

pub const IGFS_IPC_CONFIGURATION: ClassDescriptor = ClassDescriptor {
    class_name: "org.apache.ignite.igfs.IgfsIpcEndpointConfiguration",
    fields: &[
        FieldSpec::new("type", Enum("org.apache.ignite.igfs.IgfsIpcEndpointType")),
        field("host").with_default(Str("127.0.0.1")),
        field("port").with_default(Int(10500)),
        field("memorySize").with_default(Int(262144)),
        field("tokenDirectoryPath").with_default(Str("ipc/shmem")),
    ],
};

fn lookup(table: &'static [(&'static str, ClassDescriptor)], kind: &str) -> Option<&'static ClassDescriptor> {
    table
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, descriptor)| descriptor)
}

/// Eviction policy descriptor for a kind such as `"LRU"`.
pub fn eviction_policy(kind: &str) -> Option<&'static ClassDescriptor> {
    lookup(EVICTION_POLICIES, kind)
}

/// Marshaller descriptor for a kind such as `"OptimizedMarshaller"`.
pub fn marshaller(kind: &str) -> Option<&'static ClassDescriptor> {
    lookup(MARSHALLERS, kind)
}

/// Store factory descriptor for a kind such as `"CacheJdbcPojoStoreFactory"`.
pub fn store_factory(kind: &str) -> Option<&'static ClassDescriptor> {
    lookup(STORE_FACTORIES, kind)
}

/// Descriptor for `kind` in `table`, or an error naming the known kinds.
pub fn variant(
    table: &'static [(&'static str, ClassDescriptor)],
    section: &str,
    kind: &str,
) -> eyre::Result<&'static ClassDescriptor> {
    lookup(table, kind).ok_or_else(|| {
        eyre::eyre!(
            "unknown {section} '{kind}', expected one of: {}",
            kinds(table).join(", ")
        )
    })
}

/// Kind names of a table, for error messages.
pub fn kinds(table: &'static [(&'static str, ClassDescriptor)]) -> Vec<&'static str> {
    table.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_kind() {
        assert_eq!(
            marshaller("JdkMarshaller").unwrap().class_name,
            "org.apache.ignite.marshaller.jdk.JdkMarshaller"
        );
        assert!(store_factory("CacheHibernateBlobStoreFactory").is_some());
        assert!(eviction_policy("LFU").is_none());
    }

    #[test]
    fn test_variant_error_lists_kinds() {
        let err = variant(MARSHALLERS, "marshaller", "Kryo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown marshaller 'Kryo', expected one of: OptimizedMarshaller, JdkMarshaller"
        );
        assert!(variant(EVICTION_POLICIES, "eviction policy", "FIFO").is_ok());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(kinds(EVICTION_POLICIES), vec!["LRU", "RND", "FIFO", "SORTED"]);
    }

    #[test]
    fn test_renamed_isolation_field() {
        let isolation = TRANSACTION_CONFIGURATION
            .field("transactionIsolation")
            .unwrap();
        assert_eq!(isolation.property_name(), "defaultTxIsolation");
    }

    #[test]
    fn test_field_names_are_unique() {
        for descriptor in [
            IGNITE_CONFIGURATION,
            CACHE_CONFIGURATION,
            SWAP_SPACE_SPI,
            TRANSACTION_CONFIGURATION,
            SSL_CONTEXT_FACTORY,
            CONNECTOR_CONFIGURATION,
            COMMUNICATION_SPI,
            IGFS_CONFIGURATION,
            IGFS_IPC_CONFIGURATION,
        ] {
            for (i, field) in descriptor.fields.iter().enumerate() {
                assert!(
                    descriptor.fields[i + 1..]
                        .iter()
                        .all(|other| other.name != field.name),
                    "duplicate field '{}' in {}",
                    field.name,
                    descriptor.class_name
                );
            }
        }
    }
}
