//! Snapshot tests for Java generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use chrono::NaiveDate;
use gridcfg_codegen::{ConflictPolicy, GenerateOptions};
use gridcfg_core::Provenance;
use gridcfg_java::{ConfigCodegen, Generator};
use gridcfg_model::ClusterConfig;

fn options() -> GenerateOptions {
    let generated_at = NaiveDate::from_ymd_opt(2024, 3, 7)
        .and_then(|date| date.and_hms_opt(9, 5, 0))
        .expect("valid timestamp");
    GenerateOptions::new(Provenance::new("gridcfg", generated_at))
}

fn render_with(config_toml: &str, options: GenerateOptions) -> eyre::Result<String> {
    let config = ClusterConfig::from_str(config_toml).expect("Failed to parse configuration");
    Generator::new(&config, options).render()
}

fn render(config_toml: &str) -> String {
    render_with(config_toml, options()).expect("Failed to render")
}

#[test]
fn test_cluster_with_store() {
    let java = render(
        r#"
name = "orders"
peerClassLoadingEnabled = true
networkTimeout = 5000

[discovery]
addresses = ["127.0.0.1:47500..47509"]

[connector]
port = 11211

[[caches]]
name = "orders"
cacheMode = "PARTITIONED"
backups = 1

[caches.evictionPolicy]
kind = "LRU"
maxSize = 1000

[caches.store]
kind = "CacheJdbcPojoStoreFactory"
database = "MySQL"
dataSourceBean = "dsOrders"
"#,
    );

    assert!(java.ends_with("}\n"));
    insta::assert_snapshot!(java.trim_end(), @r#"
/**
 * This configuration was generated by gridcfg (03/07/2024 09:05)
 */

import com.mysql.jdbc.jdbc2.optional.MysqlDataSource;
import java.util.Arrays;
import javax.sql.DataSource;
import org.apache.ignite.cache.CacheMode;
import org.apache.ignite.cache.eviction.lru.LruEvictionPolicy;
import org.apache.ignite.cache.store.jdbc.CacheJdbcPojoStoreFactory;
import org.apache.ignite.cache.store.jdbc.dialect.MySQLDialect;
import org.apache.ignite.configuration.CacheConfiguration;
import org.apache.ignite.configuration.IgniteConfiguration;
import org.apache.ignite.spi.discovery.tcp.TcpDiscoverySpi;
import org.apache.ignite.spi.discovery.tcp.ipfinder.vm.TcpDiscoveryVmIpFinder;

public class IgniteConfigurationFactory {
    /**
     * Configure grid.
     *
     * @return Ignite configuration.
     */
    public static IgniteConfiguration createConfiguration() {
        IgniteConfiguration cfg = new IgniteConfiguration();

        cfg.setGridName("orders");
        cfg.setPeerClassLoadingEnabled(true);

        TcpDiscoverySpi discovery = new TcpDiscoverySpi();
        TcpDiscoveryVmIpFinder ipFinder = new TcpDiscoveryVmIpFinder();
        ipFinder.setAddresses(Arrays.asList("127.0.0.1:47500..47509"));
        discovery.setIpFinder(ipFinder);
        cfg.setDiscoverySpi(discovery);

        CacheConfiguration cacheOrders = new CacheConfiguration();
        cacheOrders.setName("orders");
        cacheOrders.setCacheMode(CacheMode.PARTITIONED);
        cacheOrders.setBackups(1);
        LruEvictionPolicy cacheOrdersEviction = new LruEvictionPolicy();
        cacheOrdersEviction.setMaxSize(1000);
        cacheOrders.setEvictionPolicy(cacheOrdersEviction);
        CacheJdbcPojoStoreFactory cacheOrdersStore = new CacheJdbcPojoStoreFactory();
        cacheOrdersStore.setDataSource(createDataSourceDsOrders());
        cacheOrdersStore.setDialect(new MySQLDialect());
        cacheOrders.setCacheStoreFactory(cacheOrdersStore);

        cfg.setCacheConfiguration(cacheOrders);

        return cfg;
    }

    /**
     * Create data source "dsOrders".
     *
     * @return Data source.
     */
    public static DataSource createDataSourceDsOrders() {
        MysqlDataSource dataSource = new MysqlDataSource();
        dataSource.setURL(System.getProperty("dsOrders.jdbc.url"));
        dataSource.setUser(System.getProperty("dsOrders.jdbc.username"));
        dataSource.setPassword(System.getProperty("dsOrders.jdbc.password"));
        return dataSource;
    }
}
"#);
}

#[test]
fn test_package_and_class_name() {
    let options = options()
        .with_class_name("ClusterFactory")
        .with_package("com.example.config");
    let config = ClusterConfig::from_str(r#"name = "grid""#).unwrap();
    let generator = Generator::new(&config, options);

    assert_eq!(generator.file_name(), "com/example/config/ClusterFactory.java");
    insta::assert_snapshot!(generator.render().unwrap().trim_end(), @r#"
/**
 * This configuration was generated by gridcfg (03/07/2024 09:05)
 */

package com.example.config;

import org.apache.ignite.configuration.IgniteConfiguration;

public class ClusterFactory {
    /**
     * Configure grid.
     *
     * @return Ignite configuration.
     */
    public static IgniteConfiguration createConfiguration() {
        IgniteConfiguration cfg = new IgniteConfiguration();

        cfg.setGridName("grid");

        return cfg;
    }
}
"#);
}

#[test]
fn test_rolled_back_section_leaves_no_import() {
    let java = render(
        r#"
name = "grid"

[connector]
port = 11211

[swapSpace]
maximumSparsity = 0.5
"#,
    );

    assert!(!java.contains("ConnectorConfiguration"));
    assert!(java.contains("import org.apache.ignite.spi.swapspace.file.FileSwapSpaceSpi;"));
    assert!(java.contains("swapSpaceSpi.setMaximumSparsity(0.5f);"));
    assert!(java.contains("cfg.setSwapSpaceSpi(swapSpaceSpi);"));
}

#[test]
fn test_duplicate_cache_variable_names() {
    let java = render(
        r#"
name = "grid"

[[caches]]
name = "person-cache"

[[caches]]
name = "person_cache"
"#,
    );

    assert!(java.contains("CacheConfiguration cachePersonCache = new CacheConfiguration();"));
    assert!(java.contains("CacheConfiguration cachePersonCache2 = new CacheConfiguration();"));
    assert!(java.contains("cfg.setCacheConfiguration(cachePersonCache, cachePersonCache2);"));
}

const CONFLICTING_SHORT_NAMES: &str = r#"
name = "grid"

[[caches]]
name = "orders"
cacheMode = "PARTITIONED"

[connector]
messageInterceptor = "com.example.CacheMode"
"#;

#[test]
fn test_short_name_conflict_falls_back_to_full_name() {
    let java = render(CONFLICTING_SHORT_NAMES);

    // The connector section is emitted first and claims the short name.
    assert!(java.contains("import com.example.CacheMode;"));
    assert!(!java.contains("import org.apache.ignite.cache.CacheMode;"));
    assert!(java.contains("connectorConfiguration.setMessageInterceptor(new CacheMode());"));
    assert!(java.contains(
        "cacheOrders.setCacheMode(org.apache.ignite.cache.CacheMode.PARTITIONED);"
    ));
}

#[test]
fn test_short_name_conflict_fails_strict_pass() {
    let err = render_with(
        CONFLICTING_SHORT_NAMES,
        options().with_conflict_policy(ConflictPolicy::Fail),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "reference conflict: 'CacheMode' already refers to 'com.example.CacheMode', not 'org.apache.ignite.cache.CacheMode'"
    );
}

#[test]
fn test_igfs_and_db2_data_source() {
    let java = render(
        r#"
name = "grid"

[[caches]]
name = "people"

[caches.store]
kind = "CacheJdbcBlobStoreFactory"
database = "DB2"
dataSourceBean = "dsPeople"
user = "admin"

[[igfs]]
name = "fs"

[igfs.ipcEndpoint]
type = "SHMEM"
"#,
    );

    assert!(java.contains("cachePeopleStore.setUser(\"admin\");"));
    assert!(java.contains("cachePeopleStore.setDataSource(createDataSourceDsPeople());"));
    assert!(!java.contains("setDialect"));
    assert!(java.contains("public static DataSource createDataSourceDsPeople() {"));
    assert!(java.contains("DB2DataSource dataSource = new DB2DataSource();"));
    assert!(java.contains(
        "dataSource.setDriverType(Integer.valueOf(System.getProperty(\"dsPeople.jdbc.driver_type\")));"
    ));

    assert!(java.contains("cfg.setCacheConfiguration(cachePeople, cacheFsData, cacheFsMeta);"));
    assert!(java.contains("igfsFs.setDataCacheName(\"fs-data\");"));
    assert!(java.contains("igfsFsIpc.setType(IgfsIpcEndpointType.SHMEM);"));
    assert!(java.contains("igfsFs.setIpcEndpointConfiguration(igfsFsIpc);"));
    assert!(java.contains("cfg.setFileSystemConfiguration(igfsFs);"));
}

#[test]
fn test_factory_class_name_shadowing_referenced_class() {
    let java = render_with(
        r#"name = "grid""#,
        options().with_class_name("IgniteConfiguration"),
    )
    .unwrap();

    assert!(!java.contains("import org.apache.ignite.configuration.IgniteConfiguration;"));
    insta::assert_snapshot!(java.trim_end(), @r#"
/**
 * This configuration was generated by gridcfg (03/07/2024 09:05)
 */

public class IgniteConfiguration {
    /**
     * Configure grid.
     *
     * @return Ignite configuration.
     */
    public static org.apache.ignite.configuration.IgniteConfiguration createConfiguration() {
        org.apache.ignite.configuration.IgniteConfiguration cfg = new org.apache.ignite.configuration.IgniteConfiguration();

        cfg.setGridName("grid");

        return cfg;
    }
}
"#);
}

#[test]
fn test_factory_class_name_shadowing_fails_strict_pass() {
    let err = render_with(
        r#"name = "grid""#,
        options()
            .with_class_name("IgniteConfiguration")
            .with_package("com.example")
            .with_conflict_policy(ConflictPolicy::Fail),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "reference conflict: 'IgniteConfiguration' already refers to 'com.example.IgniteConfiguration', not 'org.apache.ignite.configuration.IgniteConfiguration'"
    );
}

#[test]
fn test_invalid_class_or_package_name_is_rejected() {
    let err = render_with(r#"name = "grid""#, options().with_class_name("../../escape")).unwrap_err();
    assert_eq!(err.to_string(), "invalid class name '../../escape'");

    let err = render_with(r#"name = "grid""#, options().with_package("a..b")).unwrap_err();
    assert_eq!(err.to_string(), "invalid package name 'a..b'");
}
