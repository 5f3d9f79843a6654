//! Snapshot tests for XML generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use chrono::NaiveDate;
use gridcfg_codegen::GenerateOptions;
use gridcfg_core::Provenance;
use gridcfg_model::ClusterConfig;
use gridcfg_xml::{ConfigCodegen, FILE_NAME, Generator};

fn options() -> GenerateOptions {
    let generated_at = NaiveDate::from_ymd_opt(2024, 3, 7)
        .and_then(|date| date.and_hms_opt(9, 5, 0))
        .expect("valid timestamp");
    GenerateOptions::new(Provenance::new("gridcfg", generated_at))
}

fn render(config_toml: &str) -> String {
    let config = ClusterConfig::from_str(config_toml).expect("Failed to parse configuration");
    Generator::new(&config, options())
        .render()
        .expect("Failed to render")
}

#[test]
fn test_cluster_with_store() {
    let xml = render(
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

    assert!(xml.ends_with("</beans>\n"));
    insta::assert_snapshot!(xml.trim_end(), @r#"
<?xml version="1.0" encoding="UTF-8"?>

<!-- This configuration was generated by gridcfg (03/07/2024 09:05) -->

<beans xmlns="http://www.springframework.org/schema/beans"
       xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
       xmlns:util="http://www.springframework.org/schema/util"
       xsi:schemaLocation="http://www.springframework.org/schema/beans
                           http://www.springframework.org/schema/beans/spring-beans.xsd
                           http://www.springframework.org/schema/util
                           http://www.springframework.org/schema/util/spring-util.xsd">
    <bean id="dsOrders" class="com.mysql.jdbc.jdbc2.optional.MysqlDataSource">
        <property name="URL" value="${dsOrders.jdbc.url}"/>
        <property name="user" value="${dsOrders.jdbc.username}"/>
        <property name="password" value="${dsOrders.jdbc.password}"/>
    </bean>

    <bean class="org.apache.ignite.configuration.IgniteConfiguration">
        <property name="gridName" value="orders"/>
        <property name="peerClassLoadingEnabled" value="true"/>

        <property name="discoverySpi">
            <bean class="org.apache.ignite.spi.discovery.tcp.TcpDiscoverySpi">
                <property name="ipFinder">
                    <bean class="org.apache.ignite.spi.discovery.tcp.ipfinder.vm.TcpDiscoveryVmIpFinder">
                        <property name="addresses">
                            <list>
                                <value>127.0.0.1:47500..47509</value>
                            </list>
                        </property>
                    </bean>
                </property>
            </bean>
        </property>

        <property name="cacheConfiguration">
            <list>
                <bean class="org.apache.ignite.configuration.CacheConfiguration">
                    <property name="name" value="orders"/>
                    <property name="cacheMode">
                        <util:constant static-field="org.apache.ignite.cache.CacheMode.PARTITIONED"/>
                    </property>
                    <property name="backups" value="1"/>
                    <property name="evictionPolicy">
                        <bean class="org.apache.ignite.cache.eviction.lru.LruEvictionPolicy">
                            <property name="maxSize" value="1000"/>
                        </bean>
                    </property>
                    <property name="cacheStoreFactory">
                        <bean class="org.apache.ignite.cache.store.jdbc.CacheJdbcPojoStoreFactory">
                            <property name="dataSourceBean" value="dsOrders"/>
                            <property name="dialect">
                                <bean class="org.apache.ignite.cache.store.jdbc.dialect.MySQLDialect"/>
                            </property>
                        </bean>
                    </property>
                </bean>
            </list>
        </property>
    </bean>
</beans>
"#);
}

#[test]
fn test_minimal_cluster() {
    let xml = render(r#"name = "minimal""#);

    insta::assert_snapshot!(xml.trim_end(), @r#"
<?xml version="1.0" encoding="UTF-8"?>

<!-- This configuration was generated by gridcfg (03/07/2024 09:05) -->

<beans xmlns="http://www.springframework.org/schema/beans"
       xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
       xmlns:util="http://www.springframework.org/schema/util"
       xsi:schemaLocation="http://www.springframework.org/schema/beans
                           http://www.springframework.org/schema/beans/spring-beans.xsd
                           http://www.springframework.org/schema/util
                           http://www.springframework.org/schema/util/spring-util.xsd">
    <bean class="org.apache.ignite.configuration.IgniteConfiguration">
        <property name="gridName" value="minimal"/>
    </bean>
</beans>
"#);
}

#[test]
fn test_default_only_sections_are_dropped() {
    let xml = render(
        r#"
name = "grid"

[transaction]
defaultTxConcurrency = "PESSIMISTIC"
transactionIsolation = "REPEATABLE_READ"

[connector]
port = 11211
portRange = 100

[communication]
localPort = 47100
"#,
    );

    assert!(xml.contains(r#"<property name="transactionConfiguration">"#));
    assert!(xml.contains(r#"<property name="defaultTxIsolation">"#));
    assert!(xml.contains(
        "org.apache.ignite.transactions.TransactionIsolation.REPEATABLE_READ"
    ));
    assert!(!xml.contains("connectorConfiguration"));
    assert!(!xml.contains("communicationSpi"));
    assert!(!xml.contains("\n\n\n"));
}

#[test]
fn test_igfs_companion_caches() {
    let xml = render(
        r#"
name = "grid"

[[igfs]]
name = "igfs"
blockSize = 131072

[igfs.ipcEndpoint]
type = "TCP"
port = 10500
"#,
    );

    assert!(xml.contains(r#"<property name="name" value="igfs-data"/>"#));
    assert!(xml.contains(r#"<property name="name" value="igfs-meta"/>"#));
    assert!(xml.contains("org.apache.ignite.cache.CacheMode.REPLICATED"));
    assert!(xml.contains(r#"<property name="dataCacheName" value="igfs-data"/>"#));
    assert!(xml.contains(r#"<property name="blockSize" value="131072"/>"#));
    assert!(xml.contains("org.apache.ignite.igfs.IgfsIpcEndpointType.TCP"));
    // port is at its default
    assert!(!xml.contains(r#"value="10500""#));
}

#[test]
fn test_variant_without_fields_is_self_closing() {
    let xml = render(
        r#"
name = "grid"

[marshaller]
kind = "JdkMarshaller"
"#,
    );

    assert!(xml.contains(
        r#"<bean class="org.apache.ignite.marshaller.jdk.JdkMarshaller"/>"#
    ));
}

#[test]
fn test_hibernate_properties() {
    let xml = render(
        r#"
name = "grid"

[[caches]]
name = "people"

[caches.store]
kind = "CacheHibernateBlobStoreFactory"

[caches.store.hibernateProperties]
"hibernate.dialect" = "org.hibernate.dialect.H2Dialect"
"hibernate.show_sql" = true
"#,
    );

    assert!(xml.contains(
        r#"<prop key="hibernate.dialect">org.hibernate.dialect.H2Dialect</prop>"#
    ));
    assert!(xml.contains(r#"<prop key="hibernate.show_sql">true</prop>"#));
    // no data source is declared without a dataSourceBean
    assert!(!xml.contains("<bean id="));
}

#[test]
fn test_unknown_marshaller_fails_the_pass() {
    let config = ClusterConfig::from_str(
        r#"
name = "grid"

[marshaller]
kind = "KryoMarshaller"
"#,
    )
    .unwrap();

    let err = Generator::new(&config, options()).render().unwrap_err();
    assert!(err.to_string().contains("unknown marshaller 'KryoMarshaller'"));
}

#[test]
fn test_preview_file() {
    let config = ClusterConfig::from_str(r#"name = "grid""#).unwrap();
    let generator = Generator::new(&config, options());

    let preview = generator.preview().unwrap();
    assert_eq!(generator.format(), "xml");
    assert_eq!(preview.path, FILE_NAME);
    assert!(preview.content.contains(r#"<property name="gridName" value="grid"/>"#));
}
