//! Spring XML generator.

use eyre::Result;
use gridcfg_codegen::{
    ConfigCodegen, Emitter, GenerateOptions, Indent,
    descriptors::{
        self, CACHE_CONFIGURATION, COMMUNICATION_SPI, CONNECTOR_CONFIGURATION, ClassDescriptor,
        EVICTION_POLICIES, FieldKind, FieldSpec, IGFS_CONFIGURATION, IGFS_IPC_CONFIGURATION,
        IGNITE_CONFIGURATION, MARSHALLERS, POJO_STORE_FACTORY, SSL_CONTEXT_FACTORY,
        STORE_FACTORIES, SWAP_SPACE_SPI, TCP_DISCOVERY_SPI, TCP_DISCOVERY_VM_IP_FINDER,
        TRANSACTION_CONFIGURATION, data_source_class, data_source_properties, jdbc_dialect_class,
        resolve_java_class,
    },
};
use gridcfg_core::Database;
use gridcfg_model::{CacheConfig, ClusterConfig, Discovery, IgfsConfig, Properties, StoreConfig};

use crate::escape_xml;

/// Name of the generated document.
pub const FILE_NAME: &str = "ignite-configuration.xml";

const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

const BEANS_NAMESPACES: &[&str] = &[
    r#"<beans xmlns="http://www.springframework.org/schema/beans""#,
    r#"       xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#,
    r#"       xmlns:util="http://www.springframework.org/schema/util""#,
    r#"       xsi:schemaLocation="http://www.springframework.org/schema/beans"#,
    r#"                           http://www.springframework.org/schema/beans/spring-beans.xsd"#,
    r#"                           http://www.springframework.org/schema/util"#,
];

const BEANS_OPEN: &str =
    r#"                           http://www.springframework.org/schema/util/spring-util.xsd">"#;

/// Spring XML generator for a cluster configuration.
pub struct Generator<'a> {
    config: &'a ClusterConfig,
    options: GenerateOptions,
}

impl ConfigCodegen for Generator<'_> {
    fn format(&self) -> &'static str {
        "xml"
    }

    fn file_name(&self) -> String {
        FILE_NAME.to_string()
    }

    fn render(&self) -> Result<String> {
        self.render_document()
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a ClusterConfig, options: GenerateOptions) -> Self {
        Self { config, options }
    }

    fn render_document(&self) -> Result<String> {
        // The grid bean is rendered first: it registers the data sources
        // that have to be declared ahead of it.
        let mut body = Emitter::with_depth(Indent::FOUR_SPACES, 1);
        self.grid_bean(&mut body)?;

        let mut out = Emitter::xml();
        out.line(PROLOG);
        out.request_blank_line();
        out.line(&format!("<!-- {} -->", self.options.provenance.comment()));
        out.request_blank_line();

        for line in BEANS_NAMESPACES {
            out.line(line);
        }
        out.open_block(BEANS_OPEN);

        for data_source in body.data_sources() {
            data_source_bean(&mut out, &data_source.bean_id, data_source.database)?;
            out.request_blank_line();
        }

        tracing::debug!(lines = body.lines().len(), "splicing grid configuration bean");
        out.splice(body);
        out.close_block("</beans>")?;

        let mut text = out.build();
        text.push('\n');
        Ok(text)
    }

    fn grid_bean(&self, out: &mut Emitter) -> Result<()> {
        let config = self.config;

        let mut properties = config.properties.clone();
        properties.insert("gridName".to_string(), config.name.clone().into());

        out.open_block(&format!(
            r#"<bean class="{}">"#,
            IGNITE_CONFIGURATION.class_name
        ));
        for (field, value) in IGNITE_CONFIGURATION.values(&properties) {
            field_property(out, field, value)?;
        }
        out.request_blank_line();

        if let Some(discovery) = &config.discovery {
            discovery_spi(out, discovery)?;
            out.request_blank_line();
        }

        if let Some(marshaller) = &config.marshaller {
            let descriptor = descriptors::variant(MARSHALLERS, "marshaller", &marshaller.kind)?;
            property_bean(out, "marshaller", descriptor, &marshaller.properties)?;
            out.request_blank_line();
        }

        let sections = [
            ("transactionConfiguration", &TRANSACTION_CONFIGURATION, &config.transaction),
            ("connectorConfiguration", &CONNECTOR_CONFIGURATION, &config.connector),
            ("communicationSpi", &COMMUNICATION_SPI, &config.communication),
            ("swapSpaceSpi", &SWAP_SPACE_SPI, &config.swap_space),
            ("sslContextFactory", &SSL_CONTEXT_FACTORY, &config.ssl),
        ];
        for (property, descriptor, section) in sections {
            if let Some(properties) = section
                && optional_section(out, property, descriptor, properties)?
            {
                out.request_blank_line();
            }
        }

        let caches = config.all_caches();
        if !caches.is_empty() {
            out.open_block(r#"<property name="cacheConfiguration">"#);
            out.open_block("<list>");
            for cache in &caches {
                cache_bean(out, cache)?;
                out.request_blank_line();
            }
            out.close_block("</list>")?;
            out.close_block("</property>")?;
            out.request_blank_line();
        }

        if !config.igfs.is_empty() {
            out.open_block(r#"<property name="fileSystemConfiguration">"#);
            out.open_block("<list>");
            for igfs in &config.igfs {
                igfs_bean(out, igfs)?;
                out.request_blank_line();
            }
            out.close_block("</list>")?;
            out.close_block("</property>")?;
        }

        out.close_block("</bean>")?;
        Ok(())
    }
}

/// Emit one `<property>` element for a configured field.
fn field_property(out: &mut Emitter, field: &FieldSpec, value: &toml::Value) -> Result<()> {
    let name = field.property_name();

    match field.kind {
        FieldKind::Plain
        | FieldKind::Path
        | FieldKind::Raw
        | FieldKind::Float
        | FieldKind::DataSourceRef => {
            out.line(&format!(
                r#"<property name="{name}" value="{}"/>"#,
                escape_xml(&field.text(value)?)
            ));
        }
        FieldKind::Enum(class) => {
            out.open_block(&format!(r#"<property name="{name}">"#));
            out.line(&format!(
                r#"<util:constant static-field="{class}.{}"/>"#,
                field.text(value)?
            ));
            out.close_block("</property>")?;
        }
        FieldKind::Bean => {
            out.open_block(&format!(r#"<property name="{name}">"#));
            let class = field.text(value)?;
            out.line(&format!(r#"<bean class="{}"/>"#, resolve_java_class(&class)));
            out.close_block("</property>")?;
        }
        FieldKind::List => {
            out.open_block(&format!(r#"<property name="{name}">"#));
            out.open_block("<list>");
            for item in field.items(value)? {
                out.line(&format!("<value>{}</value>", escape_xml(&item)));
            }
            out.close_block("</list>")?;
            out.close_block("</property>")?;
        }
        FieldKind::PropertiesAsList(_) => {
            out.open_block(&format!(r#"<property name="{name}">"#));
            out.open_block("<props>");
            for (key, value) in field.entries(value)? {
                out.line(&format!(
                    r#"<prop key="{}">{}</prop>"#,
                    escape_xml(&key),
                    escape_xml(&value)
                ));
            }
            out.close_block("</props>")?;
            out.close_block("</property>")?;
        }
    }
    Ok(())
}

/// Emit a bean of `descriptor`'s class, self-closing when no field is set.
fn bean(out: &mut Emitter, descriptor: &ClassDescriptor, properties: &Properties) -> Result<()> {
    let values = descriptor.values(properties);
    if values.is_empty() {
        out.line(&format!(r#"<bean class="{}"/>"#, descriptor.class_name));
        return Ok(());
    }

    out.open_block(&format!(r#"<bean class="{}">"#, descriptor.class_name));
    for (field, value) in values {
        field_property(out, field, value)?;
    }
    out.close_block("</bean>")?;
    Ok(())
}

fn property_bean(
    out: &mut Emitter,
    property: &str,
    descriptor: &ClassDescriptor,
    properties: &Properties,
) -> Result<()> {
    out.open_block(&format!(r#"<property name="{property}">"#));
    bean(out, descriptor, properties)?;
    out.close_block("</property>")?;
    Ok(())
}

/// Emit a nested configuration bean, or nothing at all when every configured
/// value is a default. Returns whether the section was kept.
fn optional_section(
    out: &mut Emitter,
    property: &str,
    descriptor: &ClassDescriptor,
    properties: &Properties,
) -> Result<bool> {
    let kept = out.speculative(|out| {
        out.open_block(&format!(r#"<property name="{property}">"#));
        out.open_block(&format!(r#"<bean class="{}">"#, descriptor.class_name));

        let mut emitted = false;
        for (field, value) in descriptor.values(properties) {
            field_property(out, field, value)?;
            emitted = true;
        }

        out.close_block("</bean>")?;
        out.close_block("</property>")?;
        Ok::<_, eyre::Report>(emitted)
    })?;

    if !kept {
        tracing::debug!(property, "dropped section without non-default values");
    }
    Ok(kept)
}

fn discovery_spi(out: &mut Emitter, discovery: &Discovery) -> Result<()> {
    out.open_block(r#"<property name="discoverySpi">"#);
    out.open_block(&format!(r#"<bean class="{TCP_DISCOVERY_SPI}">"#));
    out.open_block(r#"<property name="ipFinder">"#);

    if discovery.addresses.is_empty() {
        out.line(&format!(r#"<bean class="{TCP_DISCOVERY_VM_IP_FINDER}"/>"#));
    } else {
        out.open_block(&format!(r#"<bean class="{TCP_DISCOVERY_VM_IP_FINDER}">"#));
        out.open_block(r#"<property name="addresses">"#);
        out.open_block("<list>");
        for address in &discovery.addresses {
            out.line(&format!("<value>{}</value>", escape_xml(address)));
        }
        out.close_block("</list>")?;
        out.close_block("</property>")?;
        out.close_block("</bean>")?;
    }

    out.close_block("</property>")?;
    out.close_block("</bean>")?;
    out.close_block("</property>")?;
    Ok(())
}

fn cache_bean(out: &mut Emitter, cache: &CacheConfig) -> Result<()> {
    let mut properties = cache.properties.clone();
    properties.insert("name".to_string(), cache.name.clone().into());

    out.open_block(&format!(
        r#"<bean class="{}">"#,
        CACHE_CONFIGURATION.class_name
    ));
    for (field, value) in CACHE_CONFIGURATION.values(&properties) {
        field_property(out, field, value)?;
    }

    if let Some(policy) = &cache.eviction_policy {
        let descriptor = descriptors::variant(EVICTION_POLICIES, "eviction policy", &policy.kind)?;
        property_bean(out, "evictionPolicy", descriptor, &policy.properties)?;
    }

    if let Some(store) = &cache.store {
        store_factory(out, store)?;
    }

    out.close_block("</bean>")?;
    Ok(())
}

fn store_factory(out: &mut Emitter, store: &StoreConfig) -> Result<()> {
    let descriptor = descriptors::variant(STORE_FACTORIES, "store factory", &store.kind)?;

    if let (Some(bean_id), Some(database)) = (store.data_source_bean(), store.database) {
        out.register_data_source(bean_id, database)?;
    }

    out.open_block(r#"<property name="cacheStoreFactory">"#);
    out.open_block(&format!(r#"<bean class="{}">"#, descriptor.class_name));
    for (field, value) in descriptor.values(&store.properties) {
        field_property(out, field, value)?;
    }
    if store.kind == POJO_STORE_FACTORY
        && let Some(database) = store.database
    {
        out.open_block(r#"<property name="dialect">"#);
        out.line(&format!(r#"<bean class="{}"/>"#, jdbc_dialect_class(database)));
        out.close_block("</property>")?;
    }
    out.close_block("</bean>")?;
    out.close_block("</property>")?;
    Ok(())
}

fn igfs_bean(out: &mut Emitter, igfs: &IgfsConfig) -> Result<()> {
    let mut properties = igfs.properties.clone();
    properties.insert("name".to_string(), igfs.name.clone().into());
    properties.insert("dataCacheName".to_string(), igfs.data_cache_name().into());
    properties.insert("metaCacheName".to_string(), igfs.meta_cache_name().into());

    out.open_block(&format!(
        r#"<bean class="{}">"#,
        IGFS_CONFIGURATION.class_name
    ));
    for (field, value) in IGFS_CONFIGURATION.values(&properties) {
        field_property(out, field, value)?;
    }
    if let Some(endpoint) = &igfs.ipc_endpoint {
        optional_section(
            out,
            "ipcEndpointConfiguration",
            &IGFS_IPC_CONFIGURATION,
            endpoint,
        )?;
    }
    out.close_block("</bean>")?;
    Ok(())
}

/// Emit a data source bean whose connection settings are resolved from
/// `${<bean id>.jdbc.*}` placeholders.
fn data_source_bean(out: &mut Emitter, bean_id: &str, database: Database) -> Result<()> {
    out.open_block(&format!(
        r#"<bean id="{}" class="{}">"#,
        escape_xml(bean_id),
        data_source_class(database)
    ));
    for property in data_source_properties(database) {
        out.line(&format!(
            r#"<property name="{}" value="${{{bean_id}.{}}}"/>"#,
            property.name, property.key
        ));
    }
    out.close_block("</bean>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_property_kinds() {
        let mut out = Emitter::xml();
        let enum_field = FieldSpec::new("cacheMode", FieldKind::Enum("org.apache.ignite.cache.CacheMode"));
        field_property(&mut out, &enum_field, &"PARTITIONED".into()).unwrap();

        let list_field = FieldSpec::new("trustManagers", FieldKind::List);
        field_property(
            &mut out,
            &list_field,
            &toml::Value::Array(vec!["a".into(), "b&c".into()]),
        )
        .unwrap();

        assert_eq!(
            out.build(),
            r#"<property name="cacheMode">
    <util:constant static-field="org.apache.ignite.cache.CacheMode.PARTITIONED"/>
</property>
<property name="trustManagers">
    <list>
        <value>a</value>
        <value>b&amp;c</value>
    </list>
</property>"#
        );
    }

    #[test]
    fn test_optional_section_rolls_back_defaults() {
        let mut out = Emitter::xml();
        let mut properties = Properties::new();
        properties.insert("port".to_string(), toml::Value::Integer(11211));

        let kept = optional_section(
            &mut out,
            "connectorConfiguration",
            &CONNECTOR_CONFIGURATION,
            &properties,
        )
        .unwrap();

        assert!(!kept);
        assert!(out.is_empty());
        assert_eq!(out.depth(), 0);
    }

    #[test]
    fn test_data_source_placeholders() {
        let mut out = Emitter::xml();
        data_source_bean(&mut out, "dsPeople", Database::PostgreSQL).unwrap();
        assert_eq!(
            out.build(),
            r#"<bean id="dsPeople" class="org.postgresql.ds.PGPoolingDataSource">
    <property name="url" value="${dsPeople.jdbc.url}"/>
    <property name="user" value="${dsPeople.jdbc.username}"/>
    <property name="password" value="${dsPeople.jdbc.password}"/>
</bean>"#
        );
    }
}
