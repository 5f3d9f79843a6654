//! Java factory class generator.

use std::collections::HashSet;

use eyre::{Result, eyre};
use gridcfg_codegen::{
    ConfigCodegen, DataSource, Emitter, GenerateOptions, Indent, ReferenceRegistry,
    descriptors::{
        self, CACHE_CONFIGURATION, COMMUNICATION_SPI, CONNECTOR_CONFIGURATION, ClassDescriptor,
        EVICTION_POLICIES, FieldKind, FieldSpec, IGFS_CONFIGURATION, IGFS_IPC_CONFIGURATION,
        IGNITE_CONFIGURATION, MARSHALLERS, POJO_STORE_FACTORY, SSL_CONTEXT_FACTORY,
        STORE_FACTORIES, SWAP_SPACE_SPI, TCP_DISCOVERY_SPI, TCP_DISCOVERY_VM_IP_FINDER,
        TRANSACTION_CONFIGURATION, data_source_class, data_source_properties, jdbc_dialect_class,
        resolve_java_class,
    },
};
use gridcfg_core::{capitalize, to_pascal_case};
use gridcfg_model::{CacheConfig, ClusterConfig, Discovery, IgfsConfig, Properties, StoreConfig};

use crate::literal::{quote, scalar};

const ARRAYS: &str = "java.util.Arrays";
const PROPERTIES: &str = "java.util.Properties";
const DATA_SOURCE: &str = "javax.sql.DataSource";

/// Java generator for a cluster configuration.
pub struct Generator<'a> {
    config: &'a ClusterConfig,
    options: GenerateOptions,
}

impl ConfigCodegen for Generator<'_> {
    fn format(&self) -> &'static str {
        "java"
    }

    fn file_name(&self) -> String {
        match &self.options.package {
            Some(package) => format!(
                "{}/{}.java",
                package.replace('.', "/"),
                self.options.class_name
            ),
            None => format!("{}.java", self.options.class_name),
        }
    }

    fn render(&self) -> Result<String> {
        self.render_source()
    }
}

/// Local variable names already declared in the factory method.
#[derive(Debug, Clone)]
struct Locals(HashSet<String>);

impl Locals {
    fn new() -> Self {
        Self(HashSet::from(["cfg".to_string()]))
    }

    /// Claim `base`, or `base2`, `base3`, ... if it is taken.
    fn claim(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        let mut n = 2;
        while !self.0.insert(name.clone()) {
            name = format!("{base}{n}");
            n += 1;
        }
        name
    }
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a ClusterConfig, options: GenerateOptions) -> Self {
        Self { config, options }
    }

    fn render_source(&self) -> Result<String> {
        self.options.validate_class_name()?;

        // The factory class owns its short name, so a referenced class with
        // the same name is written in full or rejected.
        let mut references = ReferenceRegistry::java(self.options.conflict_policy);
        if let Some(package) = &self.options.package {
            references.set_local_namespace(package);
        }
        references.register(&self.options.qualified_class_name())?;

        // The class is rendered first so the import section can list every
        // class it ended up referencing.
        let mut body = Emitter::with_references(Indent::FOUR_SPACES, references);
        self.factory_class(&mut body)?;

        let mut out = Emitter::java(self.options.conflict_policy);
        out.line("/**");
        out.line(&format!(" * {}", self.options.provenance.comment()));
        out.line(" */");
        out.request_blank_line();

        if let Some(package) = &self.options.package {
            out.line(&format!("package {package};"));
            out.request_blank_line();
        }

        let imports = body.render_imports();
        for import in imports.lines() {
            out.line(import);
        }
        out.request_blank_line();

        out.splice(body);

        let mut text = out.build();
        text.push('\n');
        Ok(text)
    }

    fn factory_class(&self, out: &mut Emitter) -> Result<()> {
        out.open_block(&format!("public class {} {{", self.options.class_name));
        self.create_configuration(out)?;

        let data_sources: Vec<DataSource> = out.data_sources().collect();
        for data_source in &data_sources {
            out.request_blank_line();
            data_source_method(out, data_source)?;
        }

        out.close_block("}")?;
        Ok(())
    }

    fn create_configuration(&self, out: &mut Emitter) -> Result<()> {
        let config = self.config;
        let mut locals = Locals::new();

        out.line("/**");
        out.line(" * Configure grid.");
        out.line(" *");
        out.line(" * @return Ignite configuration.");
        out.line(" */");
        let cfg_class = out.register_reference(IGNITE_CONFIGURATION.class_name)?;
        out.open_block(&format!("public static {cfg_class} createConfiguration() {{"));
        out.line(&format!("{cfg_class} cfg = new {cfg_class}();"));
        out.request_blank_line();

        let mut properties = config.properties.clone();
        properties.insert("gridName".to_string(), config.name.clone().into());
        if setters(out, &mut locals, "cfg", &IGNITE_CONFIGURATION, &properties)? {
            out.request_blank_line();
        }

        if let Some(discovery) = &config.discovery {
            discovery_spi(out, &mut locals, discovery)?;
            out.request_blank_line();
        }

        if let Some(marshaller) = &config.marshaller {
            let descriptor = descriptors::variant(MARSHALLERS, "marshaller", &marshaller.kind)?;
            let value = bean(out, &mut locals, "marshaller", descriptor, &marshaller.properties)?;
            out.line(&format!("cfg.setMarshaller({value});"));
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
                && optional_section(
                    out,
                    &mut locals,
                    "cfg",
                    property,
                    property,
                    descriptor,
                    properties,
                )?
            {
                out.request_blank_line();
            }
        }

        let caches = config.all_caches();
        if !caches.is_empty() {
            let mut names = Vec::with_capacity(caches.len());
            for cache in &caches {
                names.push(cache_configuration(out, &mut locals, cache)?);
                out.request_blank_line();
            }
            out.line(&format!("cfg.setCacheConfiguration({});", names.join(", ")));
            out.request_blank_line();
        }

        if !config.igfs.is_empty() {
            let mut names = Vec::with_capacity(config.igfs.len());
            for igfs in &config.igfs {
                names.push(file_system_configuration(out, &mut locals, igfs)?);
                out.request_blank_line();
            }
            out.line(&format!("cfg.setFileSystemConfiguration({});", names.join(", ")));
            out.request_blank_line();
        }

        out.line("return cfg;");
        out.close_block("}")?;
        Ok(())
    }
}

/// Emit a setter call on `owner` for every configured field. Returns whether
/// anything was emitted.
fn setters(
    out: &mut Emitter,
    locals: &mut Locals,
    owner: &str,
    descriptor: &ClassDescriptor,
    properties: &Properties,
) -> Result<bool> {
    let values = descriptor.values(properties);
    let emitted = !values.is_empty();
    for (field, value) in values {
        setter(out, locals, owner, field, value)?;
    }
    Ok(emitted)
}

fn setter(
    out: &mut Emitter,
    locals: &mut Locals,
    owner: &str,
    field: &FieldSpec,
    value: &toml::Value,
) -> Result<()> {
    let mut method = field.setter_name();

    let argument = match field.kind {
        FieldKind::Plain | FieldKind::Path => scalar(value)
            .ok_or_else(|| eyre!("option '{}' must be a single value", field.name))?,
        FieldKind::Raw => field.text(value)?,
        FieldKind::Float => format!("{}f", field.text(value)?),
        FieldKind::Enum(class) => {
            let class = out.register_reference(class)?;
            format!("{class}.{}", field.text(value)?)
        }
        FieldKind::Bean => {
            let class = field.text(value)?;
            format!("new {}()", out.register_reference(resolve_java_class(&class))?)
        }
        FieldKind::List => {
            let arrays = out.register_reference(ARRAYS)?;
            let items: Vec<String> = field.items(value)?.iter().map(|item| quote(item)).collect();
            format!("{arrays}.asList({})", items.join(", "))
        }
        FieldKind::DataSourceRef => {
            method = "setDataSource".to_string();
            format!("{}()", data_source_method_name(&field.text(value)?))
        }
        FieldKind::PropertiesAsList(name) => {
            let class = out.register_reference(PROPERTIES)?;
            let var = locals.claim(&format!("{owner}{}", capitalize(name)));
            out.line(&format!("{class} {var} = new {class}();"));
            for (key, value) in field.entries(value)? {
                out.line(&format!("{var}.setProperty({}, {});", quote(&key), quote(&value)));
            }
            var
        }
    };

    out.line(&format!("{owner}.{method}({argument});"));
    Ok(())
}

/// Expression for a bean of `descriptor`'s class: a constructor call when no
/// field is set, otherwise a local variable configured through setters.
fn bean(
    out: &mut Emitter,
    locals: &mut Locals,
    var: &str,
    descriptor: &ClassDescriptor,
    properties: &Properties,
) -> Result<String> {
    let class = out.register_reference(descriptor.class_name)?;
    let values = descriptor.values(properties);
    if values.is_empty() {
        return Ok(format!("new {class}()"));
    }

    let var = locals.claim(var);
    out.line(&format!("{class} {var} = new {class}();"));
    for (field, value) in values {
        setter(out, locals, &var, field, value)?;
    }
    Ok(var)
}

/// Emit a nested configuration object and hand it to `owner`, or nothing at
/// all (imports and local names included) when every configured value is a
/// default.
fn optional_section(
    out: &mut Emitter,
    locals: &mut Locals,
    owner: &str,
    property: &str,
    var: &str,
    descriptor: &ClassDescriptor,
    properties: &Properties,
) -> Result<bool> {
    let claimed = locals.clone();

    let result = out.speculative(|out| {
        let var = locals.claim(var);
        let class = out.register_reference(descriptor.class_name)?;
        out.line(&format!("{class} {var} = new {class}();"));
        let emitted = setters(out, locals, &var, descriptor, properties)?;
        out.line(&format!("{owner}.set{}({var});", capitalize(property)));
        Ok::<_, eyre::Report>(emitted)
    });

    if !matches!(result, Ok(true)) {
        *locals = claimed;
    }
    let kept = result?;
    if !kept {
        tracing::debug!(property, "dropped section without non-default values");
    }
    Ok(kept)
}

fn discovery_spi(out: &mut Emitter, locals: &mut Locals, discovery: &Discovery) -> Result<()> {
    let spi_class = out.register_reference(TCP_DISCOVERY_SPI)?;
    let finder_class = out.register_reference(TCP_DISCOVERY_VM_IP_FINDER)?;
    let spi = locals.claim("discovery");
    let finder = locals.claim("ipFinder");

    out.line(&format!("{spi_class} {spi} = new {spi_class}();"));
    out.line(&format!("{finder_class} {finder} = new {finder_class}();"));
    if !discovery.addresses.is_empty() {
        let arrays = out.register_reference(ARRAYS)?;
        let addresses: Vec<String> = discovery.addresses.iter().map(|a| quote(a)).collect();
        out.line(&format!(
            "{finder}.setAddresses({arrays}.asList({}));",
            addresses.join(", ")
        ));
    }
    out.line(&format!("{spi}.setIpFinder({finder});"));
    out.line(&format!("cfg.setDiscoverySpi({spi});"));
    Ok(())
}

/// Emit a cache configuration and return its variable name.
fn cache_configuration(
    out: &mut Emitter,
    locals: &mut Locals,
    cache: &CacheConfig,
) -> Result<String> {
    let class = out.register_reference(CACHE_CONFIGURATION.class_name)?;
    let var = locals.claim(&format!("cache{}", to_pascal_case(&cache.name)));

    let mut properties = cache.properties.clone();
    properties.insert("name".to_string(), cache.name.clone().into());

    out.line(&format!("{class} {var} = new {class}();"));
    setters(out, locals, &var, &CACHE_CONFIGURATION, &properties)?;

    if let Some(policy) = &cache.eviction_policy {
        let descriptor = descriptors::variant(EVICTION_POLICIES, "eviction policy", &policy.kind)?;
        let value = bean(
            out,
            locals,
            &format!("{var}Eviction"),
            descriptor,
            &policy.properties,
        )?;
        out.line(&format!("{var}.setEvictionPolicy({value});"));
    }

    if let Some(store) = &cache.store {
        let value = store_factory(out, locals, &var, store)?;
        out.line(&format!("{var}.setCacheStoreFactory({value});"));
    }

    Ok(var)
}

fn store_factory(
    out: &mut Emitter,
    locals: &mut Locals,
    cache_var: &str,
    store: &StoreConfig,
) -> Result<String> {
    let descriptor = descriptors::variant(STORE_FACTORIES, "store factory", &store.kind)?;

    if let (Some(bean_id), Some(database)) = (store.data_source_bean(), store.database) {
        out.register_data_source(bean_id, database)?;
    }

    let class = out.register_reference(descriptor.class_name)?;
    let var = locals.claim(&format!("{cache_var}Store"));
    out.line(&format!("{class} {var} = new {class}();"));
    setters(out, locals, &var, descriptor, &store.properties)?;

    if store.kind == POJO_STORE_FACTORY
        && let Some(database) = store.database
    {
        let dialect = out.register_reference(jdbc_dialect_class(database))?;
        out.line(&format!("{var}.setDialect(new {dialect}());"));
    }
    Ok(var)
}

/// Emit a file system configuration and return its variable name.
fn file_system_configuration(
    out: &mut Emitter,
    locals: &mut Locals,
    igfs: &IgfsConfig,
) -> Result<String> {
    let class = out.register_reference(IGFS_CONFIGURATION.class_name)?;
    let var = locals.claim(&format!("igfs{}", to_pascal_case(&igfs.name)));

    let mut properties = igfs.properties.clone();
    properties.insert("name".to_string(), igfs.name.clone().into());
    properties.insert("dataCacheName".to_string(), igfs.data_cache_name().into());
    properties.insert("metaCacheName".to_string(), igfs.meta_cache_name().into());

    out.line(&format!("{class} {var} = new {class}();"));
    setters(out, locals, &var, &IGFS_CONFIGURATION, &properties)?;

    if let Some(endpoint) = &igfs.ipc_endpoint {
        optional_section(
            out,
            locals,
            &var,
            "ipcEndpointConfiguration",
            &format!("{var}Ipc"),
            &IGFS_IPC_CONFIGURATION,
            endpoint,
        )?;
    }
    Ok(var)
}

/// Name of the factory method creating the data source `bean_id`.
fn data_source_method_name(bean_id: &str) -> String {
    format!("createDataSource{}", to_pascal_case(bean_id))
}

/// Emit a factory method for a data source whose connection settings are
/// read from system properties named `<bean id>.jdbc.*`.
fn data_source_method(out: &mut Emitter, data_source: &DataSource) -> Result<()> {
    let bean_id = &data_source.bean_id;
    let interface = out.register_reference(DATA_SOURCE)?;
    let class = out.register_reference(data_source_class(data_source.database))?;

    out.line("/**");
    out.line(&format!(" * Create data source \"{bean_id}\"."));
    out.line(" *");
    out.line(" * @return Data source.");
    out.line(" */");
    out.open_block(&format!(
        "public static {interface} {}() {{",
        data_source_method_name(bean_id)
    ));
    out.line(&format!("{class} dataSource = new {class}();"));
    for property in data_source_properties(data_source.database) {
        let lookup = format!(
            "System.getProperty({})",
            quote(&format!("{bean_id}.{}", property.key))
        );
        let argument = if property.numeric {
            format!("Integer.valueOf({lookup})")
        } else {
            lookup
        };
        out.line(&format!(
            "dataSource.set{}({argument});",
            capitalize(property.name)
        ));
    }
    out.line("return dataSource;");
    out.close_block("}")?;
    Ok(())
}
