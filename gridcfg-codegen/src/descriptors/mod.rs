//! Static descriptions of the configuration classes a generator can emit.
//!
//! A [`ClassDescriptor`] names the target class and lists the fields the
//! generators know how to render, together with a rendering hint
//! ([`FieldKind`]) and the class default. Values equal to the default are
//! never emitted.

mod builtins;
mod jdbc;
mod tables;

pub use builtins::{JAVA_BUILTIN_CLASSES, resolve_java_class};
pub use jdbc::{
    DataSourceProperty, data_source_class, data_source_class_name, data_source_properties,
    jdbc_dialect_class, jdbc_dialect_class_name,
};
pub use tables::*;

use std::collections::BTreeMap;

use eyre::{Result, bail};
use gridcfg_core::{capitalize, toml_value_to_string};

/// How a field value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Scalar written as a literal.
    Plain,
    /// Constant of the given enum class.
    Enum(&'static str),
    /// File system path.
    Path,
    /// Written verbatim, without quoting.
    Raw,
    /// Floating point number.
    Float,
    /// Fully-qualified class name instantiated with its default constructor.
    Bean,
    /// List of strings.
    List,
    /// Id of a data source bean declared by the generated configuration.
    DataSourceRef,
    /// Table of string properties, bound to a local variable with the given
    /// name in host-language output.
    PropertiesAsList(&'static str),
}

/// Class default of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(&'static str),
}

impl DefaultValue {
    /// Check whether a configured value equals this default.
    pub fn matches(&self, value: &toml::Value) -> bool {
        match (self, value) {
            (DefaultValue::Int(d), toml::Value::Integer(v)) => d == v,
            (DefaultValue::Float(d), toml::Value::Float(v)) => d == v,
            (DefaultValue::Float(d), toml::Value::Integer(v)) => *d == *v as f64,
            (DefaultValue::Bool(d), toml::Value::Boolean(v)) => d == v,
            (DefaultValue::Str(d), toml::Value::String(v)) => d == v,
            _ => false,
        }
    }
}

/// One configurable field of a class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Option name as it appears in the configuration model.
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: Option<DefaultValue>,
    /// Property name on the target class when it differs from `name`.
    pub setter: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
            setter: None,
        }
    }

    pub const fn plain(name: &'static str) -> Self {
        Self::new(name, FieldKind::Plain)
    }

    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn with_setter(mut self, setter: &'static str) -> Self {
        self.setter = Some(setter);
        self
    }

    /// Bean property name on the target class.
    pub fn property_name(&self) -> &'static str {
        self.setter.unwrap_or(self.name)
    }

    /// Java setter method name (e.g. `setMaxSize`).
    pub fn setter_name(&self) -> String {
        format!("set{}", capitalize(self.property_name()))
    }

    /// Check whether `value` equals the class default and can be omitted.
    pub fn is_default(&self, value: &toml::Value) -> bool {
        self.default.is_some_and(|default| default.matches(value))
    }

    /// Text of a scalar value.
    pub fn text(&self, value: &toml::Value) -> Result<String> {
        match value {
            toml::Value::Array(_) | toml::Value::Table(_) => {
                bail!("option '{}' must be a single value", self.name)
            }
            value => Ok(toml_value_to_string(value)),
        }
    }

    /// Items of a list value. A scalar is a one-element list.
    pub fn items(&self, value: &toml::Value) -> Result<Vec<String>> {
        match value {
            toml::Value::Array(items) => items.iter().map(|item| self.text(item)).collect(),
            value => Ok(vec![self.text(value)?]),
        }
    }

    /// Key and value text of a table value, in key order.
    pub fn entries(&self, value: &toml::Value) -> Result<Vec<(String, String)>> {
        let Some(table) = value.as_table() else {
            bail!("option '{}' must be a table", self.name);
        };
        table
            .iter()
            .map(|(key, value)| Ok((key.clone(), self.text(value)?)))
            .collect()
    }
}

/// A configuration class and the fields generators render for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassDescriptor {
    pub class_name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ClassDescriptor {
    /// Look up a field by option name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Configured values to emit, in field order.
    ///
    /// Values equal to the class default are left out. Options the class
    /// does not know are logged and skipped.
    pub fn values<'v>(
        &self,
        properties: &'v BTreeMap<String, toml::Value>,
    ) -> Vec<(&'static FieldSpec, &'v toml::Value)> {
        for name in properties.keys() {
            if self.field(name).is_none() {
                tracing::warn!(
                    option = %name,
                    class = self.short_name(),
                    "unknown option skipped"
                );
            }
        }

        self.fields
            .iter()
            .filter_map(|field| {
                properties
                    .get(field.name)
                    .filter(|value| !field.is_default(value))
                    .map(|value| (field, value))
            })
            .collect()
    }

    /// Class name without its package.
    pub fn short_name(&self) -> &'static str {
        self.class_name
            .rsplit_once('.')
            .map_or(self.class_name, |(_, short)| short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches() {
        assert!(DefaultValue::Int(11211).matches(&toml::Value::Integer(11211)));
        assert!(!DefaultValue::Int(11211).matches(&toml::Value::Integer(11212)));
        assert!(DefaultValue::Float(1.0).matches(&toml::Value::Integer(1)));
        assert!(DefaultValue::Bool(false).matches(&toml::Value::Boolean(false)));
        assert!(DefaultValue::Str("127.0.0.1").matches(&toml::Value::String("127.0.0.1".into())));
        assert!(!DefaultValue::Bool(false).matches(&toml::Value::String("false".into())));
    }

    #[test]
    fn test_setter_name() {
        let field = FieldSpec::plain("maxSize");
        assert_eq!(field.setter_name(), "setMaxSize");
        assert_eq!(field.property_name(), "maxSize");

        let renamed = FieldSpec::plain("transactionIsolation").with_setter("defaultTxIsolation");
        assert_eq!(renamed.setter_name(), "setDefaultTxIsolation");
        assert_eq!(renamed.property_name(), "defaultTxIsolation");
    }

    #[test]
    fn test_field_without_default_is_always_emitted() {
        let field = FieldSpec::plain("batchSize");
        assert!(!field.is_default(&toml::Value::Integer(0)));
    }

    #[test]
    fn test_value_text() {
        let field = FieldSpec::new("trustManagers", FieldKind::List);
        assert_eq!(field.text(&toml::Value::Integer(3)).unwrap(), "3");
        assert!(field.text(&toml::Value::Array(vec![])).is_err());
        assert_eq!(
            field.items(&toml::Value::String("a".into())).unwrap(),
            vec!["a".to_string()]
        );

        let table = toml::Value::Table(
            toml::from_str::<toml::Table>("dialect = \"H2\"\nshow_sql = true").unwrap(),
        );
        assert_eq!(
            field.entries(&table).unwrap(),
            vec![
                ("dialect".to_string(), "H2".to_string()),
                ("show_sql".to_string(), "true".to_string()),
            ]
        );
        assert!(field.entries(&toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_values_skip_defaults_and_unknown_options() {
        let mut properties = BTreeMap::new();
        properties.insert("port".to_string(), toml::Value::Integer(11211));
        properties.insert("host".to_string(), toml::Value::String("0.0.0.0".into()));
        properties.insert("idleTimeout".to_string(), toml::Value::Integer(9000));
        properties.insert("bogus".to_string(), toml::Value::Boolean(true));

        let names: Vec<&str> = CONNECTOR_CONFIGURATION
            .values(&properties)
            .into_iter()
            .map(|(field, _)| field.name)
            .collect();
        assert_eq!(names, vec!["host", "idleTimeout"]);
    }

    #[test]
    fn test_descriptor_lookup() {
        let lru = eviction_policy("LRU").unwrap();
        assert_eq!(lru.short_name(), "LruEvictionPolicy");
        assert!(lru.field("maxSize").is_some());
        assert!(lru.field("unknown").is_none());
    }
}
