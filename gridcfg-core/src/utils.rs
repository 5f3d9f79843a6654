//! Shared string utilities for code generation.

/// Convert a configuration name to PascalCase, treating any non-alphanumeric
/// character as a word break (e.g., "person-cache" -> "PersonCache").
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .map(capitalize)
        .collect()
}

/// Upper-case the first character (e.g., "maxSize" -> "MaxSize").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Check whether a name can be used verbatim as a Java identifier and XML id.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Convert a TOML scalar to its textual form. Arrays and tables yield an
/// empty string.
pub fn toml_value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(d) => d.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("persons"), "Persons");
        assert_eq!(to_pascal_case("person-cache"), "PersonCache");
        assert_eq!(to_pascal_case("igfs_data.v2"), "IgfsDataV2");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("maxSize"), "MaxSize");
        assert_eq!(capitalize("URL"), "URL");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("dsMySQL"));
        assert!(is_identifier("_ds1"));
        assert!(!is_identifier("1ds"));
        assert!(!is_identifier("ds-mysql"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_toml_value_to_string() {
        assert_eq!(
            toml_value_to_string(&toml::Value::String("hello".to_string())),
            "hello"
        );
        assert_eq!(toml_value_to_string(&toml::Value::Integer(42)), "42");
        assert_eq!(toml_value_to_string(&toml::Value::Float(0.5)), "0.5");
        assert_eq!(toml_value_to_string(&toml::Value::Boolean(true)), "true");
        assert_eq!(toml_value_to_string(&toml::Value::Array(vec![])), "");
    }
}
