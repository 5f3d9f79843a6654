//! Java literals.

/// Escape text for use inside a Java string literal.
pub fn escape_java(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// A Java string literal.
pub fn quote(text: &str) -> String {
    format!("\"{}\"", escape_java(text))
}

/// Java literal for a scalar option value.
///
/// Integers outside the `int` range get an `L` suffix; date-times are
/// written as strings.
pub(crate) fn scalar(value: &toml::Value) -> Option<String> {
    Some(match value {
        toml::Value::String(s) => quote(s),
        toml::Value::Integer(i) if i32::try_from(*i).is_ok() => i.to_string(),
        toml::Value::Integer(i) => format!("{i}L"),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(d) => quote(&d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => return None,
    })
}
