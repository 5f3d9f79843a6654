/// Short names of well-known Java value classes and the class they stand for.
pub const JAVA_BUILTIN_CLASSES: &[(&str, &str)] = &[
    ("BigDecimal", "java.math.BigDecimal"),
    ("Boolean", "java.lang.Boolean"),
    ("Byte", "java.lang.Byte"),
    ("Date", "java.sql.Date"),
    ("Double", "java.lang.Double"),
    ("Float", "java.lang.Float"),
    ("Integer", "java.lang.Integer"),
    ("Long", "java.lang.Long"),
    ("Short", "java.lang.Short"),
    ("String", "java.lang.String"),
    ("Time", "java.sql.Time"),
    ("Timestamp", "java.sql.Timestamp"),
    ("UUID", "java.util.UUID"),
];

/// Expand a built-in short class name to its fully-qualified form. Any other
/// name is returned unchanged.
pub fn resolve_java_class(name: &str) -> &str {
    JAVA_BUILTIN_CLASSES
        .iter()
        .find(|(short, _)| *short == name)
        .map_or(name, |(_, full)| full)
}
