//! Import/reference registry.

use indexmap::IndexMap;

use super::{EmitError, Result};

/// What to do when a second fully-qualified name claims a short name that is
/// already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Keep the first mapping and hand the caller the fully-qualified name to
    /// write in the body instead.
    #[default]
    FallbackToFullName,
    /// Abort with [`EmitError::ReferenceConflict`].
    Fail,
}

/// How fully-qualified names are split and how import statements look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSyntax {
    /// Separator between namespace segments.
    pub separator: char,
    /// Text before the fully-qualified name in an import statement.
    pub prefix: &'static str,
    /// Text after the fully-qualified name in an import statement.
    pub suffix: &'static str,
    /// Namespaces whose direct members never need an import.
    pub implicit_namespaces: &'static [&'static str],
}

impl ImportSyntax {
    /// `import a.b.C;`, with `java.lang` imported implicitly.
    pub const JAVA: Self = Self {
        separator: '.',
        prefix: "import ",
        suffix: ";",
        implicit_namespaces: &["java.lang"],
    };

    /// Split a name into its namespace and short name. A name with no
    /// separator (or only a leading one) is unscoped.
    fn split<'a>(&self, full_name: &'a str) -> (Option<&'a str>, &'a str) {
        match full_name.rsplit_once(self.separator) {
            Some((namespace, short)) if !namespace.is_empty() => (Some(namespace), short),
            _ => (None, full_name),
        }
    }

    /// The trailing segment of `full_name`, or the whole name if unscoped.
    pub fn short_name<'a>(&self, full_name: &'a str) -> &'a str {
        self.split(full_name).1
    }

    /// True when `full_name` is a direct member of an implicit namespace.
    pub fn is_implicit(&self, full_name: &str) -> bool {
        self.split(full_name)
            .0
            .is_some_and(|namespace| self.implicit_namespaces.contains(&namespace))
    }

    /// The import statement for `full_name`.
    pub fn statement(&self, full_name: &str) -> String {
        format!("{}{}{}", self.prefix, full_name, self.suffix)
    }
}

impl Default for ImportSyntax {
    fn default() -> Self {
        Self::JAVA
    }
}

/// Maps each short name used in generated text to exactly one
/// fully-qualified name.
///
/// # Example
///
/// ```
/// use gridcfg_codegen::{ConflictPolicy, ImportSyntax, ReferenceRegistry};
///
/// let mut refs = ReferenceRegistry::new(ImportSyntax::JAVA, ConflictPolicy::FallbackToFullName);
/// assert_eq!(refs.register("java.util.Date").unwrap(), "Date");
/// assert_eq!(refs.register("java.sql.Date").unwrap(), "java.sql.Date");
/// assert_eq!(refs.render(), "import java.util.Date;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRegistry {
    syntax: ImportSyntax,
    policy: ConflictPolicy,
    /// Namespace of the generated unit; its members need no import.
    local_namespace: Option<String>,
    /// Short name -> fully-qualified name
    entries: IndexMap<String, String>,
}

impl ReferenceRegistry {
    /// Create an empty registry.
    pub fn new(syntax: ImportSyntax, policy: ConflictPolicy) -> Self {
        Self {
            syntax,
            policy,
            local_namespace: None,
            entries: IndexMap::new(),
        }
    }

    /// Create an empty registry with Java import syntax.
    pub fn java(policy: ConflictPolicy) -> Self {
        Self::new(ImportSyntax::JAVA, policy)
    }

    pub fn syntax(&self) -> &ImportSyntax {
        &self.syntax
    }

    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Declare the namespace the generated unit lives in.
    pub fn set_local_namespace(&mut self, namespace: impl Into<String>) {
        self.local_namespace = Some(namespace.into());
    }

    /// True when referencing `full_name` requires an import statement:
    /// scoped, outside the implicit namespaces and outside the local one.
    pub fn needs_import(&self, full_name: &str) -> bool {
        match self.syntax.split(full_name).0 {
            None => false,
            Some(namespace) => {
                !self.syntax.implicit_namespaces.contains(&namespace)
                    && self.local_namespace.as_deref() != Some(namespace)
            }
        }
    }

    /// Register `full_name` and return the text to reference it by.
    ///
    /// Returns the short name when it is free or already mapped to the same
    /// name. On a conflict the first mapping is kept and the outcome depends
    /// on the [`ConflictPolicy`]: the full name is returned, or an error.
    pub fn register(&mut self, full_name: &str) -> Result<String> {
        let short = self.syntax.short_name(full_name);

        match self.entries.get(short) {
            None => {
                self.entries
                    .insert(short.to_string(), full_name.to_string());
                Ok(short.to_string())
            }
            Some(existing) if existing == full_name => Ok(short.to_string()),
            Some(existing) => match self.policy {
                ConflictPolicy::FallbackToFullName => {
                    tracing::debug!(
                        short,
                        existing = existing.as_str(),
                        requested = full_name,
                        "short name taken, referencing by full name"
                    );
                    Ok(full_name.to_string())
                }
                ConflictPolicy::Fail => Err(EmitError::ReferenceConflict {
                    short: short.to_string(),
                    existing: existing.clone(),
                    requested: full_name.to_string(),
                }),
            },
        }
    }

    /// The fully-qualified name registered under `short`.
    pub fn get(&self, short: &str) -> Option<&str> {
        self.entries.get(short).map(String::as_str)
    }

    /// Check whether `full_name` owns its short name.
    pub fn contains(&self, full_name: &str) -> bool {
        self.get(self.syntax.short_name(full_name)) == Some(full_name)
    }

    /// Iterate over `(short, full)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render one import statement per entry that
    /// [needs one](Self::needs_import), sorted by full name and
    /// newline-joined.
    pub fn render(&self) -> String {
        let mut names: Vec<&str> = self
            .entries
            .values()
            .map(String::as_str)
            .filter(|name| self.needs_import(name))
            .collect();
        names.sort_unstable();

        names
            .into_iter()
            .map(|name| self.syntax.statement(name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ReferenceRegistry {
    fn default() -> Self {
        Self::java(ConflictPolicy::default())
    }
}
