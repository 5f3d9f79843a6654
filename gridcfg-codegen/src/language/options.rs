use eyre::{Result, bail};
use gridcfg_core::{Provenance, is_identifier};

use crate::ConflictPolicy;

/// Class name of the generated Java factory when none is configured.
pub const DEFAULT_CLASS_NAME: &str = "IgniteConfigurationFactory";

/// Settings for one generation pass.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Tool name and timestamp written in the provenance comment.
    pub provenance: Provenance,
    /// What to do when two classes share a short name.
    pub conflict_policy: ConflictPolicy,
    /// Name of the generated factory class (Java only).
    pub class_name: String,
    /// Package of the generated factory class (Java only).
    pub package: Option<String>,
}

impl GenerateOptions {
    pub fn new(provenance: Provenance) -> Self {
        Self {
            provenance,
            conflict_policy: ConflictPolicy::default(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            package: None,
        }
    }

    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Fully-qualified name of the generated factory class.
    pub fn qualified_class_name(&self) -> String {
        match &self.package {
            Some(package) => format!("{package}.{}", self.class_name),
            None => self.class_name.clone(),
        }
    }

    /// Check that the class name is an identifier and the package is a
    /// dot-separated list of identifiers.
    pub fn validate_class_name(&self) -> Result<()> {
        if !is_identifier(&self.class_name) {
            bail!("invalid class name '{}'", self.class_name);
        }
        if let Some(package) = &self.package
            && !package.split('.').all(is_identifier)
        {
            bail!("invalid package name '{package}'");
        }
        Ok(())
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::new(Provenance::now("gridcfg"))
    }
}
