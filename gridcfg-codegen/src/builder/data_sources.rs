//! Registry of JDBC data sources referenced while generating.

use gridcfg_core::Database;
use indexmap::IndexMap;

use super::{EmitError, Result};

/// A data source bean that the generated configuration must define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub bean_id: String,
    pub database: Database,
}

/// Data sources keyed by bean id, in first-registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSourceRegistry {
    entries: IndexMap<String, Database>,
}

impl DataSourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `bean_id` must be defined for `database`.
    ///
    /// Registering the same pair again is a no-op; reusing the id for another
    /// database is a [`EmitError::DataSourceConflict`].
    pub fn register(&mut self, bean_id: &str, database: Database) -> Result<()> {
        match self.entries.get(bean_id) {
            None => {
                self.entries.insert(bean_id.to_string(), database);
                Ok(())
            }
            Some(existing) if *existing == database => Ok(()),
            Some(existing) => Err(EmitError::DataSourceConflict {
                bean_id: bean_id.to_string(),
                existing: *existing,
                requested: database,
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = DataSource> + '_ {
        self.entries.iter().map(|(bean_id, database)| DataSource {
            bean_id: bean_id.clone(),
            database: *database,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
