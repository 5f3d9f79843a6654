use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Databases a JDBC cache store can be backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Database {
    Generic,
    Oracle,
    DB2,
    SQLServer,
    MySQL,
    PostgreSQL,
    H2,
}

impl Database {
    /// Every supported database, in declaration order.
    pub const ALL: [Database; 7] = [
        Database::Generic,
        Database::Oracle,
        Database::DB2,
        Database::SQLServer,
        Database::MySQL,
        Database::PostgreSQL,
        Database::H2,
    ];

    /// Name as written in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Generic => "Generic",
            Database::Oracle => "Oracle",
            Database::DB2 => "DB2",
            Database::SQLServer => "SQLServer",
            Database::MySQL => "MySQL",
            Database::PostgreSQL => "PostgreSQL",
            Database::H2 => "H2",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a database name is not one of [`Database::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDatabase(pub String);

impl fmt::Display for UnknownDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown database: {}", self.0)
    }
}

impl std::error::Error for UnknownDatabase {}

impl FromStr for Database {
    type Err = UnknownDatabase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Database::ALL
            .into_iter()
            .find(|db| db.as_str() == s)
            .ok_or_else(|| UnknownDatabase(s.to_string()))
    }
}
