//! JDBC dialects and data sources per database.

use gridcfg_core::Database;

/// Ignite JDBC dialect class for a database.
pub fn jdbc_dialect_class(database: Database) -> &'static str {
    match database {
        Database::Generic | Database::PostgreSQL => {
            "org.apache.ignite.cache.store.jdbc.dialect.BasicJdbcDialect"
        }
        Database::Oracle => "org.apache.ignite.cache.store.jdbc.dialect.OracleDialect",
        Database::DB2 => "org.apache.ignite.cache.store.jdbc.dialect.DB2Dialect",
        Database::SQLServer => "org.apache.ignite.cache.store.jdbc.dialect.SQLServerDialect",
        Database::MySQL => "org.apache.ignite.cache.store.jdbc.dialect.MySQLDialect",
        Database::H2 => "org.apache.ignite.cache.store.jdbc.dialect.H2Dialect",
    }
}

/// Pooled data source class for a database.
pub fn data_source_class(database: Database) -> &'static str {
    match database {
        Database::Generic => "com.mchange.v2.c3p0.ComboPooledDataSource",
        Database::Oracle => "oracle.jdbc.pool.OracleDataSource",
        Database::DB2 => "com.ibm.db2.jcc.DB2DataSource",
        Database::SQLServer => "com.microsoft.sqlserver.jdbc.SQLServerDataSource",
        Database::MySQL => "com.mysql.jdbc.jdbc2.optional.MysqlDataSource",
        Database::PostgreSQL => "org.postgresql.ds.PGPoolingDataSource",
        Database::H2 => "org.h2.jdbcx.JdbcDataSource",
    }
}

/// Dialect class for a database given by name, or an `Unknown database`
/// marker.
pub fn jdbc_dialect_class_name(database: &str) -> String {
    match database.parse() {
        Ok(database) => jdbc_dialect_class(database).to_string(),
        Err(unknown) => format!("{unknown}"),
    }
}

/// Data source class for a database given by name, or an `Unknown database`
/// marker.
pub fn data_source_class_name(database: &str) -> String {
    match database.parse() {
        Ok(database) => data_source_class(database).to_string(),
        Err(unknown) => format!("{unknown}"),
    }
}

/// A connection property of a data source bean, filled from an external
/// property named `<bean id>.<key>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSourceProperty {
    pub name: &'static str,
    pub key: &'static str,
    /// Integer-typed on the data source class.
    pub numeric: bool,
}

const fn text(name: &'static str, key: &'static str) -> DataSourceProperty {
    DataSourceProperty {
        name,
        key,
        numeric: false,
    }
}

const fn number(name: &'static str, key: &'static str) -> DataSourceProperty {
    DataSourceProperty {
        name,
        key,
        numeric: true,
    }
}

const USER: DataSourceProperty = text("user", "jdbc.username");
const PASSWORD: DataSourceProperty = text("password", "jdbc.password");

/// Connection properties to set on the data source bean of a database.
pub fn data_source_properties(database: Database) -> &'static [DataSourceProperty] {
    const GENERIC: &[DataSourceProperty] = &[text("jdbcUrl", "jdbc.url"), USER, PASSWORD];
    const UPPER_URL: &[DataSourceProperty] = &[text("URL", "jdbc.url"), USER, PASSWORD];
    const LOWER_URL: &[DataSourceProperty] = &[text("url", "jdbc.url"), USER, PASSWORD];
    const DB2: &[DataSourceProperty] = &[
        text("serverName", "jdbc.server_name"),
        number("portNumber", "jdbc.port_number"),
        text("databaseName", "jdbc.database_name"),
        number("driverType", "jdbc.driver_type"),
        USER,
        PASSWORD,
    ];

    match database {
        Database::Generic => GENERIC,
        Database::DB2 => DB2,
        Database::PostgreSQL => LOWER_URL,
        Database::Oracle | Database::SQLServer | Database::MySQL | Database::H2 => UPPER_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialects() {
        assert_eq!(
            jdbc_dialect_class(Database::MySQL),
            "org.apache.ignite.cache.store.jdbc.dialect.MySQLDialect"
        );
        assert_eq!(
            jdbc_dialect_class(Database::PostgreSQL),
            jdbc_dialect_class(Database::Generic)
        );
    }

    #[test]
    fn test_class_names_by_text() {
        assert_eq!(
            data_source_class_name("H2"),
            "org.h2.jdbcx.JdbcDataSource"
        );
        assert_eq!(jdbc_dialect_class_name("Sybase"), "Unknown database: Sybase");
        assert_eq!(data_source_class_name("Sybase"), "Unknown database: Sybase");
    }

    #[test]
    fn test_data_source_properties() {
        let names: Vec<&str> = data_source_properties(Database::MySQL)
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["URL", "user", "password"]);

        let db2 = data_source_properties(Database::DB2);
        assert!(db2.iter().any(|p| p.name == "portNumber" && p.numeric));
    }
}
