//! Optional database capability.
//!
//! The generator never requires a live database: the capability is an
//! explicit `Option<&dyn Database>` passed at construction. When present
//! it is used for an advisory schema check, and the `load` path drives a
//! bulk import through it. When absent, generation proceeds from the
//! parsed DDL alone.

#[cfg(feature = "database")]
mod duckdb;

#[cfg(feature = "database")]
pub use self::duckdb::DuckDb;

use crate::error::GeneratorError;
use ahash::AHashMap;

/// Minimal query surface a backing database must provide.
pub trait Database {
    /// Run a query with positional parameters; rows come back as
    /// positionally ordered string values.
    fn query(&self, sql: &str, params: &[&str]) -> Result<Vec<Vec<String>>, GeneratorError>;

    /// Like [`Database::query`], but each row is a column-name map.
    fn query_assoc(
        &self,
        sql: &str,
        params: &[&str],
    ) -> Result<Vec<AHashMap<String, String>>, GeneratorError>;

    /// Execute a statement that returns no rows.
    fn execute(&self, sql: &str) -> Result<(), GeneratorError>;
}

/// Introspect the live column names of a table, in ordinal position
/// order. An empty result means the table does not exist.
pub fn live_columns(db: &dyn Database, table: &str) -> Result<Vec<String>, GeneratorError> {
    let rows = db.query_assoc(
        "SELECT column_name \
         FROM information_schema.columns \
         WHERE lower(table_name) = lower(?) \
         ORDER BY ordinal_position",
        &[table],
    )?;
    Ok(rows
        .into_iter()
        .filter_map(|mut row| row.remove("column_name"))
        .collect())
}

/// Bulk-load a generated CSV into its destination table. The CSV carries
/// a header row, so the loader is told to skip it.
pub fn import_csv(
    db: &dyn Database,
    table: &str,
    csv_path: &std::path::Path,
) -> Result<(), GeneratorError> {
    db.execute(&format!(
        "COPY {} FROM '{}' (FORMAT CSV, HEADER)",
        table,
        csv_path.display()
    ))
}
