//! Embedded DuckDB adapter for the [`Database`] capability.

use super::Database;
use crate::error::GeneratorError;
use ahash::AHashMap;
use duckdb::types::Value;
use duckdb::Connection;
use std::path::Path;

pub struct DuckDb {
    conn: Connection,
}

impl DuckDb {
    pub fn open(path: &Path) -> Result<Self, GeneratorError> {
        let conn = Connection::open(path).map_err(db_err)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, GeneratorError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Ok(Self { conn })
    }
}

impl Database for DuckDb {
    fn query(&self, sql: &str, params: &[&str]) -> Result<Vec<Vec<String>>, GeneratorError> {
        let mut stmt = self.conn.prepare(sql).map_err(db_err)?;
        let mut rows = stmt
            .query(duckdb::params_from_iter(params.iter()))
            .map_err(db_err)?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            let column_count = row.as_ref().column_count();
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                let value: Value = row.get(i).map_err(db_err)?;
                values.push(value_to_string(value));
            }
            out.push(values);
        }
        Ok(out)
    }

    fn query_assoc(
        &self,
        sql: &str,
        params: &[&str],
    ) -> Result<Vec<AHashMap<String, String>>, GeneratorError> {
        let mut stmt = self.conn.prepare(sql).map_err(db_err)?;
        let mut rows = stmt
            .query(duckdb::params_from_iter(params.iter()))
            .map_err(db_err)?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(db_err)? {
            let names = row.as_ref().column_names();
            let mut assoc = AHashMap::with_capacity(names.len());
            for (i, name) in names.iter().enumerate() {
                let value: Value = row.get(i).map_err(db_err)?;
                assoc.insert(name.clone(), value_to_string(value));
            }
            out.push(assoc);
        }
        Ok(out)
    }

    fn execute(&self, sql: &str) -> Result<(), GeneratorError> {
        self.conn.execute_batch(sql).map_err(db_err)
    }
}

fn db_err(e: duckdb::Error) -> GeneratorError {
    GeneratorError::Database(e.to_string())
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Boolean(b) => b.to_string(),
        Value::TinyInt(n) => n.to_string(),
        Value::SmallInt(n) => n.to_string(),
        Value::Int(n) => n.to_string(),
        Value::BigInt(n) => n.to_string(),
        Value::UTinyInt(n) => n.to_string(),
        Value::USmallInt(n) => n.to_string(),
        Value::UInt(n) => n.to_string(),
        Value::UBigInt(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Double(n) => n.to_string(),
        Value::Text(s) => s,
        other => format!("{:?}", other),
    }
}
