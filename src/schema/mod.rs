//! Table model and the once-built schema registry.
//!
//! The registry maps table names to the raw DDL statement that defines
//! them. It is built once by the orchestrator and shared read-only across
//! all generator instances, so no locking is needed.

mod ddl;

pub use ddl::{extract_fields, extract_table_name, harvest_statements};

use crate::error::GeneratorError;
use ahash::AHashMap;
use std::path::Path;

/// A single column of a table. Only the name survives extraction; the
/// generator works structurally, not semantically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Upper-cased column name.
    pub name: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Immutable description of a table: its name and its columns in
/// declaration order.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Table {
    /// Build a table model from its raw CREATE TABLE text.
    pub fn from_statement(name: impl Into<String>, stmt: &str) -> Self {
        Self {
            name: name.into(),
            fields: ddl::extract_fields(stmt),
        }
    }

    /// Ordered column names, as they will appear in the CSV header.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }
}

/// Mapping from table name to the raw DDL statement that defines it.
///
/// Populated once from a schema document; immutable afterward. Duplicate
/// table names in the document resolve to the last statement.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    statements: AHashMap<String, String>,
}

impl SchemaRegistry {
    /// Parse a full DDL document into a registry.
    pub fn parse(ddl: &str) -> Self {
        let mut statements = AHashMap::new();
        for (name, stmt) in ddl::harvest_statements(ddl) {
            statements.insert(name, stmt);
        }
        Self { statements }
    }

    /// Read and parse a schema file.
    pub fn from_file(path: &Path) -> Result<Self, GeneratorError> {
        let ddl = std::fs::read_to_string(path).map_err(|source| GeneratorError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&ddl))
    }

    /// Look up the raw statement for a table (case-insensitive fallback).
    pub fn statement(&self, table: &str) -> Option<&str> {
        if let Some(stmt) = self.statements.get(table) {
            return Some(stmt);
        }
        let lower = table.to_lowercase();
        self.statements
            .iter()
            .find(|(k, _)| k.to_lowercase() == lower)
            .map(|(_, v)| v.as_str())
    }

    /// Resolve the table model for a name, or fail if the DDL never
    /// declared it.
    pub fn resolve(&self, table: &str) -> Result<Table, GeneratorError> {
        let stmt = self
            .statement(table)
            .ok_or_else(|| GeneratorError::SchemaNotFound(table.to_string()))?;
        Ok(Table::from_statement(table, stmt))
    }

    /// All table names as declared, sorted for stable output.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.statements.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
