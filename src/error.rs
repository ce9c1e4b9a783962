use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by schema resolution and generation.
///
/// All variants are fatal for the table being generated: there is no
/// partial-success or resume mode, a failed run is re-run from scratch.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The requested table has no entry in the size table.
    #[error("no default size configured for table '{0}'")]
    Configuration(String),

    /// The requested table was not found in the parsed schema.
    #[error("table '{0}' not found in parsed schema")]
    SchemaNotFound(String),

    /// The live database check found no matching table.
    #[error("live schema check failed: table '{0}' does not exist in the database")]
    SchemaMismatch(String),

    /// A row contained a column that is not part of the table's field list.
    #[error("row contains unknown column '{0}'")]
    UnknownColumn(String),

    #[error("failed to read schema file {path}: {source}")]
    SchemaRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("database error: {0}")]
    Database(String),
}
