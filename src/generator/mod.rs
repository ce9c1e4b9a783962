//! Scale-driven table generation.
//!
//! A `TableGenerator` ties together scale-factor arithmetic, schema
//! lookup (with an optional advisory check against a live database), row
//! production through a [`RowSource`], and the CSV/control-file outputs.
//!
//! One generator instance is one generation run for one table at one
//! scale factor: construction resolves the schema, `generate` consumes
//! the instance, so a run can never be repeated on the same state.

mod synth;

pub use synth::SyntheticRows;

use crate::db::{self, Database};
use crate::error::GeneratorError;
use crate::manifest;
use crate::schema::{SchemaRegistry, Table};
use crate::writer::{Row, RowWriter};
use ahash::AHashMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-table base row counts. The actual record count for a run is
/// `scale_factor * base`.
#[derive(Debug, Clone)]
pub struct SizeTable {
    sizes: AHashMap<String, u64>,
}

impl SizeTable {
    pub fn empty() -> Self {
        Self {
            sizes: AHashMap::new(),
        }
    }

    pub fn set(&mut self, table: impl Into<String>, base: u64) {
        self.sizes.insert(table.into().to_lowercase(), base);
    }

    pub fn get(&self, table: &str) -> Option<u64> {
        self.sizes.get(&table.to_lowercase()).copied()
    }
}

impl Default for SizeTable {
    /// The stock retail-demo sizes.
    fn default() -> Self {
        let mut sizes = Self::empty();
        sizes.set("customers", 100);
        sizes.set("stores", 200);
        sizes.set("items", 500);
        sizes.set("transactions", 20_000);
        sizes.set("transaction_items", 100_000);
        sizes
    }
}

/// Capability for producing the rows of one generation run.
///
/// The returned sequence is lazy, finite, and consumed exactly once. Its
/// length is expected to equal `num_records`; the core does not enforce
/// that, a mismatch is a bug in the source.
pub trait RowSource {
    fn rows(&mut self, table: &Table, num_records: u64) -> Box<dyn Iterator<Item = Row> + '_>;
}

/// A source that produces nothing. Useful when only the control file and
/// CSV header are wanted.
pub struct EmptyRows;

impl RowSource for EmptyRows {
    fn rows(&mut self, _table: &Table, _num_records: u64) -> Box<dyn Iterator<Item = Row> + '_> {
        Box::new(std::iter::empty())
    }
}

/// Outcome of one completed generation run.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub table: String,
    pub scale_factor: u32,
    pub num_records: u64,
    pub rows_written: u64,
    pub csv_path: String,
    pub ctl_path: String,
}

/// One generation run for one table at one scale factor.
#[derive(Debug)]
pub struct TableGenerator {
    table: Table,
    scale_factor: u32,
    num_records: u64,
    output_dir: PathBuf,
    csv_path: PathBuf,
    ctl_path: PathBuf,
    bad_file: String,
}

impl TableGenerator {
    /// Resolve a generator for `table_name`.
    ///
    /// Fails before touching the filesystem when the table has no size
    /// entry (`Configuration`), no parsed DDL (`SchemaNotFound`), or —
    /// only when a database capability is supplied — does not exist in
    /// the live schema (`SchemaMismatch`).
    pub fn new(
        registry: &SchemaRegistry,
        sizes: &SizeTable,
        output_dir: &Path,
        table_name: &str,
        scale_factor: u32,
        database: Option<&dyn Database>,
    ) -> Result<Self, GeneratorError> {
        let base = sizes
            .get(table_name)
            .ok_or_else(|| GeneratorError::Configuration(table_name.to_string()))?;
        let num_records = u64::from(scale_factor) * base;

        let table = registry.resolve(table_name)?;

        if let Some(db) = database {
            let columns = db::live_columns(db, table_name)?;
            if columns.is_empty() {
                return Err(GeneratorError::SchemaMismatch(table_name.to_string()));
            }
        }

        let lower = table_name.to_lowercase();
        let base_name = output_dir.join(format!("{}_{}", lower, scale_factor));

        Ok(Self {
            table,
            scale_factor,
            num_records,
            output_dir: output_dir.to_path_buf(),
            csv_path: base_name.with_extension("csv"),
            ctl_path: base_name.with_extension("ctl"),
            bad_file: format!("{}.bad", lower),
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn num_records(&self) -> u64 {
        self.num_records
    }

    pub fn scale_factor(&self) -> u32 {
        self.scale_factor
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn ctl_path(&self) -> &Path {
        &self.ctl_path
    }

    /// Whether the CSV for this `(table, scale_factor)` pair already
    /// exists. Skipping in that case is an orchestrator policy, not
    /// enforced here.
    pub fn output_exists(&self) -> bool {
        self.csv_path.exists()
    }

    /// Run the generation: emit the control file, drain the row source
    /// into the CSV, and release every output handle on all exit paths.
    ///
    /// Consumes the generator; re-running the same `(table, scale_factor)`
    /// requires a fresh instance and overwrites the same paths.
    pub fn generate(self, source: &mut dyn RowSource) -> Result<GenerateReport, GeneratorError> {
        std::fs::create_dir_all(&self.output_dir)?;

        manifest::write_control_file(
            &self.ctl_path,
            &self.table.name,
            &self.csv_path,
            &self.bad_file,
        )?;

        let mut writer = RowWriter::new(self.table.field_names());
        writer.open_destination(&self.csv_path)?;

        let mut rows_written = 0u64;
        let mut result = Ok(());

        for row in source.rows(&self.table, self.num_records) {
            if let Err(e) = writer.save_row(&row, &self.csv_path) {
                result = Err(e);
                break;
            }
            rows_written += 1;
        }

        // Handles are released even when a row failed mid-stream.
        let closed = writer.close_all();
        result?;
        closed?;

        Ok(GenerateReport {
            table: self.table.name,
            scale_factor: self.scale_factor,
            num_records: self.num_records,
            rows_written,
            csv_path: self.csv_path.display().to_string(),
            ctl_path: self.ctl_path.display().to_string(),
        })
    }
}
