//! Streaming CSV output.
//!
//! One `RowWriter` serves one generation run: it holds the ordered field
//! list and lazily opens a CSV writer per distinct destination path,
//! emitting the header before the first data row. Quoting is minimal
//! (only when a value structurally requires it) because downstream bulk
//! loaders expect unquoted delimited fields.

use crate::error::GeneratorError;
use ahash::AHashMap;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};

/// One generated record: column name to serialized value.
///
/// Missing columns serialize as empty fields; a key outside the field
/// list is an error.
pub type Row = AHashMap<String, String>;

pub struct RowWriter {
    fields: Vec<String>,
    writers: AHashMap<PathBuf, csv::Writer<File>>,
}

impl RowWriter {
    /// Create a writer for a fixed, ordered field list.
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            writers: AHashMap::new(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    fn get_writer(&mut self, path: &Path) -> Result<&mut csv::Writer<File>, GeneratorError> {
        use std::collections::hash_map::Entry;

        match self.writers.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let file = File::create(path)?;
                let mut writer = WriterBuilder::new()
                    .quote_style(QuoteStyle::Necessary)
                    .from_writer(file);
                writer.write_record(&self.fields)?;
                Ok(entry.insert(writer))
            }
        }
    }

    /// Open a destination eagerly, writing its header. Saving a row does
    /// this implicitly; generators call it so a zero-row run still
    /// produces a header-only file.
    pub fn open_destination(&mut self, path: &Path) -> Result<(), GeneratorError> {
        self.get_writer(path).map(|_| ())
    }

    /// Append one row to the given destination, opening it (and writing
    /// the header) on first use.
    pub fn save_row(&mut self, row: &Row, path: &Path) -> Result<(), GeneratorError> {
        for key in row.keys() {
            if !self.fields.iter().any(|f| f == key) {
                return Err(GeneratorError::UnknownColumn(key.clone()));
            }
        }

        let record: Vec<&str> = self
            .fields
            .iter()
            .map(|f| row.get(f).map(String::as_str).unwrap_or(""))
            .collect();

        self.get_writer(path)?.write_record(&record)?;
        Ok(())
    }

    /// Flush every opened destination. Called on all exit paths of a
    /// generation run, success or failure.
    pub fn close_all(&mut self) -> Result<(), GeneratorError> {
        for writer in self.writers.values_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}
