//! Unit tests for the table generator lifecycle.

use ahash::AHashMap;
use scalegen::db::Database;
use scalegen::{
    EmptyRows, GeneratorError, Row, RowSource, SchemaRegistry, SizeTable, SyntheticRows, Table,
    TableGenerator,
};
use tempfile::TempDir;

const DDL: &str = "\
CREATE TABLE customers (customer_id INT, first_name VARCHAR(50), email VARCHAR(100));
CREATE TABLE stores (store_id INT, store_name VARCHAR(50));
";

fn registry() -> SchemaRegistry {
    SchemaRegistry::parse(DDL)
}

fn sizes() -> SizeTable {
    let mut sizes = SizeTable::empty();
    sizes.set("customers", 100);
    sizes.set("stores", 200);
    sizes
}

/// A source that replays a fixed list of rows.
struct FixedRows(Vec<Row>);

impl RowSource for FixedRows {
    fn rows(&mut self, _table: &Table, _num_records: u64) -> Box<dyn Iterator<Item = Row> + '_> {
        Box::new(self.0.clone().into_iter())
    }
}

fn one_row(pairs: &[(&str, &str)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A database whose introspection reports a fixed set of live columns.
struct LiveColumns(Vec<&'static str>);

impl Database for LiveColumns {
    fn query(&self, _sql: &str, _params: &[&str]) -> Result<Vec<Vec<String>>, GeneratorError> {
        Ok(Vec::new())
    }

    fn query_assoc(
        &self,
        _sql: &str,
        _params: &[&str],
    ) -> Result<Vec<AHashMap<String, String>>, GeneratorError> {
        Ok(self
            .0
            .iter()
            .map(|column| {
                let mut row = AHashMap::new();
                row.insert("column_name".to_string(), column.to_string());
                row
            })
            .collect())
    }

    fn execute(&self, _sql: &str) -> Result<(), GeneratorError> {
        Ok(())
    }
}

#[test]
fn test_default_size_table_carries_retail_sizes() {
    let sizes = SizeTable::default();
    assert_eq!(sizes.get("customers"), Some(100));
    assert_eq!(sizes.get("stores"), Some(200));
    assert_eq!(sizes.get("items"), Some(500));
    assert_eq!(sizes.get("transactions"), Some(20_000));
    assert_eq!(sizes.get("TRANSACTION_ITEMS"), Some(100_000));
    assert_eq!(sizes.get("warehouses"), None);
}

#[test]
fn test_num_records_is_scale_times_default() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "customers", 3, None).unwrap();
    assert_eq!(generator.num_records(), 300);
}

#[test]
fn test_missing_size_entry_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let err = TableGenerator::new(&registry(), &SizeTable::empty(), &out_dir, "customers", 1, None)
        .unwrap_err();
    assert!(matches!(err, GeneratorError::Configuration(name) if name == "customers"));
    // Surfaced at construction, before any file or directory is created.
    assert!(!out_dir.exists());
}

#[test]
fn test_unparsed_table_is_schema_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let mut with_size = sizes();
    with_size.set("warehouses", 10);
    let err = TableGenerator::new(&registry(), &with_size, temp_dir.path(), "warehouses", 1, None)
        .unwrap_err();
    assert!(matches!(err, GeneratorError::SchemaNotFound(_)));
}

#[test]
fn test_table_absent_from_live_schema_is_a_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let db = LiveColumns(Vec::new());
    let err = TableGenerator::new(&registry(), &sizes(), &out_dir, "stores", 1, Some(&db))
        .unwrap_err();
    assert!(matches!(err, GeneratorError::SchemaMismatch(name) if name == "stores"));
    // The check runs at construction, before any output is created.
    assert!(!out_dir.exists());
}

#[test]
fn test_live_check_passes_when_the_table_exists() {
    let temp_dir = TempDir::new().unwrap();
    let db = LiveColumns(vec!["STORE_ID", "STORE_NAME"]);
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "stores", 1, Some(&db))
            .unwrap();
    assert_eq!(generator.num_records(), 200);
}

#[test]
fn test_output_paths_are_pure_functions_of_table_and_scale() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "STORES", 2, None).unwrap();
    assert_eq!(
        generator.csv_path(),
        temp_dir.path().join("stores_2.csv").as_path()
    );
    assert_eq!(
        generator.ctl_path(),
        temp_dir.path().join("stores_2.ctl").as_path()
    );
}

#[test]
fn test_generate_writes_header_then_rows() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "stores", 1, None).unwrap();
    let csv_path = generator.csv_path().to_path_buf();

    let mut source = FixedRows(vec![
        one_row(&[("STORE_ID", "1"), ("STORE_NAME", "Central Store")]),
        one_row(&[("STORE_ID", "2"), ("STORE_NAME", "Harbor Store")]),
    ]);
    let report = generator.generate(&mut source).unwrap();
    assert_eq!(report.rows_written, 2);

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "STORE_ID,STORE_NAME");
    assert_eq!(lines[1], "1,Central Store");
    assert_eq!(lines[2], "2,Harbor Store");
}

#[test]
fn test_header_round_trips_the_field_list() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "customers", 1, None).unwrap();
    let field_names = generator.table().field_names();
    let csv_path = generator.csv_path().to_path_buf();

    generator.generate(&mut EmptyRows).unwrap();

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let header: Vec<&str> = content.lines().next().unwrap().split(',').collect();
    assert_eq!(header, field_names);
}

#[test]
fn test_identical_runs_produce_byte_identical_csv() {
    let temp_dir = TempDir::new().unwrap();

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let generator =
            TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "customers", 1, None)
                .unwrap();
        let csv_path = generator.csv_path().to_path_buf();
        generator
            .generate(&mut SyntheticRows::seeded(42))
            .unwrap();
        outputs.push(std::fs::read(&csv_path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
    assert!(!outputs[0].is_empty());
}

#[test]
fn test_output_exists_after_generation() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "stores", 4, None).unwrap();
    assert!(!generator.output_exists());
    generator.generate(&mut EmptyRows).unwrap();

    let again =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "stores", 4, None).unwrap();
    assert!(again.output_exists());
}

#[test]
fn test_skipping_an_existing_output_leaves_its_bytes_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "stores", 1, None).unwrap();
    let csv_path = generator.csv_path().to_path_buf();

    let mut source = FixedRows(vec![one_row(&[("STORE_ID", "1"), ("STORE_NAME", "first run")])]);
    generator.generate(&mut source).unwrap();
    let before = std::fs::read(&csv_path).unwrap();

    // Same skip logic the command layer applies under --skip-existing.
    let again =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "stores", 1, None).unwrap();
    if !again.output_exists() {
        let mut source =
            FixedRows(vec![one_row(&[("STORE_ID", "2"), ("STORE_NAME", "second run")])]);
        again.generate(&mut source).unwrap();
    }

    let after = std::fs::read(&csv_path).unwrap();
    assert_eq!(before, after);
    assert!(String::from_utf8(after).unwrap().contains("first run"));
}

#[test]
fn test_control_file_is_written_even_for_empty_source() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "stores", 1, None).unwrap();
    let ctl_path = generator.ctl_path().to_path_buf();
    let report = generator.generate(&mut EmptyRows).unwrap();
    assert_eq!(report.rows_written, 0);
    assert!(ctl_path.exists());
}

#[test]
fn test_bad_row_aborts_but_releases_handles() {
    let temp_dir = TempDir::new().unwrap();
    let generator =
        TableGenerator::new(&registry(), &sizes(), temp_dir.path(), "stores", 1, None).unwrap();
    let csv_path = generator.csv_path().to_path_buf();

    let mut source = FixedRows(vec![
        one_row(&[("STORE_ID", "1"), ("STORE_NAME", "ok")]),
        one_row(&[("NOT_A_COLUMN", "boom")]),
    ]);
    let err = generator.generate(&mut source).unwrap_err();
    assert!(matches!(err, GeneratorError::UnknownColumn(_)));

    // The partial file was flushed before the error propagated.
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(content.starts_with("STORE_ID,STORE_NAME\n"));
}
