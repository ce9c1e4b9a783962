//! Unit tests for control-file emission.

use scalegen::manifest::{render_control_file, write_control_file};
use scalegen::{EmptyRows, SchemaRegistry, SizeTable, TableGenerator};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_render_is_a_pure_function_of_its_inputs() {
    let a = render_control_file("stores", Path::new("out/stores_2.csv"), "stores.bad");
    let b = render_control_file("stores", Path::new("out/stores_2.csv"), "stores.bad");
    assert_eq!(a, b);
}

#[test]
fn test_rendered_directive_names_source_table_and_error_log() {
    let ctl = render_control_file("stores", Path::new("out/stores_2.csv"), "stores.bad");
    assert!(ctl.contains("IMPORT FROM CSV FILE 'out/stores_2.csv' INTO stores"));
    assert!(ctl.contains("RECORD DELIMITED BY '\\n'"));
    assert!(ctl.contains("FIELD DELIMITED BY ','"));
    assert!(ctl.contains("ERROR LOG 'stores.bad'"));
}

#[test]
fn test_write_control_file_puts_rendered_text_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let ctl_path = temp_dir.path().join("items_1.ctl");
    let csv_path = temp_dir.path().join("items_1.csv");

    write_control_file(&ctl_path, "items", &csv_path, "items.bad").unwrap();

    let content = std::fs::read_to_string(&ctl_path).unwrap();
    assert_eq!(
        content,
        render_control_file("items", &csv_path, "items.bad")
    );
}

#[test]
fn test_generation_emits_control_file_for_stores_at_scale_2() {
    let temp_dir = TempDir::new().unwrap();
    let registry = SchemaRegistry::parse("CREATE TABLE stores (store_id INT, store_name VARCHAR(50));");
    let mut sizes = SizeTable::empty();
    sizes.set("stores", 10);

    let generator =
        TableGenerator::new(&registry, &sizes, temp_dir.path(), "stores", 2, None).unwrap();
    let ctl_path = generator.ctl_path().to_path_buf();
    let csv_path = generator.csv_path().to_path_buf();
    generator.generate(&mut EmptyRows).unwrap();

    let ctl = std::fs::read_to_string(&ctl_path).unwrap();
    assert!(ctl.contains(&csv_path.display().to_string()));
    assert!(ctl.contains("INTO stores"));
    assert!(ctl.contains("ERROR LOG 'stores.bad'"));
}
