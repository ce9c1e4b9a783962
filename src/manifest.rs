//! Control-file (load manifest) emission.
//!
//! The control file tells a bulk loader how to ingest the generated CSV:
//! source file, destination table, record/field delimiters, and where to
//! log rejected rows.

use std::io::Write;
use std::path::Path;

/// Render the load directive for one table. Pure function of its inputs.
pub fn render_control_file(table: &str, csv_path: &Path, bad_file: &str) -> String {
    format!(
        "IMPORT FROM CSV FILE '{infile}' INTO {table}\n\
         WITH\n\
         RECORD DELIMITED BY '\\n'\n\
         FIELD DELIMITED BY ','\n\
         ERROR LOG '{badfile}'\n",
        infile = csv_path.display(),
        table = table,
        badfile = bad_file,
    )
}

/// Write the control file to disk.
pub fn write_control_file(
    ctl_path: &Path,
    table: &str,
    csv_path: &Path,
    bad_file: &str,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(ctl_path)?;
    file.write_all(render_control_file(table, csv_path, bad_file).as_bytes())
}
