use anyhow::{bail, Context};
use scalegen::db::{self, DuckDb};
use std::path::Path;

pub(crate) fn run(
    database: &Path,
    table: &str,
    scale_factor: u32,
    output: &Path,
) -> anyhow::Result<()> {
    let csv_path = output.join(format!("{}_{}.csv", table.to_lowercase(), scale_factor));
    if !csv_path.exists() {
        bail!(
            "no generated CSV for table '{}' at scale {}: {}",
            table,
            scale_factor,
            csv_path.display()
        );
    }

    let db = DuckDb::open(database)?;
    let columns = db::live_columns(&db, table)?;
    if columns.is_empty() {
        bail!("table '{}' does not exist in {}", table, database.display());
    }

    db::import_csv(&db, table, &csv_path)
        .with_context(|| format!("loading {} into {}", csv_path.display(), table))?;

    println!("loaded {} into {}", csv_path.display(), table);
    Ok(())
}
