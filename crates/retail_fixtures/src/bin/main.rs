//! CLI for generating the retail fixture set.
//!
//! Usage:
//!   seed-retail --scale-factor 3 --output generated_data
//!   seed-retail --schema my_schema.sql --tables customers,stores

use anyhow::Context;
use clap::Parser;
use retail_fixtures::{RetailDataset, SCHEMA_DDL, TABLE_ORDER};
use scalegen::{SchemaRegistry, SizeTable, TableGenerator};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seed-retail")]
#[command(about = "Generate the scaled retail CSV fixture set", long_about = None)]
struct Args {
    /// Schema file (default: the embedded retail schema)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "generated_data")]
    output: PathBuf,

    /// Scale factor applied to every table's base size
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    scale_factor: u32,

    /// Random seed for reproducibility
    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Only generate specific tables (comma-separated)
    #[arg(short, long)]
    tables: Option<String>,

    /// Skip tables whose CSV already exists for this scale factor
    #[arg(long)]
    skip_existing: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let registry = match &args.schema {
        Some(path) => SchemaRegistry::from_file(path)?,
        None => SchemaRegistry::parse(SCHEMA_DDL),
    };
    let sizes = SizeTable::default();
    let dataset = RetailDataset::new(args.scale_factor, args.seed);

    let selected: Vec<String> = match &args.tables {
        Some(list) => list.split(',').map(|t| t.trim().to_string()).collect(),
        None => TABLE_ORDER.iter().map(|t| t.to_string()).collect(),
    };

    for table in &selected {
        let mut source = dataset
            .source_for(table)
            .with_context(|| format!("no retail row source for table '{}'", table))?;

        let generator = TableGenerator::new(
            &registry,
            &sizes,
            &args.output,
            table,
            args.scale_factor,
            None,
        )?;

        if args.skip_existing && generator.output_exists() {
            eprintln!("skipping {} (output exists)", table);
            continue;
        }

        let report = generator.generate(source.as_mut())?;
        println!(
            "{}: {} rows -> {}",
            report.table, report.rows_written, report.csv_path
        );
    }

    Ok(())
}
