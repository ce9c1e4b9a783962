mod generate;
mod inspect;
#[cfg(feature = "database")]
mod load;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scalegen")]
#[command(version)]
#[command(about = "Generate scaled CSV test fixtures from a DDL schema", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate CSV data and load-control files for tables in a schema
    Generate {
        /// DDL schema file (semicolon-terminated CREATE TABLE statements)
        #[arg(short, long, default_value = "schema.sql")]
        schema: PathBuf,

        /// Output directory (created if absent)
        #[arg(short, long, default_value = "generated_data")]
        output: PathBuf,

        /// Scale factor applied to each table's base row count
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        scale_factor: u32,

        /// Only generate specific tables (comma-separated, default: all
        /// tables that have a size entry)
        #[arg(short, long)]
        tables: Option<String>,

        /// Base row count override, repeatable (e.g. --size customers=500)
        #[arg(long, value_name = "TABLE=COUNT")]
        size: Vec<String>,

        /// Random seed for reproducible data
        #[arg(long, default_value = "12345")]
        seed: u64,

        /// Skip tables whose CSV already exists for this scale factor
        #[arg(long)]
        skip_existing: bool,

        /// Show a progress bar per table
        #[arg(short, long)]
        progress: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Emit a JSON summary instead of text
        #[arg(long)]
        json: bool,

        /// DuckDB database to verify table existence against before
        /// generating
        #[cfg(feature = "database")]
        #[arg(long)]
        verify: Option<PathBuf>,
    },

    /// Parse a schema file and list its tables and columns
    Inspect {
        /// DDL schema file
        #[arg(short, long, default_value = "schema.sql")]
        schema: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Bulk-load a generated CSV into a DuckDB database
    #[cfg(feature = "database")]
    Load {
        /// DuckDB database file
        #[arg(short, long)]
        database: PathBuf,

        /// Table to load
        table: String,

        /// Scale factor the CSV was generated with
        #[arg(long, default_value = "1")]
        scale_factor: u32,

        /// Directory holding the generated files
        #[arg(short, long, default_value = "generated_data")]
        output: PathBuf,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            schema,
            output,
            scale_factor,
            tables,
            size,
            seed,
            skip_existing,
            progress,
            verbose,
            json,
            #[cfg(feature = "database")]
            verify,
        } => generate::run(generate::Options {
            schema,
            output,
            scale_factor,
            tables,
            size,
            seed,
            skip_existing,
            progress,
            verbose,
            json,
            #[cfg(feature = "database")]
            verify,
        }),
        Commands::Inspect { schema, json } => inspect::run(&schema, json),
        #[cfg(feature = "database")]
        Commands::Load {
            database,
            table,
            scale_factor,
            output,
        } => load::run(&database, &table, scale_factor, &output),
    }
}
