use anyhow::{bail, Context};
use indicatif::{ProgressBar, ProgressStyle};
use scalegen::{Row, RowSource, SchemaRegistry, SizeTable, SyntheticRows, Table, TableGenerator};
use serde::Serialize;
use std::path::PathBuf;

pub(crate) struct Options {
    pub schema: PathBuf,
    pub output: PathBuf,
    pub scale_factor: u32,
    pub tables: Option<String>,
    pub size: Vec<String>,
    pub seed: u64,
    pub skip_existing: bool,
    pub progress: bool,
    pub verbose: bool,
    pub json: bool,
    #[cfg(feature = "database")]
    pub verify: Option<PathBuf>,
}

#[derive(Serialize)]
struct GenerateJsonOutput {
    schema: String,
    output_dir: String,
    scale_factor: u32,
    seed: u64,
    tables: Vec<scalegen::GenerateReport>,
    skipped: Vec<String>,
}

/// Ticks a progress bar as the wrapped source is drained.
struct ProgressRows<'a> {
    inner: &'a mut dyn RowSource,
    bar: ProgressBar,
}

impl RowSource for ProgressRows<'_> {
    fn rows(&mut self, table: &Table, num_records: u64) -> Box<dyn Iterator<Item = Row> + '_> {
        let bar = self.bar.clone();
        Box::new(self.inner.rows(table, num_records).inspect(move |_| bar.inc(1)))
    }
}

pub(crate) fn run(options: Options) -> anyhow::Result<()> {
    if !options.schema.exists() {
        bail!("schema file does not exist: {}", options.schema.display());
    }

    let registry = SchemaRegistry::from_file(&options.schema)?;
    if registry.is_empty() {
        bail!(
            "no CREATE TABLE statements found in {}",
            options.schema.display()
        );
    }

    let mut sizes = SizeTable::default();
    for entry in &options.size {
        let (table, count) = parse_size_override(entry)?;
        sizes.set(table, count);
    }

    let selected: Vec<String> = match &options.tables {
        Some(list) => list.split(',').map(|t| t.trim().to_string()).collect(),
        None => registry
            .table_names()
            .into_iter()
            .filter(|name| sizes.get(name).is_some())
            .map(|name| name.to_string())
            .collect(),
    };
    if selected.is_empty() {
        bail!("no tables selected: none of the parsed tables has a size entry");
    }

    #[cfg(feature = "database")]
    let database = match &options.verify {
        Some(path) => Some(scalegen::db::DuckDb::open(path)?),
        None => None,
    };
    #[cfg(feature = "database")]
    let database: Option<&dyn scalegen::db::Database> =
        database.as_ref().map(|db| db as &dyn scalegen::db::Database);
    #[cfg(not(feature = "database"))]
    let database: Option<&dyn scalegen::db::Database> = None;

    let mut reports = Vec::new();
    let mut skipped = Vec::new();

    for table in &selected {
        let generator = TableGenerator::new(
            &registry,
            &sizes,
            &options.output,
            table,
            options.scale_factor,
            database,
        )
        .with_context(|| format!("resolving table '{}'", table))?;

        if options.skip_existing && generator.output_exists() {
            if options.verbose {
                eprintln!(
                    "skipping {} (output exists: {})",
                    table,
                    generator.csv_path().display()
                );
            }
            skipped.push(table.clone());
            continue;
        }

        if options.verbose {
            eprintln!(
                "working on {} with scale factor {} ({} records)",
                table,
                options.scale_factor,
                generator.num_records()
            );
        }

        let mut source = SyntheticRows::seeded(options.seed);
        let report = if options.progress {
            let bar = ProgressBar::new(generator.num_records());
            bar.set_style(
                ProgressStyle::with_template(
                    "{msg:20} [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})",
                )
                .unwrap()
                .progress_chars("##-"),
            );
            bar.set_message(table.clone());
            let mut wrapped = ProgressRows {
                inner: &mut source,
                bar: bar.clone(),
            };
            let report = generator.generate(&mut wrapped)?;
            bar.finish();
            report
        } else {
            generator.generate(&mut source)?
        };

        if options.verbose {
            eprintln!("wrote {} rows to {}", report.rows_written, report.csv_path);
        }
        reports.push(report);
    }

    if options.json {
        let output = GenerateJsonOutput {
            schema: options.schema.display().to_string(),
            output_dir: options.output.display().to_string(),
            scale_factor: options.scale_factor,
            seed: options.seed,
            tables: reports,
            skipped,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for report in &reports {
            println!(
                "{}: {} rows -> {} ({})",
                report.table, report.rows_written, report.csv_path, report.ctl_path
            );
        }
        if !skipped.is_empty() {
            println!("skipped (existing output): {}", skipped.join(", "));
        }
    }

    Ok(())
}

fn parse_size_override(entry: &str) -> anyhow::Result<(&str, u64)> {
    let Some((table, count)) = entry.split_once('=') else {
        bail!("invalid --size value '{}', expected TABLE=COUNT", entry);
    };
    let count: u64 = count
        .parse()
        .with_context(|| format!("invalid row count in --size '{}'", entry))?;
    Ok((table, count))
}
