use anyhow::bail;
use scalegen::SchemaRegistry;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct InspectJsonOutput {
    schema: String,
    tables: Vec<TableInfo>,
}

#[derive(Serialize)]
struct TableInfo {
    name: String,
    columns: Vec<String>,
}

pub(crate) fn run(schema: &Path, json: bool) -> anyhow::Result<()> {
    if !schema.exists() {
        bail!("schema file does not exist: {}", schema.display());
    }

    let registry = SchemaRegistry::from_file(schema)?;

    let tables: Vec<TableInfo> = registry
        .table_names()
        .into_iter()
        .map(|name| {
            let table = registry.resolve(name)?;
            Ok(TableInfo {
                name: table.name,
                columns: table.fields.into_iter().map(|f| f.name).collect(),
            })
        })
        .collect::<Result<_, scalegen::GeneratorError>>()?;

    if json {
        let output = InspectJsonOutput {
            schema: schema.display().to_string(),
            tables,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} table(s) in {}", tables.len(), schema.display());
        for table in &tables {
            println!("  {} ({})", table.name, table.columns.join(", "));
        }
    }

    Ok(())
}
