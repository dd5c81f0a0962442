// Raw CSV ingest - the dataset's semicolon-separated exports -> raw tables
// Raw tables are loaded verbatim: sentinels like '?' and the empty string
// stay exactly as the source wrote them, cleaning happens later.

use crate::store::{write_table, Table, Value};
use crate::tables::jobs;
use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load the eight source tables from `<dir>/<table>.csv` (or `.asc`, the
/// extension the original distribution uses) into the store, replacing any
/// previous raw tables.
pub fn import_dir(conn: &mut Connection, dir: &Path) -> Result<Vec<(String, usize)>> {
    let mut loaded = Vec::new();

    for job in jobs() {
        let path = source_file(dir, job.name)?;
        let file = File::open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let table = read_csv_table(file, job.name)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        write_table(conn, &table)?;
        loaded.push((job.name.to_string(), table.len()));
    }

    Ok(loaded)
}

/// Parse one `;`-separated export with a header row. Cells are typed by
/// parse: integer, then real, then text. Empty cells stay as empty text so
/// the raw table keeps its sentinels.
pub fn read_csv_table(reader: impl Read, name: &str) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new().delimiter(b';').from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()
        .context("Missing header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(name, columns);

    for record in rdr.records() {
        let record = record.context("Malformed CSV record")?;
        table.rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(table)
}

fn source_file(dir: &Path, name: &str) -> Result<std::path::PathBuf> {
    for ext in ["csv", "asc"] {
        let candidate = dir.join(format!("{}.{}", name, ext));
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    bail!(
        "No source file for table '{}' under {} (tried .csv and .asc)",
        name,
        dir.display()
    );
}

fn parse_cell(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return Value::Real(x);
    }
    Value::Text(raw.to_string())
}

// ============================================================================
// TESTS
// ============================================================================
