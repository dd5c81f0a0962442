// Tabular store - SQLite in, SQLite out
// Generic read_table / write_table over named tables of typed cells

use anyhow::{Context, Result};
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection, ToSql};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// CELL VALUES
// ============================================================================

/// A single cell as read from / written to the store.
/// `Null` is the canonical absent-value marker; cleaned tables never carry
/// in-band sentinels like `'?'` or the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Real(f64),
    Text(String),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Display form used in audit findings (keys, sample values).
    pub fn render(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Real(x) => x.to_string(),
            Value::Text(s) => s.clone(),
            Value::Null => "NULL".to_string(),
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Value::Int(n) => n.to_sql(),
            Value::Real(x) => x.to_sql(),
            Value::Text(s) => s.to_sql(),
            Value::Null => Ok(ToSqlOutput::Owned(rusqlite::types::Value::Null)),
        }
    }
}

// ============================================================================
// TABLES
// ============================================================================

/// An in-memory table: ordered column names plus rows of cells.
/// Row cells are positional; `col()` resolves a column name to its index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(name: &str, columns: Vec<String>) -> Self {
        Table {
            name: name.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Index of a column by name, if present.
    pub fn col(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column name). `Value::Null` for unknown columns so
    /// callers can treat a missing column like an absent value.
    pub fn cell<'a>(&'a self, row: &'a [Value], name: &str) -> &'a Value {
        match self.col(name) {
            Some(i) => &row[i],
            None => &Value::Null,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// STORE OPERATIONS
// ============================================================================

/// Open (or create) the store with WAL mode enabled.
pub fn open_store(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open store at {}", path.display()))?;

    // WAL for crash recovery
    conn.pragma_update(None, "journal_mode", "WAL")?;

    Ok(conn)
}

/// Read a full table, preserving the store's column order.
pub fn read_table(conn: &Connection, name: &str) -> Result<Table> {
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM \"{}\"", name))
        .with_context(|| format!("Failed to read table '{}'", name))?;

    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let ncols = columns.len();

    let mut table = Table::new(name, columns);

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(ncols);
        for i in 0..ncols {
            let cell = match row.get_ref(i)? {
                ValueRef::Null => Value::Null,
                ValueRef::Integer(n) => Value::Int(n),
                ValueRef::Real(x) => Value::Real(x),
                ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
                ValueRef::Blob(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
            };
            cells.push(cell);
        }
        table.rows.push(cells);
    }

    Ok(table)
}

/// Replace a table with the given rows. Drop + create + insert run inside a
/// single transaction, so a failed write leaves no partial table behind.
pub fn write_table(conn: &mut Connection, table: &Table) -> Result<()> {
    let tx = conn
        .transaction()
        .context("Failed to start write transaction")?;

    tx.execute(&format!("DROP TABLE IF EXISTS \"{}\"", table.name), [])?;

    let decls: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("\"{}\" {}", c, column_affinity(table, i)))
        .collect();

    tx.execute(
        &format!("CREATE TABLE \"{}\" ({})", table.name, decls.join(", ")),
        [],
    )?;

    let placeholders: Vec<String> = (1..=table.columns.len()).map(|i| format!("?{}", i)).collect();
    let insert_sql = format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table.name,
        table
            .columns
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    );

    {
        let mut stmt = tx.prepare(&insert_sql)?;
        for row in &table.rows {
            stmt.execute(params_from_iter(row.iter()))?;
        }
    }

    tx.commit()
        .with_context(|| format!("Failed to write table '{}'", table.name))?;

    Ok(())
}

/// Row count of a stored table.
pub fn table_count(conn: &Connection, name: &str) -> Result<i64> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM \"{}\"", name),
        [],
        |row| row.get(0),
    )?;

    Ok(count)
}

/// Column affinity for CREATE TABLE, taken from the first non-null cell.
fn column_affinity(table: &Table, col: usize) -> &'static str {
    for row in &table.rows {
        match &row[col] {
            Value::Int(_) => return "INTEGER",
            Value::Real(_) => return "REAL",
            Value::Text(_) => return "TEXT",
            Value::Null => continue,
        }
    }
    "TEXT"
}

// ============================================================================
// TESTS
// ============================================================================
