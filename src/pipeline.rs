// Cleaning pipeline - read raw, audit, clean, audit again, overwrite
// One independent job per table; findings never block the write.

use crate::audit::{audit_table, TableAudit};
use crate::store::{read_table, write_table, Table, Value};
use crate::tables::{jobs, TableJob};
use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;
use std::cmp::Ordering;

// ============================================================================
// RUN RESULT
// ============================================================================

/// Outcome of cleaning one table: the audits are advisory side output, the
/// cleaned table itself went to the store.
#[derive(Debug, Clone, Serialize)]
pub struct TableRun {
    pub table: String,
    pub cleaned_table: String,
    pub rows: usize,
    /// Audit of the raw input (sentinels count as missing here).
    pub pre_audit: TableAudit,
    /// Audit of the cleaned output; confirms cleaning introduced no nulls
    /// where a column is declared required.
    pub post_audit: TableAudit,
}

impl TableRun {
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} ({} rows) | pre: {} findings, post: {} findings",
            self.table,
            self.cleaned_table,
            self.rows,
            self.pre_audit.finding_count(),
            self.post_audit.finding_count()
        )
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Clean one table end to end. The only fatal errors are store reads and
/// writes; every row-level problem ends up in the audits or as an absent
/// cell, matching the source's diagnostic-only checks.
pub fn clean_table(conn: &mut Connection, job: &TableJob) -> Result<TableRun> {
    let raw = read_table(conn, job.name)
        .with_context(|| format!("Cannot read raw table '{}'", job.name))?;

    let pre_audit = audit_table(&raw, job.key, job.required);

    let mut cleaned = Table::new(
        &job.cleaned_name(),
        job.columns.iter().map(|c| c.to_string()).collect(),
    );
    cleaned.rows = (job.clean)(&raw);

    if job.ordered {
        if let Some(key_idx) = cleaned.col(job.key) {
            cleaned.rows.sort_by(|a, b| key_order(&a[key_idx], &b[key_idx]));
        }
    }

    // Columns that were consumed by decoding (client.birth_number) are not
    // part of the output shape, so only audit the ones that survived.
    let post_required: Vec<&str> = job
        .required
        .iter()
        .copied()
        .filter(|c| job.columns.contains(c))
        .collect();
    let post_audit = audit_table(&cleaned, job.key, &post_required);

    write_table(conn, &cleaned)
        .with_context(|| format!("Cannot write table '{}'", cleaned.name))?;

    Ok(TableRun {
        table: job.name.to_string(),
        cleaned_table: cleaned.name.clone(),
        rows: cleaned.rows.len(),
        pre_audit,
        post_audit,
    })
}

/// Run the fixed eight-job set. Jobs share no state; order is fixed only so
/// output is deterministic.
pub fn run_all(conn: &mut Connection) -> Result<Vec<TableRun>> {
    let mut runs = Vec::new();
    for job in jobs() {
        runs.push(clean_table(conn, &job)?);
    }
    Ok(runs)
}

fn key_order(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        _ => a.render().cmp(&b.render()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
