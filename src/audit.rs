// Table audits - duplicate keys and absent required fields
// Findings are advisory data-quality notes, never execution failures; the
// pipeline runs the same audit before and after cleaning.

use crate::recode::normalize_sentinel;
use crate::store::{Table, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// FINDINGS
// ============================================================================

/// A primary-key value that appears on more than one row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateKey {
    pub key: String,
    pub count: usize,
}

/// A row whose required column holds no usable value (true null or one of
/// the source's sentinel placeholders).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingField {
    /// Zero-based row index in the audited table.
    pub row: usize,
    pub column: String,
    /// Rendered key of the offending row, for locating it in the source.
    pub key: String,
}

/// Audit report for one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableAudit {
    pub table: String,
    pub row_count: usize,
    pub duplicate_keys: Vec<DuplicateKey>,
    pub missing_required: Vec<MissingField>,
}

impl TableAudit {
    pub fn is_clean(&self) -> bool {
        self.duplicate_keys.is_empty() && self.missing_required.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.duplicate_keys.len() + self.missing_required.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} rows | {} duplicate keys, {} missing required values",
            self.table,
            self.row_count,
            self.duplicate_keys.len(),
            self.missing_required.len()
        )
    }
}

// ============================================================================
// AUDIT
// ============================================================================

/// Check one table against its key and required-column declarations.
/// Groups rows by key and flags groups larger than one; tests every required
/// column for absence after sentinel normalization. Never mutates, never
/// fails on row-level problems.
pub fn audit_table(table: &Table, key: &str, required: &[&str]) -> TableAudit {
    let mut key_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut missing_required = Vec::new();

    for (idx, row) in table.rows.iter().enumerate() {
        let key_value = table.cell(row, key);
        *key_counts.entry(key_value.render()).or_insert(0) += 1;

        for column in required {
            if is_absent(table.cell(row, column)) {
                missing_required.push(MissingField {
                    row: idx,
                    column: column.to_string(),
                    key: key_value.render(),
                });
            }
        }
    }

    let duplicate_keys = key_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, count)| DuplicateKey { key, count })
        .collect();

    TableAudit {
        table: table.name.clone(),
        row_count: table.len(),
        duplicate_keys,
        missing_required,
    }
}

/// Absent means true null or a sentinel placeholder.
fn is_absent(value: &Value) -> bool {
    normalize_sentinel(value).is_null()
}

// ============================================================================
// TESTS
// ============================================================================
