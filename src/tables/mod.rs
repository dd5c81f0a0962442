// Table cleaning jobs - one module per Berka source table
// Each module declares its key, required columns, output shape, and the
// row assembly that combines decoded and recoded cells.

pub mod account;
pub mod card;
pub mod client;
pub mod disp;
pub mod district;
pub mod loan;
pub mod order;
pub mod trans;

use crate::recode::normalize_sentinel;
use crate::store::{Table, Value};
use chrono::NaiveDate;

// ============================================================================
// JOB DECLARATION
// ============================================================================

/// Everything the pipeline needs to clean one source table.
pub struct TableJob {
    /// Raw table name in the store.
    pub name: &'static str,
    /// Primary key column (unique within the table).
    pub key: &'static str,
    /// Columns that must be populated in every cleaned row.
    pub required: &'static [&'static str],
    /// Cleaned output is sorted by key ascending when set; the source only
    /// orders client, loan, and district.
    pub ordered: bool,
    /// Column names of the cleaned table, in output order.
    pub columns: &'static [&'static str],
    /// Assemble all cleaned rows from the raw table.
    pub clean: fn(&Table) -> Vec<Vec<Value>>,
}

impl TableJob {
    pub fn cleaned_name(&self) -> String {
        format!("cleaned_{}", self.name)
    }
}

/// The fixed job set, one per source table.
pub fn jobs() -> Vec<TableJob> {
    vec![
        account::job(),
        card::job(),
        client::job(),
        disp::job(),
        district::job(),
        loan::job(),
        order::job(),
        trans::job(),
    ]
}

// ============================================================================
// SHARED CELL HELPERS
// ============================================================================

/// Passthrough with sentinel normalization: cleaned output never carries
/// `'?'`, empty, or blank cells, whatever the column.
pub(crate) fn pass(value: &Value) -> Value {
    normalize_sentinel(value)
}

/// Numeric view of a cell: integers directly, digit strings parsed. The raw
/// tables store packed dates either way depending on how they were imported.
pub(crate) fn cell_int(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// ISO `YYYY-MM-DD` text for a decoded date, Null for a decode failure.
pub(crate) fn date_cell(date: Option<NaiveDate>) -> Value {
    match date {
        Some(d) => Value::Text(d.format("%Y-%m-%d").to_string()),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_cover_all_eight_tables() {
        let names: Vec<&str> = jobs().iter().map(|j| j.name).collect();
        assert_eq!(
            names,
            vec!["account", "card", "client", "disp", "district", "loan", "order", "trans"]
        );
    }

    #[test]
    fn test_cleaned_names() {
        assert_eq!(account::job().cleaned_name(), "cleaned_account");
        assert_eq!(trans::job().cleaned_name(), "cleaned_trans");
    }

    #[test]
    fn test_cell_int_reads_digit_text() {
        assert_eq!(cell_int(&Value::Int(930322)), Some(930322));
        assert_eq!(cell_int(&Value::Text("930322".to_string())), Some(930322));
        assert_eq!(cell_int(&Value::Text("abc".to_string())), None);
        assert_eq!(cell_int(&Value::Null), None);
    }

    #[test]
    fn test_date_cell_renders_iso() {
        let d = chrono::NaiveDate::from_ymd_opt(1993, 3, 22);
        assert_eq!(date_cell(d), Value::Text("1993-03-22".to_string()));
        assert_eq!(date_cell(None), Value::Null);
    }
}
