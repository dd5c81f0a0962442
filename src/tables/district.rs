// District - demographic attributes A1..A16, '?' sentinels in A12/A15

use super::{pass, TableJob};
use crate::store::{Table, Value};

const COLUMNS: &[&str] = &[
    "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10", "A11", "A12", "A13", "A14",
    "A15", "A16",
];

pub fn job() -> TableJob {
    TableJob {
        name: "district",
        key: "A1",
        required: &[
            "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10", "A11", "A13", "A14",
            "A16",
        ],
        ordered: true,
        columns: COLUMNS,
        clean,
    }
}

// A12 (unemployment '95) and A15 (crimes '95) use '?' for missing values;
// everything else passes through as-is.
fn clean(raw: &Table) -> Vec<Vec<Value>> {
    raw.rows
        .iter()
        .map(|row| COLUMNS.iter().map(|c| pass(raw.cell(row, c))).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table() -> Table {
        let mut t = Table::new(
            "district",
            COLUMNS.iter().map(|c| c.to_string()).collect(),
        );
        let mut row: Vec<Value> = (1..=16).map(Value::Int).collect();
        row[1] = Value::Text("Hl.m. Praha".to_string());
        row[11] = Value::Text("?".to_string()); // A12
        row[14] = Value::Text("0.43".to_string()); // A15
        t.rows.push(row);
        t
    }

    #[test]
    fn test_question_mark_sentinel_becomes_absent() {
        let cleaned = clean(&raw_table());
        assert_eq!(cleaned[0][11], Value::Null);
    }

    #[test]
    fn test_real_values_pass_through_unchanged() {
        let cleaned = clean(&raw_table());
        assert_eq!(cleaned[0][14], Value::Text("0.43".to_string()));
        assert_eq!(cleaned[0][1], Value::Text("Hl.m. Praha".to_string()));
        assert_eq!(cleaned[0][0], Value::Int(1));
    }
}
