// Disposition - pure passthrough, validation only

use super::{pass, TableJob};
use crate::store::{Table, Value};

pub fn job() -> TableJob {
    TableJob {
        name: "disp",
        key: "disp_id",
        required: &["disp_id", "client_id", "account_id", "type"],
        ordered: false,
        columns: &["disp_id", "client_id", "account_id", "type"],
        clean,
    }
}

fn clean(raw: &Table) -> Vec<Vec<Value>> {
    raw.rows
        .iter()
        .map(|row| {
            vec![
                pass(raw.cell(row, "disp_id")),
                pass(raw.cell(row, "client_id")),
                pass(raw.cell(row, "account_id")),
                pass(raw.cell(row, "type")),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_passes_through_unchanged() {
        let mut t = Table::new(
            "disp",
            vec![
                "disp_id".to_string(),
                "client_id".to_string(),
                "account_id".to_string(),
                "type".to_string(),
            ],
        );
        t.rows.push(vec![
            Value::Int(1),
            Value::Int(1),
            Value::Int(1),
            Value::Text("OWNER".to_string()),
        ]);

        let cleaned = clean(&t);
        assert_eq!(cleaned[0], t.rows[0]);
    }
}
