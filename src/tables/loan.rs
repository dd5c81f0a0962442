// Loan - 19-prefixed date, status code recode, all columns required

use super::{cell_int, date_cell, pass, TableJob};
use crate::decode::decode_prefixed_date;
use crate::recode::loan_status;
use crate::store::{Table, Value};

pub fn job() -> TableJob {
    TableJob {
        name: "loan",
        key: "loan_id",
        required: &[
            "loan_id", "account_id", "date", "amount", "duration", "payments", "status",
        ],
        ordered: true,
        columns: &[
            "loan_id", "account_id", "date", "amount", "duration", "payments", "status",
        ],
        clean,
    }
}

fn clean(raw: &Table) -> Vec<Vec<Value>> {
    let status = loan_status();

    raw.rows
        .iter()
        .map(|row| {
            vec![
                pass(raw.cell(row, "loan_id")),
                pass(raw.cell(row, "account_id")),
                date_cell(cell_int(raw.cell(row, "date")).and_then(decode_prefixed_date)),
                pass(raw.cell(row, "amount")),
                pass(raw.cell(row, "duration")),
                pass(raw.cell(row, "payments")),
                status.recode(raw.cell(row, "status")),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table() -> Table {
        let mut t = Table::new(
            "loan",
            vec![
                "loan_id".to_string(),
                "account_id".to_string(),
                "date".to_string(),
                "amount".to_string(),
                "duration".to_string(),
                "payments".to_string(),
                "status".to_string(),
            ],
        );
        t.rows.push(vec![
            Value::Int(4959),
            Value::Int(2),
            Value::Int(940105),
            Value::Int(80952),
            Value::Int(24),
            Value::Real(3373.0),
            Value::Text("A".to_string()),
        ]);
        t
    }

    #[test]
    fn test_loan_date_and_status_clean() {
        let cleaned = clean(&raw_table());

        assert_eq!(cleaned[0][2], Value::Text("1994-01-05".to_string()));
        assert_eq!(
            cleaned[0][6],
            Value::Text("Contract finished, no problems".to_string())
        );
    }

    #[test]
    fn test_five_digit_date_decodes_to_absent() {
        // "19" + "93030" is seven characters, not a date
        let mut t = raw_table();
        t.rows[0][2] = Value::Int(93030);
        t.rows[0][6] = Value::Text("D".to_string());

        let cleaned = clean(&t);
        assert_eq!(cleaned[0][2], Value::Null);
        assert_eq!(
            cleaned[0][6],
            Value::Text("Running contract, client in debt".to_string())
        );
    }

    #[test]
    fn test_unknown_status_is_absent() {
        let mut t = raw_table();
        t.rows[0][6] = Value::Text("X".to_string());

        let cleaned = clean(&t);
        assert_eq!(cleaned[0][6], Value::Null);
    }
}
