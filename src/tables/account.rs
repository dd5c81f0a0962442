// Account - statement frequency recode + packed opening date

use super::{cell_int, date_cell, pass, TableJob};
use crate::decode::decode_padded_date;
use crate::recode::account_frequency;
use crate::store::{Table, Value};

pub fn job() -> TableJob {
    TableJob {
        name: "account",
        key: "account_id",
        required: &["account_id", "district_id", "frequency", "date"],
        ordered: false,
        columns: &["account_id", "district_id", "frequency", "date"],
        clean,
    }
}

fn clean(raw: &Table) -> Vec<Vec<Value>> {
    let frequency = account_frequency();

    raw.rows
        .iter()
        .map(|row| {
            vec![
                pass(raw.cell(row, "account_id")),
                pass(raw.cell(row, "district_id")),
                frequency.recode(raw.cell(row, "frequency")),
                date_cell(cell_int(raw.cell(row, "date")).and_then(decode_padded_date)),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table() -> Table {
        let mut t = Table::new(
            "account",
            vec![
                "account_id".to_string(),
                "district_id".to_string(),
                "frequency".to_string(),
                "date".to_string(),
            ],
        );
        t.rows.push(vec![
            Value::Int(576),
            Value::Int(55),
            Value::Text("POPLATEK MESICNE".to_string()),
            Value::Int(930322),
        ]);
        t
    }

    #[test]
    fn test_account_row_cleans_to_label_and_iso_date() {
        let cleaned = clean(&raw_table());

        assert_eq!(
            cleaned[0],
            vec![
                Value::Int(576),
                Value::Int(55),
                Value::Text("Monthly Issuance".to_string()),
                Value::Text("1993-03-22".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_frequency_passes_through() {
        let mut t = raw_table();
        t.rows[0][2] = Value::Text("POPLATEK ROCNE".to_string());

        let cleaned = clean(&t);
        assert_eq!(cleaned[0][2], Value::Text("POPLATEK ROCNE".to_string()));
    }

    #[test]
    fn test_bad_packed_date_becomes_absent() {
        let mut t = raw_table();
        t.rows[0][3] = Value::Int(931332); // month 13

        let cleaned = clean(&t);
        assert_eq!(cleaned[0][3], Value::Null);
    }
}
