// Transaction - the widest table: three recoded columns, 19-prefixed date,
// and two passthrough partner columns with empty-string sentinels

use super::{cell_int, date_cell, pass, TableJob};
use crate::decode::decode_prefixed_date;
use crate::recode::{trans_k_symbol, trans_operation, trans_type};
use crate::store::{Table, Value};

pub fn job() -> TableJob {
    TableJob {
        name: "trans",
        key: "trans_id",
        required: &["trans_id", "account_id", "date"],
        ordered: false,
        columns: &[
            "trans_id",
            "account_id",
            "date",
            "type",
            "operation",
            "amount",
            "balance",
            "k_symbol",
            "bank",
            "account",
        ],
        clean,
    }
}

fn clean(raw: &Table) -> Vec<Vec<Value>> {
    let tx_type = trans_type();
    let operation = trans_operation();
    let k_symbol = trans_k_symbol();

    raw.rows
        .iter()
        .map(|row| {
            vec![
                pass(raw.cell(row, "trans_id")),
                pass(raw.cell(row, "account_id")),
                date_cell(cell_int(raw.cell(row, "date")).and_then(decode_prefixed_date)),
                tx_type.recode(raw.cell(row, "type")),
                operation.recode(raw.cell(row, "operation")),
                pass(raw.cell(row, "amount")),
                pass(raw.cell(row, "balance")),
                k_symbol.recode(raw.cell(row, "k_symbol")),
                // partner bank and account: no vocabulary, sentinel-normalized
                pass(raw.cell(row, "bank")),
                pass(raw.cell(row, "account")),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_table() -> Table {
        let mut t = Table::new(
            "trans",
            vec![
                "trans_id".to_string(),
                "account_id".to_string(),
                "date".to_string(),
                "type".to_string(),
                "operation".to_string(),
                "amount".to_string(),
                "balance".to_string(),
                "k_symbol".to_string(),
                "bank".to_string(),
                "account".to_string(),
            ],
        );
        t.rows.push(vec![
            Value::Int(695247),
            Value::Int(2378),
            Value::Int(930101),
            Value::Text("PRIJEM".to_string()),
            Value::Text("VYBER KARTOU".to_string()),
            Value::Real(700.0),
            Value::Real(700.0),
            Value::Text("".to_string()),
            Value::Text("".to_string()),
            Value::Null,
        ]);
        t
    }

    #[test]
    fn test_trans_row_cleans_codes_and_sentinels() {
        let cleaned = clean(&raw_table());

        assert_eq!(cleaned[0][2], Value::Text("1993-01-01".to_string()));
        assert_eq!(cleaned[0][3], Value::Text("Credit".to_string()));
        assert_eq!(
            cleaned[0][4],
            Value::Text("Credit Card withdrawal".to_string())
        );
        assert_eq!(cleaned[0][7], Value::Null); // empty k_symbol
        assert_eq!(cleaned[0][8], Value::Null); // empty bank
    }

    #[test]
    fn test_trans_k_symbol_two_sentinels_and_labels() {
        let mut t = raw_table();
        t.rows[0][7] = Value::Text(" ".to_string());
        let cleaned = clean(&t);
        assert_eq!(cleaned[0][7], Value::Null);

        t.rows[0][7] = Value::Text("UROK".to_string());
        let cleaned = clean(&t);
        assert_eq!(cleaned[0][7], Value::Text("Interest Credited".to_string()));
    }

    #[test]
    fn test_partner_bank_passes_real_values() {
        let mut t = raw_table();
        t.rows[0][8] = Value::Text("AB".to_string());

        let cleaned = clean(&t);
        assert_eq!(cleaned[0][8], Value::Text("AB".to_string()));
    }
}
