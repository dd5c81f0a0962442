// Order - permanent payment orders, blank-padded k_symbol

use super::{pass, TableJob};
use crate::recode::order_k_symbol;
use crate::store::{Table, Value};

pub fn job() -> TableJob {
    TableJob {
        name: "order",
        key: "order_id",
        required: &["order_id", "account_id", "bank_to", "account_to", "amount"],
        ordered: false,
        columns: &[
            "order_id", "account_id", "bank_to", "account_to", "amount", "k_symbol",
        ],
        clean,
    }
}

fn clean(raw: &Table) -> Vec<Vec<Value>> {
    let k_symbol = order_k_symbol();

    raw.rows
        .iter()
        .map(|row| {
            vec![
                pass(raw.cell(row, "order_id")),
                pass(raw.cell(row, "account_id")),
                pass(raw.cell(row, "bank_to")),
                pass(raw.cell(row, "account_to")),
                pass(raw.cell(row, "amount")),
                k_symbol.recode(raw.cell(row, "k_symbol")),
            ]
        })
        .collect()
}
