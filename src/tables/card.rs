// Card - issue date carries a time part that is always zero

use super::{cell_int, date_cell, pass, TableJob};
use crate::decode::{decode_issued_date, decode_padded_date};
use crate::store::{Table, Value};

pub fn job() -> TableJob {
    TableJob {
        name: "card",
        key: "card_id",
        required: &["card_id", "disp_id", "type", "issued"],
        ordered: false,
        columns: &["card_id", "disp_id", "type", "issued"],
        clean,
    }
}

fn clean(raw: &Table) -> Vec<Vec<Value>> {
    raw.rows
        .iter()
        .map(|row| {
            vec![
                pass(raw.cell(row, "card_id")),
                pass(raw.cell(row, "disp_id")),
                pass(raw.cell(row, "type")),
                date_cell(issued_date(raw.cell(row, "issued"))),
            ]
        })
        .collect()
}

/// The issued field shows up as `"931107 00:00:00"` text in the CSV export
/// and as a bare packed integer when the time part was stripped upstream.
fn issued_date(value: &Value) -> Option<chrono::NaiveDate> {
    match value {
        Value::Text(s) => decode_issued_date(s),
        other => cell_int(other).and_then(decode_padded_date),
    }
}
