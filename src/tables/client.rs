// Client - birth_number splits into birthday + derived gender

use super::{cell_int, date_cell, pass, TableJob};
use crate::decode::decode_birth_number;
use crate::store::{Table, Value};

pub fn job() -> TableJob {
    TableJob {
        name: "client",
        key: "client_id",
        required: &["client_id", "birth_number", "district_id"],
        ordered: true,
        columns: &["client_id", "gender", "birthday", "district_id"],
        clean,
    }
}

fn clean(raw: &Table) -> Vec<Vec<Value>> {
    raw.rows
        .iter()
        .map(|row| {
            let decoded = cell_int(raw.cell(row, "birth_number")).and_then(decode_birth_number);

            let gender = match &decoded {
                Some(d) => Value::Text(d.gender.as_str().to_string()),
                None => Value::Null,
            };
            let birthday = date_cell(decoded.and_then(|d| d.birthday));

            vec![
                pass(raw.cell(row, "client_id")),
                gender,
                birthday,
                pass(raw.cell(row, "district_id")),
            ]
        })
        .collect()
}
