// Berka Cleaning Pipeline - Core Library
// Exposes all modules for use in the CLI and tests

pub mod audit;
pub mod decode;
pub mod import;
pub mod pipeline;
pub mod recode;
pub mod store;
pub mod tables;

// Re-export commonly used types
pub use audit::{audit_table, DuplicateKey, MissingField, TableAudit};
pub use decode::{
    decode_birth_number, decode_issued_date, decode_padded_date, decode_prefixed_date,
    encode_padded_date, BirthDecode, Gender,
};
pub use import::import_dir;
pub use pipeline::{clean_table, run_all, TableRun};
pub use recode::{
    account_frequency, loan_status, normalize_sentinel, order_k_symbol, trans_k_symbol,
    trans_operation, trans_type, CodeBook, UnmappedPolicy,
};
pub use store::{open_store, read_table, table_count, write_table, Table, Value};
pub use tables::{jobs, TableJob};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
