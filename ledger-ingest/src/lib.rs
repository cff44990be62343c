//! ledger-ingest: producers of raw transaction records (the synthetic
//! bank-SMS generator and a CSV importer). Records leave here uncategorized.

pub mod csv_import;
pub mod generator;

pub use csv_import::{parse_transactions_csv, read_transactions};
pub use generator::{generate, generate_from, sms_text, DEFAULT_COUNT};
