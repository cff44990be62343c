//! Load structured transaction records from a CSV export.
//!
//! Expected header: `bank,type,amount,merchant,date,balance` with ISO dates
//! and `type` one of debit/credit. Rows that fail to parse are skipped.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use ledger_core::{Transaction, TxnType};

/// Parse a CSV file of transaction records.
pub fn parse_transactions_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    read_transactions(file)
}

/// Parse transaction records from any CSV reader.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let txn_type = match record.get(1).unwrap_or("") {
            "debit" => TxnType::Debit,
            "credit" => TxnType::Credit,
            _ => continue,
        };

        let amount: i64 = match record.get(2).unwrap_or("").parse() {
            Ok(amount) if amount > 0 => amount,
            _ => continue,
        };

        let date = match NaiveDate::parse_from_str(record.get(4).unwrap_or(""), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => continue,
        };

        let balance: i64 = record.get(5).unwrap_or("0").parse().unwrap_or(0);

        records.push(Transaction::new(
            record.get(0).unwrap_or("").to_string(),
            txn_type,
            amount,
            record.get(3).unwrap_or("").to_string(),
            date,
            balance,
        ));
    }

    Ok(records)
}
