//! Synthetic bank-SMS transaction generator.
//!
//! Stands in for a real SMS inbox: emits already-structured records in the
//! schema the categorizer expects, `category` left unset. A fixed seed makes
//! the output reproducible for tests and demos.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ledger_core::{Transaction, TxnType};

/// Default dataset size per request
pub const DEFAULT_COUNT: usize = 100;

/// How many trailing days the generated dates span
const DATE_SPAN_DAYS: i64 = 30;

const BANKS: &[&str] = &["HDFC", "ICICI", "SBI", "AXIS"];

/// Debit merchants, skewed toward everyday spend across the category space
const DEBIT_MERCHANTS: &[&str] = &[
    "Zomato",
    "Swiggy Instamart",
    "Dominos Pizza",
    "Amazon Pay",
    "Flipkart",
    "Myntra Store",
    "Uber Trip",
    "Ola Cabs",
    "IRCTC Rail",
    "Airtel Recharge",
    "Jio Broadband",
    "Electricity Board",
    "Netflix",
    "BookMyShow",
    "Hotstar",
    "LIC Insurance",
    "Apollo Pharmacy",
    "HDFC Bank ATM",
];

const CREDIT_MERCHANTS: &[&str] = &["Salary", "Interest Credit", "Refund", "Cashback"];

/// Generate `count` records ending today. Pass a seed for reproducibility.
pub fn generate(count: usize, seed: Option<u64>) -> Vec<Transaction> {
    generate_from(Utc::now().date_naive(), count, seed)
}

/// Generate `count` records with dates in the `DATE_SPAN_DAYS` window ending
/// at `latest`.
pub fn generate_from(latest: NaiveDate, count: usize, seed: Option<u64>) -> Vec<Transaction> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut balance: i64 = rng.gen_range(20_000..80_000);
    let mut records = Vec::with_capacity(count);

    for _ in 0..count {
        let is_credit = rng.gen_bool(0.2);

        let (merchant, txn_type, amount) = if is_credit {
            let merchant = CREDIT_MERCHANTS[rng.gen_range(0..CREDIT_MERCHANTS.len())];
            (merchant, TxnType::Credit, rng.gen_range(500..30_000))
        } else {
            let merchant = DEBIT_MERCHANTS[rng.gen_range(0..DEBIT_MERCHANTS.len())];
            (merchant, TxnType::Debit, rng.gen_range(50..8_000))
        };

        let date = latest - Duration::days(rng.gen_range(0..DATE_SPAN_DAYS));
        balance += if is_credit { amount } else { -amount };

        records.push(Transaction::new(
            BANKS[rng.gen_range(0..BANKS.len())],
            txn_type,
            amount,
            merchant,
            date,
            balance,
        ));
    }

    records
}

/// Render a record the way the bank alert SMS it simulates would read.
pub fn sms_text(txn: &Transaction) -> String {
    match txn.txn_type {
        TxnType::Debit => format!(
            "{}: Rs.{} debited at {} on {}. Avl bal: Rs.{}",
            txn.bank, txn.amount, txn.merchant, txn.date, txn.balance
        ),
        TxnType::Credit => format!(
            "{}: Rs.{} credited from {} on {}. Avl bal: Rs.{}",
            txn.bank, txn.amount, txn.merchant, txn.date, txn.balance
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
    }

    #[test]
    fn test_generates_requested_count_uncategorized() {
        let records = generate_from(start(), 100, Some(7));
        assert_eq!(records.len(), 100);
        assert!(records.iter().all(|t| t.category.is_none()));
    }

    #[test]
    fn test_amounts_positive_and_dates_in_window() {
        let records = generate_from(start(), 200, Some(11));
        let floor = start() - Duration::days(DATE_SPAN_DAYS);
        for txn in &records {
            assert!(txn.amount > 0);
            assert!(txn.date > floor && txn.date <= start());
            assert!(BANKS.contains(&txn.bank.as_str()));
        }
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let first = generate_from(start(), 50, Some(42));
        let second = generate_from(start(), 50, Some(42));
        assert_eq!(first, second);

        let other_seed = generate_from(start(), 50, Some(43));
        assert_ne!(first, other_seed);
    }

    #[test]
    fn test_mix_of_debits_and_credits() {
        let records = generate_from(start(), 200, Some(3));
        let credits = records.iter().filter(|t| t.is_credit()).count();
        assert!(credits > 0 && credits < records.len());
        for txn in records.iter().filter(|t| t.is_credit()) {
            assert!(CREDIT_MERCHANTS.contains(&txn.merchant.as_str()));
        }
    }

    #[test]
    fn test_sms_text_rendering() {
        let txn = Transaction::new("HDFC", TxnType::Debit, 450, "Zomato", start(), 12_550);
        assert_eq!(
            sms_text(&txn),
            "HDFC: Rs.450 debited at Zomato on 2026-04-15. Avl bal: Rs.12550"
        );

        let credit = Transaction::new("SBI", TxnType::Credit, 2000, "Salary", start(), 14_550);
        assert!(sms_text(&credit).contains("credited from Salary"));
    }
}
