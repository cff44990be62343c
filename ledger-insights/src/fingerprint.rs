//! Identity fingerprint: aggregate statistics describing spending behavior.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use ledger_core::{Category, Transaction, TxnType};

use crate::{require_category, round1, round2};

/// One debit observation in a category's spending history, input order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrajectoryPoint {
    pub date: NaiveDate,
    pub amount: i64,
}

/// Aggregate behavioral summary of a transaction set.
///
/// Percentages are rounded to 1 decimal, the average to 2. Maps are keyed by
/// category so the serialized envelope is deterministic.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Fingerprint {
    /// Category share of total debit spend, in percent
    pub spending_distribution: BTreeMap<Category, f64>,
    /// Mean debit amount
    pub average_transaction: f64,
    /// Count of all transactions per category, credits included
    pub frequency_per_category: BTreeMap<Category, usize>,
    /// 100 x (credit - debit) / credit; negative when spending exceeds income
    pub savings_rate: f64,
    /// Debit-only {date, amount} history per category
    pub behavior_trajectory: BTreeMap<Category, Vec<TrajectoryPoint>>,
}

/// Build the fingerprint for a categorized transaction set.
pub fn build_fingerprint(transactions: &[Transaction]) -> Result<Fingerprint> {
    let mut debit_by_category: BTreeMap<Category, i64> = BTreeMap::new();
    let mut frequency_per_category: BTreeMap<Category, usize> = BTreeMap::new();
    let mut behavior_trajectory: BTreeMap<Category, Vec<TrajectoryPoint>> = BTreeMap::new();
    let mut total_debit: i64 = 0;
    let mut total_credit: i64 = 0;
    let mut debit_count: usize = 0;

    for txn in transactions {
        let category = require_category(txn)?;
        *frequency_per_category.entry(category).or_insert(0) += 1;

        match txn.txn_type {
            TxnType::Debit => {
                *debit_by_category.entry(category).or_insert(0) += txn.amount;
                total_debit += txn.amount;
                debit_count += 1;
                behavior_trajectory
                    .entry(category)
                    .or_default()
                    .push(TrajectoryPoint {
                        date: txn.date,
                        amount: txn.amount,
                    });
            }
            TxnType::Credit => total_credit += txn.amount,
        }
    }

    // Empty map rather than dividing by zero when there is no debit spend.
    let spending_distribution = if total_debit > 0 {
        debit_by_category
            .iter()
            .map(|(category, sum)| {
                (*category, round1(100.0 * *sum as f64 / total_debit as f64))
            })
            .collect()
    } else {
        BTreeMap::new()
    };

    let average_transaction = if debit_count > 0 {
        round2(total_debit as f64 / debit_count as f64)
    } else {
        0.0
    };

    let savings_rate = if total_credit > 0 {
        round1(100.0 * (total_credit - total_debit) as f64 / total_credit as f64)
    } else {
        0.0
    };

    Ok(Fingerprint {
        spending_distribution,
        average_transaction,
        frequency_per_category,
        savings_rate,
        behavior_trajectory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::categorize_all;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn txn(txn_type: TxnType, amount: i64, merchant: &str, d: u32) -> Transaction {
        Transaction::new("ICICI", txn_type, amount, merchant, day(d), 40_000)
    }

    #[test]
    fn test_rejects_uncategorized_input() {
        let raw = vec![txn(TxnType::Debit, 100, "Zomato", 1)];
        assert!(build_fingerprint(&raw).is_err());
    }

    #[test]
    fn test_distribution_sums_to_hundred() {
        let txns = categorize_all(vec![
            txn(TxnType::Debit, 300, "Zomato", 1),
            txn(TxnType::Debit, 450, "Amazon", 2),
            txn(TxnType::Debit, 250, "Uber", 3),
        ]);

        let fp = build_fingerprint(&txns).unwrap();
        let total: f64 = fp.spending_distribution.values().sum();
        assert!((total - 100.0).abs() < 0.2, "sum was {total}");
    }

    #[test]
    fn test_savings_rate_worked_example() {
        // credit 1000, debit 200 -> 100 * 800 / 1000 = 80.0
        let txns = categorize_all(vec![
            txn(TxnType::Credit, 1000, "Salary", 1),
            txn(TxnType::Debit, 200, "Zomato", 2),
        ]);

        let fp = build_fingerprint(&txns).unwrap();
        assert_eq!(fp.savings_rate, 80.0);
    }

    #[test]
    fn test_savings_rate_can_go_negative() {
        let txns = categorize_all(vec![
            txn(TxnType::Credit, 1000, "Salary", 1),
            txn(TxnType::Debit, 1500, "Amazon", 2),
        ]);

        let fp = build_fingerprint(&txns).unwrap();
        assert_eq!(fp.savings_rate, -50.0);
    }

    #[test]
    fn test_zero_credit_and_zero_debit_guards() {
        let all_debit = categorize_all(vec![txn(TxnType::Debit, 500, "Zomato", 1)]);
        let fp = build_fingerprint(&all_debit).unwrap();
        assert_eq!(fp.savings_rate, 0.0);

        let all_credit = categorize_all(vec![txn(TxnType::Credit, 500, "Salary", 1)]);
        let fp = build_fingerprint(&all_credit).unwrap();
        assert!(fp.spending_distribution.is_empty());
        assert_eq!(fp.average_transaction, 0.0);
        assert_eq!(fp.savings_rate, 100.0);

        let fp = build_fingerprint(&[]).unwrap();
        assert_eq!(fp.average_transaction, 0.0);
        assert_eq!(fp.savings_rate, 0.0);
        assert!(fp.behavior_trajectory.is_empty());
    }

    #[test]
    fn test_frequency_counts_credits_too() {
        let txns = categorize_all(vec![
            txn(TxnType::Debit, 300, "Zomato", 1),
            txn(TxnType::Credit, 2000, "Salary", 1),
            txn(TxnType::Credit, 2000, "Salary", 2),
        ]);

        let fp = build_fingerprint(&txns).unwrap();
        assert_eq!(fp.frequency_per_category.get(&Category::Food), Some(&1));
        assert_eq!(fp.frequency_per_category.get(&Category::Other), Some(&2));
    }

    #[test]
    fn test_trajectory_is_debit_only_and_input_ordered() {
        // Deliberately out of date order; trajectory preserves input order.
        let txns = categorize_all(vec![
            txn(TxnType::Debit, 300, "Zomato", 9),
            txn(TxnType::Credit, 2000, "Salary", 1),
            txn(TxnType::Debit, 150, "Swiggy", 2),
        ]);

        let fp = build_fingerprint(&txns).unwrap();
        let food = &fp.behavior_trajectory[&Category::Food];
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].date, day(9));
        assert_eq!(food[1].date, day(2));
        assert!(!fp.behavior_trajectory.contains_key(&Category::Other));
    }

    #[test]
    fn test_average_transaction_rounding() {
        let txns = categorize_all(vec![
            txn(TxnType::Debit, 100, "Zomato", 1),
            txn(TxnType::Debit, 100, "Zomato", 1),
            txn(TxnType::Debit, 5000, "Zomato", 2),
        ]);

        let fp = build_fingerprint(&txns).unwrap();
        assert_eq!(fp.average_transaction, 1733.33);
    }

    #[test]
    fn test_fingerprint_serialization_keys() {
        let txns = categorize_all(vec![
            txn(TxnType::Debit, 300, "Zomato", 1),
            txn(TxnType::Credit, 1000, "Salary", 1),
        ]);

        let json = serde_json::to_value(build_fingerprint(&txns).unwrap()).unwrap();
        assert_eq!(json["spending_distribution"]["Food"], 100.0);
        assert_eq!(json["frequency_per_category"]["Other"], 1);
        assert_eq!(json["behavior_trajectory"]["Food"][0]["amount"], 300);
    }
}
