//! Heuristic fraud rules over a categorized transaction set.
//!
//! Three independent rules are evaluated per transaction; a transaction that
//! triggers at least one becomes an alert carrying every reason that fired.
//! The novel-merchant rule walks the input in order and flags first
//! occurrences, so input ordering is part of the contract.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledger_core::{Category, Transaction};

use crate::require_category;

/// Debit amounts above this multiple of the category mean are outliers.
const HIGH_VALUE_MULTIPLIER: f64 = 3.0;

/// More than this many transactions in one (category, day) group is unusual.
const DAILY_FREQUENCY_LIMIT: usize = 5;

/// Rule that fired for a flagged transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FraudReason {
    #[serde(rename = "high_value")]
    HighValue,
    #[serde(rename = "unusual_frequency")]
    UnusualFrequency,
    #[serde(rename = "novel_merchant")]
    NovelMerchant,
}

/// A transaction that triggered at least one fraud rule.
///
/// Serializes as the transaction record itself plus a `reasons` list, in the
/// fixed rule order (high-value, frequency, novel-merchant).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FraudAlert {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub reasons: Vec<FraudReason>,
}

/// Scan a categorized transaction set and return alerts in input order.
/// The input is never mutated; alerts carry copies.
pub fn detect_fraud(transactions: &[Transaction]) -> Result<Vec<FraudAlert>> {
    // Pass 1: mean debit amount per category and (category, day) group sizes
    // over the whole set.
    let mut debit_totals: HashMap<Category, (i64, usize)> = HashMap::new();
    let mut day_counts: HashMap<(Category, NaiveDate), usize> = HashMap::new();

    for txn in transactions {
        let category = require_category(txn)?;
        if txn.is_debit() {
            let entry = debit_totals.entry(category).or_insert((0, 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }
        *day_counts.entry((category, txn.date)).or_insert(0) += 1;
    }

    let category_means: HashMap<Category, f64> = debit_totals
        .into_iter()
        .map(|(category, (sum, count))| (category, sum as f64 / count as f64))
        .collect();

    // Pass 2: evaluate rules in input order.
    let mut seen_merchants: HashSet<String> = HashSet::new();
    let mut alerts = Vec::new();

    for txn in transactions {
        let category = require_category(txn)?;
        let mut reasons = Vec::new();

        if txn.is_debit() {
            let mean = category_means.get(&category).copied().unwrap_or(0.0);
            if txn.amount as f64 > HIGH_VALUE_MULTIPLIER * mean {
                reasons.push(FraudReason::HighValue);
            }
        }

        let group = day_counts
            .get(&(category, txn.date))
            .copied()
            .unwrap_or(0);
        if group > DAILY_FREQUENCY_LIMIT {
            reasons.push(FraudReason::UnusualFrequency);
        }

        if seen_merchants.insert(txn.merchant.clone()) {
            reasons.push(FraudReason::NovelMerchant);
        }

        if !reasons.is_empty() {
            alerts.push(FraudAlert {
                transaction: txn.clone(),
                reasons,
            });
        }
    }

    Ok(alerts)
}
