//! ledger-insights: analytics over categorized transaction sets: fraud
//! heuristics, identity fingerprinting, spend forecasting, and budgeting tips.
//!
//! Every component is a pure function of the supplied transaction slice;
//! nothing here caches or mutates shared state, so calls are safe to issue
//! concurrently from independent requests.

pub mod fingerprint;
pub mod forecast;
pub mod fraud;
pub mod tips;

pub use fingerprint::{build_fingerprint, Fingerprint, TrajectoryPoint};
pub use forecast::{forecast, CategoryForecast, Trend, DEFAULT_HORIZON_DAYS};
pub use fraud::{detect_fraud, FraudAlert, FraudReason};
pub use tips::{metrics_for, tip_for, TipMetrics};

use anyhow::{bail, Result};
use ledger_core::{Category, Transaction};

/// Analytics assume the categorizer pre-pass already ran; a record without a
/// category is rejected rather than defaulted.
pub(crate) fn require_category(txn: &Transaction) -> Result<Category> {
    match txn.category {
        Some(category) => Ok(category),
        None => bail!("uncategorized transaction for merchant '{}'", txn.merchant),
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ledger_core::TxnType;

    #[test]
    fn test_require_category_rejects_raw_records() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let raw = Transaction::new("HDFC", TxnType::Debit, 100, "Zomato", date, 900);
        assert!(require_category(&raw).is_err());
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round1(33.3333), 33.3);
        assert_eq!(round1(-16.66), -16.7);
        assert_eq!(round2(1733.3333), 1733.33);
    }
}
