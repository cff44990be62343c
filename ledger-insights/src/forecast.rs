//! Per-category spend trend and short-horizon projection.
//!
//! Daily sums feeding the regression include credits as well as debits,
//! unlike the debit-only aggregates in the fingerprint; consumers comparing
//! the two should expect the difference.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use ledger_core::{Category, Transaction};

use crate::{require_category, round2};

/// Projection window when the caller does not override it
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Direction of the fitted spend line. A flat line reads as decreasing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Trend {
    #[serde(rename = "increasing")]
    Increasing,
    #[serde(rename = "decreasing")]
    Decreasing,
}

/// Fitted trend plus projected daily amounts, keyed by ISO date so the map
/// iterates chronologically.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryForecast {
    pub trend: Trend,
    pub next_days: BTreeMap<String, f64>,
}

/// Fit a per-category daily-spend line and project `horizon_days` dates past
/// the latest observation. Categories with fewer than two distinct dates
/// carry no trend and are skipped.
pub fn forecast(
    transactions: &[Transaction],
    horizon_days: u32,
) -> Result<BTreeMap<Category, CategoryForecast>> {
    let mut daily_sums: BTreeMap<Category, BTreeMap<NaiveDate, i64>> = BTreeMap::new();

    for txn in transactions {
        let category = require_category(txn)?;
        *daily_sums
            .entry(category)
            .or_default()
            .entry(txn.date)
            .or_insert(0) += txn.amount;
    }

    let mut out = BTreeMap::new();

    for (category, by_date) in daily_sums {
        if by_date.len() < 2 {
            continue;
        }

        let points: Vec<(f64, f64)> = by_date
            .iter()
            .map(|(date, sum)| (date.num_days_from_ce() as f64, *sum as f64))
            .collect();
        let (slope, intercept) = fit_line(&points);

        let trend = if slope > 0.0 {
            Trend::Increasing
        } else {
            Trend::Decreasing
        };

        let Some((&latest, _)) = by_date.iter().next_back() else {
            continue;
        };

        let mut next_days = BTreeMap::new();
        for offset in 1..=i64::from(horizon_days) {
            let date = latest + Duration::days(offset);
            let predicted = slope * date.num_days_from_ce() as f64 + intercept;
            next_days.insert(date.format("%Y-%m-%d").to_string(), round2(predicted));
        }

        out.insert(category, CategoryForecast { trend, next_days });
    }

    Ok(out)
}

/// Ordinary least squares over (x, y) points; returns (slope, intercept).
fn fit_line(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
    let sum_x2: f64 = points.iter().map(|(x, _)| x * x).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return (0.0, sum_y / n);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    (slope, intercept)
}
