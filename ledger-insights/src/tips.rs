//! Canned budgeting tips keyed by category label.
//!
//! Each advised category carries exactly one rule; a rule is a tagged
//! variant testing a single metric, evaluated through one interface instead
//! of embedding closures in the table.

use ledger_core::{Category, Transaction};

use anyhow::Result;

use crate::forecast::{forecast, Trend, DEFAULT_HORIZON_DAYS};
use crate::fraud::{detect_fraud, FraudReason};
use crate::fingerprint::build_fingerprint;

/// Metric bundle a tip rule can test against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipMetrics {
    /// Total debit spend in the category
    pub spend: f64,
    /// Forecast trend for the category
    pub trend: Trend,
    /// Whether a high-value outlier alert fired in the category
    pub spike: bool,
    /// Overall savings rate, in percent
    pub savings_rate: f64,
}

impl Default for TipMetrics {
    fn default() -> Self {
        Self {
            spend: 0.0,
            trend: Trend::Decreasing,
            spike: false,
            savings_rate: 0.0,
        }
    }
}

/// One advisory rule; each variant tests a single metric
#[derive(Debug, Clone, Copy)]
enum TipRule {
    SpendAbove(f64),
    TrendIs(Trend),
    SpikeFlag,
    SavingsBelow(f64),
}

impl TipRule {
    fn applies(&self, metrics: &TipMetrics) -> bool {
        match self {
            TipRule::SpendAbove(limit) => metrics.spend > *limit,
            TipRule::TrendIs(trend) => metrics.trend == *trend,
            TipRule::SpikeFlag => metrics.spike,
            TipRule::SavingsBelow(floor) => metrics.savings_rate < *floor,
        }
    }
}

/// Read-only rule table: capitalized label, rule, canned message.
static TIP_RULES: &[(&str, TipRule, &str)] = &[
    (
        "Food",
        TipRule::SpendAbove(5000.0),
        "Food delivery is taking a big bite out of your budget. Cooking at home a few nights a week could free up a lot.",
    ),
    (
        "Shopping",
        TipRule::SpendAbove(8000.0),
        "Shopping spend is heavy this cycle. Try a 48-hour pause before non-essential purchases.",
    ),
    (
        "Entertainment",
        TipRule::TrendIs(Trend::Increasing),
        "Entertainment spend is trending up. Audit your subscriptions and drop the ones you barely use.",
    ),
    (
        "Utilities",
        TipRule::SpikeFlag,
        "A utilities spike showed up this cycle. Compare the latest bills against your usual baseline.",
    ),
    (
        "Savings",
        TipRule::SavingsBelow(20.0),
        "Your savings rate is below 20%. Set up an automatic transfer right after payday.",
    ),
];

const ON_TRACK: &str = "You're on track in this category. Keep it up!";
const NO_TIPS: &str = "No tips available for this category yet.";

/// Look up the canned tip for a category given its metrics. Matching is
/// case-insensitive; labels without a rule get the no-tips message.
pub fn tip_for(category: &str, metrics: &TipMetrics) -> String {
    let normalized = capitalize(category);

    for (label, rule, message) in TIP_RULES {
        if *label == normalized {
            return if rule.applies(metrics) {
                (*message).to_string()
            } else {
                ON_TRACK.to_string()
            };
        }
    }

    NO_TIPS.to_string()
}

/// Derive the metric bundle for one category from a categorized set, the way
/// the tip endpoint does: spend and spike from the category itself, trend
/// from the forecaster, savings rate from the fingerprint.
pub fn metrics_for(category: &str, transactions: &[Transaction]) -> Result<TipMetrics> {
    let fingerprint = build_fingerprint(transactions)?;
    let mut metrics = TipMetrics {
        savings_rate: fingerprint.savings_rate,
        ..TipMetrics::default()
    };

    // "Savings" and other non-transaction labels only carry the global rate.
    let Some(target) = Category::from_label(category) else {
        return Ok(metrics);
    };

    metrics.spend = transactions
        .iter()
        .filter(|t| t.is_debit() && t.category == Some(target))
        .map(|t| t.amount)
        .sum::<i64>() as f64;

    if let Some(category_forecast) = forecast(transactions, DEFAULT_HORIZON_DAYS)?.get(&target) {
        metrics.trend = category_forecast.trend;
    }

    metrics.spike = detect_fraud(transactions)?.iter().any(|alert| {
        alert.reasons.contains(&FraudReason::HighValue)
            && alert.transaction.category == Some(target)
    });

    Ok(metrics)
}

fn capitalize(label: &str) -> String {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
