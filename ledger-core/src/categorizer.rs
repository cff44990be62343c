//! Merchant keyword categorizer.
//!
//! The keyword table is checked in order and the first category with a
//! matching keyword wins, so table order is part of the observable behavior.

use crate::transaction::{Category, Transaction};

/// Read-only keyword table, highest-priority category first.
static KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "zomato", "swiggy", "dominos", "pizza", "mcdonald", "kfc", "cafe",
            "restaurant", "bakery", "grocer",
        ],
    ),
    (
        Category::Shopping,
        &["amazon", "flipkart", "myntra", "ajio", "mall", "mart", "store"],
    ),
    (
        Category::Travel,
        &[
            "uber", "ola", "irctc", "redbus", "makemytrip", "indigo", "airlines",
            "petrol", "fuel",
        ],
    ),
    (
        Category::Utilities,
        &[
            "electricity", "water", "broadband", "airtel", "jio", "vodafone",
            "recharge", "dth",
        ],
    ),
    (
        Category::Banking,
        &["atm", "neft", "imps", "rtgs", "bank", "branch"],
    ),
    (
        Category::Bills,
        &["emi", "insurance", "rent", "loan", "premium", "bill"],
    ),
    (
        Category::Entertainment,
        &["netflix", "spotify", "bookmyshow", "hotstar", "prime", "gaming"],
    ),
];

// The producers in this system only ever emit "debit"/"credit", so this
// fallback stays dormant; left in place rather than silently removed.
const BANK_OPS: &[&str] = &["deposit", "withdrawal", "transfer"];

/// Categorize a merchant/type pair. Total and deterministic: always returns
/// exactly one of the eight category labels.
pub fn categorize(merchant: &str, txn_type: &str) -> Category {
    let merchant = merchant.to_lowercase();

    for (category, keywords) in KEYWORDS {
        if keywords.iter().any(|k| merchant.contains(k)) {
            return *category;
        }
    }

    if BANK_OPS.contains(&txn_type) {
        return Category::Banking;
    }

    Category::Other
}

/// Batch pre-pass: fill in `category` on every record.
pub fn categorize_all(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    for txn in &mut transactions {
        txn.category = Some(categorize(&txn.merchant, txn.txn_type.as_str()));
    }
    transactions
}
