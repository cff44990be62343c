//! Transaction record types shared across the insight pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of money movement as reported by the bank alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TxnType {
    #[serde(rename = "debit")]
    Debit,
    #[serde(rename = "credit")]
    Credit,
}

impl TxnType {
    /// Wire label for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Debit => "debit",
            TxnType::Credit => "credit",
        }
    }
}

/// Spending category assigned by the categorizer pre-pass
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Category {
    Food,
    Shopping,
    Travel,
    Utilities,
    Banking,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Shopping,
        Category::Travel,
        Category::Utilities,
        Category::Banking,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    /// Wire label (matches the serialized variant name)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Shopping => "Shopping",
            Category::Travel => "Travel",
            Category::Utilities => "Utilities",
            Category::Banking => "Banking",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Case-insensitive lookup from a user-supplied label
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label.trim()))
            .copied()
    }
}

/// A single bank-SMS style transaction record.
///
/// Producers emit records with `category: None`; the categorizer fills it in
/// before any analytics run. `balance` is the running balance the bank
/// reported and is informational only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub bank: String,
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    pub amount: i64,
    pub merchant: String,
    pub date: NaiveDate,
    pub balance: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<Category>,
}

impl Transaction {
    /// Create a new raw (uncategorized) transaction record
    pub fn new(
        bank: impl Into<String>,
        txn_type: TxnType,
        amount: i64,
        merchant: impl Into<String>,
        date: NaiveDate,
        balance: i64,
    ) -> Self {
        Self {
            bank: bank.into(),
            txn_type,
            amount,
            merchant: merchant.into(),
            date,
            balance,
            category: None,
        }
    }

    pub fn is_debit(&self) -> bool {
        self.txn_type == TxnType::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.txn_type == TxnType::Credit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_creation() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        let txn = Transaction::new("HDFC", TxnType::Debit, 450, "Zomato", date, 12_550);
        assert!(txn.is_debit());
        assert!(!txn.is_credit());
        assert_eq!(txn.category, None);
    }

    #[test]
    fn test_wire_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        let mut txn = Transaction::new("SBI", TxnType::Credit, 2000, "Salary", date, 30_000);
        txn.category = Some(Category::Other);

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "credit");
        assert_eq!(json["date"], "2026-03-04");
        assert_eq!(json["category"], "Other");
    }

    #[test]
    fn test_category_omitted_when_unset() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        let txn = Transaction::new("HDFC", TxnType::Debit, 450, "Zomato", date, 12_550);
        let json = serde_json::to_value(&txn).unwrap();
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from_label("food"), Some(Category::Food));
        assert_eq!(Category::from_label("ENTERTAINMENT"), Some(Category::Entertainment));
        assert_eq!(Category::from_label(" Travel "), Some(Category::Travel));
        assert_eq!(Category::from_label("Savings"), None);
    }
}
