//! ledger-core: transaction record types and the merchant categorizer

pub mod categorizer;
pub mod transaction;

pub use categorizer::{categorize, categorize_all};
pub use transaction::{Category, Transaction, TxnType};
