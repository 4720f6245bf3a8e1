//! Transaction history records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Kind of mutation recorded in an account's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Create,
    Deposit,
    Withdraw,
}

/// One logged mutation event (immutable once recorded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Unsigned magnitude applied to the balance (initial balance for `create`).
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }
}
