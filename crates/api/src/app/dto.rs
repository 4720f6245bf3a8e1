use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use teller_ledger::TransactionRecord;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub account_number: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub initial_balance: Option<Decimal>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub account_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct AccountMessageResponse {
    pub message: &'static str,
    pub account_number: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub account_number: String,
    pub history: Vec<TransactionRecord>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
