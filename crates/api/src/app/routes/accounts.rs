use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;

use teller_ledger::{Ledger, LedgerError};

use crate::app::dto::{
    AccountMessageResponse, BalanceResponse, CreateAccountRequest, HistoryResponse,
    TransactionRequest,
};
use crate::app::errors;

pub async fn get_balance(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(account_number): Path<String>,
) -> axum::response::Response {
    match ledger.balance(&account_number) {
        Ok(balance) => balance_response(account_number, balance),
        Err(e) => rejected("balance", e),
    }
}

pub async fn deposit(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(account_number): Path<String>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match ledger.deposit(&account_number, body.amount) {
        Ok(balance) => {
            tracing::info!(account = %account_number, amount = %body.amount, %balance, "deposit applied");
            balance_response(account_number, balance)
        }
        Err(e) => rejected("deposit", e),
    }
}

pub async fn withdraw(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(account_number): Path<String>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match ledger.withdraw(&account_number, body.amount) {
        Ok(balance) => {
            tracing::info!(account = %account_number, amount = %body.amount, %balance, "withdrawal applied");
            balance_response(account_number, balance)
        }
        Err(e) => rejected("withdraw", e),
    }
}

pub async fn create_account(
    Extension(ledger): Extension<Arc<Ledger>>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let initial_balance = body.initial_balance.unwrap_or(Decimal::ZERO);

    match ledger.create_account(body.account_number.as_str(), initial_balance) {
        Ok(()) => {
            tracing::info!(account = %body.account_number, %initial_balance, "account created");
            message_response("Account created", body.account_number)
        }
        Err(e) => rejected("create_account", e),
    }
}

pub async fn delete_account(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(account_number): Path<String>,
) -> axum::response::Response {
    match ledger.delete_account(&account_number) {
        Ok(()) => {
            tracing::info!(account = %account_number, "account deleted");
            message_response("Account deleted", account_number)
        }
        Err(e) => rejected("delete_account", e),
    }
}

pub async fn get_history(
    Extension(ledger): Extension<Arc<Ledger>>,
    Path(account_number): Path<String>,
) -> axum::response::Response {
    match ledger.history(&account_number) {
        Ok(history) => (
            StatusCode::OK,
            Json(HistoryResponse {
                account_number,
                history,
            }),
        )
            .into_response(),
        Err(e) => rejected("history", e),
    }
}

fn balance_response(account_number: String, balance: Decimal) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(BalanceResponse {
            account_number,
            balance,
        }),
    )
        .into_response()
}

fn message_response(message: &'static str, account_number: String) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(AccountMessageResponse {
            message,
            account_number,
        }),
    )
        .into_response()
}

fn rejected(operation: &'static str, err: LedgerError) -> axum::response::Response {
    tracing::debug!(operation, error = %err, "ledger operation rejected");
    errors::ledger_error_to_response(err)
}
