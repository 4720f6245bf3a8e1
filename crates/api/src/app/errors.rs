use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use teller_ledger::LedgerError;

/// Map a ledger failure to its transport status: 404 for unknown accounts,
/// 400 for everything the request content got wrong.
pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        LedgerError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", message),
        LedgerError::InvalidAmount(_) | LedgerError::NegativeBalance(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_amount", message)
        }
        LedgerError::InsufficientFunds { .. } => {
            json_error(StatusCode::BAD_REQUEST, "insufficient_funds", message)
        }
        LedgerError::AlreadyExists(_) => {
            json_error(StatusCode::BAD_REQUEST, "already_exists", message)
        }
        LedgerError::BalanceOverflow { .. } => {
            json_error(StatusCode::BAD_REQUEST, "balance_overflow", message)
        }
        LedgerError::PrecisionLoss { .. } => {
            json_error(StatusCode::BAD_REQUEST, "precision_loss", message)
        }
    }
}

/// Malformed, missing, or mistyped JSON bodies keep the extractor's status.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
