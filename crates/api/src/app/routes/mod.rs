use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod accounts;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/accounts", post(accounts::create_account))
        .route("/accounts/", post(accounts::create_account))
        .route("/accounts/:account_number", delete(accounts::delete_account))
        .route("/accounts/:account_number/balance", get(accounts::get_balance))
        .route("/accounts/:account_number/deposit", post(accounts::deposit))
        .route("/accounts/:account_number/withdraw", post(accounts::withdraw))
        .route("/accounts/:account_number/history", get(accounts::get_history))
}
