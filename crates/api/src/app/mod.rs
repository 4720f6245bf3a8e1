//! HTTP API application wiring (Axum router + shared ledger).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use teller_ledger::Ledger;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around a shared ledger (public entrypoint used by `main.rs`).
pub fn build_app(ledger: Arc<Ledger>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_context))
            .layer(Extension(ledger)),
    )
}
