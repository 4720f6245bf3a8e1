use axum::{http::StatusCode, Json};

use crate::app::dto::MessageResponse;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Teller API is running.",
    })
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
