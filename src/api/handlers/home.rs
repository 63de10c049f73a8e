use axum::{http::StatusCode, response::IntoResponse};

/// Body served by `/`
pub const HOME_BODY: &str = "Ini adalah Version 2 dari Prabogo";

/// ANY /
pub async fn home() -> impl IntoResponse {
    tracing::debug!("/ home");
    (StatusCode::OK, HOME_BODY)
}
