use axum::{http::StatusCode, response::IntoResponse};

/// Body served by `/health`, glyph included
pub const HEALTH_BODY: &str = "OK - Prabogo Framework 🚀";

/// Text portion of [`HEALTH_BODY`] without the trailing glyph
pub const HEALTH_PREFIX: &str = "OK - Prabogo Framework";

/// ANY /health
///
/// Liveness probe. Always answers 200 with a fixed plain-text body,
/// whatever the method, headers or payload of the request.
pub async fn health_check() -> impl IntoResponse {
    tracing::debug!("/health probe");
    (StatusCode::OK, HEALTH_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], HEALTH_BODY.as_bytes());
        assert!(body.starts_with(HEALTH_PREFIX.as_bytes()));
    }
}
