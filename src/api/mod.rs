//! HTTP API module for the Prabogo service
//!
//! # Endpoints
//! - `/health` — health check (any method)
//! - `/` — home page (any method)
//!
//! Every other path gets axum's default 404.

pub mod handlers;

use axum::{Router, routing::any};

/// Creates the main Axum router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/health", any(handlers::health_check))
        .route("/", any(handlers::home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_create_router() {
        let _router = create_router();
        // If we get here without panicking, the routes did not conflict
    }

    #[tokio::test]
    async fn test_root_is_exact_match() {
        let resp = create_router()
            .oneshot(Request::get("/health/extra").body(String::new()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
