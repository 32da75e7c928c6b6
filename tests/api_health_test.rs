//! Integration tests for the health endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app};

    /// Tests the health check responds without touching the model
    #[tokio::test]
    async fn it_reports_ok() {
        let app = test_app("http://127.0.0.1:1");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_to_string(response.into_body()).await, "ok");
    }

    /// Tests unknown routes are not found
    #[tokio::test]
    async fn it_returns_404_for_unknown_routes() {
        let app = test_app("http://127.0.0.1:1");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/notes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
