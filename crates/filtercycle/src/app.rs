use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::filters::{get_filter, list_filters, update_filter_date},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // The filters UI is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/filters", get(list_filters))
        .route("/filters/{id}", get(get_filter).patch(update_filter_date))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use filtercycle_core::filter::SEED_FILTER_NAMES;
    use filtercycle_core::storage::FilterRepository;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::lifecycle::prepare_storage;
    use crate::storage::InMemoryRepository;

    async fn seeded_app() -> (Router, Arc<InMemoryRepository>) {
        let repo = Arc::new(InMemoryRepository::new());
        prepare_storage(repo.as_ref()).await.unwrap();

        let app = create_app(AppState::new(repo.clone()));
        (app, repo)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap();

        (status, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn patch(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_filters_returns_seeded_names() {
        let (app, _) = seeded_app().await;

        let (status, json) = send(&app, get("/filters")).await;

        assert_eq!(status, StatusCode::OK);

        let names: Vec<&str> = json["filters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["filter_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, SEED_FILTER_NAMES.to_vec());
    }

    #[tokio::test]
    async fn test_get_filter() {
        let (app, _) = seeded_app().await;

        let (status, json) = send(&app, get("/filters/2")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["filter"]["filter_id"], 2);
        assert_eq!(json["filter"]["filter_name"], SEED_FILTER_NAMES[1]);
    }

    #[tokio::test]
    async fn test_get_nonexistent_filter() {
        let (app, _) = seeded_app().await;

        let (status, json) = send(&app, get("/filters/999")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "error": "Filter not found" }));
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_not_found() {
        let (app, _) = seeded_app().await;

        let (status, _) = send(&app, get("/filters/abc")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_patch_updates_date_and_get_reflects_it() {
        let (app, _) = seeded_app().await;

        let (status, json) = send(
            &app,
            patch("/filters/1", r#"{"date":"2024-10-01T09:00:00.000Z"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["filter"]["filter_id"], 1);
        assert_eq!(json["filter"]["cycle_start_date"], "2024-10-01T09:00:00.000Z");

        let (status, json) = send(&app, get("/filters/1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["filter"]["cycle_start_date"], "2024-10-01T09:00:00.000Z");
    }

    #[tokio::test]
    async fn test_patch_without_date_is_rejected_without_mutation() {
        let (app, repo) = seeded_app().await;
        let before = repo.list_filters().await.unwrap();

        let (status, json) = send(&app, patch("/filters/1", r#"{"when":"tomorrow"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "error": "You must provide a new date" })
        );
        assert_eq!(repo.list_filters().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_patch_accepts_numeric_date_as_text() {
        let (app, _) = seeded_app().await;

        let (status, json) = send(&app, patch("/filters/1", r#"{"date":20240101}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["filter"]["cycle_start_date"], "20240101");

        let (status, json) = send(&app, get("/filters/1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["filter"]["cycle_start_date"], "20240101");
    }

    #[tokio::test]
    async fn test_patch_with_falsy_date_is_rejected() {
        let (app, repo) = seeded_app().await;
        let before = repo.list_filters().await.unwrap();

        for body in [r#"{"date":0}"#, r#"{"date":false}"#, r#"{"date":null}"#] {
            let (status, _) = send(&app, patch("/filters/1", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        }

        assert_eq!(repo.list_filters().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_patch_with_non_json_content_type_is_rejected() {
        let (app, repo) = seeded_app().await;
        let before = repo.list_filters().await.unwrap();

        let request = Request::builder()
            .method("PATCH")
            .uri("/filters/1")
            .header("Content-Type", "text/plain")
            .body(Body::from(r#"{"date":"2024-10-01T09:00:00.000Z"}"#))
            .unwrap();
        let (status, json) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "You must provide a new date");
        assert_eq!(repo.list_filters().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_patch_with_empty_body_is_rejected() {
        let (app, _) = seeded_app().await;

        let request = Request::builder()
            .method("PATCH")
            .uri("/filters/1")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_checks_date_before_id() {
        let (app, _) = seeded_app().await;

        let (status, _) = send(&app, patch("/filters/999", "{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_nonexistent_filter_changes_nothing() {
        let (app, repo) = seeded_app().await;
        let before = repo.list_filters().await.unwrap();

        let (status, json) = send(
            &app,
            patch("/filters/999", r#"{"date":"2024-10-01T09:00:00.000Z"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Filter not found");
        assert_eq!(repo.list_filters().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let (app, repo) = seeded_app().await;
        repo.close().await.unwrap();

        let (status, json) = send(&app, get("/filters")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Connection is closed");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let (app, _) = seeded_app().await;

        let request = Request::builder()
            .uri("/filters")
            .header("Origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn test_unsupported_method_is_rejected() {
        let (app, _) = seeded_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/filters/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_round_trip_against_sqlite() {
        let repo = Arc::new(
            crate::storage::SqliteRepository::open_in_memory()
                .await
                .unwrap(),
        );
        prepare_storage(repo.as_ref()).await.unwrap();
        let app = create_app(AppState::new(repo.clone()));

        let (status, json) = send(&app, get("/filters")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["filters"].as_array().unwrap().len(), 4);

        let (status, json) = send(
            &app,
            patch("/filters/4", r#"{"date":"2024-12-24T18:00:00.000Z"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["filter"]["cycle_start_date"], "2024-12-24T18:00:00.000Z");

        let (status, _) = send(
            &app,
            patch("/filters/44", r#"{"date":"2024-12-24T18:00:00.000Z"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, json) = send(&app, get("/filters/4")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["filter"]["cycle_start_date"], "2024-12-24T18:00:00.000Z");
    }
}
