//! EcoTrack REST API
//!
//! HTTP API layer for EcoTrack, built with Axum. This is the dashboard
//! surface: a JSON API a client renders into the single-page view.
//!
//! # Endpoints
//!
//! ## Actions
//! - `POST /api/v1/actions` - Submit an eco-action (scores and persists)
//! - `GET /api/v1/actions` - Recent log entries
//!
//! ## Dashboard panels
//! - `GET /api/v1/leaderboard` - Cross-user totals, highest first
//! - `GET /api/v1/categories` - Fixed category point table (bar chart data)
//! - `GET /api/v1/progress` - Total points, growth stage, carbon impact
//!
//! ## Community
//! - `POST /api/v1/habits` - Set a habit goal (acknowledgement only)
//! - `POST /api/v1/stories` - Share a story (acknowledgement only)
//!
//! ## Resources
//! - `GET /api/v1/recommendations` - Keyword shopping suggestions
//! - `GET /api/v1/resources` - Local sustainability resources
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    let api_routes = Router::new()
        // Action routes - body limit covers photo uploads
        .route("/actions", post(routes::actions::submit_action))
        .route("/actions", get(routes::actions::list_actions))
        // Dashboard panels
        .route("/leaderboard", get(routes::leaderboard::get_leaderboard))
        .route("/categories", get(routes::categories::list_categories))
        .route("/progress", get(routes::progress::get_progress))
        // Community
        .route("/habits", post(routes::community::set_habit))
        .route("/stories", post(routes::community::post_story))
        // Resources
        .route(
            "/recommendations",
            get(routes::resources::get_recommendations),
        )
        .route("/resources", get(routes::resources::list_resources))
        .layer(DefaultBodyLimit::max(max_body_size));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("EcoTrack API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("EcoTrack API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EcoStore, StoreConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = Arc::new(EcoStore::open(StoreConfig::new(dir.path())).unwrap());
        let state = AppState::new(store, ApiConfig::default());
        let router = build_router(state);

        (router, dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submit_action() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/actions")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"user": "alice", "description": "planted 3 trees", "category": "Others"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["base_points"], 50);
        assert_eq!(json["tree_bonus"], 60);
        assert_eq!(json["photo_bonus"], 0);
        assert_eq!(json["awarded"], 110);
        assert_eq!(json["total_points"], 110);
        assert_eq!(json["growth_stage"], "sapling");
    }

    #[tokio::test]
    async fn test_submit_unknown_category() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/actions")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"description": "did a thing", "category": "Not A Category"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submit_missing_category() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/actions")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"description": "did a thing", "category": ""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submit_rejected_photo() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/actions")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"description": "cleanup", "category": "Others", "photo": {"filename": "pic.gif", "data": "aGVsbG8="}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_leaderboard_after_submissions() {
        let (app, _dir) = create_test_app();

        for body in [
            r#"{"user": "alice", "description": "bus commute", "category": "Transportation"}"#,
            r#"{"user": "bob", "description": "solar panels", "category": "Large Scale"}"#,
        ] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/v1/actions")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/leaderboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let rows = json["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        // Sorted descending: bob (150) before alice (70)
        assert_eq!(rows[0]["user"], "bob");
        assert_eq!(rows[0]["points"], 150);
    }

    #[tokio::test]
    async fn test_categories_table() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["categories"].as_array().unwrap().len(), 29);
    }

    #[tokio::test]
    async fn test_progress_empty_store() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/progress")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total_points"], 0);
        assert_eq!(json["growth_stage"], "seedling");
        assert_eq!(json["carbon_impact_kg"], 0.0);
    }

    #[tokio::test]
    async fn test_habit_acknowledgement() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/habits")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"goal": "Compost weekly"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("Compost weekly"));
    }

    #[tokio::test]
    async fn test_recommendations() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/recommendations?q=no%20more%20plastic%20bags")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["suggestions"][0], "Reusable Water Bottles");
    }
}
