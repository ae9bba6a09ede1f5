//! HTTP handlers for the analysis API.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use depviz_core::{build_dependency_graph, GraphData, ScanConfig};

use crate::error::{ApiError, ApiResult};

/// State shared across handlers.
///
/// The scan configuration is owned by the server and injected here rather
/// than living in module-level statics; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    /// Scan rules applied to every analysis request
    pub scan: Arc<ScanConfig>,
}

impl AppState {
    /// Create state with the given scan configuration.
    pub fn new(scan: ScanConfig) -> Self {
        Self {
            scan: Arc::new(scan),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

/// Request body for `POST /api/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Directory to analyze
    #[serde(default)]
    pub path: Option<String>,
}

/// POST /api/analyze - Build and return the dependency graph for a path.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<GraphData>> {
    let Some(path) = request.path.filter(|p| !p.is_empty()) else {
        return Err(ApiError::bad_request("Path is required"));
    };
    info!("analysis request for {path}");

    // The core is synchronous filesystem work; keep it off the async workers.
    let scan = Arc::clone(&state.scan);
    let target = PathBuf::from(path);
    let graph = tokio::task::spawn_blocking(move || build_dependency_graph(&target, &scan))
        .await
        .map_err(|err| ApiError::internal(format!("analysis task failed: {err}")))??;

    Ok(Json(graph.data()))
}

/// GET /api/health - Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Build the API router.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::fs::{self, File};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router().with_state(AppState::default())
    }

    fn analyze_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_missing_path_is_400() {
        let response = app()
            .oneshot(analyze_request(serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Path is required");
    }

    #[tokio::test]
    async fn test_analyze_empty_path_is_400() {
        let response = app()
            .oneshot(analyze_request(serde_json::json!({ "path": "" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_invalid_root_is_500() {
        let response = app()
            .oneshot(analyze_request(
                serde_json::json!({ "path": "/definitely/not/a/real/path" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("does not exist"));
    }

    #[tokio::test]
    async fn test_analyze_returns_graph() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("index.js"), "import h from './helper';\n").unwrap();
        File::create(root.join("helper.js")).unwrap();

        let response = app()
            .oneshot(analyze_request(
                serde_json::json!({ "path": root.to_str().unwrap() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["stats"]["fileCount"], 2);
        assert_eq!(body["stats"]["dependencyCount"], 1);
        assert_eq!(body["links"][0]["source"], "index.js");
        assert_eq!(body["links"][0]["target"], "helper.js");
    }
}
