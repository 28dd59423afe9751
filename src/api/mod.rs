//! HTTP Surface
//!
//! Serves the rendered page on a local port, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The composed page
//! - `GET /charts/electricity.svg` - Line chart
//! - `GET /charts/compute.svg` - Log-scale bar chart
//!
//! ## Data
//! - `GET /api/v1/records` - Loaded records as JSON
//! - `GET /api/v1/charts` - Chart descriptions as JSON
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use energy_viz::api::{serve, AppState};
//! use energy_viz::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::from_config(&config)?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::Uri, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::page::index))
        .route("/charts/electricity.svg", get(routes::page::electricity_svg))
        .route("/charts/compute.svg", get(routes::page::compute_svg));

    let api_routes = Router::new()
        .route("/records", get(routes::data::list_records))
        .route("/charts", get(routes::data::chart_specs))
        .layer(CorsLayer::permissive());

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    page_routes
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Serving page on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
    use crate::config::DataConfig;
    use crate::data;
    use crate::page::Page;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use std::io::Write;
    use tower::util::ServiceExt;

    const FIXTURE: &str = "year,DataCenter_Electricity_Twh,Ai_Compute_Index
2022,331,1
2023,372.4,5
2024,415.2,25
2025,466.8,125
2026,520.6,625";

    fn create_test_app() -> Router {
        let dataset = data::load_str(FIXTURE).unwrap();
        let state = AppState::new(dataset, Page::default(), DataConfig::default());
        build_router(state)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, content_type, body) = fetch(create_test_app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("<table>"));
        assert!(body.contains("Key Insights"));
    }

    #[tokio::test]
    async fn test_chart_svgs() {
        let (status, content_type, body) = fetch(create_test_app(), "/charts/electricity.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
        assert!(body.starts_with("<svg"));

        let (status, _, body) = fetch(create_test_app(), "/charts/compute.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("AI Compute Index"));
    }

    #[tokio::test]
    async fn test_records_json() {
        let (status, _, body) = fetch(create_test_app(), "/api/v1/records").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["records"][0]["year"], 2022);
        assert_eq!(json["records"][4]["electricity_twh"], 520.6);
        assert_eq!(json["records"][4]["ai_compute_index"], 625.0);
    }

    #[tokio::test]
    async fn test_chart_specs_json() {
        let (status, _, body) = fetch(create_test_app(), "/api/v1/charts").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["compute"]["y_axis"]["scale"], "log10");
        assert_eq!(json["electricity"]["y_axis"]["scale"], "linear");
        assert_eq!(json["compute"]["mark"]["kind"], "bar");
        assert_eq!(
            json["electricity"]["x_axis"]["major_ticks"],
            serde_json::json!([2022.0, 2023.0, 2024.0, 2025.0, 2026.0])
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, _) = fetch(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, _) = fetch(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, body) = fetch(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 5);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, body) = fetch(create_test_app(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_reload_failure_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(FIXTURE.as_bytes())
            .unwrap();

        let dataset = data::load_path(&path).unwrap();
        let source = DataConfig {
            path: path.clone(),
            reload_per_request: true,
        };
        let app = build_router(AppState::new(dataset, Page::default(), source));

        std::fs::remove_file(&path).unwrap();

        let (status, _, body) = fetch(app.clone(), "/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("DATA_ERROR"));

        let (status, _, _) = fetch(app, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
