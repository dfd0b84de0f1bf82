//! Modelgraph Store HTTP Server
//!
//! A standalone HTTP endpoint persisting serialized resource maps as opaque
//! JSON blobs. No validation happens at this boundary; the only validated
//! write path is the operation executors inside the stores themselves, so
//! the server stores and returns bodies verbatim.
//!
//! # Endpoints
//!
//! - `GET /store/:id` - Return the stored blob, 400 if absent
//! - `PUT /store/:id` - Persist the JSON body verbatim
//! - `GET /health` - Health check
//!
//! # Example
//!
//! ```bash
//! modelgraph-server --listen 0.0.0.0:8060
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use clap::Parser;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Modelgraph Store HTTP Server
#[derive(Parser, Debug)]
#[command(name = "modelgraph-server")]
#[command(about = "HTTP blob endpoint for serialized modelgraph resource maps")]
struct Args {
    /// Listen address
    #[arg(long, default_value = "0.0.0.0:8060", env = "MODELGRAPH_LISTEN")]
    listen: SocketAddr,
}

/// Application state shared across handlers.
#[derive(Default)]
struct AppState {
    /// Stored blobs by store identifier.
    blobs: RwLock<HashMap<String, Value>>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("modelgraph_server=info".parse().unwrap())
                .add_directive("tower_http=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let state = Arc::new(AppState::default());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .expect("Failed to bind address");

    info!(address = %args.listen, "Server listening");

    axum::serve(listener, app).await.expect("Server error");
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/store/:id", get(handle_get_store).put(handle_put_store))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error body for a missing store.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Handle GET /store/:id
async fn handle_get_store(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.blobs.read().get(&id) {
        Some(blob) => (StatusCode::OK, Json(blob.clone())).into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("No store found for {id}"),
            }),
        )
            .into_response(),
    }
}

/// Handle PUT /store/:id
async fn handle_put_store(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    info!(store = %id, "storing blob");
    state.blobs.write().insert(id, body);
    StatusCode::NO_CONTENT
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Handle GET /health
async fn handle_health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::Response;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips_verbatim() {
        let state = Arc::new(AppState::default());
        // Unknown fields and arbitrary nesting must survive untouched.
        let blob = json!({
            "resources": {"http://class": {"iri": "http://class", "types": ["data-psm-class"], "x-vendor": 1}},
        });

        let put = handle_put_store(
            State(state.clone()),
            Path("demo".to_string()),
            Json(blob.clone()),
        )
        .await
        .into_response();
        assert_eq!(put.status(), StatusCode::NO_CONTENT);

        let get = handle_get_store(State(state), Path("demo".to_string()))
            .await
            .into_response();
        assert_eq!(get.status(), StatusCode::OK);
        assert_eq!(body_json(get).await, blob);
    }

    #[tokio::test]
    async fn test_missing_store_is_a_bad_request() {
        let state = Arc::new(AppState::default());
        let get = handle_get_store(State(state), Path("absent".to_string()))
            .await
            .into_response();
        assert_eq!(get.status(), StatusCode::BAD_REQUEST);
        let body = body_json(get).await;
        assert!(body["error"].as_str().unwrap().contains("absent"));
    }

    #[tokio::test]
    async fn test_put_overwrites_previous_blob() {
        let state = Arc::new(AppState::default());
        for value in [json!({"v": 1}), json!({"v": 2})] {
            handle_put_store(State(state.clone()), Path("demo".to_string()), Json(value)).await;
        }

        let get = handle_get_store(State(state), Path("demo".to_string()))
            .await
            .into_response();
        assert_eq!(body_json(get).await, json!({"v": 2}));
    }
}
