//! REST server for the item store
//!
//! Exposes the CRUD endpoints under `/api/items` plus a health probe, backed
//! by any [`ItemRepository`] implementation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

use crate::error::ApiError;
use item_core::{Item, ItemRepository, NewItem};

/// Shared server state for handlers
#[derive(Clone)]
pub struct ApiState<R> {
    pub repository: Arc<R>,
}

/// REST API server for item management
pub struct ItemApi<R> {
    repository: Arc<R>,
}

impl<R: ItemRepository + Send + Sync + 'static> ItemApi<R> {
    /// Create a new API server backed by the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Start serving on the given address
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting HTTP server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Build the router with all endpoints and middleware
    pub fn router(self) -> Router {
        let state = Arc::new(ApiState {
            repository: self.repository,
        });

        Router::new()
            .route("/api/items", get(list_items).post(create_item))
            .route(
                "/api/items/:id",
                get(get_item).put(update_item).delete(delete_item),
            )
            .route("/health", get(health))
            .layer(middleware::from_fn(crate::cors::cors_middleware))
            .layer(middleware::from_fn(
                crate::request_logger::api_request_logging_middleware,
            ))
            .with_state(state)
    }
}

/// Health status reported by the `/health` endpoint
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: bool,
    pub version: String,
}

/// GET /api/items - every stored item in ascending ID order
async fn list_items<R: ItemRepository + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<R>>>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.repository.list().await?;
    Ok(Json(items))
}

/// POST /api/items - store a new item and return it with its assigned ID
async fn create_item<R: ItemRepository + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    Json(candidate): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.repository.create(candidate).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items/:id - a single item, 404 with empty body when absent
async fn get_item<R: ItemRepository + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .repository
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found(id))?;

    Ok(Json(item))
}

/// PUT /api/items/:id - overwrite all fields, 404 with empty body when absent
async fn update_item<R: ItemRepository + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    Path(id): Path<i64>,
    Json(fields): Json<NewItem>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .repository
        .update(id, fields)
        .await?
        .ok_or_else(|| ApiError::not_found(id))?;

    Ok(Json(item))
}

/// DELETE /api/items/:id - 200 with empty body once removed, 404 when absent
async fn delete_item<R: ItemRepository + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.repository.delete(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::not_found(id))
    }
}

/// GET /health - liveness probe backed by the repository health check
async fn health<R: ItemRepository + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<R>>>,
) -> Result<Json<HealthStatus>, ApiError> {
    state.repository.health_check().await?;

    Ok(Json(HealthStatus {
        status: "healthy".to_string(),
        database: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
