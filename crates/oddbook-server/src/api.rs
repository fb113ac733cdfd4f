use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Local;
use oddbook_shared::ClientId;
use oddbook_store::{DayFile, EntryStore, StoreError};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::identity::{self, assign_identity, Revoked};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntryStore>,
    pub config: Arc<ServerConfig>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/api/entry", post(submit_entry))
        .route("/api/files", get(list_files))
        .route("/api/files/:filename", get(download_file))
        .route("/api/clear-data", post(clear_data));

    if let Some(dir) = &state.config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(middleware::from_fn_with_state(state.clone(), assign_identity))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Deserialize)]
struct EntryRequest {
    entry: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryResponse {
    success: bool,
    file_name: String,
}

#[derive(Serialize)]
struct SuccessResponse {
    success: bool,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn submit_entry(
    State(state): State<AppState>,
    Extension(client): Extension<ClientId>,
    Json(req): Json<EntryRequest>,
) -> Result<Json<EntryResponse>, ServerError> {
    let file_name = state
        .store
        .namespace(&client)
        .append_entry(&req.entry, &Local::now())
        .await
        .map_err(|e| ServerError::storage("Failed to save entry", e))?;

    info!(client = %client, file = %file_name, size = req.entry.len(), "Entry saved");

    Ok(Json(EntryResponse {
        success: true,
        file_name,
    }))
}

async fn list_files(
    State(state): State<AppState>,
    Extension(client): Extension<ClientId>,
) -> Result<Json<Vec<DayFile>>, ServerError> {
    let files = state
        .store
        .namespace(&client)
        .list_files(&Local::now())
        .await
        .map_err(|e| ServerError::storage("Failed to list files", e))?;

    Ok(Json(files))
}

async fn download_file(
    State(state): State<AppState>,
    Extension(client): Extension<ClientId>,
    Path(filename): Path<String>,
) -> Result<Response, ServerError> {
    let data = state
        .store
        .namespace(&client)
        .read_file(&filename, &Local::now())
        .await
        .map_err(|e| match e {
            StoreError::Io(_) => ServerError::storage("Failed to read file", e),
            other => other.into(),
        })?;

    // Only validated `YYYYMMDD.odd` names reach this point, so quoting is safe.
    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, data).into_response())
}

/// Wipe the client's files and forget its identifier. The next request is
/// treated as a brand-new client.
async fn clear_data(
    State(state): State<AppState>,
    Extension(client): Extension<ClientId>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ServerError> {
    state
        .store
        .namespace(&client)
        .clear()
        .await
        .map_err(|e| ServerError::storage("Failed to clear data", e))?;

    info!(client = %client, "Client data cleared");

    Ok((
        identity::revoke(jar),
        Extension(Revoked),
        Json(SuccessResponse { success: true }),
    ))
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    info!(addr = %addr, "Starting HTTP API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
