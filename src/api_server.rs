// Axum server for the bound page
//
// Purpose: serve the page rendered from the content document, plus JSON
// access to the document itself and a reload trigger.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::loader::{ContentLoader, LoadState};

const CACHE_CAPACITY: u64 = 10_000;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<ContentLoader>,
    /// Path lookups, keyed by load generation and normalized dotted path.
    /// Cleared on reload.
    pub cache: Cache<String, Value>,
}

impl AppState {
    /// Read the template, build the configured source, and run the first load.
    pub async fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing content loader...");
        let loader = config.build_loader().await?;

        let state = Self::from_loader(loader, config.cache_ttl);
        match state.loader.load().await {
            LoadState::Ready => tracing::info!("Initial content load complete"),
            other => tracing::warn!("Initial content load ended in {:?}; serving fallback page", other),
        }
        Ok(state)
    }

    /// Wrap an existing loader without loading it.
    pub fn from_loader(loader: ContentLoader, cache_ttl: Duration) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(cache_ttl)
            .build();

        Self {
            loader: Arc::new(loader),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Bound page
        .route("/", get(page))

        // Health check
        .route("/health", get(health_check))

        // Content document (JSON)
        .route("/api/content", get(get_document))
        .route("/api/content/*path", get(get_value))
        .route("/api/reload", post(reload))

        // Raw document at its conventional location
        .route("/config/content.json", get(get_document))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn page(State(state): State<AppState>) -> Html<String> {
    Html(state.loader.page_html())
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let loader = &state.loader;
    Json(serde_json::json!({
        "status": "healthy",
        "state": loader.state(),
        "source": loader.location(),
        "loaded_at": loader.loaded_at().map(|t| t.to_rfc3339()),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_document(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state
        .loader
        .document()
        .map(|doc| Json(doc.root().clone()))
        .ok_or_else(|| AppError::NotLoaded(state.loader.state()))
}

async fn get_value(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<Value>, AppError> {
    let key = normalize_path(&path);
    if key.is_empty() {
        return get_document(State(state)).await;
    }

    // Entries from an earlier load can never be hit, even if inserted late.
    let (generation, document) = state.loader.snapshot();
    let entry = cache_key(generation, &key);

    if let Some(cached) = state.cache.get(&entry).await {
        tracing::debug!("Cache hit for {}", key);
        return Ok(Json(cached));
    }

    let value = document
        .as_ref()
        .and_then(|doc| doc.resolve(&key))
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No content at {}", key)))?;

    state.cache.insert(entry, value.clone()).await;
    Ok(Json(value))
}

async fn reload(State(state): State<AppState>) -> impl IntoResponse {
    let result = state.loader.reload().await;
    // Old-generation entries are unreachable already; this frees them.
    state.cache.invalidate_all();
    tracing::info!("Reload requested: content is now {:?}", result);

    let status = match result {
        LoadState::Ready => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        status,
        Json(serde_json::json!({
            "state": result,
            "loaded_at": state.loader.loaded_at().map(|t| t.to_rfc3339()),
            "error": state.loader.last_error(),
        })),
    )
}

/// Cache key for a dotted path under one load generation.
pub fn cache_key(generation: u64, path: &str) -> String {
    format!("{}:{}", generation, path)
}

/// `works/items/0/title` and `works.items.0.title` both become `works.items.0.title`.
fn normalize_path(raw: &str) -> String {
    raw.split(['/', '.'])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    NotFound(String),
    NotLoaded(LoadState),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::NotLoaded(state) => (
                StatusCode::NOT_FOUND,
                format!("Content not loaded (state: {:?})", state),
            ),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("works/items/0/title"), "works.items.0.title");
        assert_eq!(normalize_path("works.items.0.title"), "works.items.0.title");
        assert_eq!(normalize_path("/hero//title/"), "hero.title");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_cache_key_includes_generation() {
        assert_eq!(cache_key(3, "hero.title"), "3:hero.title");
        assert_ne!(cache_key(1, "hero.title"), cache_key(2, "hero.title"));
    }
}
