//! HTTP boundary
//!
//! One JSON endpoint over the searcher plus a static front-end. `GET
//! /search?q=` answers with the flat result vector, `/health` answers
//! `OK`, and any other path falls through to the static directory.
//! Responses are cached in a small per-process LRU keyed by the exact
//! query string.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use lru::LruCache;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{debug, info};

use crate::Searcher;

/// Cached query responses per process.
const CACHE_SIZE: usize = 128;

/// Fallback port when neither the flag nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3001;

/// Shared handler state.
pub struct AppState {
    searcher: Arc<Searcher>,
    cache: Mutex<LruCache<String, Vec<String>>>,
}

impl AppState {
    pub fn new(searcher: Arc<Searcher>) -> Self {
        Self {
            searcher,
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(CACHE_SIZE).expect("cache size is non-zero"),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>, static_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .route("/health", get(handle_health))
        .fallback_service(ServeDir::new(static_dir.into()))
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn run(
    searcher: Arc<Searcher>,
    addr: &str,
    static_dir: impl Into<PathBuf>,
) -> Result<()> {
    let state = Arc::new(AppState::new(searcher));
    let app = router(state, static_dir);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr().context("listener has no local addr")?;
    info!(addr = %local_addr, "listening");
    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}

async fn handle_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, (StatusCode, &'static str)> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "missing search query in URL params",
        ));
    }

    if let Some(hit) = state.cache.lock().unwrap().get(&query) {
        debug!(query = %query, "cache hit");
        return Ok(Json(hit.clone()));
    }

    // Lookup and resolution are CPU-bound; keep them off the runtime.
    let searcher = Arc::clone(&state.searcher);
    let needle = query.clone();
    let results = tokio::task::spawn_blocking(move || searcher.search(&needle))
        .await
        .map_err(|_| (StatusCode::INTERNAL_SERVER_ERROR, "search task failed"))?;

    debug!(query = %query, results = results.len(), "query answered");
    state.cache.lock().unwrap().put(query, results.clone());
    Ok(Json(results))
}

async fn handle_health() -> &'static str {
    "OK"
}

/// Port resolution order: CLI flag, then `PORT`, then the default.
pub fn resolve_port(flag: Option<u16>) -> u16 {
    pick_port(flag, std::env::var("PORT").ok())
}

fn pick_port(flag: Option<u16>, env: Option<String>) -> u16 {
    flag.or_else(|| env.and_then(|raw| raw.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}
