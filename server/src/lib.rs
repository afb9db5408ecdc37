use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use engine::{Occurrence, SearchEngine};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    pub kw2: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    /// False when neither keyword is in the index.
    pub matched: bool,
    pub results: Vec<String>,
}

#[derive(Deserialize)]
pub struct IngestRequest {
    pub document: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct IngestResponse {
    pub document: String,
    pub keywords: usize,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub documents: usize,
    pub keywords: usize,
}

/// Queries take the read lock and may overlap each other; ingestion takes
/// the write lock so a merge never runs concurrently with anything else.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<SearchEngine>>,
}

pub fn build_app(engine: SearchEngine) -> Router {
    let state = AppState { engine: Arc::new(RwLock::new(engine)) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:word", get(keyword_handler))
        .route("/documents", post(ingest_handler))
        .route("/stats", get(stats_handler))
        .with_state(state)
        .layer(cors)
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let engine = state.engine.read();
    // Query words get the same normalization as document tokens; a word that
    // fails it cannot be in the index, so keep it verbatim and let the
    // lookup miss.
    let kw1 = engine.normalize(&params.kw1).unwrap_or_else(|| params.kw1.to_lowercase());
    let kw2 = engine.normalize(&params.kw2).unwrap_or_else(|| params.kw2.to_lowercase());
    let (matched, results) = match engine.query(&kw1, &kw2) {
        Some(results) => (true, results),
        None => (false, Vec::new()),
    };
    Json(SearchResponse { kw1, kw2, matched, results })
}

pub async fn keyword_handler(
    State(state): State<AppState>,
    Path(word): Path<String>,
) -> Result<Json<Vec<Occurrence>>, (StatusCode, String)> {
    let engine = state.engine.read();
    let kw = engine.normalize(&word).unwrap_or_else(|| word.to_lowercase());
    match engine.occurrences(&kw) {
        Some(occs) => Ok(Json(occs.to_vec())),
        None => Err((StatusCode::NOT_FOUND, format!("keyword {kw:?} not in index"))),
    }
}

pub async fn ingest_handler(
    State(state): State<AppState>,
    Json(req): Json<IngestRequest>,
) -> Result<Json<IngestResponse>, (StatusCode, String)> {
    let mut engine = state.engine.write();
    let tokens = req.text.split_whitespace();
    match engine.add_document(&req.document, tokens) {
        Ok(keywords) => {
            tracing::info!(document = %req.document, keywords, "ingested document");
            Ok(Json(IngestResponse { document: req.document, keywords }))
        }
        Err(e) => Err((StatusCode::CONFLICT, e.to_string())),
    }
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let engine = state.engine.read();
    Json(StatsResponse {
        documents: engine.document_count(),
        keywords: engine.keyword_count(),
    })
}
