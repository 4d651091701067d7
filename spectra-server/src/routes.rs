use std::path::Path;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use spectra_core::models::{ErrorBody, SearchResultItem, TokenResponse};
use spectra_core::{AccessClaims, TokenSigner};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, error, info};

use crate::auth::require_token;
use crate::itunes::ItunesClient;

/// Base path of the JSON API.
pub const API_BASE: &str = "/api/tunes";

/// Shared, read-only request state.
pub struct AppState {
    pub signer: TokenSigner,
    pub itunes: ItunesClient,
}

/// Every failure the API reports, with its fixed status and message.
#[derive(Debug)]
pub enum ApiError {
    Unauthenticated,
    Forbidden,
    Upstream,
    TokenIssue,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Upstream | ApiError::TokenIssue => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated => "No token provided, authorization denied.",
            ApiError::Forbidden => "Token is not valid or expired.",
            ApiError::Upstream => "Failed to fetch data from iTunes API due to an internal error.",
            ApiError::TokenIssue => "Failed to generate token.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Deserialize)]
struct SearchQuery {
    term: Option<String>,
    media: Option<String>,
}

pub fn api_router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/search", get(search))
        .route_layer(from_fn_with_state(state.clone(), require_token));

    let api = Router::new()
        .route("/generate-token", post(generate_token))
        .merge(protected);

    Router::new().nest(API_BASE, api).with_state(state)
}

/// Full application: API routes, optional static web UI with SPA
/// fallback to `index.html`, and permissive CORS.
pub fn build_app(state: Arc<AppState>, web_dir: Option<&Path>) -> Router {
    let router = api_router(state);

    let router = match web_dir {
        Some(web_dir) => {
            info!("Serving web UI from {}", web_dir.display());
            let spa_fallback =
                ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
            router.fallback_service(spa_fallback)
        }
        None => router,
    };

    router.layer(CorsLayer::permissive())
}

async fn generate_token(State(state): State<Arc<AppState>>) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.signer.issue().map_err(|e| {
        error!("Failed to sign token: {e}");
        ApiError::TokenIssue
    })?;

    debug!("Issued access token");
    Ok(Json(TokenResponse { token }))
}

async fn search(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<AccessClaims>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchResultItem>>, ApiError> {
    debug!(
        "Search term={:?} media={:?} (token purpose {}, expires {})",
        query.term, query.media, claims.purpose, claims.exp
    );

    let items = state
        .itunes
        .search(query.term.as_deref(), query.media.as_deref())
        .await
        .map_err(|e| {
            error!("Error fetching data from iTunes API: {e}");
            ApiError::Upstream
        })?;

    Ok(Json(items))
}
