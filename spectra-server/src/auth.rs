use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use spectra_core::client::ACCESS_TOKEN_HEADER;
use spectra_core::{AccessClaims, TokenSigner};
use tracing::warn;

use crate::routes::{ApiError, AppState};

/// Check the `x-access-token` header against `signer`.
///
/// A missing or empty header is `Unauthenticated`; anything present that
/// fails verification (bad encoding, signature, algorithm, expiry) is
/// `Forbidden`.
pub fn authorize(headers: &HeaderMap, signer: &TokenSigner) -> Result<AccessClaims, ApiError> {
    let value = headers
        .get(ACCESS_TOKEN_HEADER)
        .ok_or(ApiError::Unauthenticated)?;

    if value.is_empty() {
        return Err(ApiError::Unauthenticated);
    }

    let token = value.to_str().map_err(|_| {
        warn!("Access token header is not valid ASCII");
        ApiError::Forbidden
    })?;

    signer.verify(token).map_err(|e| {
        warn!("Token verification failed: {e}");
        ApiError::Forbidden
    })
}

/// Middleware gate for protected routes. On success the decoded claims are
/// available to the handler as an `Extension<AccessClaims>`.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    match authorize(req.headers(), &state.signer) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => {
            if matches!(err, ApiError::Unauthenticated) {
                warn!("No access token on {}", req.uri().path());
            }
            err.into_response()
        }
    }
}
