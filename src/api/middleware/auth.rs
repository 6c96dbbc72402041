use axum::extract::{Query, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::api::dto::TokenQuery;
use crate::app_state::AppState;
use crate::errors::AppError;

/// Rejects requests whose `?token=` does not verify.
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = Query::<TokenQuery>::try_from_uri(req.uri())
        .ok()
        .and_then(|Query(q)| q.token);

    if !state.token_verifier.authorize(token.as_deref()) {
        warn!("Unauthorized request to {}", req.uri().path());
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}
