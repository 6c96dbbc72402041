use axum::{extract::OriginalUri, middleware, Router};
use tower_http::cors::CorsLayer;

use crate::api::middleware::auth::require_token;
use crate::api::routes::{
    function_routes::function_routes, system_routes::system_routes,
    webhook_routes::webhook_routes,
};
use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router, optionally mounted under `mount_path`.
pub fn app_router(state: AppState, mount_path: &str) -> Router {
    // Everything except /version needs a token
    let protected = Router::new()
        .nest("/api", function_routes())
        .nest("/alitrigger", webhook_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    let root = Router::new().merge(system_routes()).merge(protected);

    let app = if mount_path.is_empty() {
        root
    } else {
        Router::new().nest(mount_path, root)
    };

    // wrong method on a known path is reported like an unknown path
    app.fallback(handler_404)
        .method_not_allowed_fallback(handler_404)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

// Handler for 404 Not Found
async fn handler_404(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
