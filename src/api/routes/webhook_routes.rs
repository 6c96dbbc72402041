//! Registry webhook routes (e.g., /alitrigger/*)

use axum::{routing::post, Router};
use crate::api::controller::webhook::WebhookController;
use crate::app_state::AppState;

pub fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/service/{service}/function/{function}",
            post(WebhookController::registry_push),
        )
}
