//! Function routes (e.g., /api/*)

use axum::{routing::get, Router};
use crate::api::controller::function::FunctionController;
use crate::app_state::AppState;

pub fn function_routes() -> Router<AppState> {
    Router::new()
        .route("/domains", get(FunctionController::list_domains))
        .route("/services", get(FunctionController::list_services))
        .route("/service/{service}/functions", get(FunctionController::list_functions))
        .route(
            "/service/{service}/function/{function}",
            get(FunctionController::get_function).post(FunctionController::apply),
        )
}
