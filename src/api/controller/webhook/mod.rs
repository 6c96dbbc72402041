//! Registry webhook controller

use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_json, ApiJson, ApiPath};
use crate::app_state::AppState;
use crate::core::client::fc_types::FunctionRecord;
use crate::domain::function::desired_state::ReconcileRequest;
use crate::domain::function::dto::registry_push_event::RegistryPushEvent;
use crate::errors::AppError;

pub struct WebhookController;

impl WebhookController {
    pub async fn registry_push(
        State(state): State<AppState>,
        ApiPath((service, function)): ApiPath<(String, String)>,
        ApiJson(event): ApiJson<RegistryPushEvent>,
    ) -> Result<Json<ApiResponse<FunctionRecord>>, AppError> {
        info!(
            "Push of {}:{} ({}) for '{}/{}'",
            event.repository.repo_full_name,
            event.push_data.tag,
            event.push_data.digest,
            service,
            function
        );

        to_json(
            state
                .function_service
                .apply(service, function, ReconcileRequest::RegistryPush(event))
                .await,
        )
    }
}
