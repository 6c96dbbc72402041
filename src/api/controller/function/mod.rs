//! Function controller: read API and reconcile-by-API

use axum::extract::State;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_json, ApiJson, ApiPath};
use crate::app_state::AppState;
use crate::core::client::fc_types::FunctionRecord;
use crate::domain::function::desired_state::ReconcileRequest;
use crate::domain::function::dto::function_apply_request::FunctionApplyRequest;
use crate::domain::function::dto::function_view::{DomainView, FunctionView, ServiceView};
use crate::errors::AppError;

pub struct FunctionController;

impl FunctionController {
    pub async fn list_domains(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<DomainView>>>, AppError> {
        to_json(state.function_service.list_domains().await)
    }

    pub async fn list_services(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<ServiceView>>>, AppError> {
        to_json(state.function_service.list_services().await)
    }

    pub async fn list_functions(
        State(state): State<AppState>,
        ApiPath(service): ApiPath<String>,
    ) -> Result<Json<ApiResponse<Vec<FunctionView>>>, AppError> {
        to_json(state.function_service.list_functions(service).await)
    }

    pub async fn get_function(
        State(state): State<AppState>,
        ApiPath((service, function)): ApiPath<(String, String)>,
    ) -> Result<Json<ApiResponse<FunctionRecord>>, AppError> {
        to_json(state.function_service.get_function(service, function).await)
    }

    pub async fn apply(
        State(state): State<AppState>,
        ApiPath((service, function)): ApiPath<(String, String)>,
        ApiJson(payload): ApiJson<FunctionApplyRequest>,
    ) -> Result<Json<ApiResponse<FunctionRecord>>, AppError> {
        to_json(
            state
                .function_service
                .apply(service, function, ReconcileRequest::Api(payload))
                .await,
        )
    }
}
