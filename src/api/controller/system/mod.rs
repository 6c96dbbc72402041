//! System controller: unauthenticated service metadata

use std::collections::BTreeMap;

use axum::Json;

use crate::api::dto::ApiResponse;
use crate::build_info;

pub struct SystemController;

impl SystemController {
    pub async fn version() -> Json<ApiResponse<BTreeMap<&'static str, String>>> {
        Json(ApiResponse::ok(build_info::info_map()))
    }
}
