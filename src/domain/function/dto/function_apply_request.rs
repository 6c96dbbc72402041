use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/service/{service}/function/{function}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FunctionApplyRequest {
    /// Used only when the service has to be created.
    pub service: Option<ServiceSpec>,

    #[validate(required(message = "custom.image is required"), nested)]
    pub custom: Option<CustomImage>,

    #[serde(default)]
    pub create_with_http_trigger: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSpec {
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CustomImage {
    #[validate(length(min = 1, message = "custom.image must not be empty"))]
    pub image: String,

    /// `"Default"` enables accelerated pulls; anything else disables them.
    #[serde(default)]
    pub acceleration: String,
}
