use serde::{Deserialize, Serialize};

use crate::domain::function::dto::function_apply_request::FunctionApplyRequest;
use crate::domain::function::dto::registry_push_event::RegistryPushEvent;
use crate::domain::function::image_reference::{ImageReference, ImageReferenceStrategy};

/// Accelerated image pulling on the provider side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccelerationMode {
    #[default]
    None,
    Default,
}

impl AccelerationMode {
    /// Only the exact string `"Default"` turns acceleration on.
    pub fn from_wire(raw: &str) -> Self {
        if raw == "Default" {
            Self::Default
        } else {
            Self::None
        }
    }

    pub fn as_provider_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Default => "Default",
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Default
    }
}

/// What a single reconcile call should leave behind at the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredFunctionState {
    pub service_role: Option<String>,
    pub image: ImageReference,
    pub acceleration: AccelerationMode,
    pub provision_http_trigger: bool,
}

/// The two ways a reconcile can be requested, decoded once at the boundary.
#[derive(Debug, Clone)]
pub enum ReconcileRequest {
    Api(FunctionApplyRequest),
    RegistryPush(RegistryPushEvent),
}

impl ReconcileRequest {
    /// `None` when an API request carries no image; validation rejects those first.
    pub fn into_desired_state(self, strategy: ImageReferenceStrategy) -> Option<DesiredFunctionState> {
        match self {
            Self::Api(req) => {
                let custom = req.custom?;
                Some(DesiredFunctionState {
                    service_role: req.service.and_then(|s| s.role),
                    image: ImageReference::verbatim(custom.image),
                    acceleration: AccelerationMode::from_wire(&custom.acceleration),
                    provision_http_trigger: req.create_with_http_trigger,
                })
            }
            Self::RegistryPush(event) => Some(DesiredFunctionState {
                service_role: None,
                image: ImageReference::from_push_event(&event, strategy),
                acceleration: AccelerationMode::Default,
                provision_http_trigger: false,
            }),
        }
    }
}
