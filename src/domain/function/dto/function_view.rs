//! Trimmed views returned by the list endpoints.

use serde::Serialize;

use crate::core::client::fc_types::{CustomDomainRecord, FunctionRecord, ServiceRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomImageView {
    pub image: String,
    pub acceleration: String,
}

/// No environment variables here, so nothing to redact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionView {
    pub id: String,
    pub name: String,
    pub custom: Option<CustomImageView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteView {
    pub path: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainView {
    pub name: String,
    pub routes: Vec<RouteView>,
}

impl From<ServiceRecord> for ServiceView {
    fn from(s: ServiceRecord) -> Self {
        Self {
            id: s.service_id.unwrap_or_default(),
            name: s.service_name.unwrap_or_default(),
        }
    }
}

impl From<FunctionRecord> for FunctionView {
    fn from(f: FunctionRecord) -> Self {
        let custom = f.custom_container_config.and_then(|c| {
            Some(CustomImageView {
                image: c.image?,
                acceleration: c.acceleration_type?,
            })
        });

        Self {
            id: f.function_id.unwrap_or_default(),
            name: f.function_name.unwrap_or_default(),
            custom,
        }
    }
}

impl From<CustomDomainRecord> for DomainView {
    fn from(d: CustomDomainRecord) -> Self {
        let routes = d
            .route_config
            .map(|rc| {
                rc.routes
                    .into_iter()
                    .map(|r| RouteView {
                        path: r.path.unwrap_or_default(),
                        target: format!(
                            "{}/{}:{}",
                            r.service_name.unwrap_or_default(),
                            r.function_name.unwrap_or_default(),
                            r.qualifier.unwrap_or_else(|| "LATEST".to_string())
                        ),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: d.domain_name.unwrap_or_default(),
            routes,
        }
    }
}
