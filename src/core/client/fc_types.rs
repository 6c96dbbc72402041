/// Wire models for the Function Compute 2021-04-06 API
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

pub type EnvironmentMap = BTreeMap<String, String>;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub service_id: Option<String>,
    pub service_name: Option<String>,
    pub description: Option<String>,
    pub role: Option<String>,
    pub created_time: Option<String>,
    pub last_modified_time: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomContainerConfig {
    pub image: Option<String>,
    pub acceleration_type: Option<String>,
    pub command: Option<String>,
    pub args: Option<String>,
}

/// Function record as returned by get/create/update/list.
///
/// Fields this service does not interpret are kept in `extra` so responses
/// pass them through untouched.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    pub function_id: Option<String>,
    pub function_name: Option<String>,
    pub description: Option<String>,
    pub runtime: Option<String>,
    pub handler: Option<String>,
    pub memory_size: Option<i64>,
    pub timeout: Option<i64>,
    pub instance_concurrency: Option<i64>,
    pub instance_soft_concurrency: Option<i64>,
    pub environment_variables: Option<EnvironmentMap>,
    pub custom_container_config: Option<CustomContainerConfig>,
    pub created_time: Option<String>,
    pub last_modified_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceInput {
    pub service_name: String,
    pub role: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFunctionInput {
    pub function_name: String,
    pub runtime: String,
    pub handler: String,
    pub instance_concurrency: Option<i64>,
    pub instance_soft_concurrency: Option<i64>,
    pub custom_container_config: CustomContainerConfig,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFunctionInput {
    pub custom_container_config: CustomContainerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpTriggerConfig {
    pub auth_type: String,
    pub methods: Vec<String>,
    #[serde(rename = "disableURLInternet")]
    pub disable_url_internet: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTriggerInput {
    pub trigger_name: String,
    pub trigger_type: String,
    pub trigger_config: HttpTriggerConfig,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRecord {
    pub trigger_id: Option<String>,
    pub trigger_name: Option<String>,
    pub trigger_type: Option<String>,
    pub url_internet: Option<String>,
    pub url_intranet: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRoute {
    pub path: Option<String>,
    pub service_name: Option<String>,
    pub function_name: Option<String>,
    pub qualifier: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
    #[serde(default)]
    pub routes: Vec<PathRoute>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDomainRecord {
    pub domain_name: Option<String>,
    pub protocol: Option<String>,
    pub route_config: Option<RouteConfig>,
}

/* ---------------- List envelopes ---------------- */

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServicesOutput {
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFunctionsOutput {
    #[serde(default)]
    pub functions: Vec<FunctionRecord>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomDomainsOutput {
    #[serde(default)]
    pub custom_domains: Vec<CustomDomainRecord>,
    pub next_token: Option<String>,
}

/// Error body the provider sends with non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderErrorBody {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}
