use async_trait::async_trait;
use thiserror::Error;

use crate::core::client::fc_types::{
    CreateFunctionInput, CreateTriggerInput, CustomDomainRecord, FunctionRecord, ServiceRecord,
    TriggerRecord, UpdateFunctionInput,
};

/// Failure of a single provider call. Surfaced to callers verbatim.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status} {code}: {message} (request id: {request_id})")]
    Api {
        status: u16,
        code: String,
        message: String,
        request_id: String,
    },

    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid provider request: {0}")]
    Request(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Capabilities the reconciler and the read API need from Function Compute.
///
/// List calls return a single page; callers never follow `nextToken`.
#[async_trait]
pub trait FcProvider: Send + Sync {
    async fn list_services(&self) -> ProviderResult<Vec<ServiceRecord>>;

    async fn list_functions(&self, service: &str) -> ProviderResult<Vec<FunctionRecord>>;

    async fn get_function(&self, service: &str, function: &str) -> ProviderResult<FunctionRecord>;

    async fn create_service(
        &self,
        service: &str,
        role: Option<&str>,
    ) -> ProviderResult<ServiceRecord>;

    async fn create_function(
        &self,
        service: &str,
        input: &CreateFunctionInput,
    ) -> ProviderResult<FunctionRecord>;

    async fn update_function(
        &self,
        service: &str,
        function: &str,
        input: &UpdateFunctionInput,
    ) -> ProviderResult<FunctionRecord>;

    async fn create_trigger(
        &self,
        service: &str,
        function: &str,
        input: &CreateTriggerInput,
    ) -> ProviderResult<TriggerRecord>;

    async fn list_custom_domains(&self) -> ProviderResult<Vec<CustomDomainRecord>>;
}
