use std::sync::Arc;

use anyhow::Result;
use tracing::debug;
use validator::Validate;

use crate::core::client::fc_provider::FcProvider;
use crate::core::client::fc_types::FunctionRecord;
use crate::domain::function::desired_state::ReconcileRequest;
use crate::domain::function::dto::function_view::{DomainView, FunctionView, ServiceView};
use crate::domain::function::function_error::FunctionError;
use crate::domain::function::image_reference::ImageReferenceStrategy;
use crate::domain::function::probe::{function_exists, service_exists};
use crate::domain::function::reconciler::Reconciler;

/// Read API and reconcile entry points over one provider.
pub struct FunctionService {
    provider: Arc<dyn FcProvider>,
    reconciler: Reconciler,
    image_strategy: ImageReferenceStrategy,
}

impl FunctionService {
    pub fn new(provider: Arc<dyn FcProvider>, image_strategy: ImageReferenceStrategy) -> Self {
        Self {
            reconciler: Reconciler::new(provider.clone()),
            provider,
            image_strategy,
        }
    }

    pub async fn list_domains(&self) -> Result<Vec<DomainView>> {
        let domains = self.provider.list_custom_domains().await?;
        Ok(domains.into_iter().map(DomainView::from).collect())
    }

    pub async fn list_services(&self) -> Result<Vec<ServiceView>> {
        let services = self.provider.list_services().await?;
        Ok(services.into_iter().map(ServiceView::from).collect())
    }

    pub async fn list_functions(&self, service: String) -> Result<Vec<FunctionView>> {
        let functions = self.provider.list_functions(&service).await?;
        Ok(functions.into_iter().map(FunctionView::from).collect())
    }

    /// Function detail; both levels must exist first.
    pub async fn get_function(&self, service: String, function: String) -> Result<FunctionRecord> {
        let provider = self.provider.as_ref();

        if !service_exists(provider, &service).await? {
            return Err(FunctionError::ServiceNotFound(service).into());
        }
        if !function_exists(provider, &service, &function).await? {
            return Err(FunctionError::FunctionNotFound { service, function }.into());
        }

        let record = provider.get_function(&service, &function).await?;
        Ok(record.redacted())
    }

    pub async fn apply(
        &self,
        service: String,
        function: String,
        request: ReconcileRequest,
    ) -> Result<FunctionRecord> {
        if let ReconcileRequest::Api(req) = &request {
            req.validate()
                .map_err(|e| FunctionError::InvalidRequest(e.to_string()))?;
        }

        let desired = request
            .into_desired_state(self.image_strategy)
            .ok_or_else(|| FunctionError::InvalidRequest("custom.image is required".into()))?;
        debug!("Reconciling '{}/{}' to {:?}", service, function, desired);

        Ok(self.reconciler.apply(&service, &function, &desired).await?)
    }
}
