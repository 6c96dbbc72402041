//! In-memory provider used by the domain tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::client::fc_provider::{FcProvider, ProviderError, ProviderResult};
use crate::core::client::fc_types::{
    CreateFunctionInput, CreateTriggerInput, CustomDomainRecord, EnvironmentMap, FunctionRecord,
    ServiceRecord, TriggerRecord, UpdateFunctionInput,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListServices,
    ListFunctions(String),
    GetFunction(String, String),
    CreateService(String, Option<String>),
    CreateFunction(String, String),
    UpdateFunction(String, String),
    CreateTrigger(String, String),
    ListCustomDomains,
}

#[derive(Default)]
struct State {
    services: Vec<String>,
    functions: BTreeMap<(String, String), FunctionRecord>,
    triggers: Vec<(String, String, CreateTriggerInput)>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct FakeProvider {
    state: Mutex<State>,
    fail_lists: bool,
    fail_create_function: bool,
    fail_trigger: bool,
    env: EnvironmentMap,
}

fn api_error(message: &str) -> ProviderError {
    ProviderError::Api {
        status: 500,
        code: "InternalServerError".into(),
        message: message.into(),
        request_id: "req-1".into(),
    }
}

impl FakeProvider {
    pub fn with_service(self, service: &str) -> Self {
        self.state.lock().unwrap().services.push(service.into());
        self
    }

    pub fn with_function(self, service: &str, function: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            if !state.services.iter().any(|s| s == service) {
                state.services.push(service.into());
            }
            state.functions.insert(
                (service.into(), function.into()),
                FunctionRecord {
                    function_name: Some(function.into()),
                    environment_variables: Some(self.env.clone()),
                    ..Default::default()
                },
            );
        }
        self
    }

    /// Environment variables every stored function carries.
    pub fn with_env(mut self, pairs: &[(&str, &str)]) -> Self {
        self.env = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }

    pub fn failing_lists(mut self) -> Self {
        self.fail_lists = true;
        self
    }

    pub fn failing_create_function(mut self) -> Self {
        self.fail_create_function = true;
        self
    }

    pub fn failing_trigger(mut self) -> Self {
        self.fail_trigger = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(*c)).count()
    }

    pub fn has_service(&self, service: &str) -> bool {
        self.state.lock().unwrap().services.iter().any(|s| s == service)
    }

    pub fn stored_function(&self, service: &str, function: &str) -> Option<FunctionRecord> {
        self.state
            .lock()
            .unwrap()
            .functions
            .get(&(service.to_string(), function.to_string()))
            .cloned()
    }

    pub fn triggers(&self) -> Vec<(String, String, CreateTriggerInput)> {
        self.state.lock().unwrap().triggers.clone()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl FcProvider for FakeProvider {
    async fn list_services(&self) -> ProviderResult<Vec<ServiceRecord>> {
        self.record(Call::ListServices);
        if self.fail_lists {
            return Err(api_error("list services failed"));
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .services
            .iter()
            .map(|name| ServiceRecord {
                service_id: Some(format!("id-{name}")),
                service_name: Some(name.clone()),
                ..Default::default()
            })
            .collect())
    }

    async fn list_functions(&self, service: &str) -> ProviderResult<Vec<FunctionRecord>> {
        self.record(Call::ListFunctions(service.into()));
        if self.fail_lists {
            return Err(api_error("list functions failed"));
        }
        let state = self.state.lock().unwrap();
        Ok(state
            .functions
            .iter()
            .filter(|((s, _), _)| s == service)
            .map(|(_, f)| f.clone())
            .collect())
    }

    async fn get_function(&self, service: &str, function: &str) -> ProviderResult<FunctionRecord> {
        self.record(Call::GetFunction(service.into(), function.into()));
        self.stored_function(service, function)
            .ok_or_else(|| api_error("FunctionNotFound"))
    }

    async fn create_service(
        &self,
        service: &str,
        role: Option<&str>,
    ) -> ProviderResult<ServiceRecord> {
        self.record(Call::CreateService(service.into(), role.map(str::to_string)));
        self.state.lock().unwrap().services.push(service.into());
        Ok(ServiceRecord {
            service_name: Some(service.into()),
            role: role.map(str::to_string),
            ..Default::default()
        })
    }

    async fn create_function(
        &self,
        service: &str,
        input: &CreateFunctionInput,
    ) -> ProviderResult<FunctionRecord> {
        self.record(Call::CreateFunction(service.into(), input.function_name.clone()));
        if self.fail_create_function {
            return Err(api_error("create function failed"));
        }
        let record = FunctionRecord {
            function_name: Some(input.function_name.clone()),
            runtime: Some(input.runtime.clone()),
            handler: Some(input.handler.clone()),
            instance_concurrency: input.instance_concurrency,
            instance_soft_concurrency: input.instance_soft_concurrency,
            environment_variables: Some(self.env.clone()),
            custom_container_config: Some(input.custom_container_config.clone()),
            ..Default::default()
        };
        self.state
            .lock()
            .unwrap()
            .functions
            .insert((service.into(), input.function_name.clone()), record.clone());
        Ok(record)
    }

    async fn update_function(
        &self,
        service: &str,
        function: &str,
        input: &UpdateFunctionInput,
    ) -> ProviderResult<FunctionRecord> {
        self.record(Call::UpdateFunction(service.into(), function.into()));
        let mut state = self.state.lock().unwrap();
        let record = state
            .functions
            .get_mut(&(service.to_string(), function.to_string()))
            .ok_or_else(|| api_error("FunctionNotFound"))?;
        record.custom_container_config = Some(input.custom_container_config.clone());
        Ok(record.clone())
    }

    async fn create_trigger(
        &self,
        service: &str,
        function: &str,
        input: &CreateTriggerInput,
    ) -> ProviderResult<TriggerRecord> {
        self.record(Call::CreateTrigger(service.into(), function.into()));
        if self.fail_trigger {
            return Err(api_error("create trigger failed"));
        }
        self.state
            .lock()
            .unwrap()
            .triggers
            .push((service.into(), function.into(), input.clone()));
        Ok(TriggerRecord {
            trigger_name: Some(input.trigger_name.clone()),
            ..Default::default()
        })
    }

    async fn list_custom_domains(&self) -> ProviderResult<Vec<CustomDomainRecord>> {
        self.record(Call::ListCustomDomains);
        Ok(Vec::new())
    }
}
