//! Create-or-update of one container function, driven by existence checks.
//!
//! Nothing is rolled back: a service created before a failed function create
//! stays, and a function whose trigger could not be created stays untriggered.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OwnedMutexGuard;
use tracing::{info, warn};

use crate::core::client::fc_provider::{FcProvider, ProviderResult};
use crate::core::client::fc_types::{
    CreateFunctionInput, CreateTriggerInput, CustomContainerConfig, FunctionRecord,
    HttpTriggerConfig, UpdateFunctionInput,
};
use crate::domain::function::desired_state::DesiredFunctionState;
use crate::domain::function::probe::{function_exists, service_exists};

pub const CONTAINER_RUNTIME: &str = "custom-container";
pub const CONTAINER_HANDLER: &str = "index.handler";
pub const INSTANCE_CONCURRENCY: i64 = 10;
pub const INSTANCE_SOFT_CONCURRENCY: i64 = 8;

pub const HTTP_TRIGGER_NAME: &str = "http";
pub const HTTP_TRIGGER_TYPE: &str = "http";
pub const HTTP_TRIGGER_AUTH: &str = "anonymous";
pub const HTTP_TRIGGER_METHODS: [&str; 2] = ["GET", "POST"];

type Key = (String, String);

/// One async mutex per (service, function); entries are dropped once unused.
#[derive(Default)]
pub struct KeyedLocks {
    inner: Mutex<HashMap<Key, Slot>>,
}

#[derive(Default)]
struct Slot {
    mutex: Arc<tokio::sync::Mutex<()>>,
    // holder plus waiters, including waiters whose future is dropped mid-wait
    users: usize,
}

/// Counts one user of a slot until dropped.
struct Lease<'a> {
    locks: &'a KeyedLocks,
    key: Key,
}

impl Drop for Lease<'_> {
    fn drop(&mut self) {
        let mut map = self.locks.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = map.get_mut(&self.key) {
            slot.users = slot.users.saturating_sub(1);
            if slot.users == 0 {
                map.remove(&self.key);
            }
        }
    }
}

pub struct KeyGuard<'a> {
    _guard: OwnedMutexGuard<()>,
    _lease: Lease<'a>,
}

impl KeyedLocks {
    pub async fn lock(&self, service: &str, function: &str) -> KeyGuard<'_> {
        let key = (service.to_string(), function.to_string());
        let mutex = {
            let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let slot = map.entry(key.clone()).or_default();
            slot.users += 1;
            slot.mutex.clone()
        };
        let lease = Lease { locks: self, key };

        KeyGuard {
            _guard: mutex.lock_owned().await,
            _lease: lease,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Reconciler {
    provider: Arc<dyn FcProvider>,
    locks: KeyedLocks,
}

impl Reconciler {
    pub fn new(provider: Arc<dyn FcProvider>) -> Self {
        Self {
            provider,
            locks: KeyedLocks::default(),
        }
    }

    /// Ensures `service/function` exists and runs `desired.image`.
    ///
    /// Calls for the same key are serialized inside this process only.
    pub async fn apply(
        &self,
        service: &str,
        function: &str,
        desired: &DesiredFunctionState,
    ) -> ProviderResult<FunctionRecord> {
        let _guard = self.locks.lock(service, function).await;
        let provider = self.provider.as_ref();

        if !service_exists(provider, service).await? {
            info!("Creating service '{}'", service);
            provider
                .create_service(service, desired.service_role.as_deref())
                .await?;
        }

        let record = if function_exists(provider, service, function).await? {
            info!("Updating function '{}/{}' to {}", service, function, desired.image);
            provider
                .update_function(service, function, &update_input(desired))
                .await?
        } else {
            info!("Creating function '{}/{}' with {}", service, function, desired.image);
            let record = provider
                .create_function(service, &create_input(function, desired))
                .await?;

            if desired.provision_http_trigger {
                if let Err(e) = provider
                    .create_trigger(service, function, &http_trigger_input())
                    .await
                {
                    warn!(
                        "Function '{}/{}' created without HTTP trigger: {}",
                        service, function, e
                    );
                    return Err(e);
                }
            }
            record
        };

        Ok(record.redacted())
    }
}

fn container_config(desired: &DesiredFunctionState) -> CustomContainerConfig {
    CustomContainerConfig {
        image: Some(desired.image.as_str().to_string()),
        acceleration_type: Some(desired.acceleration.as_provider_str().to_string()),
        ..Default::default()
    }
}

pub fn create_input(function: &str, desired: &DesiredFunctionState) -> CreateFunctionInput {
    CreateFunctionInput {
        function_name: function.to_string(),
        runtime: CONTAINER_RUNTIME.to_string(),
        handler: CONTAINER_HANDLER.to_string(),
        instance_concurrency: Some(INSTANCE_CONCURRENCY),
        instance_soft_concurrency: Some(INSTANCE_SOFT_CONCURRENCY),
        custom_container_config: container_config(desired),
    }
}

pub fn update_input(desired: &DesiredFunctionState) -> UpdateFunctionInput {
    UpdateFunctionInput {
        custom_container_config: container_config(desired),
    }
}

pub fn http_trigger_input() -> CreateTriggerInput {
    CreateTriggerInput {
        trigger_name: HTTP_TRIGGER_NAME.to_string(),
        trigger_type: HTTP_TRIGGER_TYPE.to_string(),
        trigger_config: HttpTriggerConfig {
            auth_type: HTTP_TRIGGER_AUTH.to_string(),
            methods: HTTP_TRIGGER_METHODS.iter().map(|m| m.to_string()).collect(),
            disable_url_internet: false,
        },
    }
}
