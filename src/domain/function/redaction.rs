use crate::core::client::fc_types::{EnvironmentMap, FunctionRecord};

/// Environment variables whose values never leave this service.
pub const SENSITIVE_ENV_KEYS: [&str; 3] = ["ENDPOINT", "ACCESS_KEY", "SECRET"];

pub const MASK: &str = "******";

/// Masks the value of every listed key that is present. Absent map is a no-op.
pub fn redact_environment(env: Option<&mut EnvironmentMap>, keys: &[&str]) {
    let Some(env) = env else {
        return;
    };

    for key in keys {
        if let Some(value) = env.get_mut(*key) {
            *value = MASK.to_string();
        }
    }
}

impl FunctionRecord {
    /// Copy of the provider record safe to hand to callers.
    pub fn redacted(mut self) -> Self {
        redact_environment(self.environment_variables.as_mut(), &SENSITIVE_ENV_KEYS);
        self
    }
}
