use thiserror::Error;

/// Failures decided by this service rather than reported by the provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FunctionError {
    #[error("service not found: {0}")]
    ServiceNotFound(String),

    #[error("function not found: {service}/{function}")]
    FunctionNotFound { service: String, function: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
