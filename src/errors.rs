use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use thiserror::Error;

use crate::core::client::fc_provider::ProviderError;
use crate::domain::function::function_error::FunctionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BodyParsingError(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ProviderError(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("not found")]
    RouteNotFound(String),
}

impl AppError {
    /// Maps a domain failure onto a response variant, keeping its message.
    pub fn from_domain(err: anyhow::Error) -> Self {
        let message = format!("{err:#}");

        if let Some(fe) = err.downcast_ref::<FunctionError>() {
            return match fe {
                FunctionError::ServiceNotFound(_) | FunctionError::FunctionNotFound { .. } => {
                    AppError::NotFound(message)
                }
                FunctionError::InvalidRequest(_) => AppError::BadRequest(message),
            };
        }
        if err.downcast_ref::<ProviderError>().is_some() {
            return AppError::ProviderError(message);
        }
        AppError::BadRequest(message)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BodyParsingError(_)
            | AppError::BadRequest(_)
            | AppError::NotFound(_)
            | AppError::ProviderError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let data = match &self {
            AppError::RouteNotFound(path) => Value::String(path.clone()),
            _ => Value::Null,
        };

        let body = Json(json!({
            "code": 1,
            "msg": self.to_string(),
            "data": data,
        }));

        (status, body).into_response()
    }
}
