//! Startup configuration read from the environment (and `.env`, loaded in main).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::function::image_reference::ImageReferenceStrategy;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Credentials and location of the Function Compute account.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub access_key_secret: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    /// `None` means the built-in default signing key.
    pub jwt_secret: Option<String>,
    pub mount_path: String,
    pub bind_addr: SocketAddr,
    pub image_reference: ImageReferenceStrategy,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let provider = ProviderConfig {
            endpoint: required("ENDPOINT")?,
            region: required("REGION")?,
            access_key_id: required("ACCESS_KEY")?,
            access_key_secret: required("SECRET")?,
        };

        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let image_reference = match optional("IMAGE_REFERENCE_FORMAT") {
            None => ImageReferenceStrategy::default(),
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                key: "IMAGE_REFERENCE_FORMAT",
                reason,
            })?,
        };

        Ok(Self {
            provider,
            jwt_secret: optional("JWT_SECRET"),
            mount_path: normalize_mount_path(optional("MOUNT_PATH").as_deref()),
            bind_addr,
            image_reference,
            log_dir: optional("LOG_DIR").map(PathBuf::from),
        })
    }
}

/// `""`, `"/"` → `""`; `"hooks/"` → `"/hooks"`.
pub fn normalize_mount_path(raw: Option<&str>) -> String {
    let trimmed = raw.unwrap_or_default().trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
