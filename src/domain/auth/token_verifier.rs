//! Bearer token check for the API and webhook routes.
//!
//! Tokens are HMAC-signed JWTs carrying `dat = "ali-fc-webhook"`. Every
//! failure collapses into a plain `false`.

use std::collections::{HashMap, HashSet};

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::Value;
use tracing::debug;

/// Key used when `JWT_SECRET` is not configured. Anyone who knows it can mint tokens.
pub const DEFAULT_SIGNING_KEY: &str = "default-key-github.com/golang-jwt/jwt/v4";

pub const AUDIENCE_CLAIM: &str = "dat";
pub const AUDIENCE_VALUE: &str = "ali-fc-webhook";

const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

#[derive(Clone)]
pub struct AuthConfig {
    secret: Vec<u8>,
    using_default_key: bool,
}

impl AuthConfig {
    pub fn new(secret: Option<&str>) -> Self {
        match secret {
            Some(s) if !s.is_empty() => Self {
                secret: s.as_bytes().to_vec(),
                using_default_key: false,
            },
            _ => Self {
                secret: DEFAULT_SIGNING_KEY.as_bytes().to_vec(),
                using_default_key: true,
            },
        }
    }

    pub fn using_default_key(&self) -> bool {
        self.using_default_key
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("using_default_key", &self.using_default_key)
            .finish()
    }
}

pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = HMAC_ALGORITHMS.to_vec();
        // exp/nbf are honoured when present but never required
        validation.required_spec_claims = HashSet::new();
        validation.validate_aud = false;

        Self {
            key: DecodingKey::from_secret(&config.secret),
            validation,
        }
    }

    pub fn authorize(&self, token: Option<&str>) -> bool {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return false;
        };

        match decode::<HashMap<String, Value>>(token, &self.key, &self.validation) {
            Ok(data) => {
                data.claims.get(AUDIENCE_CLAIM).and_then(Value::as_str) == Some(AUDIENCE_VALUE)
            }
            Err(e) => {
                debug!("Rejected token: {}", e);
                false
            }
        }
    }
}
