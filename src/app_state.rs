use std::sync::Arc;

use tracing::warn;

use crate::config::AppConfig;
use crate::core::client::fc_provider::FcProvider;
use crate::domain::auth::token_verifier::{AuthConfig, TokenVerifier};
use crate::domain::function::image_reference::ImageReferenceStrategy;
use crate::domain::function::service::function_service::FunctionService;

#[derive(Clone)]
pub struct AppState {
    pub function_service: Arc<FunctionService>,
    pub token_verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(
        provider: Arc<dyn FcProvider>,
        image_strategy: ImageReferenceStrategy,
        auth: &AuthConfig,
    ) -> Self {
        Self {
            function_service: Arc::new(FunctionService::new(provider, image_strategy)),
            token_verifier: Arc::new(TokenVerifier::new(auth)),
        }
    }
}

pub fn build_app_state(cfg: &AppConfig, provider: Arc<dyn FcProvider>) -> AppState {
    let auth = AuthConfig::new(cfg.jwt_secret.as_deref());
    if auth.using_default_key() {
        warn!("JWT_SECRET is not set; tokens are verified with the built-in default key");
    }
    AppState::new(provider, cfg.image_reference, &auth)
}
