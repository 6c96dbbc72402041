//! Existence checks against the provider inventory.
//!
//! Each call lists one page and scans it for an exact, case-sensitive name.
//! Inventories larger than one page can report `false` for names that exist.

use tracing::debug;

use crate::core::client::fc_provider::{FcProvider, ProviderResult};

pub async fn service_exists<P: FcProvider + ?Sized>(provider: &P, service: &str) -> ProviderResult<bool> {
    let services = provider.list_services().await?;
    let found = services
        .iter()
        .any(|s| s.service_name.as_deref() == Some(service));

    debug!("service '{}' exists: {}", service, found);
    Ok(found)
}

pub async fn function_exists<P: FcProvider + ?Sized>(
    provider: &P,
    service: &str,
    function: &str,
) -> ProviderResult<bool> {
    let functions = provider.list_functions(service).await?;
    let found = functions
        .iter()
        .any(|f| f.function_name.as_deref() == Some(function));

    debug!("function '{}/{}' exists: {}", service, function, found);
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::function::test_support::FakeProvider;

    #[tokio::test]
    async fn finds_exact_service_name() {
        let provider = FakeProvider::default().with_service("s1");

        assert!(service_exists(&provider, "s1").await.unwrap());
        assert!(!service_exists(&provider, "S1").await.unwrap());
        assert!(!service_exists(&provider, "s").await.unwrap());
    }

    #[tokio::test]
    async fn empty_inventory_is_not_an_error() {
        let provider = FakeProvider::default();
        assert!(!service_exists(&provider, "s1").await.unwrap());
        assert!(!function_exists(&provider, "s1", "f1").await.unwrap());
    }

    #[tokio::test]
    async fn finds_function_within_its_service() {
        let provider = FakeProvider::default()
            .with_function("s1", "f1")
            .with_service("s2");

        assert!(function_exists(&provider, "s1", "f1").await.unwrap());
        assert!(!function_exists(&provider, "s2", "f1").await.unwrap());
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let provider = FakeProvider::default().failing_lists();

        assert!(service_exists(&provider, "s1").await.is_err());
        assert!(function_exists(&provider, "s1", "f1").await.is_err());
    }
}
