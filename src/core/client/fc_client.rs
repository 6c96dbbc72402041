use async_trait::async_trait;
use chrono::Utc;
use http::Method;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::core::client::fc_provider::{FcProvider, ProviderError, ProviderResult};
use crate::core::client::fc_signer::{authorization, http_date, sign, SignableRequest};
use crate::core::client::fc_types::{
    CreateFunctionInput, CreateServiceInput, CreateTriggerInput, CustomDomainRecord,
    FunctionRecord, ListCustomDomainsOutput, ListFunctionsOutput, ListServicesOutput,
    ProviderErrorBody, ServiceRecord, TriggerRecord, UpdateFunctionInput,
};

const API_VERSION: &str = "2021-04-06";
const CONTENT_TYPE: &str = "application/json";
const PAGE_LIMIT: &str = "100";
const REQUEST_ID_HEADER: &str = "x-fc-request-id";
const ACCOUNT_ID_HEADER: &str = "x-fc-account-id";

/// Function Compute client over plain HTTPS with FC request signing.
#[derive(Clone)]
pub struct FcClient {
    http: Client,
    base_url: String,
    account_id: Option<String>,
    access_key_id: String,
    access_key_secret: String,
}

impl FcClient {
    pub fn new(cfg: &ProviderConfig) -> ProviderResult<Self> {
        let http = Client::builder().build()?;
        Ok(Self::with_http_client(http, cfg))
    }

    pub fn with_http_client(http: Client, cfg: &ProviderConfig) -> Self {
        let base_url = normalize_endpoint(&cfg.endpoint);
        let account_id = account_id_from_endpoint(&base_url);

        debug!(
            "FC client for region {} at {} (account id {})",
            cfg.region,
            base_url,
            account_id.as_deref().unwrap_or("<from endpoint>")
        );

        Self {
            http,
            base_url,
            account_id,
            access_key_id: cfg.access_key_id.clone(),
            access_key_secret: cfg.access_key_secret.clone(),
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Vec<u8>>,
    ) -> ProviderResult<T> {
        let date = http_date(Utc::now());
        let mut fc_headers: Vec<(&str, &str)> = Vec::new();
        if let Some(account_id) = self.account_id.as_deref() {
            fc_headers.push((ACCOUNT_ID_HEADER, account_id));
        }

        let signature = sign(
            &self.access_key_secret,
            &SignableRequest {
                method: method.as_str(),
                content_md5: "",
                content_type: CONTENT_TYPE,
                date: &date,
                headers: &fc_headers,
                path,
                query,
            },
        )?;

        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(http::header::DATE, &date)
            .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
            .header(
                http::header::AUTHORIZATION,
                authorization(&self.access_key_id, &signature),
            );
        for (name, value) in &fc_headers {
            req = req.header(*name, *value);
        }
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.body(body);
        }

        debug!("FC {} {}", method, path);
        let resp = req.send().await?;
        let status = resp.status();
        let request_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let err: ProviderErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                code: err.error_code.unwrap_or_else(|| "Unknown".to_string()),
                message: err
                    .error_message
                    .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned()),
                request_id,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn json_body<B: Serialize>(body: &B) -> ProviderResult<Option<Vec<u8>>> {
    Ok(Some(serde_json::to_vec(body)?))
}

fn services_path() -> String {
    format!("/{API_VERSION}/services")
}

fn functions_path(service: &str) -> String {
    format!("/{API_VERSION}/services/{}/functions", urlencoding::encode(service))
}

fn function_path(service: &str, function: &str) -> String {
    format!(
        "{}/{}",
        functions_path(service),
        urlencoding::encode(function)
    )
}

/// Accepts endpoints with or without scheme and trailing slash.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// `https://<account id>.<region>.fc.aliyuncs.com` carries the account id in its first label.
pub fn account_id_from_endpoint(base_url: &str) -> Option<String> {
    let host = base_url.split("://").nth(1).unwrap_or(base_url);
    let first = host.split('.').next()?;
    (!first.is_empty() && first.chars().all(|c| c.is_ascii_digit())).then(|| first.to_string())
}

#[async_trait]
impl FcProvider for FcClient {
    async fn list_services(&self) -> ProviderResult<Vec<ServiceRecord>> {
        let out: ListServicesOutput = self
            .send(Method::GET, &services_path(), &[("limit", PAGE_LIMIT)], None)
            .await?;
        debug!("Listed {} service(s)", out.services.len());
        Ok(out.services)
    }

    async fn list_functions(&self, service: &str) -> ProviderResult<Vec<FunctionRecord>> {
        let out: ListFunctionsOutput = self
            .send(Method::GET, &functions_path(service), &[("limit", PAGE_LIMIT)], None)
            .await?;
        debug!("Listed {} function(s) in '{}'", out.functions.len(), service);
        Ok(out.functions)
    }

    async fn get_function(&self, service: &str, function: &str) -> ProviderResult<FunctionRecord> {
        self.send(Method::GET, &function_path(service, function), &[], None)
            .await
    }

    async fn create_service(
        &self,
        service: &str,
        role: Option<&str>,
    ) -> ProviderResult<ServiceRecord> {
        let input = CreateServiceInput {
            service_name: service.to_string(),
            role: role.map(str::to_string),
        };
        self.send(Method::POST, &services_path(), &[], json_body(&input)?)
            .await
    }

    async fn create_function(
        &self,
        service: &str,
        input: &CreateFunctionInput,
    ) -> ProviderResult<FunctionRecord> {
        self.send(Method::POST, &functions_path(service), &[], json_body(input)?)
            .await
    }

    async fn update_function(
        &self,
        service: &str,
        function: &str,
        input: &UpdateFunctionInput,
    ) -> ProviderResult<FunctionRecord> {
        self.send(
            Method::PUT,
            &function_path(service, function),
            &[],
            json_body(input)?,
        )
        .await
    }

    async fn create_trigger(
        &self,
        service: &str,
        function: &str,
        input: &CreateTriggerInput,
    ) -> ProviderResult<TriggerRecord> {
        let path = format!("{}/triggers", function_path(service, function));
        self.send(Method::POST, &path, &[], json_body(input)?).await
    }

    async fn list_custom_domains(&self) -> ProviderResult<Vec<CustomDomainRecord>> {
        let path = format!("/{API_VERSION}/custom-domains");
        let out: ListCustomDomainsOutput = self
            .send(Method::GET, &path, &[("limit", PAGE_LIMIT)], None)
            .await?;
        Ok(out.custom_domains)
    }
}
