//! Request signing for the Function Compute REST API.
//!
//! `Authorization: FC <access key id>:base64(hmac-sha256(secret, string_to_sign))`

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::client::fc_provider::{ProviderError, ProviderResult};

type HmacSha256 = Hmac<Sha256>;

const FC_HEADER_PREFIX: &str = "x-fc-";

/// Everything that takes part in the signature of one request.
pub struct SignableRequest<'a> {
    pub method: &'a str,
    pub content_md5: &'a str,
    pub content_type: &'a str,
    pub date: &'a str,
    pub headers: &'a [(&'a str, &'a str)],
    pub path: &'a str,
    pub query: &'a [(&'a str, &'a str)],
}

/// RFC 1123 date in GMT, the format the provider expects in `Date`.
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// `x-fc-*` headers, lowercased and sorted, one `name:value\n` each.
pub fn canonical_headers(headers: &[(&str, &str)]) -> String {
    let mut fc_headers: Vec<(String, &str)> = headers
        .iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), *v))
        .filter(|(k, _)| k.starts_with(FC_HEADER_PREFIX))
        .collect();
    fc_headers.sort_by(|a, b| a.0.cmp(&b.0));

    fc_headers
        .into_iter()
        .map(|(k, v)| format!("{k}:{v}\n"))
        .collect()
}

/// Path, followed by sorted `k=v` query pairs on their own lines.
pub fn canonical_resource(path: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }

    let mut params: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    params.sort();
    format!("{}\n{}", path, params.join("\n"))
}

pub fn string_to_sign(req: &SignableRequest<'_>) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}{}",
        req.method,
        req.content_md5,
        req.content_type,
        req.date,
        canonical_headers(req.headers),
        canonical_resource(req.path, req.query),
    )
}

pub fn sign(secret: &str, req: &SignableRequest<'_>) -> ProviderResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ProviderError::Request(format!("invalid signing key: {e}")))?;
    mac.update(string_to_sign(req).as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

pub fn authorization(access_key_id: &str, signature: &str) -> String {
    format!("FC {access_key_id}:{signature}")
}
