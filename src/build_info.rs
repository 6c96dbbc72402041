//! Version metadata served by `GET /version`.

use std::collections::BTreeMap;

const UNKNOWN: &str = "Unknown";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: Option<&str> = option_env!("FC_WEBHOOK_GIT_HASH");
pub const BUILD_TIME: Option<&str> = option_env!("FC_WEBHOOK_BUILD_TIME");
pub const RUSTC_VERSION: Option<&str> = option_env!("FC_WEBHOOK_RUSTC_VERSION");

pub fn info_map() -> BTreeMap<&'static str, String> {
    BTreeMap::from([
        ("version", VERSION.to_string()),
        ("rustc", RUSTC_VERSION.unwrap_or(UNKNOWN).to_string()),
        (
            "os/arch",
            format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        ),
        ("commit", GIT_HASH.unwrap_or(UNKNOWN).to_string()),
        ("built", BUILD_TIME.unwrap_or(UNKNOWN).to_string()),
    ])
}
