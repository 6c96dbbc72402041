//! API envelope and query DTOs

use serde::{Deserialize, Serialize};

pub const SUCCESS_MSG: &str = "success";

/// `{ code, msg, data }`; `code` is 0 on success.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: 0,
            msg: SUCCESS_MSG.to_string(),
            data,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct TokenQuery {
    pub token: Option<String>,
}
