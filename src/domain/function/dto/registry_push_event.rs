use serde::{Deserialize, Serialize};

/// Notification body sent by the container registry when a tag is pushed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryPushEvent {
    pub push_data: PushData,
    pub repository: Repository,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PushData {
    pub digest: String,
    pub pushed_at: String,
    pub tag: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub namespace: String,
    pub name: String,
    pub region: String,
    pub date_created: String,
    pub repo_full_name: String,
    pub repo_type: String,
    pub repo_origin_type: String,
    pub repo_authentication_type: String,
}
