use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::function::dto::registry_push_event::RegistryPushEvent;

/// How a registry push notification is turned into an image reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageReferenceStrategy {
    /// `name + tag`, no separator. Kept for older deployments.
    Simple,
    /// `registry-vpc.<region>.aliyuncs.com/<namespace>/<name>:<tag>`
    #[default]
    Qualified,
}

impl FromStr for ImageReferenceStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "qualified" => Ok(Self::Qualified),
            other => Err(format!("expected 'simple' or 'qualified', got '{other}'")),
        }
    }
}

/// Image reference handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    /// Image named by the caller, used as-is.
    pub fn verbatim(image: impl Into<String>) -> Self {
        Self(image.into())
    }

    pub fn from_push_event(event: &RegistryPushEvent, strategy: ImageReferenceStrategy) -> Self {
        let repo = &event.repository;
        let tag = &event.push_data.tag;

        let image = match strategy {
            ImageReferenceStrategy::Simple => format!("{}{}", repo.name, tag),
            ImageReferenceStrategy::Qualified => format!(
                "registry-vpc.{}.aliyuncs.com/{}/{}:{}",
                repo.region, repo.namespace, repo.name, tag
            ),
        };
        Self(image)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
