use serde::{Deserialize, Serialize};

use super::ContainerStatus;

/// One container managed by heaver
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    pub status: ContainerStatus,
    /// Images the container was built from, base layer first
    #[serde(default)]
    pub image: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Machine the container lives on, known only for host scoped listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl Container {
    pub fn created(name: &str, image: Vec<String>, ip: Option<String>) -> Self {
        Self {
            name: name.to_owned(),
            status: ContainerStatus::Created,
            image,
            ip,
            host: None,
        }
    }

    pub fn listed(
        name: &str,
        status: ContainerStatus,
        ip: Option<String>,
        host: Option<&str>,
    ) -> Self {
        Self {
            name: name.to_owned(),
            status,
            image: Vec::new(),
            ip,
            host: host.map(str::to_owned),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, ContainerStatus::Running)
    }
}
