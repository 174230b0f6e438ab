// ABOUTME: Wire shapes of the API responses and request bodies the workflows rely on.
// ABOUTME: Only fields needed for control flow are modelled; the rest is ignored.

use crate::types::{ContainerId, DeviceId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a successful create/update call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedContainer {
    pub id: ContainerId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSummary {
    pub id: ContainerId,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub total: u64,
}

/// One page of `GET /containers`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerPage {
    #[serde(default)]
    pub containers: Vec<ContainerSummary>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl ContainerPage {
    /// First container on this page whose display name matches exactly.
    pub fn find(&self, display_name: &str) -> Option<&ContainerSummary> {
        self.containers
            .iter()
            .find(|c| c.display_name.as_deref() == Some(display_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupDevice {
    pub id: DeviceId,
    #[serde(default)]
    pub name: Option<String>,
}

/// Wrapped form of `GET /groups/{groupId}`. The id may be a string or a number.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub devices: Vec<GroupDevice>,
}

/// Body of `GET /groups/{groupId}`: either a bare device array or a wrapped group.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GroupListing {
    Devices(Vec<GroupDevice>),
    Group(Group),
}

impl GroupListing {
    pub fn into_devices(self) -> Vec<GroupDevice> {
        match self {
            GroupListing::Devices(devices) => devices,
            GroupListing::Group(group) => group.devices,
        }
    }
}

/// Body of `POST /devices/{deviceId}/methods`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRequest {
    pub container_name: String,
    pub method_name: String,
    pub method_payload: Value,
}
