// ABOUTME: Test support utilities.
// ABOUTME: A scripted in-memory NetfieldApi that records every call it receives.

use async_trait::async_trait;
use netfield::api::{ApiError, ApiResponse, ContainerForm, MethodRequest, NetfieldApi};
use netfield::types::{ApiKey, ContainerId, DeviceId, GroupId};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("netfield=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub const KEY: &str = "test-api-key";

/// A call as seen by the fake, with the ids flattened to strings.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Call {
    CreateContainer {
        form: ContainerForm,
    },
    UpdateContainer {
        container: String,
        form: ContainerForm,
    },
    DeleteDeviceContainer {
        device: String,
        container: String,
    },
    CreateDeviceContainer {
        device: String,
        container: String,
        options: Value,
    },
    ListContainers {
        page: u32,
        limit: u32,
    },
    PostMethod {
        device: String,
        request: MethodRequest,
    },
    GetGroup {
        group: String,
    },
}

impl Call {
    #[allow(dead_code)]
    pub fn operation(&self) -> &'static str {
        match self {
            Call::CreateContainer { .. } => "createContainer",
            Call::UpdateContainer { .. } => "updateContainer",
            Call::DeleteDeviceContainer { .. } => "deleteDeviceContainer",
            Call::CreateDeviceContainer { .. } => "createDeviceContainer",
            Call::ListContainers { .. } => "listContainers",
            Call::PostMethod { .. } => "postMethod",
            Call::GetGroup { .. } => "getGroup",
        }
    }
}

/// What the fake answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(ApiResponse),
    /// Simulates a request that never got an answer.
    Unreachable,
}

/// Scripted replies are consumed in order per operation. Once a queue is
/// empty the fake answers `200 {}`, except for listings which answer with
/// an empty last page.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    keys: Mutex<Vec<String>>,
    replies: Mutex<HashMap<&'static str, VecDeque<Reply>>>,
    /// Per-device overrides for createDeviceContainer.
    device_replies: Mutex<HashMap<String, ApiResponse>>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, operation: &'static str, status: u16, body: impl Into<String>) -> Self {
        self.replies
            .lock()
            .entry(operation)
            .or_default()
            .push_back(Reply::Respond(ApiResponse::new(status, body.into())));
        self
    }

    pub fn unreachable(self, operation: &'static str) -> Self {
        self.replies
            .lock()
            .entry(operation)
            .or_default()
            .push_back(Reply::Unreachable);
        self
    }

    pub fn reply_for_device(self, device: &str, status: u16, body: impl Into<String>) -> Self {
        self.device_replies
            .lock()
            .insert(device.to_string(), ApiResponse::new(status, body.into()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.calls.lock().iter().map(Call::operation).collect()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().clone()
    }

    fn answer(
        &self,
        key: &ApiKey,
        call: Call,
        fallback: ApiResponse,
    ) -> Result<ApiResponse, ApiError> {
        let operation = call.operation();
        self.keys.lock().push(key.expose().to_string());
        self.calls.lock().push(call);

        let next = self
            .replies
            .lock()
            .get_mut(operation)
            .and_then(VecDeque::pop_front);
        match next {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Unreachable) => Err(ApiError::Transport {
                operation,
                url: "http://fake.invalid".to_string(),
                source: "connection refused".into(),
            }),
            None => Ok(fallback),
        }
    }
}

fn ok_empty() -> ApiResponse {
    ApiResponse::new(200, "{}")
}

#[async_trait]
impl NetfieldApi for FakeApi {
    async fn create_container(
        &self,
        key: &ApiKey,
        form: &ContainerForm,
    ) -> Result<ApiResponse, ApiError> {
        let call = Call::CreateContainer { form: form.clone() };
        self.answer(key, call, ok_empty())
    }

    async fn update_container(
        &self,
        key: &ApiKey,
        container: &ContainerId,
        form: &ContainerForm,
    ) -> Result<ApiResponse, ApiError> {
        let call = Call::UpdateContainer {
            container: container.to_string(),
            form: form.clone(),
        };
        self.answer(key, call, ok_empty())
    }

    async fn delete_device_container(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        container: &ContainerId,
    ) -> Result<ApiResponse, ApiError> {
        let call = Call::DeleteDeviceContainer {
            device: device.to_string(),
            container: container.to_string(),
        };
        self.answer(key, call, ApiResponse::new(204, ""))
    }

    async fn create_device_container(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        container: &ContainerId,
        options: &Value,
    ) -> Result<ApiResponse, ApiError> {
        let fallback = self
            .device_replies
            .lock()
            .get(device.as_str())
            .cloned()
            .unwrap_or_else(ok_empty);
        let call = Call::CreateDeviceContainer {
            device: device.to_string(),
            container: container.to_string(),
            options: options.clone(),
        };
        self.answer(key, call, fallback)
    }

    async fn list_containers(
        &self,
        key: &ApiKey,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse, ApiError> {
        let call = Call::ListContainers { page, limit };
        self.answer(key, call, container_page(&[], 0, 0))
    }

    async fn post_method(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        request: &MethodRequest,
    ) -> Result<ApiResponse, ApiError> {
        let call = Call::PostMethod {
            device: device.to_string(),
            request: request.clone(),
        };
        self.answer(key, call, ok_empty())
    }

    async fn get_group(&self, key: &ApiKey, group: &GroupId) -> Result<ApiResponse, ApiError> {
        let call = Call::GetGroup {
            group: group.to_string(),
        };
        self.answer(key, call, ApiResponse::new(200, group_body(group.as_str(), &[])))
    }
}

/// A `GET /containers` page with `(id, displayName)` entries.
#[allow(dead_code)]
pub fn container_page(containers: &[(&str, &str)], offset: u64, total: u64) -> ApiResponse {
    ApiResponse::new(200, container_page_body(containers, offset, total))
}

#[allow(dead_code)]
pub fn container_page_body(containers: &[(&str, &str)], offset: u64, total: u64) -> String {
    let containers: Vec<Value> = containers
        .iter()
        .map(|(id, name)| json!({ "id": id, "displayName": name }))
        .collect();
    json!({
        "containers": containers,
        "pagination": { "offset": offset, "limit": 50, "total": total }
    })
    .to_string()
}

/// A `GET /groups/{id}` body listing `devices`.
#[allow(dead_code)]
pub fn group_body(group: &str, devices: &[&str]) -> String {
    let devices: Vec<Value> = devices
        .iter()
        .map(|id| json!({ "id": id, "name": format!("device {id}") }))
        .collect();
    json!({ "id": group, "name": "test group", "devices": devices }).to_string()
}

/// Fifty filler containers, none of which is named `wanted`.
#[allow(dead_code)]
pub fn filler(page: u32) -> Vec<(String, String)> {
    (0..50)
        .map(|i| {
            (
                format!("{page:08}-0000-0000-0000-{i:012}"),
                format!("other-{page}-{i}"),
            )
        })
        .collect()
}

#[allow(dead_code)]
pub fn as_pairs(entries: &[(String, String)]) -> Vec<(&str, &str)> {
    entries
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str()))
        .collect()
}
