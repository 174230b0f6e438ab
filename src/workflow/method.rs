// ABOUTME: Remote method invocation on a deployed container, retried while it isn't ready.
// ABOUTME: Only a 404 is retried; the last attempt's response is returned either way.

use super::Workflow;
use crate::api::{ApiResponse, MethodRequest, NetfieldApi};
use crate::error::Result;
use crate::types::DeviceId;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

/// How often and how patiently to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    interval: Duration,
}

impl Default for RetryPolicy {
    /// A single attempt, no waiting.
    fn default() -> Self {
        Self {
            max_attempts: 1,
            interval: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// `max_attempts` counts every attempt including the first; zero is
    /// treated as one.
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// A method to call on a container running on some device.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub container_name: String,
    pub method_name: String,
    pub payload: Value,
}

impl MethodCall {
    pub fn new(container_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
            method_name: method_name.into(),
            payload: json!({}),
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}

impl<A: NetfieldApi> Workflow<A> {
    /// Invoke `call` on `device`.
    ///
    /// A 404 means the container isn't up yet: sleep for the policy interval
    /// and try again, up to the attempt limit. Nothing sleeps after the last
    /// attempt. Transport errors are returned immediately.
    pub async fn invoke_method(
        &self,
        device: &DeviceId,
        call: &MethodCall,
        policy: RetryPolicy,
    ) -> Result<ApiResponse> {
        let request = MethodRequest {
            container_name: call.container_name.clone(),
            method_name: call.method_name.clone(),
            method_payload: call.payload.clone(),
        };

        let mut attempt = 1;
        loop {
            let response = self.api.post_method(&self.key, device, &request).await?;

            if !response.is_not_found() || attempt >= policy.max_attempts {
                debug!(device = %device, method = %call.method_name, attempt, status = response.status, "method call finished");
                return Ok(response);
            }

            debug!(
                device = %device,
                attempt,
                max_attempts = policy.max_attempts,
                "container not ready, retrying in {:?}",
                policy.interval
            );
            tokio::time::sleep(policy.interval).await;
            attempt += 1;
        }
    }
}
