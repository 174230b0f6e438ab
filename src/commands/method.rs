// ABOUTME: postMethod command: invoke a container method with retry while it starts up.
// ABOUTME: A non-2xx final answer fails the command.

use super::Context;
use netfield::error::{Error, Result};
use netfield::types::DeviceId;
use netfield::workflow::{MethodCall, RetryPolicy};
use serde_json::Value;
use std::time::Duration;

#[allow(clippy::too_many_arguments)]
pub async fn post_method(
    ctx: &Context,
    key: &str,
    device: &str,
    container_name: &str,
    method_name: &str,
    payload: Option<&str>,
    max_retries: u32,
    sleep_interval: u64,
) -> Result<()> {
    ctx.output.param("Device", &device);
    ctx.output.param("Container", &container_name);
    ctx.output.param("Method", &method_name);

    let mut call = MethodCall::new(container_name, method_name);
    if let Some(raw) = payload {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| Error::InvalidArgument(format!("--payload is not valid JSON: {e}")))?;
        call = call.with_payload(value);
    }
    let policy = RetryPolicy::new(max_retries, Duration::from_secs(sleep_interval));
    let device = DeviceId::new(device);

    if policy.max_attempts() > 1 {
        ctx.output.progress(&format!(
            "Trying up to {} times while the container is not ready",
            policy.max_attempts()
        ));
    }
    let workflow = ctx.workflow(key);
    let response = workflow.invoke_method(&device, &call, policy).await?;

    ctx.output.response("postMethod", &response);
    response.error_for_status("postMethod")?;
    ctx.output.success(&format!("{method_name} invoked on {device}"));
    Ok(())
}
