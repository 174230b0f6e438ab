// ABOUTME: Deployment commands for single devices and device groups.
// ABOUTME: Accepts a container id or displayName and resolves names before deploying.

use super::Context;
use netfield::config::load_device_override;
use netfield::error::Result;
use netfield::types::{ContainerRef, DeviceId, GroupId};
use std::path::Path;

pub async fn deploy_container(
    ctx: &Context,
    key: &str,
    device: &str,
    container: &str,
    config_device: Option<&Path>,
    force: bool,
) -> Result<()> {
    ctx.output.param("Device", &device);
    ctx.output.param("Container", &container);
    if let Some(path) = config_device {
        ctx.output.param("Config Path", &path.display());
    }

    let options = load_device_override(config_device, &ctx.roots)?;
    let container = ContainerRef::parse(container);
    let device = DeviceId::new(device);

    let mut workflow = ctx.workflow(key);
    let result = workflow.deploy(&device, &container, &options, force).await;
    ctx.report_warnings(&mut workflow);
    let response = result?;

    ctx.output.response("createDeviceContainer", &response);
    ctx.output
        .success(&format!("Container {container} deployed to {device}"));
    Ok(())
}

pub async fn deploy_on_group(
    ctx: &Context,
    key: &str,
    group: &str,
    container: &str,
    config_device: Option<&Path>,
    force: bool,
) -> Result<()> {
    ctx.output.param("Group", &group);
    ctx.output.param("Container", &container);

    let options = load_device_override(config_device, &ctx.roots)?;
    let container = ContainerRef::parse(container);
    let group = GroupId::new(group);

    ctx.output
        .progress(&format!("Deploying {container} to group {group}..."));
    let mut workflow = ctx.workflow(key);
    let result = workflow
        .deploy_to_group(&group, &container, &options, force)
        .await;
    ctx.report_warnings(&mut workflow);
    let report = result?;

    for attempt in report.succeeded() {
        if let Ok(response) = &attempt.outcome {
            ctx.output
                .response(&format!("createDeviceContainer {}", attempt.device.id), response);
        }
    }

    let failed = report.failed().count();
    ctx.output.success(&format!(
        "Container {} deployed to {} of {} device(s) in group {group}",
        report.container,
        report.attempts.len() - failed,
        report.attempts.len()
    ));
    Ok(())
}
