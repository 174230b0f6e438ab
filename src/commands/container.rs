// ABOUTME: Container registration commands.
// ABOUTME: createContainer, createAndDeployContainer, and the deprecated updateAndRedeployContainer.

use super::Context;
use netfield::config::{load_definition, load_device_override};
use netfield::error::Result;
use netfield::types::{ContainerId, DeviceId};
use netfield::workflow::UpsertAction;
use std::path::Path;

fn action_label(action: UpsertAction) -> &'static str {
    match action {
        UpsertAction::Created => "createContainer",
        UpsertAction::Updated => "updateContainer",
    }
}

pub async fn create_container(ctx: &Context, key: &str, tag: &str, config: &Path) -> Result<()> {
    ctx.output.param("Release", &tag);
    ctx.output.param("Config Container", &config.display());

    let definition = load_definition(config, &ctx.roots)?;

    let workflow = ctx.workflow(key);
    let outcome = workflow.create_or_update(definition, tag).await?;

    ctx.output
        .response(action_label(outcome.action), &outcome.response);
    ctx.output.success(&format!("Container {} ready", outcome.id));
    Ok(())
}

pub async fn create_and_deploy(
    ctx: &Context,
    key: &str,
    tag: &str,
    device: &str,
    config_container: &Path,
    config_device: Option<&Path>,
    force: bool,
) -> Result<()> {
    ctx.output.param("Release", &tag);
    ctx.output.param("Device", &device);
    ctx.output
        .param("Config Container", &config_container.display());
    if let Some(path) = config_device {
        ctx.output.param("Config Device", &path.display());
    }

    // Both files are read before anything is sent.
    let definition = load_definition(config_container, &ctx.roots)?;
    let options = load_device_override(config_device, &ctx.roots)?;
    let device = DeviceId::new(device);

    let mut workflow = ctx.workflow(key);
    let result = workflow
        .create_and_deploy(definition, tag, &device, &options, force)
        .await;
    ctx.report_warnings(&mut workflow);
    let (upsert, deployed) = result?;

    ctx.output.response(action_label(upsert.action), &upsert.response);
    ctx.output.response("createDeviceContainer", &deployed);
    ctx.output
        .success(&format!("Container {} deployed to {device}", upsert.id));
    Ok(())
}

pub async fn update_and_redeploy(
    ctx: &Context,
    key: &str,
    tag: &str,
    container: &str,
    device: &str,
    config_container: &Path,
    config_device: Option<&Path>,
) -> Result<()> {
    ctx.output.warning(
        "updateAndRedeployContainer is deprecated; use createAndDeployContainer --force",
    );
    tracing::warn!("updateAndRedeployContainer is deprecated");

    ctx.output.param("Release", &tag);
    ctx.output.param("Device", &device);
    ctx.output.param("Container", &container);
    ctx.output
        .param("Config Container", &config_container.display());

    let definition = load_definition(config_container, &ctx.roots)?;
    let options = load_device_override(config_device, &ctx.roots)?;
    let container = ContainerId::new(container);
    let device = DeviceId::new(device);

    let mut workflow = ctx.workflow(key);
    #[allow(deprecated)]
    let result = workflow
        .update_and_redeploy(&container, definition, tag, &device, &options)
        .await;
    ctx.report_warnings(&mut workflow);
    let outcome = result?;

    ctx.output.response("updateContainer", &outcome.update);
    if let Some(delete) = &outcome.delete {
        ctx.output.response("deleteDeviceContainer", delete);
    }
    ctx.output.response("createDeviceContainer", &outcome.create);
    ctx.output
        .success(&format!("Container {container} redeployed to {device}"));
    Ok(())
}
