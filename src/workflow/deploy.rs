// ABOUTME: Device deployment sequencing, with optional forced delete-then-create.
// ABOUTME: Also the composite create-and-deploy and the legacy update-and-redeploy flows.

use super::{UpsertOutcome, Workflow};
use crate::api::{ApiResponse, ContainerForm, NetfieldApi};
use crate::config::{ContainerDefinition, DeviceOverride};
use crate::diagnostics::Warning;
use crate::error::Result;
use crate::types::{ContainerId, ContainerRef, DeviceId};
use tracing::{debug, info};

/// Responses of the three calls made by [`Workflow::update_and_redeploy`].
#[derive(Debug, Clone)]
pub struct RedeployOutcome {
    pub update: ApiResponse,
    /// `None` when the delete never got an answer.
    pub delete: Option<ApiResponse>,
    pub create: ApiResponse,
}

impl<A: NetfieldApi> Workflow<A> {
    /// Deploy a container, given by id or display name, to `device`.
    ///
    /// A name that resolves to nothing fails with `ContainerNotFound`
    /// before any deployment call is made.
    pub async fn deploy(
        &mut self,
        device: &DeviceId,
        container: &ContainerRef,
        options: &DeviceOverride,
        force: bool,
    ) -> Result<ApiResponse> {
        let id = self.require_container(container).await?;
        self.deploy_id(device, &id, options, force).await
    }

    /// Deploy a known container id to `device`.
    ///
    /// With `force`, any existing deployment is deleted first and the outcome
    /// of that delete is ignored. Without it, an existing deployment makes
    /// the server reject the create, and that rejection is returned as is.
    pub async fn deploy_id(
        &mut self,
        device: &DeviceId,
        container: &ContainerId,
        options: &DeviceOverride,
        force: bool,
    ) -> Result<ApiResponse> {
        if force {
            self.remove_deployment(device, container).await;
        }

        info!(device = %device, container = %container, force, "deploying container");
        let response = self
            .api
            .create_device_container(&self.key, device, container, options.as_value())
            .await?
            .error_for_status("createDeviceContainer")?;

        Ok(response)
    }

    /// Create-or-update the definition, then deploy the resulting id.
    pub async fn create_and_deploy(
        &mut self,
        definition: ContainerDefinition,
        tag: &str,
        device: &DeviceId,
        options: &DeviceOverride,
        force: bool,
    ) -> Result<(UpsertOutcome, ApiResponse)> {
        let upsert = self.create_or_update(definition, tag).await?;
        let deployed = self.deploy_id(device, &upsert.id, options, force).await?;
        Ok((upsert, deployed))
    }

    /// Update container `id` in place, then recreate its deployment on `device`.
    #[deprecated(note = "use create_and_deploy with force instead")]
    pub async fn update_and_redeploy(
        &mut self,
        id: &ContainerId,
        definition: ContainerDefinition,
        tag: &str,
        device: &DeviceId,
        options: &DeviceOverride,
    ) -> Result<RedeployOutcome> {
        let form = ContainerForm::from_definition(&definition.with_tag(tag));

        let update = self
            .api
            .update_container(&self.key, id, &form)
            .await?
            .error_for_status("updateContainer")?;
        let delete = self.remove_deployment(device, id).await;
        let create = self
            .api
            .create_device_container(&self.key, device, id, options.as_value())
            .await?
            .error_for_status("createDeviceContainer")?;

        Ok(RedeployOutcome {
            update,
            delete,
            create,
        })
    }

    /// Delete a deployment, recording but never propagating a failure.
    /// A 404 already means there is nothing to remove.
    async fn remove_deployment(
        &mut self,
        device: &DeviceId,
        container: &ContainerId,
    ) -> Option<ApiResponse> {
        match self
            .api
            .delete_device_container(&self.key, device, container)
            .await
        {
            Ok(response) if response.is_success() || response.is_not_found() => {
                debug!(device = %device, container = %container, status = response.status, "existing deployment removed");
                Some(response)
            }
            Ok(response) => {
                self.diagnostics.warn(Warning::force_delete_ignored(format!(
                    "removing {container} from {device} returned status {}",
                    response.status
                )));
                Some(response)
            }
            Err(e) => {
                self.diagnostics.warn(Warning::force_delete_ignored(format!(
                    "removing {container} from {device} failed: {e}"
                )));
                None
            }
        }
    }
}
