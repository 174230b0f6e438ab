// ABOUTME: Fan-out deployment of one container to every device in a group.
// ABOUTME: Devices are handled one at a time; one failure doesn't stop the rest.

use super::Workflow;
use crate::api::{ApiResponse, GroupDevice, GroupListing, NetfieldApi};
use crate::config::DeviceOverride;
use crate::diagnostics::Warning;
use crate::error::{Error, Result};
use crate::types::{ContainerId, ContainerRef, GroupId};
use tracing::info;

/// Outcome of deploying to a single group member.
#[derive(Debug)]
pub struct DeviceAttempt {
    pub device: GroupDevice,
    pub outcome: Result<ApiResponse>,
}

impl DeviceAttempt {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Result of [`Workflow::deploy_to_group`], in the order the group API
/// listed the devices.
#[derive(Debug)]
pub struct GroupDeployReport {
    pub group: GroupId,
    pub container: ContainerId,
    pub attempts: Vec<DeviceAttempt>,
}

impl GroupDeployReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &DeviceAttempt> {
        self.attempts.iter().filter(|a| a.succeeded())
    }

    pub fn failed(&self) -> impl Iterator<Item = &DeviceAttempt> {
        self.attempts.iter().filter(|a| !a.succeeded())
    }

    pub fn all_succeeded(&self) -> bool {
        self.attempts.iter().all(DeviceAttempt::succeeded)
    }
}

impl<A: NetfieldApi> Workflow<A> {
    /// Deploy `container` to every device of `group`.
    ///
    /// Fails only when the container can't be resolved, in which case no
    /// device is touched. Per-device failures are collected in the report.
    pub async fn deploy_to_group(
        &mut self,
        group: &GroupId,
        container: &ContainerRef,
        options: &DeviceOverride,
        force: bool,
    ) -> Result<GroupDeployReport> {
        let id = self.require_container(container).await?;
        let devices = self.group_devices(group).await?;

        info!(group = %group, container = %id, devices = devices.len(), "deploying to group");

        let mut attempts = Vec::with_capacity(devices.len());
        for device in devices {
            let outcome = self.deploy_id(&device.id, &id, options, force).await;
            if let Err(e) = &outcome {
                self.diagnostics.warn(Warning::device_deploy_failed(format!(
                    "deploying {id} to {} failed: {e}",
                    device.id
                )));
            }
            attempts.push(DeviceAttempt { device, outcome });
        }

        Ok(GroupDeployReport {
            group: group.clone(),
            container: id,
            attempts,
        })
    }

    /// Members of `group`. A rejected lookup reads as an empty group.
    async fn group_devices(&mut self, group: &GroupId) -> Result<Vec<GroupDevice>> {
        let response = self.api.get_group(&self.key, group).await?;

        if !response.is_success() {
            self.diagnostics.warn(Warning::group_lookup_failed(format!(
                "group {group} lookup returned status {}",
                response.status
            )));
            return Ok(Vec::new());
        }

        let listing: GroupListing = response.json("getGroup").map_err(Error::from)?;
        Ok(listing.into_devices())
    }
}
