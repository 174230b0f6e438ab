// ABOUTME: Create-or-update resolution for container definitions.
// ABOUTME: Existing display name means update in place; otherwise create.

use super::Workflow;
use crate::api::{ApiResponse, ContainerForm, CreatedContainer, NetfieldApi};
use crate::config::ContainerDefinition;
use crate::error::Result;
use crate::types::ContainerId;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    Created,
    Updated,
}

/// Result of [`Workflow::create_or_update`].
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    pub action: UpsertAction,
    /// Server id: newly assigned on create, unchanged on update.
    pub id: ContainerId,
    pub response: ApiResponse,
}

impl<A: NetfieldApi> Workflow<A> {
    /// Register `definition` under release `tag`, updating a container with
    /// the same display name if one exists.
    ///
    /// Two concurrent runs for a brand-new name can both see "not found" and
    /// both create. Nothing here prevents that.
    pub async fn create_or_update(
        &self,
        definition: ContainerDefinition,
        tag: &str,
    ) -> Result<UpsertOutcome> {
        let definition = definition.with_tag(tag);
        let form = ContainerForm::from_definition(&definition);

        match self
            .find_container_id(definition.display_name.as_str())
            .await?
        {
            Some(id) => {
                info!(name = %definition.display_name, container = %id, tag, "updating container");
                let response = self
                    .api
                    .update_container(&self.key, &id, &form)
                    .await?
                    .error_for_status("updateContainer")?;

                Ok(UpsertOutcome {
                    action: UpsertAction::Updated,
                    id,
                    response,
                })
            }
            None => {
                info!(name = %definition.display_name, tag, "creating container");
                let response = self
                    .api
                    .create_container(&self.key, &form)
                    .await?
                    .error_for_status("createContainer")?;
                let created: CreatedContainer = response.json("createContainer")?;

                Ok(UpsertOutcome {
                    action: UpsertAction::Created,
                    id: created.id,
                    response,
                })
            }
        }
    }
}
