// ABOUTME: Resolves container display names to server ids by paging through the listing.
// ABOUTME: First match in ascending-id page order wins; absence is not an error.

use super::Workflow;
use crate::api::{ContainerPage, NetfieldApi};
use crate::error::{Error, Result};
use crate::types::{ContainerId, ContainerRef};
use tracing::debug;

/// Containers requested per listing page.
pub const PAGE_SIZE: u32 = 50;

impl<A: NetfieldApi> Workflow<A> {
    /// Find the id of the first container displayed as `display_name`.
    ///
    /// Pages are scanned as they arrive, so a match on page `k` stops after
    /// `k` requests. Otherwise paging continues while
    /// `offset + PAGE_SIZE < total`, which still fetches the final page.
    pub async fn find_container_id(&self, display_name: &str) -> Result<Option<ContainerId>> {
        let mut page = 1;

        loop {
            let page_body: ContainerPage = self
                .api
                .list_containers(&self.key, page, PAGE_SIZE)
                .await?
                .error_for_status("listContainers")?
                .json("listContainers")?;

            if let Some(found) = page_body.find(display_name) {
                debug!(name = display_name, id = %found.id, page, "container found");
                return Ok(Some(found.id.clone()));
            }

            let pagination = page_body.pagination;
            // An empty page can't advance the offset; stop rather than spin.
            if page_body.containers.is_empty()
                || pagination.offset + u64::from(PAGE_SIZE) >= pagination.total
            {
                debug!(name = display_name, pages = page, "no container with that name");
                return Ok(None);
            }

            page += 1;
        }
    }

    /// Turn a reference into an id, asking the server only for names.
    pub async fn resolve_container(&self, container: &ContainerRef) -> Result<Option<ContainerId>> {
        match container {
            ContainerRef::Id(id) => Ok(Some(id.clone())),
            ContainerRef::Name(name) => self.find_container_id(name).await,
        }
    }

    /// Like [`resolve_container`](Self::resolve_container), but absence is an error.
    pub(crate) async fn require_container(&self, container: &ContainerRef) -> Result<ContainerId> {
        match self.resolve_container(container).await? {
            Some(id) => Ok(id),
            None => Err(Error::ContainerNotFound(container_label(container))),
        }
    }
}

fn container_label(container: &ContainerRef) -> String {
    match container {
        ContainerRef::Id(id) => id.to_string(),
        ContainerRef::Name(name) => name.clone(),
    }
}
