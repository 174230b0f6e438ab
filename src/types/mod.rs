// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Ids are phantom-typed; names are validated on construction.

mod api_key;
mod container_ref;
mod display_name;
mod id;

pub use api_key::ApiKey;
pub use container_ref::{ContainerRef, looks_like_container_id};
pub use display_name::{DisplayName, DisplayNameError};
pub use id::{ContainerId, DeviceId, GroupId, Id};
