// ABOUTME: Container reference given on the command line: a literal id or a display name.
// ABOUTME: Classification is purely by the shape of the input string.

use super::ContainerId;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CONTAINER_ID_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-z]{8}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{12}$")
        .expect("container id pattern is valid")
});

/// A container addressed either by server id or by display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerRef {
    Id(ContainerId),
    Name(String),
}

impl ContainerRef {
    /// Classify `input`.
    ///
    /// Anything shaped like `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` is taken as
    /// a literal id, even if a container happens to be displayed under that
    /// name. Everything else is a display name to be resolved.
    pub fn parse(input: &str) -> Self {
        if looks_like_container_id(input) {
            ContainerRef::Id(ContainerId::new(input))
        } else {
            ContainerRef::Name(input.to_string())
        }
    }

    pub fn is_id(&self) -> bool {
        matches!(self, ContainerRef::Id(_))
    }
}

/// Whether `input` has the canonical 8-4-4-4-12 id shape.
pub fn looks_like_container_id(input: &str) -> bool {
    CONTAINER_ID_SHAPE.is_match(input)
}

impl fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerRef::Id(id) => write!(f, "{id}"),
            ContainerRef::Name(name) => write!(f, "\"{name}\""),
        }
    }
}

impl From<ContainerId> for ContainerRef {
    fn from(id: ContainerId) -> Self {
        ContainerRef::Id(id)
    }
}
