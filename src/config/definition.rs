// ABOUTME: Container definition files describing an image to register with the API.
// ABOUTME: JSON by default, YAML for the legacy .yml/.yaml variant.

use crate::error::{Error, Result};
use crate::types::DisplayName;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::Path;

/// Whether the image lives in a public or private catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerType {
    Public,
    Private,
}

impl ContainerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerType::Public => "public",
            ContainerType::Private => "private",
        }
    }
}

/// Declarative description of a container image.
///
/// Option bags are kept as structured JSON here and only stringified when
/// the request form is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    pub display_name: DisplayName,

    pub image_uri: String,

    #[serde(default)]
    pub tag_name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// Passed through as given, e.g. `always` or `on-failure:3`.
    #[serde(default)]
    pub restart_policy: Option<String>,

    #[serde(default, rename = "type")]
    pub runtime_type: Option<String>,

    #[serde(default)]
    pub desired_status: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub processor_architecture: Option<String>,

    #[serde(default)]
    pub short_description: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default = "empty_object")]
    pub container_create_options: Value,

    #[serde(default = "empty_object")]
    pub container_twin_desired_options: Value,

    #[serde(default = "empty_array")]
    pub environment_variables: Value,

    #[serde(default = "empty_object")]
    pub credentials: Value,

    #[serde(default)]
    pub container_type: Option<ContainerType>,

    #[serde(default)]
    pub organisation_id: Option<String>,

    #[serde(default)]
    pub registry_type: Option<String>,
}

fn empty_object() -> Value {
    json!({})
}

fn empty_array() -> Value {
    json!([])
}

impl ContainerDefinition {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    /// Load from `path`, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let parsed = if super::is_yaml(path) {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        };
        parsed.map_err(|e| Error::invalid_config(path, e))
    }

    /// Merge the release tag into the definition.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_name = Some(tag.into());
        self
    }

    /// Image reference including the tag, if one is set.
    pub fn tagged_image(&self) -> String {
        match &self.tag_name {
            Some(tag) => format!("{}:{}", self.image_uri, tag),
            None => self.image_uri.clone(),
        }
    }
}

/// Device-specific overrides sent when binding a container to a device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceOverride(Value);

impl Default for DeviceOverride {
    fn default() -> Self {
        Self(empty_object())
    }
}

impl DeviceOverride {
    pub fn new(value: Value) -> std::result::Result<Self, String> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err("device options must be a JSON object".to_string())
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let value: Value = if super::is_yaml(path) {
            serde_yaml::from_str(&content).map_err(|e| Error::invalid_config(path, e))?
        } else {
            serde_json::from_str(&content).map_err(|e| Error::invalid_config(path, e))?
        };
        Self::new(value).map_err(|reason| Error::invalid_config(path, reason))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
