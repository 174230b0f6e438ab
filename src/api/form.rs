// ABOUTME: Form body for container create and update calls.
// ABOUTME: Option bags are stringified JSON here and nowhere else.

use crate::config::ContainerDefinition;
use serde::Serialize;
use serde_json::Value;

/// Field set of `POST /containers` and `PUT /containers/{id}`.
///
/// `mqttTopics` is deliberately absent: the API rejects an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerForm {
    pub display_name: String,
    pub container_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub runtime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<String>,
    pub image_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_architecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub container_create_options: String,
    pub container_twin_desired_options: String,
    pub environment_variables: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_type: Option<String>,
    pub credentials: String,
}

impl ContainerForm {
    pub fn from_definition(def: &ContainerDefinition) -> Self {
        Self {
            display_name: def.display_name.to_string(),
            container_name: def.display_name.container_name(),
            version: def.version.clone(),
            restart_policy: def.restart_policy.clone(),
            runtime_type: def.runtime_type.clone(),
            desired_status: def.desired_status.clone(),
            image_uri: def.tagged_image(),
            category: def.category.clone(),
            processor_architecture: def.processor_architecture.clone(),
            short_description: def.short_description.clone(),
            description: def.description.clone(),
            container_create_options: stringify(&def.container_create_options),
            container_twin_desired_options: stringify(&def.container_twin_desired_options),
            environment_variables: stringify(&def.environment_variables),
            container_type: def.container_type.map(|t| t.as_str().to_string()),
            organisation_id: def.organisation_id.clone(),
            registry_type: def.registry_type.clone(),
            credentials: stringify(&def.credentials),
        }
    }
}

// Value's Display is compact JSON and cannot fail.
fn stringify(value: &Value) -> String {
    value.to_string()
}
