// ABOUTME: Configuration types: client settings plus container and device definition files.
// ABOUTME: Handles settings discovery, env overrides, and JSON/YAML definition parsing.

mod definition;
mod locate;

pub use definition::{ContainerDefinition, ContainerType, DeviceOverride};
pub use locate::{SearchRoots, locate};

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const SETTINGS_FILENAME: &str = "netfield.yml";
pub const SETTINGS_FILENAME_ALT: &str = "netfield.yaml";
pub const SETTINGS_FILENAME_DIR: &str = ".netfield/config.yml";

/// Overrides `api_url` when set.
pub const API_URL_ENV: &str = "NETFIELD_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.netfield.io";
pub const DEFAULT_API_VERSION: &str = "v1";

/// Where and how to reach the API. Passed explicitly to the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Per-request bound. Unset means the transport waits indefinitely.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_version: default_api_version(),
            timeout: None,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| Error::invalid_config(path, e))
    }

    /// Look for a settings file in `dir`, falling back to defaults.
    /// The environment override is applied either way.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(SETTINGS_FILENAME),
            dir.join(SETTINGS_FILENAME_ALT),
            dir.join(SETTINGS_FILENAME_DIR),
        ];

        let settings = match candidates.iter().find(|p| p.exists()) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        Ok(settings.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.is_empty()
        {
            self.api_url = url;
        }
        self
    }

    /// Versioned root every endpoint path is appended to.
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Read a container definition from a user-supplied path.
pub fn load_definition(path: &Path, roots: &SearchRoots) -> Result<ContainerDefinition> {
    ContainerDefinition::load(&locate(path, roots)?)
}

/// Read device overrides; no path means `{}`.
pub fn load_device_override(path: Option<&Path>, roots: &SearchRoots) -> Result<DeviceOverride> {
    match path {
        Some(path) => DeviceOverride::load(&locate(path, roots)?),
        None => Ok(DeviceOverride::default()),
    }
}
