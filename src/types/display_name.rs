// ABOUTME: Human-readable container display name used before a server id exists.
// ABOUTME: Also derives the technical container name the API expects.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisplayNameError {
    #[error("displayName cannot be empty")]
    Empty,

    #[error("displayName cannot consist only of whitespace")]
    Blank,
}

/// Display name as entered by the user.
///
/// Matching against the server listing is exact: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: &str) -> Result<Self, DisplayNameError> {
        if value.is_empty() {
            return Err(DisplayNameError::Empty);
        }

        if value.trim().is_empty() {
            return Err(DisplayNameError::Blank);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Technical name sent as `containerName`: lowercased, spaces become hyphens.
    pub fn container_name(&self) -> String {
        self.0.to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DisplayName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DisplayName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DisplayName::new(&s).map_err(serde::de::Error::custom)
    }
}
