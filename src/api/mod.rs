// ABOUTME: Primitive netFIELD API client: one operation per REST endpoint.
// ABOUTME: Every primitive returns the same normalized ApiResponse or a transport error.

mod client;
mod error;
mod form;
mod models;

pub use client::HttpClient;
pub use error::{ApiError, ApiErrorKind};
pub use form::ContainerForm;
pub use models::{
    ContainerPage, ContainerSummary, CreatedContainer, Group, GroupDevice, GroupListing,
    MethodRequest, Pagination,
};

use crate::types::{ApiKey, ContainerId, DeviceId, GroupId};
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;

/// Status and raw body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self, operation: &'static str) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|source| ApiError::Decode { operation, source })
    }

    /// Turn a non-2xx response into `ApiError::Status`.
    pub fn error_for_status(self, operation: &'static str) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                operation,
                status: self.status,
                body: self.text().into_owned(),
            })
        }
    }
}

/// One method per endpoint. Implementations perform exactly one HTTP call
/// and never interpret the status code themselves.
#[async_trait]
pub trait NetfieldApi: Send + Sync {
    /// `POST /containers`, form-encoded.
    async fn create_container(
        &self,
        key: &ApiKey,
        form: &ContainerForm,
    ) -> Result<ApiResponse, ApiError>;

    /// `PUT /containers/{id}`, form-encoded.
    async fn update_container(
        &self,
        key: &ApiKey,
        container: &ContainerId,
        form: &ContainerForm,
    ) -> Result<ApiResponse, ApiError>;

    /// `DELETE /devices/{deviceId}/containers/{id}`.
    async fn delete_device_container(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        container: &ContainerId,
    ) -> Result<ApiResponse, ApiError>;

    /// `POST /devices/{deviceId}/containers/{id}` with device overrides as JSON.
    async fn create_device_container(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        container: &ContainerId,
        options: &Value,
    ) -> Result<ApiResponse, ApiError>;

    /// `GET /containers?page&limit&sortBy=id&sortOrder=asc`.
    async fn list_containers(
        &self,
        key: &ApiKey,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse, ApiError>;

    /// `POST /devices/{deviceId}/methods`.
    async fn post_method(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        request: &MethodRequest,
    ) -> Result<ApiResponse, ApiError>;

    /// `GET /groups/{groupId}`.
    async fn get_group(&self, key: &ApiKey, group: &GroupId) -> Result<ApiResponse, ApiError>;
}
