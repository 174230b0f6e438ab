// ABOUTME: reqwest-backed implementation of the primitive API operations.
// ABOUTME: Builds URLs from explicit Settings and logs every exchange at debug level.

use super::{ApiError, ApiResponse, ContainerForm, MethodRequest, NetfieldApi};
use crate::config::Settings;
use crate::types::{ApiKey, ContainerId, DeviceId, GroupId};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument};

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let base_url = settings.base_url();
        match reqwest::Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ApiError::InvalidUrl {
                    reason: format!("unsupported scheme {}", url.scheme()),
                    url: base_url,
                });
            }
            Err(e) => {
                return Err(ApiError::InvalidUrl {
                    reason: e.to_string(),
                    url: base_url,
                });
            }
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ApiError::Transport {
            operation: "buildClient",
            url: base_url.clone(),
            source: Box::new(e),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, key: &ApiKey) -> (RequestBuilder, String) {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, key.expose());
        (builder, url)
    }

    async fn send(
        &self,
        operation: &'static str,
        url: String,
        request: RequestBuilder,
    ) -> Result<ApiResponse, ApiError> {
        let transport = |e: reqwest::Error| ApiError::Transport {
            operation,
            url: url.clone(),
            source: Box::new(e),
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?;

        let response = ApiResponse::new(status, body);
        debug!(operation, status, body = %response.text(), "api response");
        Ok(response)
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[async_trait]
impl NetfieldApi for HttpClient {
    #[instrument(level = "debug", skip_all, fields(container = %form.display_name))]
    async fn create_container(
        &self,
        key: &ApiKey,
        form: &ContainerForm,
    ) -> Result<ApiResponse, ApiError> {
        let (request, url) = self.request(Method::POST, "/containers", key);
        self.send("createContainer", url, request.form(form)).await
    }

    #[instrument(level = "debug", skip_all, fields(container = %container))]
    async fn update_container(
        &self,
        key: &ApiKey,
        container: &ContainerId,
        form: &ContainerForm,
    ) -> Result<ApiResponse, ApiError> {
        let path = format!("/containers/{}", segment(container.as_str()));
        let (request, url) = self.request(Method::PUT, &path, key);
        self.send("updateContainer", url, request.form(form)).await
    }

    #[instrument(level = "debug", skip_all, fields(device = %device, container = %container))]
    async fn delete_device_container(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        container: &ContainerId,
    ) -> Result<ApiResponse, ApiError> {
        let path = format!(
            "/devices/{}/containers/{}",
            segment(device.as_str()),
            segment(container.as_str())
        );
        let (request, url) = self.request(Method::DELETE, &path, key);
        self.send("deleteDeviceContainer", url, request).await
    }

    #[instrument(level = "debug", skip_all, fields(device = %device, container = %container))]
    async fn create_device_container(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        container: &ContainerId,
        options: &Value,
    ) -> Result<ApiResponse, ApiError> {
        let path = format!(
            "/devices/{}/containers/{}",
            segment(device.as_str()),
            segment(container.as_str())
        );
        let (request, url) = self.request(Method::POST, &path, key);
        self.send("createDeviceContainer", url, request.json(options))
            .await
    }

    #[instrument(level = "debug", skip(self, key))]
    async fn list_containers(
        &self,
        key: &ApiKey,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse, ApiError> {
        let (request, url) = self.request(Method::GET, "/containers", key);
        let request = request.query(&[
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("sortBy", "id".to_string()),
            ("sortOrder", "asc".to_string()),
        ]);
        self.send("listContainers", url, request).await
    }

    #[instrument(level = "debug", skip_all, fields(device = %device, method = %request.method_name))]
    async fn post_method(
        &self,
        key: &ApiKey,
        device: &DeviceId,
        request: &MethodRequest,
    ) -> Result<ApiResponse, ApiError> {
        let path = format!("/devices/{}/methods", segment(device.as_str()));
        let (builder, url) = self.request(Method::POST, &path, key);
        self.send("postMethod", url, builder.json(request)).await
    }

    #[instrument(level = "debug", skip_all, fields(group = %group))]
    async fn get_group(&self, key: &ApiKey, group: &GroupId) -> Result<ApiResponse, ApiError> {
        let path = format!("/groups/{}", segment(group.as_str()));
        let (request, url) = self.request(Method::GET, &path, key);
        self.send("getGroup", url, request).await
    }
}
