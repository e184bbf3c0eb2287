//! HTTP client for the Urban Roof API.
//!
//! One client value serves both anonymous calls (login, registration) and
//! authenticated calls; `with_token` derives an authenticated copy that shares
//! the underlying connection pool.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use urbanroof_core::errors::{Error, Result};

use crate::config::ClientConfig;
use crate::envelope::{decode_envelope, expect_success};

/// HTTP client for the Urban Roof API.
///
/// # Example
///
/// ```ignore
/// let client = UrbanRoofClient::new("http://localhost:8080/api", Duration::from_secs(30))?;
/// let properties = client.get_all_properties().await?;
/// ```
#[derive(Debug, Clone)]
pub struct UrbanRoofClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl UrbanRoofClient {
    /// Create an anonymous client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: None,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(&config.api_url, config.request_timeout)
    }

    /// Copy of this client that sends `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: &str) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| Error::Unexpected(format!("Invalid access token format: {}", e)))?;
        Ok(Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            auth_header: Some(auth_header),
        })
    }

    pub fn without_token(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            auth_header: None,
        }
    }

    pub fn has_token(&self) -> bool {
        self.auth_header.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("[UrbanRoofApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("[UrbanRoofApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }

    /// POST without a request body, for endpoints that take only query parameters.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("[UrbanRoofApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("[UrbanRoofApi] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send_delete(path).await?;
        parse_response(response).await
    }

    /// DELETE whose response payload is not used.
    pub(crate) async fn delete_unit(&self, path: &str) -> Result<()> {
        let response = self.send_delete(path).await?;
        let (status, body) = read_response(response).await?;
        expect_success(status, &body)
    }

    async fn send_delete(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        debug!("[UrbanRoofApi] DELETE {}", url);

        self.client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport_error)
    }
}

/// Percent-encodes one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        return Error::Http(format!("Request timed out: {}", err));
    }
    Error::Http(err.to_string())
}

async fn read_response(response: reqwest::Response) -> Result<(u16, String)> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Http(format!("Failed to read response: {}", e)))?;
    Ok((status, body))
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let (status, body) = read_response(response).await?;
    decode_envelope(status, &body)
}
