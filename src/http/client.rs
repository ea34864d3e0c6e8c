//! Outbound HTTP client wrapper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use bytes::Bytes;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::errors::GatewayError;

/// Configuration for the outbound HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Timeout in seconds for requests
    pub timeout: u64,
    /// Optional User-Agent header value
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: None }
    }
}

/// Shared outbound HTTP client handle.
///
/// Clones share the same underlying connection pool; equality is identity,
/// so two handles compare equal exactly when they share a client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Arc<reqwest::Client>,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Self::from_config(&HttpConfig::default())
    }

    /// Builds a client with the configured timeout. Allows proxy
    /// environment vars.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        if let Ok(proxy) = std::env::var("HTTPS_PROXY").or_else(|_| std::env::var("HTTP_PROXY")) {
            if let Ok(p) = reqwest::Proxy::all(proxy) {
                builder = builder.proxy(p);
            }
        }
        let client =
            builder.build().map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self::with_client(client))
    }

    /// Wraps an existing client, e.g. one preconfigured by the application.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { inner: Arc::new(client) }
    }

    pub async fn get(&self, url: &str) -> Result<HttpResponse, GatewayError> {
        self.send(Method::GET, url, &[], None).await
    }

    pub async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, GatewayError> {
        debug!("POST {} (json)", url);
        let response = self.inner.post(url).json(body).send().await?;
        HttpResponse::from_reqwest(response).await
    }

    pub async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, GatewayError> {
        debug!("POST {} (form)", url);
        let response = self.inner.post(url).form(form).send().await?;
        HttpResponse::from_reqwest(response).await
    }

    pub async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<Bytes>,
    ) -> Result<HttpResponse, GatewayError> {
        debug!("{} {}", method, url);
        let mut request = self.inner.request(method, url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await?;
        HttpResponse::from_reqwest(response).await
    }
}

impl PartialEq for HttpClient {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A fully-read outbound HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        let headers = headers.into_iter().map(|(k, v)| (k.to_ascii_lowercase(), v)).collect();
        Self { status, headers, body: body.into() }
    }

    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self, GatewayError> {
        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_string(), value.to_string());
            }
        }
        let body = response.bytes().await?;
        debug!("Response status {} ({} bytes)", status, body.len());
        Ok(Self { status, headers, body })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> Result<Value, GatewayError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
