//! HTTP transport handles shared between gateways and their requests.
//!
//! - `client` - outbound client wrapper and decoded responses
//! - `server_request` - snapshot of the inbound request a gateway runs under

pub mod client;
pub mod server_request;

pub use client::{HttpClient, HttpConfig, HttpResponse};
pub use server_request::ServerRequest;

use std::sync::Arc;

/// The transport pair held by a gateway for its lifetime: an outbound HTTP
/// client and the inbound server request, both shared (not owned) by every
/// request object the gateway constructs.
#[derive(Debug, Clone)]
pub struct TransportContext {
    http_client: HttpClient,
    server_request: Arc<ServerRequest>,
}

impl TransportContext {
    pub fn new(http_client: HttpClient, server_request: ServerRequest) -> Self {
        Self { http_client, server_request: Arc::new(server_request) }
    }

    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    pub fn server_request(&self) -> &ServerRequest {
        &self.server_request
    }
}

impl PartialEq for TransportContext {
    /// Identity comparison: two contexts are equal when they share the same
    /// underlying client and the same inbound request.
    fn eq(&self, other: &Self) -> bool {
        self.http_client == other.http_client
            && Arc::ptr_eq(&self.server_request, &other.server_request)
    }
}
