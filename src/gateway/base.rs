//! Shared gateway state: the parameter bag and transport context.

use serde_json::Value;
use tracing::debug;

use crate::core::errors::GatewayError;
use crate::core::params::ParameterBag;
use crate::http::{HttpClient, ServerRequest, TransportContext};
use crate::request::GatewayRequest;

/// The state every concrete gateway embeds: a mutable parameter bag plus
/// the transport context handed to each request the gateway constructs.
///
/// The bag starts empty; call [`Gateway::initialize`](crate::gateway::Gateway::initialize)
/// (or [`replace_parameters`](GatewayBase::replace_parameters) directly) to
/// seed it from declared defaults.
#[derive(Debug, Clone)]
pub struct GatewayBase {
    parameters: ParameterBag,
    context: TransportContext,
}

impl GatewayBase {
    pub fn new(context: TransportContext) -> Self {
        Self { parameters: ParameterBag::new(), context }
    }

    /// Replaces the bag's contents entirely: defaults (with sequence values
    /// collapsed to their first element) overlaid by `overrides`. Values
    /// from earlier calls do not survive.
    pub fn replace_parameters(&mut self, defaults: &ParameterBag, overrides: ParameterBag) {
        self.parameters = ParameterBag::from_defaults(defaults, overrides);
    }

    pub fn parameters(&self) -> &ParameterBag {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.parameters.set(key, value);
        self
    }

    /// Reads the `testMode` bag entry; absent reads as live mode.
    pub fn test_mode(&self) -> bool {
        self.parameters.get_bool("testMode").unwrap_or(false)
    }

    pub fn set_test_mode(&mut self, test_mode: bool) -> &mut Self {
        self.parameters.set("testMode", test_mode);
        self
    }

    /// Reads the `currency` bag entry.
    pub fn currency(&self) -> Option<&str> {
        self.parameters.get_str("currency")
    }

    pub fn set_currency(&mut self, currency: &str) -> &mut Self {
        self.parameters.set("currency", currency);
        self
    }

    pub fn http_client(&self) -> &HttpClient {
        self.context.http_client()
    }

    pub fn server_request(&self) -> &ServerRequest {
        self.context.server_request()
    }

    pub fn context(&self) -> &TransportContext {
        &self.context
    }

    /// Constructs a request of type `R`, forwarding this gateway's transport
    /// context and the supplied parameters unmodified.
    ///
    /// Intended for gateway implementations building their operation
    /// methods; application code goes through those operations instead.
    pub fn create_request<R: GatewayRequest>(
        &self,
        parameters: ParameterBag,
    ) -> Result<R, GatewayError> {
        debug!("Constructing request: {}", std::any::type_name::<R>());
        R::create(self.context.clone(), parameters)
    }
}
