use async_trait::async_trait;
use serde_json::Value;

use crate::core::errors::GatewayError;
use crate::core::params::ParameterBag;
use crate::http::{HttpClient, HttpResponse, ServerRequest, TransportContext};

/// Defines the contract a request type must satisfy so a gateway can
/// construct it.
///
/// Every request receives the constructing gateway's transport context plus
/// its own independent parameter bag; what it transmits and how it decodes
/// the reply is up to the concrete type.
#[async_trait]
pub trait GatewayRequest: Send + Sync {
    /// Builds the request from a gateway's transport context and the
    /// caller's parameters.
    ///
    /// # Errors
    /// * `GatewayError::InvalidRequest` - the parameters cannot form a
    ///   coherent request (a programming error in the calling gateway)
    fn create(context: TransportContext, parameters: ParameterBag) -> Result<Self, GatewayError>
    where
        Self: Sized;

    /// The parameters supplied at construction, unmodified.
    fn parameters(&self) -> &ParameterBag;

    fn http_client(&self) -> &HttpClient;

    fn server_request(&self) -> &ServerRequest;

    /// Assembles the payload this request would transmit. Parameter
    /// validation belongs here, before any I/O happens.
    fn data(&self) -> Result<Value, GatewayError>;

    /// Transmits an assembled payload.
    async fn send_data(&self, data: Value) -> Result<HttpResponse, GatewayError>;

    /// Assembles and transmits in one step.
    async fn send(&self) -> Result<HttpResponse, GatewayError> {
        let data = self.data()?;
        self.send_data(data).await
    }
}
