//! Embeddable request state and validation helpers.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::core::currency::{self, Currency};
use crate::core::errors::GatewayError;
use crate::core::params::ParameterBag;
use crate::http::{HttpClient, ServerRequest, TransportContext};

/// The state bundle concrete request types embed: the transport context
/// inherited from the constructing gateway plus the request's own bag.
#[derive(Debug, Clone)]
pub struct RequestBase {
    context: TransportContext,
    parameters: ParameterBag,
}

impl RequestBase {
    pub fn new(context: TransportContext, parameters: ParameterBag) -> Self {
        Self { context, parameters }
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

    pub fn http_client(&self) -> &HttpClient {
        self.context.http_client()
    }

    pub fn server_request(&self) -> &ServerRequest {
        self.context.server_request()
    }

    pub fn context(&self) -> &TransportContext {
        &self.context
    }

    pub fn test_mode(&self) -> bool {
        self.parameters.get_bool("testMode").unwrap_or(false)
    }

    pub fn currency(&self) -> Option<&str> {
        self.parameters.get_str("currency")
    }

    pub fn amount(&self) -> Option<&str> {
        self.parameters.get_str("amount")
    }

    pub fn description(&self) -> Option<&str> {
        self.parameters.get_str("description")
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.parameters.get_str("transactionId")
    }

    /// Checks that every listed parameter is present and non-null, failing
    /// with the first one that is not. Call from `data()` so validation
    /// happens before any I/O.
    pub fn require(&self, keys: &[&str]) -> Result<(), GatewayError> {
        for key in keys {
            match self.parameters.get(key) {
                None | Some(Value::Null) => {
                    return Err(GatewayError::MissingParameter((*key).to_string()));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Resolves the `amount`/`currency` parameter pair into a decimal
    /// checked against the currency's minor-unit count.
    pub fn validated_amount(&self) -> Result<Decimal, GatewayError> {
        self.require(&["amount", "currency"])?;
        let code = self.currency().ok_or_else(|| {
            GatewayError::InvalidParameter("currency".to_string(), "must be a string".to_string())
        })?;
        let currency = Currency::find(code)
            .ok_or_else(|| GatewayError::UnsupportedCurrency(code.to_string()))?;
        let raw = self.amount().ok_or_else(|| {
            GatewayError::InvalidParameter("amount".to_string(), "must be a string".to_string())
        })?;
        currency::parse_amount(raw, &currency)
    }
}
