//! Shared scaffolding for payment gateway integrations.
//!
//! Concrete gateway adapters (card processors, PSPs) embed a
//! [`gateway::GatewayBase`] and implement the [`gateway::Gateway`] trait;
//! everything a gateway family has in common lives here:
//!
//! - `core` - parameter bag with default resolution, errors, currency helpers
//! - `http` - outbound client, inbound request snapshot, transport context
//! - `gateway` - the gateway contract, shared base state, named registry
//! - `request` - the request contract and its embeddable base state

pub mod core;
pub mod gateway;
pub mod http;
pub mod request;

pub use crate::core::currency::Currency;
pub use crate::core::errors::GatewayError;
pub use crate::core::params::ParameterBag;
pub use crate::gateway::{Gateway, GatewayBase, GatewayRegistry};
pub use crate::http::{HttpClient, HttpConfig, HttpResponse, ServerRequest, TransportContext};
pub use crate::request::{GatewayRequest, RequestBase};
