//! Request scaffolding.
//!
//! ## Module Structure
//! - `traits` - the contract request types satisfy so gateways can build them
//! - `base` - embeddable request state (transport context + parameters)

pub mod base;
pub mod traits;

pub use base::RequestBase;
pub use traits::GatewayRequest;
